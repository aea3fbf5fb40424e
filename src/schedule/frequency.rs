use std::sync::LazyLock;

use regex::Regex;

/// How a matched pattern yields the times-per-day count.
#[derive(Debug, Clone, Copy)]
enum Extract {
    /// Numeric capture group.
    Group(usize),
    /// The idiom itself implies the count ("twice daily", "bid").
    Fixed(u32),
}

/// A compiled frequency idiom.
struct FrequencyPattern {
    regex: Regex,
    extract: Extract,
}

/// Recognised idioms, tried top to bottom against lowercased text.
/// First match wins, so more specific forms must stay above looser ones.
static FREQUENCY_PATTERNS: LazyLock<Vec<FrequencyPattern>> = LazyLock::new(|| {
    vec![
        // "1일 3회", "7일3회"
        pattern(r"(\d+)\s*일\s*(\d+)\s*회", Extract::Group(2)),
        // "하루 2번"
        pattern(r"하루\s*(\d+)\s*번", Extract::Group(1)),
        // "하루 2회"
        pattern(r"하루\s*(\d+)\s*회", Extract::Group(1)),
        // "3회/일"
        pattern(r"(\d+)\s*회\s*/\s*일", Extract::Group(1)),
        // "3 times a day", "2 times per day"
        pattern(r"(\d+)\s*times?\s*(?:a|per|/)\s*day", Extract::Group(1)),
        // "3x daily", "2x/day"
        pattern(r"(\d+)\s*x\s*(?:daily|a\s*day|per\s*day|/\s*day)", Extract::Group(1)),
        pattern(r"\bonce\s*(?:daily|a\s*day|per\s*day)", Extract::Fixed(1)),
        pattern(r"\btwice\s*(?:daily|a\s*day|per\s*day)", Extract::Fixed(2)),
        pattern(r"\bthrice\s*(?:daily|a\s*day|per\s*day)", Extract::Fixed(3)),
        pattern(r"\b(?:qd|od)\b", Extract::Fixed(1)),
        pattern(r"\bbid\b", Extract::Fixed(2)),
        pattern(r"\btid\b", Extract::Fixed(3)),
        pattern(r"\bqid\b", Extract::Fixed(4)),
    ]
});

fn pattern(regex_str: &str, extract: Extract) -> FrequencyPattern {
    FrequencyPattern {
        regex: Regex::new(regex_str).expect("Invalid frequency regex pattern"),
        extract,
    }
}

impl FrequencyPattern {
    fn count(&self, text: &str) -> Option<u32> {
        let caps = self.regex.captures(text)?;
        match self.extract {
            Extract::Group(i) => caps.get(i)?.as_str().parse().ok(),
            Extract::Fixed(n) => Some(n),
        }
    }
}

/// Read a times-per-day count out of free prescription text.
///
/// `None` means "unknown frequency": empty input, no recognised idiom, or a
/// count of zero. The caller decides the fallback.
pub fn parse_frequency(text: Option<&str>) -> Option<u32> {
    let normalized = text?.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    FREQUENCY_PATTERNS
        .iter()
        .find_map(|p| p.count(&normalized))
        .filter(|n| *n >= 1)
}
