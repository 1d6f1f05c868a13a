use std::collections::HashSet;

use regex::Regex;

/// Stated years-of-experience phrases: numeric (`3+ years`, `5 years`),
/// qualified (`at least 3 years`, `minimum 2 years`) and spelled out
/// (`one year` through `ten years`). Qualified forms come first in the
/// alternation so the longer phrase wins over its bare numeric tail.
const EXPERIENCE_PATTERN: &str = r"(?i)\b(?:at least\s*\d+\+?\s*years?|minimum\s*\d+\+?\s*years?|\d+\+?\s*years?|one year|two years?|three years?|four years?|five years?|six years?|seven years?|eight years?|nine years?|ten years?)\b";

pub struct ExperienceExtractor {
    pattern: Regex,
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(EXPERIENCE_PATTERN).unwrap(),
        }
    }

    /// Collects every phrase in `text`, deduplicated by exact matched string
    /// in first-occurrence order, joined with `", "`. `None` when the text
    /// states no experience requirement at all.
    pub fn summarize(&self, text: &str) -> Option<String> {
        let mut seen = HashSet::new();
        let phrases: Vec<&str> = self
            .pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|phrase| seen.insert(*phrase))
            .collect();

        if phrases.is_empty() {
            None
        } else {
            Some(phrases.join(", "))
        }
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
