use log::warn;

use crate::browser::Navigator;
use crate::experience::ExperienceExtractor;
use crate::models::NOT_MENTIONED;

/// Visits a posting's detail page and distills its stated experience
/// requirements. Any failure on the way degrades to the sentinel; nothing
/// here aborts the card or the page being processed.
pub struct DetailFetcher {
    extractor: ExperienceExtractor,
}

impl DetailFetcher {
    pub fn new() -> Self {
        Self {
            extractor: ExperienceExtractor::new(),
        }
    }

    /// The isolated context behind `visit_text` is opened and torn down by
    /// the navigator per call.
    pub fn fetch_experience<N: Navigator>(&self, navigator: &N, url: &str) -> String {
        match navigator.visit_text(url) {
            Ok(text) => self
                .extractor
                .summarize(&text)
                .unwrap_or_else(|| NOT_MENTIONED.to_string()),
            Err(e) => {
                warn!("error reading job page {url}: {e}");
                NOT_MENTIONED.to_string()
            }
        }
    }
}

impl Default for DetailFetcher {
    fn default() -> Self {
        Self::new()
    }
}
