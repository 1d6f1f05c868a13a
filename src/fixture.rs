use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::Result;
use crate::browser::{Navigator, PageSnapshot, selector_has_text};
use crate::error::CrawlError;

/// Deterministic in-memory [`Navigator`]: serves canned listing HTML and
/// detail text keyed by URL, and journals every navigation it performs so
/// tests can assert on attempt counts and ordering. A listing whose content
/// never satisfies the readiness predicate times out immediately instead of
/// polling.
#[derive(Default)]
pub struct FixtureNavigator {
    listings: HashMap<String, String>,
    details: HashMap<String, String>,
    listing_loads: RefCell<Vec<String>>,
    detail_visits: RefCell<Vec<String>>,
}

impl FixtureNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, url: &str, html: &str) -> Self {
        self.listings.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_detail(mut self, url: &str, text: &str) -> Self {
        self.details.insert(url.to_string(), text.to_string());
        self
    }

    /// Listing URLs navigated to, in order.
    pub fn listing_loads(&self) -> Vec<String> {
        self.listing_loads.borrow().clone()
    }

    /// Detail URLs visited, in order.
    pub fn detail_visits(&self) -> Vec<String> {
        self.detail_visits.borrow().clone()
    }
}

impl Navigator for FixtureNavigator {
    fn load_listing(
        &self,
        url: &str,
        ready_selector: &str,
        timeout: Duration,
    ) -> Result<PageSnapshot> {
        self.listing_loads.borrow_mut().push(url.to_string());

        let html = self
            .listings
            .get(url)
            .ok_or_else(|| CrawlError::Navigation(format!("no such page: {url}")))?;

        if !selector_has_text(html, ready_selector) {
            return Err(CrawlError::NavigationTimeout(timeout));
        }

        Ok(PageSnapshot::new(html.clone()))
    }

    fn visit_text(&self, url: &str) -> Result<String> {
        self.detail_visits.borrow_mut().push(url.to_string());

        self.details
            .get(url)
            .cloned()
            .ok_or_else(|| CrawlError::Navigation(format!("no such page: {url}")))
    }
}
