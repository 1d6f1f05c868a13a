use std::ffi::{OsStr, OsString};
use std::sync::Arc;
use std::time::{Duration, Instant};

use headless_chrome::{Browser, LaunchOptions, Tab};
use scraper::{Html, Selector};

use crate::Result;
use crate::error::CrawlError;

/// User agent presented by the live browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// HTML captured from a loaded listing page.
pub struct PageSnapshot {
    html: String,
}

impl PageSnapshot {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// The browser surface the crawl runs against: listing loads in one
/// long-lived context, detail visits in throwaway ones. Implemented by
/// [`ChromeNavigator`] for live runs and by
/// [`FixtureNavigator`](crate::fixture::FixtureNavigator) for tests.
pub trait Navigator {
    /// Navigates the listing context and waits until an element matching
    /// `ready_selector` carries non-empty text, or `timeout` elapses.
    fn load_listing(
        &self,
        url: &str,
        ready_selector: &str,
        timeout: Duration,
    ) -> Result<PageSnapshot>;

    /// Reads the visible text of `url` in a fresh, isolated context. The
    /// context never outlives the call, whatever the outcome.
    fn visit_text(&self, url: &str) -> Result<String>;
}

/// Readiness predicate shared by both navigator implementations: a page
/// counts as rendered once a matching element has actual text content.
pub(crate) fn selector_has_text(html: &str, selector: &str) -> bool {
    let Ok(selector) = Selector::parse(selector) else {
        return false;
    };

    let document = Html::parse_document(html);
    document
        .select(&selector)
        .any(|element| !element.text().collect::<String>().trim().is_empty())
}

/// Live navigator backed by one headless Chrome process. The listing tab is
/// reused across pages; every detail visit opens and closes its own tab.
pub struct ChromeNavigator {
    browser: Browser,
    listing_tab: Arc<Tab>,
}

impl ChromeNavigator {
    pub fn launch() -> Result<Self> {
        let user_agent = OsString::from(format!("--user-agent={USER_AGENT}"));
        let browser = Browser::new(LaunchOptions {
            headless: true,
            sandbox: false,
            args: vec![
                user_agent.as_os_str(),
                OsStr::new("--disable-setuid-sandbox"),
            ],
            ..Default::default()
        })
        .map_err(|e| CrawlError::Launch(e.to_string()))?;

        let listing_tab = browser
            .new_tab()
            .map_err(|e| CrawlError::Launch(e.to_string()))?;

        Ok(Self {
            browser,
            listing_tab,
        })
    }

    fn read_visible_text(tab: &Arc<Tab>, url: &str) -> Result<String> {
        tab.navigate_to(url)
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;

        let body = tab
            .evaluate("document.body.innerText", false)
            .map_err(|e| CrawlError::Extraction(e.to_string()))?;

        Ok(body
            .value
            .as_ref()
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string())
    }
}

impl Navigator for ChromeNavigator {
    fn load_listing(
        &self,
        url: &str,
        ready_selector: &str,
        timeout: Duration,
    ) -> Result<PageSnapshot> {
        self.listing_tab
            .navigate_to(url)
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;
        self.listing_tab
            .wait_until_navigated()
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;

        let deadline = Instant::now() + timeout;
        loop {
            let html = self
                .listing_tab
                .get_content()
                .map_err(|e| CrawlError::Extraction(e.to_string()))?;

            if selector_has_text(&html, ready_selector) {
                return Ok(PageSnapshot::new(html));
            }
            if Instant::now() >= deadline {
                return Err(CrawlError::NavigationTimeout(timeout));
            }
            std::thread::sleep(READY_POLL_INTERVAL);
        }
    }

    fn visit_text(&self, url: &str) -> Result<String> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| CrawlError::Navigation(e.to_string()))?;

        // Tear the tab down whichever way the read went.
        let text = Self::read_visible_text(&tab, url);
        let _ = tab.close_target();
        text
    }
}
