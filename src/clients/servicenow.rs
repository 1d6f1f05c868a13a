use std::time::Duration;

use log::info;
use scraper::{Html, Selector};

use crate::browser::Navigator;
use crate::crawler::{CardFieldExtractor, PaginatedCrawler};
use crate::detail::DetailFetcher;
use crate::models::JobRecord;
use crate::pipeline::Crawler;

/// Which listing pages to visit and how long to wait for each to render.
#[derive(Debug, Clone)]
pub struct ServiceNowCrawlConfig {
    pub start_page: usize,
    pub end_page: usize,
    pub listing_timeout: Duration,
}

impl Default for ServiceNowCrawlConfig {
    fn default() -> Self {
        Self {
            start_page: 1,
            end_page: 2,
            listing_timeout: Duration::from_secs(10),
        }
    }
}

pub struct ServiceNowClient {
    origin: String,
    config: ServiceNowCrawlConfig,
    detail_fetcher: DetailFetcher,
}

impl ServiceNowClient {
    pub fn new(config: ServiceNowCrawlConfig) -> Self {
        Self {
            origin: "https://careers.servicenow.com".to_string(),
            config,
            detail_fetcher: DetailFetcher::new(),
        }
    }

    fn select_text(card: &Html, selector: &Selector) -> Option<String> {
        let text = card
            .select(selector)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        if text.is_empty() { None } else { Some(text) }
    }
}

impl CardFieldExtractor for ServiceNowClient {
    fn extract_title(&self, card: &Html) -> Option<String> {
        let selector = Selector::parse("h2.card-title").ok()?;
        Self::select_text(card, &selector)
    }

    /// Reads only the first labeled inline item. Postings tagged with
    /// several locations keep just the first one.
    fn extract_location(&self, card: &Html) -> Option<String> {
        let selector = Selector::parse("li.list-inline-item").ok()?;
        Self::select_text(card, &selector)
    }

    fn extract_link(&self, card: &Html) -> Option<String> {
        let selector = Selector::parse("a[href]").ok()?;
        let href = card.select(&selector).next()?.value().attr("href")?;
        Some(format!("{}{}", self.origin, href))
    }
}

impl PaginatedCrawler for ServiceNowClient {
    fn build_page_url(&self, page: usize) -> String {
        format!("{}/jobs/?page={}#results", self.origin, page)
    }

    fn card_selector(&self) -> &str {
        "div.card.card-job"
    }

    fn listing_timeout(&self) -> Duration {
        self.config.listing_timeout
    }

    fn detail_fetcher(&self) -> &DetailFetcher {
        &self.detail_fetcher
    }
}

impl Crawler for ServiceNowClient {
    fn start_crawl<N: Navigator>(&self, navigator: &N) -> Vec<JobRecord> {
        info!("collecting job postings from {}", self.origin);
        let records = self.crawl_pages(navigator, self.config.start_page, self.config.end_page);
        info!("collected {} job records", records.len());
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    const LISTING_HTML: &str = r#"
        <html><body>
          <div class="card card-job">
            <h2 class="card-title">Software Engineer</h2>
            <ul class="list-inline">
              <li class="list-inline-item">Remote</li>
              <li class="list-inline-item">Full-time</li>
            </ul>
            <a href="/jobs/1042/software-engineer">View job</a>
          </div>
          <div class="card card-job">
            <ul class="list-inline">
              <li class="list-inline-item">Berlin</li>
            </ul>
          </div>
        </body></html>
    "#;

    fn client() -> ServiceNowClient {
        ServiceNowClient::new(ServiceNowCrawlConfig::default())
    }

    #[test]
    fn builds_page_urls_with_anchor() {
        assert_eq!(
            client().build_page_url(1),
            "https://careers.servicenow.com/jobs/?page=1#results"
        );
        assert_eq!(
            client().build_page_url(2),
            "https://careers.servicenow.com/jobs/?page=2#results"
        );
    }

    #[test]
    fn parses_cards_in_dom_order() {
        let cards = client().parse_cards(LISTING_HTML);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, Field::Found("Software Engineer".to_string()));
        assert_eq!(cards[1].title, Field::Unavailable);
    }

    #[test]
    fn location_reads_only_first_inline_item() {
        let cards = client().parse_cards(LISTING_HTML);

        assert_eq!(cards[0].location, Field::Found("Remote".to_string()));
        assert_eq!(cards[1].location, Field::Found("Berlin".to_string()));
    }

    #[test]
    fn relative_link_is_absolutized() {
        let cards = client().parse_cards(LISTING_HTML);

        assert_eq!(
            cards[0].link.as_deref(),
            Some("https://careers.servicenow.com/jobs/1042/software-engineer")
        );
    }

    #[test]
    fn card_without_anchor_yields_no_link() {
        let cards = client().parse_cards(LISTING_HTML);

        assert_eq!(cards[1].link, None);
    }
}
