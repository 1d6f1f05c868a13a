use std::time::Duration;

use log::{info, warn};
use scraper::{Html, Selector};

use crate::browser::Navigator;
use crate::detail::DetailFetcher;
use crate::models::{CardFields, Field, JobRecord, NOT_MENTIONED};

/// Per-card field reads. Each returns `None` when the field cannot be read
/// from the card fragment; sentinel resolution happens later, in
/// [`JobRecord::from_card`].
pub trait CardFieldExtractor {
    fn extract_title(&self, card: &Html) -> Option<String>;

    fn extract_location(&self, card: &Html) -> Option<String>;

    /// Absolute link to the posting's detail page.
    fn extract_link(&self, card: &Html) -> Option<String>;
}

/// Paginated listing crawl. Implementors supply the site specifics; the
/// default methods own the loop, the ordering and the failure containment.
pub trait PaginatedCrawler: CardFieldExtractor {
    fn build_page_url(&self, page: usize) -> String;

    /// Selector for one job card. A listing page counts as ready once an
    /// element matching this selector carries non-empty text.
    fn card_selector(&self) -> &str;

    fn listing_timeout(&self) -> Duration;

    fn detail_fetcher(&self) -> &DetailFetcher;

    /// Reads every card on a loaded listing page, DOM order preserved.
    fn parse_cards(&self, html: &str) -> Vec<CardFields> {
        let Ok(card_selector) = Selector::parse(self.card_selector()) else {
            warn!("invalid card selector: {}", self.card_selector());
            return Vec::new();
        };

        let document = Html::parse_document(html);
        document
            .select(&card_selector)
            .map(|card| {
                let fragment = Html::parse_fragment(&card.html());
                CardFields {
                    title: Field::from(self.extract_title(&fragment)),
                    location: Field::from(self.extract_location(&fragment)),
                    link: self.extract_link(&fragment),
                }
            })
            .collect()
    }

    /// One record per card. The detail page is visited only when the card
    /// yielded a link, and a detail failure downgrades nothing but the
    /// experience field.
    fn process_card<N: Navigator>(
        &self,
        navigator: &N,
        card: CardFields,
        page: usize,
    ) -> JobRecord {
        let experience = match card.link.as_deref() {
            Some(url) => self.detail_fetcher().fetch_experience(navigator, url),
            None => NOT_MENTIONED.to_string(),
        };
        JobRecord::from_card(card, experience, page)
    }

    /// The crawl loop: pages in ascending order, cards in DOM order, exactly
    /// one appended record per card. A page that fails to load or ready is
    /// skipped whole; the run continues with the next one.
    fn crawl_pages<N: Navigator>(
        &self,
        navigator: &N,
        start_page: usize,
        end_page: usize,
    ) -> Vec<JobRecord> {
        let mut records = Vec::new();

        for page in start_page..=end_page {
            let url = self.build_page_url(page);
            let snapshot =
                match navigator.load_listing(&url, self.card_selector(), self.listing_timeout()) {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        warn!("failed on page {page}: {e}");
                        continue;
                    }
                };

            for card in self.parse_cards(snapshot.html()) {
                records.push(self.process_card(navigator, card, page));
            }

            info!("scraped page {page}");
        }

        records
    }
}
