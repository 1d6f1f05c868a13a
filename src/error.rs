use std::time::Duration;

use thiserror::Error;

/// Failure taxonomy for a crawl run.
///
/// Navigation and extraction failures are contained at page, card or field
/// scope by the crawl loop. Only `Launch`, `Io` and `Json` ever surface from
/// the binary.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("page not ready after {0:?}")]
    NavigationTimeout(Duration),
    #[error("navigation failed: {0}")]
    Navigation(String),
    #[error("browser launch failed: {0}")]
    Launch(String),
    #[error("extraction failed: {0}")]
    Extraction(String),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}
