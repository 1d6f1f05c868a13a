pub mod browser;
pub mod clients;
pub mod crawler;
pub mod detail;
pub mod error;
pub mod experience;
pub mod fixture;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod writer;

pub use browser::{ChromeNavigator, Navigator, PageSnapshot};
pub use clients::{ServiceNowClient, ServiceNowCrawlConfig};
pub use crawler::{CardFieldExtractor, PaginatedCrawler};
pub use error::CrawlError;
pub use models::JobRecord;
pub use pipeline::{CrawlPipeline, Crawler};

pub type Result<T> = std::result::Result<T, CrawlError>;
