pub mod servicenow;

pub use servicenow::{ServiceNowClient, ServiceNowCrawlConfig};
