use careers_crawler::logger;
use careers_crawler::{
    ChromeNavigator, CrawlPipeline, Result, ServiceNowClient, ServiceNowCrawlConfig,
};
use log::info;

fn main() -> Result<()> {
    logger::init();
    info!("starting careers crawl");

    let navigator = ChromeNavigator::launch()?;
    let client = ServiceNowClient::new(ServiceNowCrawlConfig::default());

    CrawlPipeline::new().crawl(&client, &navigator).save("jobs")?;

    Ok(())
}
