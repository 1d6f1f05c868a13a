use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::info;

use crate::Result;
use crate::browser::Navigator;
use crate::models::JobRecord;
use crate::writer::save_to_json;

/// Entry point a site client exposes to the pipeline. Crawling never fails
/// as a whole; everything below it is contained to a sentinel or a skip.
pub trait Crawler {
    fn start_crawl<N: Navigator>(&self, navigator: &N) -> Vec<JobRecord>;
}

/// A single crawl run. Captures the wall-clock start so the output filename
/// is stamped with when the run began, not when it finished.
pub struct CrawlPipeline {
    started_at: DateTime<Utc>,
}

#[must_use = "pipeline must end with .save() to produce the output file"]
pub struct PipelineWithRecords {
    records: Vec<JobRecord>,
    started_at: DateTime<Utc>,
}

impl CrawlPipeline {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }

    pub fn crawl<C, N>(self, client: &C, navigator: &N) -> PipelineWithRecords
    where
        C: Crawler,
        N: Navigator,
    {
        let records = client.start_crawl(navigator);
        PipelineWithRecords {
            records,
            started_at: self.started_at,
        }
    }
}

impl Default for CrawlPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineWithRecords {
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// The single, terminal write. This is the only failure in a run that
    /// propagates.
    pub fn save(self, prefix: &str) -> Result<PathBuf> {
        let path = save_to_json(&self.records, prefix, self.started_at)?;
        info!("saved {} jobs to {}", self.records.len(), path.display());
        Ok(path)
    }
}
