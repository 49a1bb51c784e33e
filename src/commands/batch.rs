//! Batch scrape command: URLs in, course records out.

use crate::catalog::{CatalogClient, CatalogFetch, CourseRecord, Parser};
use crate::config::Config;
use crate::format::Formatter;
use crate::input;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches and parses every course page listed in an input table.
pub struct BatchCommand {
    config: Config,
}

impl BatchCommand {
    /// Creates a new batch command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scrapes the configured input and writes the configured output.
    ///
    /// Returns the number of records written.
    pub async fn execute(&self) -> Result<usize> {
        let records = self.run(&self.config.input, &self.config.url_column).await?;
        self.write_output(&records)?;
        Ok(records.len())
    }

    /// Reads URLs from `column` of the `input` table and scrapes each of them.
    pub async fn run(&self, input: &Path, url_column: &str) -> Result<Vec<CourseRecord>> {
        let urls = input::read_urls(input, url_column)?;
        let client = CatalogClient::new(&self.config)?;

        Ok(self.run_with_client(&client, &urls).await)
    }

    /// Scrapes `urls` in order with a provided client (for testing).
    ///
    /// Failed fetches are logged and skipped, so the result may be shorter
    /// than `urls`.
    pub async fn run_with_client(
        &self,
        client: &impl CatalogFetch,
        urls: &[String],
    ) -> Vec<CourseRecord> {
        let parser = Parser::new(self.config.origin.as_str());
        let mut records = Vec::with_capacity(urls.len());

        for url in urls {
            info!("Processing: {}", url);

            match client.fetch(url).await {
                Ok(html) => records.push(parser.parse(&html)),
                Err(e) => warn!("Failed to fetch {}: {}", url, e),
            }

            self.pause().await;
        }

        info!("Scraped {} of {} courses", records.len(), urls.len());
        records
    }

    /// Renders `records` in the configured format and writes the output file.
    pub fn write_output(&self, records: &[CourseRecord]) -> Result<()> {
        let formatter = Formatter::new(self.config.format);
        let output = &self.config.output;

        std::fs::write(output, formatter.format_records(records) + "\n")
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;

        info!("Results saved to {}", output.display());
        Ok(())
    }

    /// Fixed pause between requests.
    async fn pause(&self) {
        if self.config.delay_ms == 0 {
            return;
        }

        debug!("Delaying {}ms", self.config.delay_ms);
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
    }
}
