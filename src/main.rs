//! course-scraper - Course catalog metadata extraction
//!
//! Reads course URLs from a CSV table, scrapes each page, and writes the
//! extracted records to a combined output table.

use anyhow::Result;
use clap::Parser;
use course_scraper::commands::BatchCommand;
use course_scraper::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "course-scraper",
    version,
    about = "Scrape course metadata from catalog pages",
    long_about = "Reads course page URLs from a column of a CSV file, extracts course metadata from each page, and writes one row per course.\n\nInput and output are CSV, not Excel: export an .xlsx sheet to CSV first (e.g. input_links.xlsx -> input_links.csv).\n\nEnvironment: COURSE_SCRAPER_DELAY, COURSE_SCRAPER_ORIGIN and COURSE_SCRAPER_PROXY override the config file; flags override both."
)]
struct Cli {
    /// CSV file holding the course URLs
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File to write the results to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the column holding the URLs
    #[arg(long)]
    column: Option<String>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Pause after each request in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// Origin prepended to relative catalog links
    #[arg(long)]
    origin: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long)]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(column) = cli.column {
        config.url_column = column;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }
    if let Some(origin) = cli.origin {
        config.origin = origin;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    let cmd = BatchCommand::new(config);
    let written = cmd.execute().await?;
    println!("Scraped {} courses", written);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_env_vars_not_parsed_by_cli() {
        let orig_delay = std::env::var("COURSE_SCRAPER_DELAY").ok();
        std::env::set_var("COURSE_SCRAPER_DELAY", "not_a_number");

        // Invalid env values are left to Config::with_env, which ignores them
        let cli = Cli::try_parse_from(["course-scraper"]).unwrap();
        assert!(cli.delay.is_none());

        let config = Config::new().with_env();
        assert_eq!(config.delay_ms, Config::default().delay_ms);

        match orig_delay {
            Some(v) => std::env::set_var("COURSE_SCRAPER_DELAY", v),
            None => std::env::remove_var("COURSE_SCRAPER_DELAY"),
        }
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["course-scraper", "--delay", "250", "--format", "json"]).unwrap();
        assert_eq!(cli.delay, Some(250));
        assert_eq!(cli.format, Some(OutputFormat::Json));

        assert!(Cli::try_parse_from(["course-scraper", "--delay", "soon"]).is_err());
    }

    #[test]
    fn test_long_about_mentions_csv_input() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("CSV"));
        assert!(help.contains(".xlsx"));
    }
}
