//! Command-line interface definitions.
//!
//! Every option has a default, so running the binary with no arguments reads
//! `scraping_config.json` and writes `output.json` in the current directory.

use crate::scrapers::DEFAULT_USER_AGENT;
use clap::Parser;

/// Command-line arguments for the scraper.
///
/// # Examples
///
/// ```sh
/// # Defaults
/// selector_scraper
///
/// # Custom config and output
/// selector_scraper -c sources.json -o out/articles.json
///
/// # Shorter timeout
/// selector_scraper --timeout-secs 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the JSON list of scrape targets
    #[arg(short, long, env = "SCRAPER_CONFIG", default_value = "scraping_config.json")]
    pub config: String,

    /// Path of the JSON file to write
    #[arg(short, long, env = "SCRAPER_OUTPUT", default_value = "output.json")]
    pub output: String,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "SCRAPER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["selector_scraper"]);

        assert_eq!(cli.config, "scraping_config.json");
        assert_eq!(cli.output, "output.json");
        assert_eq!(cli.timeout_secs, 30);
        assert_eq!(cli.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "selector_scraper",
            "-c",
            "/tmp/sources.json",
            "-o",
            "/tmp/out.json",
            "-t",
            "5",
        ]);

        assert_eq!(cli.config, "/tmp/sources.json");
        assert_eq!(cli.output, "/tmp/out.json");
        assert_eq!(cli.timeout_secs, 5);
    }

    #[test]
    fn test_cli_rejects_bad_timeout() {
        assert!(Cli::try_parse_from(["selector_scraper", "--timeout-secs", "soon"]).is_err());
    }
}
