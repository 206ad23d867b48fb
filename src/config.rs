//! Loading the list of scrape targets.
//!
//! The configuration file is a JSON array of [`ScrapeTarget`] objects. It is
//! read once at startup and the resulting list is handed to the pipeline
//! explicitly; nothing else reads it.

use crate::models::ScrapeTarget;
use std::error::Error;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Read and parse the scrape targets at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// targets. Both are fatal to the run.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn load_targets(path: &str) -> Result<Vec<ScrapeTarget>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| format!("failed to read config {path}: {e}"))?;
    let targets: Vec<ScrapeTarget> = serde_json::from_str(&raw)
        .map_err(|e| format!("malformed config {path}: {e}"))?;

    info!(count = targets.len(), "Loaded scrape targets");
    for target in &targets {
        debug!(url = %target.listing_url, link_selector = %target.link_selector, "Target");
    }
    Ok(targets)
}
