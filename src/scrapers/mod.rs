//! Fetching and querying pages.
//!
//! [`Scraper`] owns the HTTP client and is the single entry point for
//! network access. Extraction is split into two phases, each in its own
//! submodule:
//!
//! 1. **Links**: [`links`] reads a listing page and returns article URLs
//! 2. **Articles**: [`article`] reads one article page and returns its title
//!    and body text
//!
//! The helpers here wrap the `scraper` crate so that callers deal in
//! [`ScrapeError`] and `Option` instead of selector parse errors.

pub mod article;
pub mod links;

use crate::error::ScrapeError;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Browser-like agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// HTTP access for the pipeline.
///
/// The client is reused across every request of a run so connections to the
/// same host are pooled. Requests are issued one at a time.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
}

impl Scraper {
    /// Build a scraper whose requests give up after `timeout`.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and parse the body as an HTML document.
    ///
    /// Redirects are followed. A non-success status is logged and the body is
    /// parsed like any other.
    ///
    /// # Errors
    ///
    /// [`ScrapeError::Http`] if the request fails, times out, or the body
    /// cannot be read.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_document(&self, url: &str) -> Result<Html, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Non-success status; parsing body anyway");
        }

        let body = response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), "Fetched page");

        Ok(Html::parse_document(&body))
    }
}

/// Parse a CSS selector, reporting failures as [`ScrapeError::InvalidSelector`].
pub fn compile_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// First element of `document` matching `selector`, if any.
pub fn select_first<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

/// Concatenated text of an element and all its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
