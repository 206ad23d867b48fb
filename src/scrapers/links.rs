//! Article link discovery on listing pages.
//!
//! # URL Normalization
//!
//! | href form | result |
//! |-----------|--------|
//! | `//host/path` | `https://host/path` |
//! | `/path` | joined onto the listing URL's scheme and host |
//! | `https://host/path` | unchanged |
//! | `path`, `?q`, `#frag` | joined onto the listing URL |
//!
//! Links whose normalized form contains `video` are dropped.

use super::{Scraper, compile_selector};
use crate::error::ScrapeError;
use tracing::{debug, info, instrument};
use url::Url;

/// Links containing this substring are not articles.
const EXCLUDED_LINK_MARKER: &str = "video";

impl Scraper {
    /// Fetch `listing_url` and return the article URLs matched by `link_selector`.
    ///
    /// Elements without an `href`, or with an empty one, are skipped. Order follows document order.
    ///
    /// # Errors
    ///
    /// Any error here is fatal to the run: an unparseable listing URL or
    /// selector, or a failed fetch.
    #[instrument(level = "info", skip(self))]
    pub async fn extract_links(
        &self,
        listing_url: &str,
        link_selector: &str,
    ) -> Result<Vec<String>, ScrapeError> {
        let base = Url::parse(listing_url).map_err(|source| ScrapeError::InvalidUrl {
            url: listing_url.to_string(),
            source,
        })?;
        let selector = compile_selector(link_selector)?;
        let document = self.fetch_document(listing_url).await?;

        let links: Vec<String> = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| !href.is_empty())
            .map(|href| normalize_href(&base, href))
            .filter(|link| !link.contains(EXCLUDED_LINK_MARKER))
            .collect();

        info!(count = links.len(), "Found links");
        debug!(urls = ?links, "Article links");
        Ok(links)
    }
}

/// Turn an `href` found on the page at `base` into an absolute URL.
///
/// Protocol-relative links always get `https:`, whatever the listing page's
/// scheme. Absolute URLs are returned verbatim. If joining fails the href is
/// returned as-is.
pub fn normalize_href(base: &Url, href: &str) -> String {
    if href.starts_with("//") {
        return format!("https:{href}");
    }
    if !href.starts_with('/') && Url::parse(href).is_ok() {
        return href.to_string();
    }
    match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            debug!(%href, error = %e, "Could not resolve href; keeping it verbatim");
            href.to_string()
        }
    }
}
