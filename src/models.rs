//! Data models for scrape targets and extracted articles.
//!
//! - [`ScrapeTarget`]: one configured source (listing page plus selectors)
//! - [`Article`]: the title and body text pulled from one article page

use serde::{Deserialize, Serialize};

/// A listing page to scrape and the selectors that drive extraction.
///
/// Targets are loaded once from the configuration file and never mutated.
/// Their order in the file is the order articles appear in the output.
///
/// # JSON Shape
///
/// ```json
/// {
///   "url": "https://example.com/news",
///   "link_selector": "a.story",
///   "title_selector": "h1",
///   "content_selector": "div.body"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrapeTarget {
    /// The listing page enumerating article links.
    #[serde(rename = "url")]
    pub listing_url: String,
    /// Selects the anchors whose `href` points at articles.
    pub link_selector: String,
    /// Selects the article headline; the first match wins.
    pub title_selector: String,
    /// Selects the element wrapping the article body; the first match wins.
    pub content_selector: String,
}

/// An article extracted from a single page.
///
/// `content` is the newline-joined text of every body fragment found inside
/// the content container. Field order here is the field order in the output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_target_reads_url_key() {
        let json = r#"{
            "url": "https://example.com/news",
            "link_selector": "a.story",
            "title_selector": "h1",
            "content_selector": "div.body"
        }"#;

        let target: ScrapeTarget = serde_json::from_str(json).unwrap();
        assert_eq!(target.listing_url, "https://example.com/news");
        assert_eq!(target.link_selector, "a.story");
        assert_eq!(target.title_selector, "h1");
        assert_eq!(target.content_selector, "div.body");
    }

    #[test]
    fn test_scrape_target_missing_key_is_rejected() {
        let json = r#"{"url": "https://example.com", "link_selector": "a"}"#;
        assert!(serde_json::from_str::<ScrapeTarget>(json).is_err());
    }

    #[test]
    fn test_article_field_order() {
        let article = Article {
            title: "Headline".to_string(),
            content: "A.\nB.".to_string(),
        };

        let json = serde_json::to_string(&article).unwrap();
        assert_eq!(json, r#"{"title":"Headline","content":"A.\nB."}"#);
    }
}
