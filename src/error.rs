//! Error types for fetching and extracting pages.
//!
//! [`ScrapeError`] covers everything that can go wrong between issuing a GET
//! and pulling fields out of the parsed document. Whether an error is fatal
//! depends on where it surfaces: link extraction hands it to the caller,
//! article extraction logs it and skips the article.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A configured CSS selector does not parse.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A required element was not present in the document.
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
