//! Article page extraction.
//!
//! The title is the text of the first element matching the title selector.
//! The body is gathered from inside the first element matching the content
//! selector: every `<p>` descendant, or, when there are none, every content
//! block marked with `data-component="text-block"`. Fragments are joined
//! with newlines.

use super::{Scraper, compile_selector, element_text, select_first};
use crate::error::ScrapeError;
use crate::models::Article;
use crate::utils::truncate_for_log;
use scraper::Html;
use tracing::{error, info, instrument};

/// Body fragments on most sites.
const PARAGRAPH_SELECTOR: &str = "p";
/// Body fragments on sites that mark text blocks instead of using `<p>`.
const CONTENT_BLOCK_SELECTOR: &str = r#"div[data-component="text-block"]"#;

impl Scraper {
    /// Extract one article, or `None` if anything goes wrong.
    ///
    /// Failures are logged with the URL and never propagated, so a single bad
    /// page cannot abort the run.
    #[instrument(level = "info", skip(self, title_selector, content_selector))]
    pub async fn extract_article(
        &self,
        article_url: &str,
        title_selector: &str,
        content_selector: &str,
    ) -> Option<Article> {
        match self
            .try_extract_article(article_url, title_selector, content_selector)
            .await
        {
            Ok(article) => {
                info!(url = %article_url, "Parsed article");
                info!(title = %article.title, "Title");
                info!(content = %truncate_for_log(&article.content, 500), "Content");
                Some(article)
            }
            Err(e) => {
                error!(url = %article_url, error = %e, "Error parsing article");
                None
            }
        }
    }

    async fn try_extract_article(
        &self,
        article_url: &str,
        title_selector: &str,
        content_selector: &str,
    ) -> Result<Article, ScrapeError> {
        let document = self.fetch_document(article_url).await?;
        parse_article(&document, title_selector, content_selector)
    }
}

/// Pull the title and body out of an already parsed article page.
///
/// Title and fragments keep their text exactly as it appears in the
/// document, whitespace included.
///
/// # Errors
///
/// [`ScrapeError::MissingElement`] if either the title or the content
/// container is absent, [`ScrapeError::InvalidSelector`] if a selector does
/// not parse. An empty container is not an error; it yields an empty
/// `content`.
pub fn parse_article(
    document: &Html,
    title_selector: &str,
    content_selector: &str,
) -> Result<Article, ScrapeError> {
    let title = select_first(document, &compile_selector(title_selector)?)
        .map(element_text)
        .ok_or_else(|| missing(title_selector))?;
    let body = select_first(document, &compile_selector(content_selector)?)
        .ok_or_else(|| missing(content_selector))?;

    let paragraphs = compile_selector(PARAGRAPH_SELECTOR)?;
    let mut fragments: Vec<String> = body.select(&paragraphs).map(element_text).collect();
    if fragments.is_empty() {
        let blocks = compile_selector(CONTENT_BLOCK_SELECTOR)?;
        fragments = body.select(&blocks).map(element_text).collect();
    }

    Ok(Article {
        title,
        content: fragments.join("\n"),
    })
}

fn missing(selector: &str) -> ScrapeError {
    ScrapeError::MissingElement {
        selector: selector.to_string(),
    }
}
