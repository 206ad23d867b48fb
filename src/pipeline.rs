//! The scrape pipeline: targets → links → articles.
//!
//! Targets are processed one after another, and within a target each link
//! is fetched only after the previous one finished. A failed article is
//! skipped; a failed listing page ends the run.

use crate::error::ScrapeError;
use crate::models::{Article, ScrapeTarget};
use crate::scrapers::Scraper;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument};

/// Scrape every target in order and return all extracted articles.
///
/// # Errors
///
/// The first link-extraction error aborts the run and is returned; articles
/// collected so far are discarded with it.
#[instrument(level = "info", skip_all, fields(targets = targets.len()))]
pub async fn run(scraper: &Scraper, targets: &[ScrapeTarget]) -> Result<Vec<Article>, ScrapeError> {
    let mut collected = Vec::new();
    for target in targets {
        let articles = scrape_articles(scraper, target).await?;
        collected.extend(articles);
    }

    info!(count = collected.len(), "Scraped all targets");
    Ok(collected)
}

/// Scrape one target: read its listing page, then each linked article.
#[instrument(level = "info", skip_all, fields(url = %target.listing_url))]
pub async fn scrape_articles(
    scraper: &Scraper,
    target: &ScrapeTarget,
) -> Result<Vec<Article>, ScrapeError> {
    let links = scraper
        .extract_links(&target.listing_url, &target.link_selector)
        .await?;
    let link_count = links.len();

    let articles: Vec<Article> = stream::iter(links)
        .then(|link: String| async move {
            scraper
                .extract_article(&link, &target.title_selector, &target.content_selector)
                .await
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(
        links = link_count,
        articles = articles.len(),
        skipped = link_count - articles.len(),
        "Scraped target"
    );
    Ok(articles)
}
