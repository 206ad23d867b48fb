//! JSON output for the collected articles.
//!
//! # Output Shape
//!
//! ```json
//! [
//!   {
//!     "title": "Headline",
//!     "content": "A.\nB."
//!   }
//! ]
//! ```

use crate::models::Article;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `articles` to `path` as a pretty-printed JSON array.
///
/// Any existing file is overwritten. Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written. The caller treats this as fatal.
#[instrument(level = "info", skip_all, fields(%path, count = articles.len()))]
pub async fn write_json(path: &str, articles: &[Article]) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(articles)?;

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    info!("Writing JSON");
    fs::write(path, json).await?;
    info!("Wrote JSON output");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Article> {
        vec![
            Article {
                title: "First".to_string(),
                content: "One.\nTwo.".to_string(),
            },
            Article {
                title: "Second \"quoted\"".to_string(),
                content: String::new(),
            },
        ]
    }

    #[tokio::test]
    async fn test_write_json_reads_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        let path = path.to_str().unwrap();

        write_json(path, &sample()).await.unwrap();

        let raw = std::fs::read_to_string(path).unwrap();
        let back: Vec<Article> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, sample());
    }

    #[tokio::test]
    async fn test_write_json_is_pretty_with_stable_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        let path = path.to_str().unwrap();

        write_json(path, &sample()[..1]).await.unwrap();

        let raw = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            raw,
            "[\n  {\n    \"title\": \"First\",\n    \"content\": \"One.\\nTwo.\"\n  }\n]"
        );
    }

    #[tokio::test]
    async fn test_write_json_overwrites_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/output.json");
        let path = path.to_str().unwrap();

        write_json(path, &sample()).await.unwrap();
        write_json(path, &[]).await.unwrap();

        let raw = std::fs::read_to_string(path).unwrap();
        assert_eq!(raw, "[]");
    }

    #[tokio::test]
    async fn test_write_json_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let path = dir.path().to_str().unwrap();
        assert!(write_json(path, &sample()).await.is_err());
    }
}
