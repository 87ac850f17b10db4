use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{CollectionFailure, Error, Result};
use crate::models::review::{RawReview, SearchOptions};

/// Somewhere customer reviews can be fetched from.
///
/// Implementations report failures as [`Error::ReviewCollection`] so the
/// collector can decide whether another attempt is worthwhile.
#[async_trait]
pub trait ReviewSourceProvider: Send + Sync {
    async fn search_reviews(
        &self,
        company_name: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RawReview>>;

    /// Provider name, recorded as the data source type of the reviews it returns.
    fn name(&self) -> &str;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewFile {
    List(Vec<RawReview>),
    Wrapped { reviews: Vec<RawReview> },
}

/// Reads reviews exported to a local JSON file, either a bare array or `{"reviews": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileReviewSource {
    path: PathBuf,
}

impl JsonFileReviewSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReviewSourceProvider for JsonFileReviewSource {
    async fn search_reviews(
        &self,
        company_name: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RawReview>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::collection(
                CollectionFailure::ProviderError,
                format!("reading {}: {}", self.path.display(), e),
            )
        })?;

        let file: ReviewFile = serde_json::from_str(&contents).map_err(|e| {
            Error::collection(
                CollectionFailure::ProviderError,
                format!("parsing {}: {}", self.path.display(), e),
            )
        })?;

        let mut reviews = match file {
            ReviewFile::List(reviews) | ReviewFile::Wrapped { reviews } => reviews,
        };
        if reviews.is_empty() {
            return Err(Error::collection(
                CollectionFailure::NoReviewsFound,
                format!("no reviews for {} in {}", company_name, self.path.display()),
            ));
        }
        if let Some(max) = options.max_results {
            reviews.truncate(max);
        }

        tracing::debug!(
            "Loaded {} reviews for {} from {}",
            reviews.len(),
            company_name,
            self.path.display()
        );
        Ok(reviews)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
