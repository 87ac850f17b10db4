use chrono::{DateTime, NaiveDate, Utc};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::models::review::{
    CollectionMetadata, CollectionOptions, CollectionResult, CustomerReview, DataSource,
    RawReview, SearchOptions,
};
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::reviews::analyzer::ReviewAnalyzer;
use crate::reviews::source::ReviewSourceProvider;

/// Reviews shorter than this (in characters, after whitespace cleanup) are dropped.
pub const MIN_REVIEW_CHARS: usize = 50;
/// Length of the normalized prefix that identifies duplicates.
const DEDUP_PREFIX_CHARS: usize = 50;

/// Fetches reviews for a company with retries, then normalizes, filters and
/// deduplicates them.
pub struct ReviewCollectionOrchestrator {
    provider: Arc<dyn ReviewSourceProvider>,
    analyzer: ReviewAnalyzer,
    retry: RetryPolicy,
    cancel: CancellationToken,
}

impl ReviewCollectionOrchestrator {
    pub fn new(provider: Arc<dyn ReviewSourceProvider>, retry: RetryPolicy) -> Self {
        Self {
            provider,
            analyzer: ReviewAnalyzer::new(),
            retry,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn collect(
        &self,
        company_name: &str,
        options: &CollectionOptions,
    ) -> Result<CollectionResult> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(Error::Validation(
                "company name is required to collect reviews".to_string(),
            ));
        }

        tracing::info!(
            "Collecting reviews for {} from {}",
            company_name,
            self.provider.name()
        );

        let search = SearchOptions::from(options);
        let attempts = AtomicU32::new(0);

        let raw = {
            let provider = self.provider.as_ref();
            let search = &search;
            let attempts = &attempts;
            retry_with_backoff(&self.retry, &self.cancel, Error::is_retryable, move |attempt| {
                attempts.store(attempt, Ordering::Relaxed);
                tracing::debug!("Review search attempt {} for {}", attempt, company_name);
                provider.search_reviews(company_name, search)
            })
            .await?
        };

        let total_fetched = raw.len();
        let default_source = self.provider.name();

        let mut too_short_removed = 0;
        let mut duplicates_removed = 0;
        let mut seen: HashSet<String> = HashSet::new();
        let mut reviews = Vec::new();

        for item in raw {
            let review = normalize(item, default_source);
            if review.text.chars().count() < MIN_REVIEW_CHARS {
                too_short_removed += 1;
                continue;
            }
            if !seen.insert(dedup_key(&review.text)) {
                duplicates_removed += 1;
                continue;
            }
            reviews.push(review);
        }

        tracing::info!(
            "Retained {} of {} reviews ({} too short, {} duplicates)",
            reviews.len(),
            total_fetched,
            too_short_removed,
            duplicates_removed
        );

        let collected_at = Utc::now();
        let data_sources = data_sources(&reviews, company_name, options, collected_at);

        let (analysis, icp_insights) = if options.analyze && !reviews.is_empty() {
            (
                Some(self.analyzer.analyze_batch(&reviews)),
                Some(self.analyzer.extract_icp_insights(&reviews)),
            )
        } else {
            (None, None)
        };

        Ok(CollectionResult {
            metadata: CollectionMetadata {
                company_name: company_name.to_string(),
                provider: self.provider.name().to_string(),
                attempts: attempts.load(Ordering::Relaxed),
                total_fetched,
                too_short_removed,
                duplicates_removed,
                retained: reviews.len(),
                collected_at,
                analysis,
                icp_insights,
            },
            reviews,
            data_sources,
        })
    }
}

fn normalize(raw: RawReview, default_source: &str) -> CustomerReview {
    let text = raw.text.split_whitespace().collect::<Vec<_>>().join(" ");
    let rating = raw
        .rating
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, 5.0));
    let date = raw.date.as_deref().and_then(parse_date);
    let source = raw
        .source
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_source.to_string());

    CustomerReview {
        text,
        rating,
        date,
        source,
        platform: raw.platform.filter(|p| !p.trim().is_empty()),
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// SHA-256 of the first 50 characters of the lowercased alphanumeric text.
fn dedup_key(text: &str) -> String {
    let normalized = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>();
    let prefix: String = normalized
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(DEDUP_PREFIX_CHARS)
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn data_sources(
    reviews: &[CustomerReview],
    company_name: &str,
    options: &CollectionOptions,
    timestamp: DateTime<Utc>,
) -> Vec<DataSource> {
    let mut per_source: BTreeMap<&str, usize> = BTreeMap::new();
    for review in reviews {
        *per_source.entry(review.source.as_str()).or_insert(0) += 1;
    }

    per_source
        .into_iter()
        .map(|(source, count)| DataSource {
            source_type: source.to_string(),
            query: company_name.to_string(),
            location: options.location.clone(),
            result_count: count,
            timestamp,
        })
        .collect()
}
