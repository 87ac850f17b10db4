use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A review exactly as a [`ReviewSourceProvider`](crate::reviews::ReviewSourceProvider) returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReview {
    pub text: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReview {
    pub text: String,
    pub rating: Option<f32>,
    pub date: Option<DateTime<Utc>>,
    pub source: String,
    pub platform: Option<String>,
}

impl CustomerReview {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rating: None,
            date: None,
            source: "manual".to_string(),
            platform: None,
        }
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    pub sentiment: Sentiment,
    /// |positive - negative| / max(positive, negative, 1), in [0, 1].
    pub confidence: f32,
    pub pain_points: Vec<String>,
    pub key_insights: Vec<String>,
    pub customer_segments: Vec<String>,
    pub emotions: Vec<String>,
    pub topics: Vec<String>,
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedItem {
    pub item: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchReviewAnalysis {
    pub total_reviews: usize,
    pub sentiment_distribution: SentimentDistribution,
    /// Mean over reviews that carry a rating; `None` when none do.
    pub average_rating: Option<f32>,
    pub rated_reviews: usize,
    pub top_pain_points: Vec<RankedItem>,
    pub top_insights: Vec<RankedItem>,
    pub customer_segments: BTreeMap<String, usize>,
    pub top_topics: Vec<RankedItem>,
    pub top_emotions: Vec<RankedItem>,
    pub recommendations: Vec<String>,
}

/// Review evidence re-expressed in the vocabulary of an ICP.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ICPInsights {
    pub demographics: Vec<String>,
    pub psychographics: Vec<String>,
    pub goals: Vec<String>,
    pub preferred_channels: Vec<String>,
    pub purchasing_behavior: Vec<String>,
}

impl ICPInsights {
    pub fn is_empty(&self) -> bool {
        self.demographics.is_empty()
            && self.psychographics.is_empty()
            && self.goals.is_empty()
            && self.preferred_channels.is_empty()
            && self.purchasing_behavior.is_empty()
    }
}

/// Provenance of a set of collected reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub query: String,
    pub location: Option<String>,
    pub result_count: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub location: Option<String>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct CollectionOptions {
    pub location: Option<String>,
    pub max_results: Option<usize>,
    /// Run the review analyzer over the retained reviews.
    pub analyze: bool,
}

impl From<&CollectionOptions> for SearchOptions {
    fn from(options: &CollectionOptions) -> Self {
        Self {
            location: options.location.clone(),
            max_results: options.max_results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    pub company_name: String,
    pub provider: String,
    pub attempts: u32,
    pub total_fetched: usize,
    pub too_short_removed: usize,
    pub duplicates_removed: usize,
    pub retained: usize,
    pub collected_at: DateTime<Utc>,
    pub analysis: Option<BatchReviewAnalysis>,
    pub icp_insights: Option<ICPInsights>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResult {
    pub reviews: Vec<CustomerReview>,
    pub data_sources: Vec<DataSource>,
    pub metadata: CollectionMetadata,
}

/// Review-derived grounding passed to the ICP builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvidence {
    pub analysis: BatchReviewAnalysis,
    pub insights: ICPInsights,
}

impl ReviewEvidence {
    pub fn is_empty(&self) -> bool {
        self.analysis.total_reviews == 0
    }
}
