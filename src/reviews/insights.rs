use std::collections::HashMap;

use crate::models::review::{CustomerReview, ICPInsights};
use crate::reviews::analyzer::{rank, tag, ReviewText};
use crate::reviews::lexicon::{CHANNELS, DEMOGRAPHICS, GOALS, PSYCHOGRAPHICS, PURCHASING_BEHAVIOR};

const MAX_PER_FIELD: usize = 5;

/// Re-express review evidence as ICP-shaped hints.
///
/// Each field lists the vocabulary labels mentioned by at least one review,
/// most frequent first, ties broken alphabetically.
pub fn extract_icp_insights(reviews: &[CustomerReview]) -> ICPInsights {
    let texts: Vec<ReviewText> = reviews.iter().map(|r| ReviewText::new(&r.text)).collect();

    ICPInsights {
        demographics: top_labels(&texts, DEMOGRAPHICS),
        psychographics: top_labels(&texts, PSYCHOGRAPHICS),
        goals: top_labels(&texts, GOALS),
        preferred_channels: top_labels(&texts, CHANNELS),
        purchasing_behavior: top_labels(&texts, PURCHASING_BEHAVIOR),
    }
}

fn top_labels(texts: &[ReviewText], dictionary: &[(&str, &[&str])]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        for label in tag(text, dictionary) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }

    rank(counts, MAX_PER_FIELD)
        .into_iter()
        .map(|ranked| ranked.item)
        .collect()
}
