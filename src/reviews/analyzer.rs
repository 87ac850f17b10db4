use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use crate::models::review::{
    BatchReviewAnalysis, CustomerReview, ICPInsights, RankedItem, ReviewAnalysis, Sentiment,
    SentimentDistribution,
};
use crate::reviews::insights;
use crate::reviews::lexicon::{
    EMOTIONS, NEGATIVE_WORDS, PAIN_POINTS, POSITIVE_WORDS, SEGMENTS, TOPICS,
};

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}']+").expect("word pattern is valid"));

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

const MAX_INSIGHTS_PER_REVIEW: usize = 3;
const MIN_INSIGHT_CHARS: usize = 20;
const TOP_N: usize = 10;
const MAX_RECOMMENDATIONS: usize = 5;

/// Lowercased review text plus its whole-word tokens.
pub(crate) struct ReviewText {
    lower: String,
    tokens: Vec<String>,
    token_set: HashSet<String>,
}

impl ReviewText {
    pub(crate) fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens: Vec<String> = WORD_RE
            .find_iter(&lower)
            .map(|m| m.as_str().trim_matches('\'').to_string())
            .filter(|t| !t.is_empty())
            .collect();
        let token_set = tokens.iter().cloned().collect();
        Self {
            lower,
            tokens,
            token_set,
        }
    }

    /// Phrases match anywhere in the text, single words only as whole words.
    pub(crate) fn mentions(&self, term: &str) -> bool {
        if term.contains(' ') {
            self.lower.contains(term)
        } else {
            self.token_set.contains(term)
        }
    }

    pub(crate) fn mentions_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|term| self.mentions(term))
    }

    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.lower.contains(needle))
    }

    fn count_words(&self, words: &[&str]) -> usize {
        self.tokens
            .iter()
            .filter(|token| words.contains(&token.as_str()))
            .count()
    }
}

/// Labels from `dictionary` whose terms appear in `text`, in dictionary order.
pub(crate) fn tag(text: &ReviewText, dictionary: &[(&str, &[&str])]) -> Vec<String> {
    dictionary
        .iter()
        .filter(|(_, terms)| text.mentions_any(terms))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Sort by count descending, then label ascending, and keep the first `limit`.
pub(crate) fn rank(
    counts: impl IntoIterator<Item = (String, usize)>,
    limit: usize,
) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = counts
        .into_iter()
        .map(|(item, count)| RankedItem { item, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
    ranked.truncate(limit);
    ranked
}

/// Keyword heuristics over customer reviews. Never fails and makes no external calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewAnalyzer;

impl ReviewAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_review(&self, review: &CustomerReview) -> ReviewAnalysis {
        let text = ReviewText::new(&review.text);

        let positive = text.count_words(POSITIVE_WORDS);
        let negative = text.count_words(NEGATIVE_WORDS);

        let sentiment = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        };
        let confidence = (positive.abs_diff(negative) as f32
            / positive.max(negative).max(1) as f32)
            .clamp(0.0, 1.0);

        let pain_points = PAIN_POINTS
            .iter()
            .filter(|(_, needles)| text.contains_any(needles))
            .map(|(label, _)| label.to_string())
            .collect();

        ReviewAnalysis {
            sentiment,
            confidence,
            pain_points,
            key_insights: key_insights(&review.text),
            customer_segments: tag(&text, SEGMENTS),
            emotions: tag(&text, EMOTIONS),
            topics: tag(&text, TOPICS),
            rating: review.rating,
        }
    }

    /// Aggregate statistics over a review set. The result does not depend on input order.
    pub fn analyze_batch(&self, reviews: &[CustomerReview]) -> BatchReviewAnalysis {
        let mut distribution = SentimentDistribution::default();
        let mut pain_points: HashMap<String, usize> = HashMap::new();
        let mut insights: HashMap<String, usize> = HashMap::new();
        let mut topics: HashMap<String, usize> = HashMap::new();
        let mut emotions: HashMap<String, usize> = HashMap::new();
        let mut segments: BTreeMap<String, usize> = BTreeMap::new();
        let mut ratings: Vec<f32> = Vec::new();

        for review in reviews {
            let analysis = self.analyze_review(review);
            distribution.record(analysis.sentiment);

            for pain in analysis.pain_points {
                *pain_points.entry(pain).or_insert(0) += 1;
            }
            for insight in analysis.key_insights {
                *insights.entry(insight).or_insert(0) += 1;
            }
            for topic in analysis.topics {
                *topics.entry(topic).or_insert(0) += 1;
            }
            for emotion in analysis.emotions {
                *emotions.entry(emotion).or_insert(0) += 1;
            }
            for segment in analysis.customer_segments {
                *segments.entry(segment).or_insert(0) += 1;
            }
            if let Some(rating) = analysis.rating {
                ratings.push(rating);
            }
        }

        // Float addition is not associative; a fixed order keeps the mean stable.
        ratings.sort_by(|a, b| a.total_cmp(b));
        let average_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f32>() / ratings.len() as f32)
        };
        let low_ratings = ratings.iter().filter(|r| **r < 3.0).count();

        let mut batch = BatchReviewAnalysis {
            total_reviews: reviews.len(),
            sentiment_distribution: distribution,
            average_rating,
            rated_reviews: ratings.len(),
            top_pain_points: rank(pain_points, TOP_N),
            top_insights: rank(insights, TOP_N),
            customer_segments: segments,
            top_topics: rank(topics, TOP_N),
            top_emotions: rank(emotions, TOP_N),
            recommendations: Vec::new(),
        };
        batch.recommendations = recommendations(&batch, low_ratings);
        batch
    }

    pub fn extract_icp_insights(&self, reviews: &[CustomerReview]) -> ICPInsights {
        insights::extract_icp_insights(reviews)
    }
}

fn key_insights(text: &str) -> Vec<String> {
    SENTENCE_RE
        .split(text)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_INSIGHT_CHARS)
        .filter(|sentence| {
            let words = ReviewText::new(sentence);
            words.count_words(POSITIVE_WORDS) > 0
                || words.count_words(NEGATIVE_WORDS) > 0
                || PAIN_POINTS
                    .iter()
                    .any(|(_, needles)| words.contains_any(needles))
        })
        .take(MAX_INSIGHTS_PER_REVIEW)
        .map(str::to_string)
        .collect()
}

fn percent(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        0.0
    } else {
        part as f32 * 100.0 / whole as f32
    }
}

fn recommendations(batch: &BatchReviewAnalysis, low_ratings: usize) -> Vec<String> {
    let total = batch.total_reviews;
    if total == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let dist = &batch.sentiment_distribution;

    let negative_share = percent(dist.negative, total);
    if negative_share > 30.0 {
        out.push(format!(
            "Address service issues: {:.0}% of reviews are negative",
            negative_share
        ));
    }

    for pain in batch.top_pain_points.iter().take(3) {
        if percent(pain.count, total) > 10.0 {
            out.push(format!(
                "Tackle {} directly: mentioned in {} of {} reviews",
                pain.item, pain.count, total
            ));
        }
    }

    let low_share = percent(low_ratings, batch.rated_reviews);
    if low_share > 20.0 {
        out.push(format!(
            "Start a quality initiative: {:.0}% of rated reviews are below 3 stars",
            low_share
        ));
    }

    let positive_share = percent(dist.positive, total);
    if positive_share > 60.0 {
        out.push(format!(
            "Leverage testimonials: {:.0}% of reviews are positive",
            positive_share
        ));
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(text: &str) -> CustomerReview {
        CustomerReview::new(text)
    }

    #[test]
    fn test_positive_and_negative_reviews_split_evenly() {
        let analyzer = ReviewAnalyzer::new();
        let reviews = vec![
            review("I loved the fast delivery and friendly staff, highly recommend!"),
            review("Terrible service, waited weeks, very disappointed"),
        ];

        let batch = analyzer.analyze_batch(&reviews);

        assert_eq!(
            batch.sentiment_distribution,
            SentimentDistribution {
                positive: 1,
                negative: 1,
                neutral: 0
            }
        );
        assert_eq!(batch.total_reviews, 2);
    }

    #[test]
    fn test_analyze_review_sentiment_and_confidence() {
        let analyzer = ReviewAnalyzer::new();

        let analysis = analyzer.analyze_review(&review(
            "I loved the fast delivery and friendly staff, highly recommend!",
        ));
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.confidence, 1.0);
        assert!(analysis.topics.contains(&"delivery".to_string()));

        let analysis = analyzer.analyze_review(&review("It was good but also bad."));
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.confidence, 0.0);

        let analysis = analyzer.analyze_review(&review("Nothing to say here"));
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.confidence, 0.0);
    }

    #[test]
    fn test_words_match_whole_words_only() {
        let analyzer = ReviewAnalyzer::new();
        // "goodness" and "badly" are not whole-word hits for "good" or "bad".
        let analysis = analyzer.analyze_review(&review("Goodness, that went badly"));
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_pain_points_use_substrings() {
        let analyzer = ReviewAnalyzer::new();
        let analysis = analyzer.analyze_review(&review(
            "We waited an hour, the waiting room was dirty and it felt overpriced",
        ));

        assert!(analysis.pain_points.contains(&"long wait times".to_string()));
        assert!(analysis.pain_points.contains(&"high prices".to_string()));
        assert!(analysis.pain_points.contains(&"cleanliness".to_string()));
    }

    #[test]
    fn test_key_insights_filter_and_cap() {
        let analyzer = ReviewAnalyzer::new();
        let analysis = analyzer.analyze_review(&review(
            "Great. The staff were friendly every time. Delivery was fast and reliable. \
             The app is easy to use for ordering. Everything was excellent overall. \
             We parked on the street nearby.",
        ));

        assert_eq!(analysis.key_insights.len(), 3);
        assert_eq!(analysis.key_insights[0], "The staff were friendly every time");
        assert!(!analysis.key_insights.iter().any(|s| s == "Great"));
    }

    #[test]
    fn test_segments_emotions_tags() {
        let analyzer = ReviewAnalyzer::new();
        let analysis = analyzer.analyze_review(&review(
            "Took my kids here on vacation and we were delighted, but the manager was rude",
        ));

        assert!(analysis.customer_segments.contains(&"families".to_string()));
        assert!(analysis.customer_segments.contains(&"tourists".to_string()));
        assert!(analysis.emotions.contains(&"joy".to_string()));
        assert!(analysis.emotions.contains(&"anger".to_string()));
        assert!(analysis.topics.contains(&"customer service".to_string()));
    }

    #[test]
    fn test_batch_is_permutation_invariant() {
        let analyzer = ReviewAnalyzer::new();
        let reviews = vec![
            review("Terrible wait, rude staff and overpriced coffee").with_rating(1.0),
            review("Lovely place, friendly staff, quick service").with_rating(4.7),
            review("Average experience, nothing special about the food").with_rating(3.1),
            review("Slow delivery and the package was damaged").with_rating(2.2),
            review("Great value for the price, will come again"),
        ];

        let forward = analyzer.analyze_batch(&reviews);
        let mut reversed = reviews.clone();
        reversed.reverse();
        let mut rotated = reviews.clone();
        rotated.rotate_left(2);

        assert_eq!(forward, analyzer.analyze_batch(&reversed));
        assert_eq!(forward, analyzer.analyze_batch(&rotated));
        assert_eq!(forward.sentiment_distribution.total(), reviews.len());
    }

    #[test]
    fn test_average_rating_ignores_unrated() {
        let analyzer = ReviewAnalyzer::new();
        let reviews = vec![
            review("Great food").with_rating(5.0),
            review("Bad food").with_rating(2.0),
            review("No rating here"),
        ];

        let batch = analyzer.analyze_batch(&reviews);

        assert_eq!(batch.rated_reviews, 2);
        assert_eq!(batch.average_rating, Some(3.5));
    }

    #[test]
    fn test_empty_batch() {
        let batch = ReviewAnalyzer::new().analyze_batch(&[]);
        assert_eq!(batch, BatchReviewAnalysis::default());
    }

    #[test]
    fn test_recommendation_rules() {
        let analyzer = ReviewAnalyzer::new();
        let reviews = vec![
            review("Terrible, we had to wait forever").with_rating(1.0),
            review("Awful wait again, very disappointed").with_rating(2.0),
            review("Horrible delay at the counter").with_rating(1.0),
            review("Fine").with_rating(4.0),
        ];

        let batch = analyzer.analyze_batch(&reviews);
        let recs = &batch.recommendations;

        assert!(recs.iter().any(|r| r.starts_with("Address service issues")));
        assert!(recs.iter().any(|r| r.contains("long wait times")));
        assert!(recs.iter().any(|r| r.starts_with("Start a quality initiative")));
        assert!(!recs.iter().any(|r| r.starts_with("Leverage testimonials")));
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_recommendations_capped() {
        let analyzer = ReviewAnalyzer::new();
        let reviews: Vec<_> = (0..4)
            .map(|_| {
                review("Terrible wait, rude staff, overpriced menu, broken chairs and dirty tables")
                    .with_rating(1.0)
            })
            .collect();

        let batch = analyzer.analyze_batch(&reviews);
        assert_eq!(batch.recommendations.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_rank_breaks_ties_by_label() {
        let counts = HashMap::from([
            ("b".to_string(), 2),
            ("a".to_string(), 2),
            ("c".to_string(), 5),
        ]);
        let ranked = rank(counts, 2);
        assert_eq!(ranked[0].item, "c");
        assert_eq!(ranked[1].item, "a");
    }
}
