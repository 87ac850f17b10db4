mod common;

use std::sync::Arc;
use std::time::Duration;

use icpgen::error::{CollectionFailure, Error};
use icpgen::models::{BusinessModel, CollectionOptions, CompanyProfile};
use icpgen::{
    BuildFailurePolicy, ICPGenerationPipeline, PipelineConfig, RetryPolicy,
    ReviewCollectionOrchestrator,
};

use common::{review, QueueGenerator, StubReviewSource, FULL_ICP};

const SELECTION: &str = r#"Here you go:
```json
["b2c_young_professional", "b2c_convenience_seeker", "b2c_loyal_regular"]
```"#;

fn coffee_shop() -> CompanyProfile {
    CompanyProfile {
        name: Some("Morning Ritual Coffee".to_string()),
        industry: Some("Coffee shop".to_string()),
        target_market: Some("young professionals and commuters".to_string()),
        value_proposition: Some("Specialty coffee in under two minutes".to_string()),
        location: Some("Lisbon".to_string()),
        ..Default::default()
    }
}

fn consumer_cafe() -> CompanyProfile {
    CompanyProfile {
        target_market: Some("commuters and students".to_string()),
        ..coffee_shop()
    }
}

fn reviews() -> Vec<icpgen::models::RawReview> {
    vec![
        review(
            "I loved the fast service and friendly baristas, I come back every week before work.",
            Some(5.0),
            "google",
        ),
        review(
            "Terrible wait this morning, twenty minutes in the queue and the latte was cold.",
            Some(2.0),
            "yelp",
        ),
        review(
            "I LOVED the fast service and friendly baristas!!! I come back every week before work, honestly.",
            Some(5.0),
            "google",
        ),
        review("Nice.", Some(4.0), "google"),
    ]
}

fn collector(source: Arc<StubReviewSource>) -> ReviewCollectionOrchestrator {
    ReviewCollectionOrchestrator::new(source, RetryPolicy::new(3, Duration::from_millis(50)))
}

#[tokio::test]
async fn test_end_to_end_with_review_evidence() {
    let generator = Arc::new(QueueGenerator::new(&[SELECTION, FULL_ICP, "", FULL_ICP]));
    let source = Arc::new(StubReviewSource::new(reviews()));
    let pipeline = ICPGenerationPipeline::new(generator.clone(), PipelineConfig::default())
        .with_review_collector(collector(source.clone()));

    let outcome = pipeline
        .generate_with_reviews(&consumer_cafe(), &CollectionOptions::default())
        .await
        .unwrap();

    assert_eq!(outcome.business_model, BusinessModel::B2C);
    assert_eq!(outcome.icps.len(), 3);
    assert_eq!(source.call_count(), 1);

    let collection = outcome.collection.as_ref().unwrap();
    assert_eq!(collection.metadata.total_fetched, 4);
    assert_eq!(collection.metadata.too_short_removed, 1);
    assert_eq!(collection.metadata.duplicates_removed, 1);
    assert_eq!(collection.reviews.len(), 2);
    assert_eq!(collection.data_sources.len(), 2);

    let analysis = collection.metadata.analysis.as_ref().unwrap();
    assert_eq!(analysis.sentiment_distribution.total(), 2);

    for icp in &outcome.icps {
        assert!(icp.meta.review_evidence);
        for (field, len) in icp.list_fields() {
            assert!(len > 0, "{} empty in {}", field, icp.icp_id);
        }
        assert!(icp.fit_scoring.score <= 100);
    }

    // The second build got an empty response and fell back to review evidence.
    assert!(outcome.icps[1]
        .needs_pain_goals
        .pains
        .contains(&"long wait times".to_string()));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 4);
    assert!(prompts[1].contains("Customer review evidence (2 reviews"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_collection_falls_back_to_plain_generation() {
    let generator = Arc::new(QueueGenerator::new(&[SELECTION, FULL_ICP, FULL_ICP, FULL_ICP]));
    let source = Arc::new(StubReviewSource::failing(u32::MAX, CollectionFailure::ProviderError));
    let pipeline = ICPGenerationPipeline::new(generator, PipelineConfig::default())
        .with_review_collector(collector(source.clone()));

    let outcome = pipeline
        .generate_with_reviews(&consumer_cafe(), &CollectionOptions::default())
        .await
        .unwrap();

    assert_eq!(source.call_count(), 3);
    assert!(outcome.collection.is_none());
    assert_eq!(outcome.icps.len(), 3);
    assert!(outcome.icps.iter().all(|icp| !icp.meta.review_evidence));
}

#[tokio::test]
async fn test_collection_recovers_after_transient_failures() {
    let source = Arc::new(StubReviewSource::new(reviews()));
    let flaky = Arc::new(StubReviewSource::failing(2, CollectionFailure::NoReviewsFound));

    let ok = collector(source)
        .collect("Morning Ritual Coffee", &CollectionOptions::default())
        .await
        .unwrap();
    assert_eq!(ok.metadata.attempts, 1);

    // `failing` has no reviews to return once it recovers.
    let recovered = collector(flaky.clone())
        .collect("Morning Ritual Coffee", &CollectionOptions::default())
        .await
        .unwrap();
    assert_eq!(flaky.call_count(), 3);
    assert_eq!(recovered.metadata.attempts, 3);
    assert!(recovered.reviews.is_empty());
}

#[tokio::test]
async fn test_generation_failure_keeps_origin() {
    let generator = Arc::new(QueueGenerator::new(&[SELECTION, FULL_ICP]));
    let pipeline = ICPGenerationPipeline::new(generator, PipelineConfig::default());

    let err = pipeline.generate_icps(&consumer_cafe()).await.unwrap_err();

    assert!(err.to_string().starts_with("Could not generate profiles"));
    match err.root_cause() {
        Error::IcpBuild { template_id, .. } => assert_eq!(template_id, "b2c_convenience_seeker"),
        other => panic!("unexpected root cause: {other}"),
    }
}

#[tokio::test]
async fn test_skip_failed_returns_partial_results() {
    let generator = Arc::new(QueueGenerator::new(&[SELECTION, FULL_ICP]));
    let pipeline = ICPGenerationPipeline::new(
        generator,
        PipelineConfig {
            parallel_builds: false,
            build_failure_policy: BuildFailurePolicy::SkipFailed,
        },
    );

    let icps = pipeline.generate_icps(&consumer_cafe()).await.unwrap();

    assert_eq!(icps.len(), 1);
    assert_eq!(icps[0].meta.template_id, "b2c_young_professional");
    assert_eq!(icps[0].go_to_market.primary_channels, vec!["Instagram", "Google Maps"]);
}
