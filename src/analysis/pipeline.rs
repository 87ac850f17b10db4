use futures::future::{join_all, try_join_all};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::Arc;

use crate::analysis::builder::ICPBuilder;
use crate::analysis::classifier::BusinessModelClassifier;
use crate::analysis::selector::TemplateSelector;
use crate::config::{BuildFailurePolicy, PipelineConfig};
use crate::error::{Error, Result};
use crate::llm::TextGenerationService;
use crate::models::{
    BusinessModel, CollectionOptions, CollectionResult, CompanyProfile, GeneratedICP,
    ICPTemplate, ReviewEvidence,
};
use crate::reviews::ReviewCollectionOrchestrator;

/// ICPs from one run plus the reviews that grounded them, if any were collected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    pub business_model: BusinessModel,
    pub icps: Vec<GeneratedICP>,
    pub collection: Option<CollectionResult>,
}

/// classify → select three templates → build one ICP per template.
pub struct ICPGenerationPipeline {
    classifier: BusinessModelClassifier,
    selector: TemplateSelector,
    builder: ICPBuilder,
    collector: Option<ReviewCollectionOrchestrator>,
    config: PipelineConfig,
    show_progress: bool,
}

impl ICPGenerationPipeline {
    pub fn new(generator: Arc<dyn TextGenerationService>, config: PipelineConfig) -> Self {
        Self {
            classifier: BusinessModelClassifier::new(),
            selector: TemplateSelector::new(generator.clone()),
            builder: ICPBuilder::new(generator),
            collector: None,
            config,
            show_progress: false,
        }
    }

    pub fn with_review_collector(mut self, collector: ReviewCollectionOrchestrator) -> Self {
        self.collector = Some(collector);
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn classify(&self, profile: &CompanyProfile) -> BusinessModel {
        self.classifier.classify(profile)
    }

    pub async fn generate_icps(&self, profile: &CompanyProfile) -> Result<Vec<GeneratedICP>> {
        self.generate_icps_with_evidence(profile, None).await
    }

    /// Any failure comes back as [`Error::Generation`] wrapping the original error.
    pub async fn generate_icps_with_evidence(
        &self,
        profile: &CompanyProfile,
        evidence: Option<&ReviewEvidence>,
    ) -> Result<Vec<GeneratedICP>> {
        let model = self.classify(profile);
        self.run(profile, model, evidence).await.map_err(wrap)
    }

    /// Collects reviews first and uses them as evidence. A failed collection is
    /// logged and the run continues without evidence; only cancellation aborts.
    pub async fn generate_with_reviews(
        &self,
        profile: &CompanyProfile,
        options: &CollectionOptions,
    ) -> Result<GenerationOutcome> {
        let collection = match &self.collector {
            Some(collector) => {
                let options = CollectionOptions {
                    analyze: true,
                    ..options.clone()
                };
                match collector
                    .collect(profile.name().unwrap_or_default(), &options)
                    .await
                {
                    Ok(result) => Some(result),
                    Err(Error::Cancelled) => return Err(wrap(Error::Cancelled)),
                    Err(e) => {
                        tracing::warn!("Review collection failed, continuing without evidence: {}", e);
                        None
                    }
                }
            }
            None => {
                tracing::info!("No review source configured, generating without evidence");
                None
            }
        };

        let evidence = collection.as_ref().and_then(|c| {
            let analysis = c.metadata.analysis.clone()?;
            Some(ReviewEvidence {
                analysis,
                insights: c.metadata.icp_insights.clone().unwrap_or_default(),
            })
        });

        let model = self.classify(profile);
        let icps = self
            .run(profile, model, evidence.as_ref())
            .await
            .map_err(wrap)?;

        Ok(GenerationOutcome {
            business_model: model,
            icps,
            collection,
        })
    }

    async fn run(
        &self,
        profile: &CompanyProfile,
        model: BusinessModel,
        evidence: Option<&ReviewEvidence>,
    ) -> Result<Vec<GeneratedICP>> {
        tracing::info!(
            "Generating ICPs for {} ({} business model)",
            profile.display_name(),
            model
        );

        let templates = self.selector.select(profile, model).await?;

        let pb = self.progress_bar(templates.len() as u64);
        let results = if self.config.parallel_builds {
            self.build_parallel(profile, model, &templates, evidence, &pb).await
        } else {
            self.build_sequential(profile, model, &templates, evidence, &pb)
                .await
        };
        pb.finish_and_clear();

        let icps = self.apply_failure_policy(results)?;
        tracing::info!("Generated {} ICPs", icps.len());
        Ok(icps)
    }

    async fn build_sequential(
        &self,
        profile: &CompanyProfile,
        model: BusinessModel,
        templates: &[&'static ICPTemplate],
        evidence: Option<&ReviewEvidence>,
        pb: &ProgressBar,
    ) -> Vec<Result<GeneratedICP>> {
        let mut results = Vec::with_capacity(templates.len());

        for template in templates {
            pb.set_message(template.name);
            let result = self.builder.build(profile, template, model, evidence).await;
            pb.inc(1);

            let failed = result.is_err();
            results.push(result);
            if failed && self.config.build_failure_policy == BuildFailurePolicy::FailFast {
                break;
            }
        }

        results
    }

    async fn build_parallel(
        &self,
        profile: &CompanyProfile,
        model: BusinessModel,
        templates: &[&'static ICPTemplate],
        evidence: Option<&ReviewEvidence>,
        pb: &ProgressBar,
    ) -> Vec<Result<GeneratedICP>> {
        let builds = templates.iter().map(|template| async move {
            let result = self.builder.build(profile, template, model, evidence).await;
            pb.inc(1);
            result
        });

        match self.config.build_failure_policy {
            // Remaining builds are dropped as soon as one fails.
            BuildFailurePolicy::FailFast => match try_join_all(builds).await {
                Ok(icps) => icps.into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            },
            BuildFailurePolicy::SkipFailed => join_all(builds).await,
        }
    }

    fn apply_failure_policy(
        &self,
        results: Vec<Result<GeneratedICP>>,
    ) -> Result<Vec<GeneratedICP>> {
        let mut icps = Vec::with_capacity(results.len());
        let mut first_error = None;

        for result in results {
            match result {
                Ok(icp) => icps.push(icp),
                Err(e) => {
                    tracing::warn!("{}", e);
                    if self.config.build_failure_policy == BuildFailurePolicy::FailFast {
                        return Err(e);
                    }
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) if icps.is_empty() => Err(e),
            _ => Ok(icps),
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ICPs {msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

fn wrap(err: Error) -> Error {
    match err {
        Error::Generation(_) => err,
        other => Error::Generation(Box::new(other)),
    }
}
