pub mod config;
pub mod error;
pub mod models;
pub mod catalog;
pub mod llm;
pub mod retry;
pub mod analysis;
pub mod reviews;

pub use config::{BuildFailurePolicy, Config, PipelineConfig};
pub use error::{CollectionFailure, Error, Result};
pub use catalog::TemplateCatalog;
pub use llm::{ClaudeProvider, TextGenerationService};
pub use retry::{retry_with_backoff, RetryPolicy};
pub use analysis::{
    BusinessModelClassifier, GenerationOutcome, ICPBuilder, ICPGenerationPipeline,
    TemplateSelector,
};
pub use reviews::{
    JsonFileReviewSource, ReviewAnalyzer, ReviewCollectionOrchestrator, ReviewSourceProvider,
};
