pub mod classifier;
pub mod selector;
pub mod scoring;
pub mod builder;
pub mod pipeline;

pub use classifier::BusinessModelClassifier;
pub use selector::TemplateSelector;
pub use builder::ICPBuilder;
pub use pipeline::{GenerationOutcome, ICPGenerationPipeline};
