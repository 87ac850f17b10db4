pub mod source;
pub(crate) mod lexicon;
pub mod analyzer;
pub mod insights;
pub mod collector;

pub use source::{JsonFileReviewSource, ReviewSourceProvider};
pub use analyzer::ReviewAnalyzer;
pub use insights::extract_icp_insights;
pub use collector::ReviewCollectionOrchestrator;
