pub mod provider;
pub mod claude;
pub mod prompts;
pub mod parser;

pub use provider::TextGenerationService;
pub use claude::ClaudeProvider;
pub use prompts::{IcpRequest, SelectionRequest};
pub use parser::{extract_id_array, ParsedSections, Section};
