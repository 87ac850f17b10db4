use async_trait::async_trait;
use crate::error::Result;

/// Free-text generation backend. Implementations must treat empty output as an error.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    async fn generate(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String>;
    fn name(&self) -> &str;
}
