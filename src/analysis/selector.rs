use std::sync::Arc;

use crate::catalog::TemplateCatalog;
use crate::error::{Error, Result};
use crate::llm::prompts::SELECTION_SYSTEM_PROMPT;
use crate::llm::{extract_id_array, SelectionRequest, TextGenerationService};
use crate::models::{BusinessModel, CompanyProfile, ICPTemplate};

pub const TEMPLATES_PER_RUN: usize = 3;

/// Asks the generation service which catalog templates fit a company best.
pub struct TemplateSelector {
    generator: Arc<dyn TextGenerationService>,
    catalog: TemplateCatalog,
}

impl TemplateSelector {
    pub fn new(generator: Arc<dyn TextGenerationService>) -> Self {
        Self {
            generator,
            catalog: TemplateCatalog::new(),
        }
    }

    /// Returns exactly three distinct templates from `catalog[model]`.
    ///
    /// Unknown and repeated ids are discarded, a short list is padded from the
    /// catalog in order, a long one is truncated. Fails only when the response
    /// holds no parseable id array, or the generation call itself fails.
    pub async fn select(
        &self,
        profile: &CompanyProfile,
        model: BusinessModel,
    ) -> Result<Vec<&'static ICPTemplate>> {
        let request = SelectionRequest {
            profile,
            business_model: model,
            groups: self.catalog.grouped(model),
        };
        let prompt = request.to_prompt();
        tracing::debug!(
            "Selection prompt for {}: {} chars",
            profile.display_name(),
            prompt.len()
        );

        let response = self
            .generator
            .generate(&prompt, Some(SELECTION_SYSTEM_PROMPT))
            .await
            .map_err(|e| Error::TemplateSelection {
                message: "generation call failed".to_string(),
                source: Some(Box::new(e)),
            })?;

        let ids = extract_id_array(&response)?;
        let selected = self.resolve(model, &ids);

        tracing::info!(
            "Selected templates: {}",
            selected.iter().map(|t| t.id).collect::<Vec<_>>().join(", ")
        );
        Ok(selected)
    }

    /// Maps ids to catalog entries, then pads and truncates to exactly three.
    pub fn resolve(&self, model: BusinessModel, ids: &[String]) -> Vec<&'static ICPTemplate> {
        let mut selected: Vec<&'static ICPTemplate> = Vec::with_capacity(TEMPLATES_PER_RUN);

        for id in ids {
            match self.catalog.find(model, id) {
                Some(template) if !selected.iter().any(|t| t.id == template.id) => {
                    selected.push(template);
                }
                Some(_) => tracing::debug!("Ignoring repeated template id {}", id),
                None => tracing::warn!("Discarding unknown template id {} for {}", id, model),
            }
        }

        if selected.len() > TEMPLATES_PER_RUN {
            selected.truncate(TEMPLATES_PER_RUN);
        }

        if selected.len() < TEMPLATES_PER_RUN {
            tracing::warn!(
                "Only {} valid template ids returned, padding from catalog",
                selected.len()
            );
            for template in self.catalog.templates(model) {
                if selected.len() == TEMPLATES_PER_RUN {
                    break;
                }
                if !selected.iter().any(|t| t.id == template.id) {
                    selected.push(template);
                }
            }
        }

        selected
    }
}
