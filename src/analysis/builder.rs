use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::scoring::{self, ScoreInputs};
use crate::error::{Error, Result};
use crate::llm::parser::SectionDefaults;
use crate::llm::prompts::ICP_SYSTEM_PROMPT;
use crate::llm::{IcpRequest, ParsedSections, Section, TextGenerationService};
use crate::models::{
    split_list, BusinessModel, BuyerPersona, CompanyAttributes, CompanyProfile, FitDefinition,
    GeneratedICP, GoToMarket, ICPTemplate, IcpMeta, NeedsPainGoals, OfferingsPricing,
    PersonaRole, ReviewEvidence, TemplateCategory, ValuePropAlignment,
};
use crate::reviews::analyzer::rank;

/// Turns one template into a fully populated [`GeneratedICP`].
///
/// The generation call is the only thing that can fail. Sections the model
/// leaves out are filled from deterministic defaults built from the company
/// data, the template and any review evidence.
pub struct ICPBuilder {
    generator: Arc<dyn TextGenerationService>,
}

impl ICPBuilder {
    pub fn new(generator: Arc<dyn TextGenerationService>) -> Self {
        Self { generator }
    }

    pub async fn build(
        &self,
        profile: &CompanyProfile,
        template: &ICPTemplate,
        model: BusinessModel,
        evidence: Option<&ReviewEvidence>,
    ) -> Result<GeneratedICP> {
        let evidence = evidence.filter(|e| !e.is_empty());
        let request = IcpRequest {
            profile,
            template,
            business_model: model,
            evidence,
        };
        tracing::debug!(
            "Building {} (~{} prompt tokens)",
            template.id,
            request.estimate_tokens()
        );

        let response = self
            .generator
            .generate(&request.to_prompt(), Some(ICP_SYSTEM_PROMPT))
            .await
            .map_err(|e| Error::IcpBuild {
                template_id: template.id.to_string(),
                source: Box::new(e),
            })?;

        let defaults = section_defaults(profile, template, model, evidence);
        let mut sections = ParsedSections::parse(&response).resolve(&defaults);

        if !sections.defaulted().is_empty() {
            tracing::warn!(
                "{}: {} of {} sections defaulted ({})",
                template.id,
                sections.defaulted().len(),
                Section::ALL.len(),
                sections
                    .defaulted()
                    .iter()
                    .map(|s| s.prefix())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let defaulted = sections.defaulted().to_vec();
        let value_prop = sections.value_prop().to_string();

        let segments = sections.take(Section::Segments);
        let buyer_personas = sections
            .take(Section::Personas)
            .into_iter()
            .enumerate()
            .map(|(i, title)| BuyerPersona {
                title,
                role: PersonaRole::for_position(i),
            })
            .collect();
        let primary_channels = sections.take(Section::Channels);

        let fit_scoring = scoring::fit_scoring(&ScoreInputs {
            profile,
            defaulted: &defaulted,
            channel_count: primary_channels.len(),
            evidence,
        });
        let abm_tier = scoring::abm_tier(fit_scoring.score);
        let confidence = scoring::confidence(profile, &defaulted);

        let offerings = profile
            .main_offerings()
            .map(split_list)
            .filter(|items| !items.is_empty())
            .unwrap_or_else(|| vec![format!("{} core offering", profile.display_name())]);

        Ok(GeneratedICP {
            icp_id: icp_id(template, profile),
            icp_name: template.name.to_string(),
            business_model: model,
            meta: IcpMeta {
                generated_at: Utc::now(),
                source_company: profile.display_name().to_string(),
                template_id: template.id.to_string(),
                template_category: template.category,
                review_evidence: evidence.is_some(),
            },
            segments,
            fit_definition: FitDefinition {
                company_attributes: company_attributes(profile, template, model),
                buyer_personas,
            },
            needs_pain_goals: NeedsPainGoals {
                pains: sections.take(Section::Pains),
                jobs_to_be_done: sections.take(Section::Jobs),
                desired_outcomes: sections.take(Section::Outcomes),
            },
            buying_triggers: sections.take(Section::Triggers),
            common_objections: sections.take(Section::Objections),
            value_prop_alignment: ValuePropAlignment {
                value_prop,
                unique_features: sections.take(Section::Features),
                competitive_advantages: sections.take(Section::Advantages),
            },
            offerings_pricing: OfferingsPricing {
                offerings,
                pricing_model: profile
                    .pricing_model()
                    .unwrap_or("Not specified")
                    .to_string(),
                price_sensitivity: scoring::price_sensitivity(profile, evidence),
            },
            go_to_market: GoToMarket {
                primary_channels,
                messages: sections.take(Section::Messages),
                content_ideas: sections.take(Section::Content),
            },
            fit_scoring,
            abm_tier,
            confidence,
        })
    }
}

fn icp_id(template: &ICPTemplate, profile: &CompanyProfile) -> String {
    let slug = profile
        .display_name()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("{}--{}", slug, template.id)
}

fn company_attributes(
    profile: &CompanyProfile,
    template: &ICPTemplate,
    model: BusinessModel,
) -> CompanyAttributes {
    let industries = profile
        .industry()
        .map(split_list)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec!["Any industry".to_string()]);

    let company_sizes = profile
        .company_size()
        .map(|size| vec![size.to_string()])
        .unwrap_or_else(|| vec![default_company_size(template.category, model).to_string()]);

    let regions = profile
        .location()
        .map(split_list)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec!["Global".to_string()]);

    CompanyAttributes {
        industries,
        company_sizes,
        regions,
    }
}

fn default_company_size(category: TemplateCategory, model: BusinessModel) -> &'static str {
    match category {
        TemplateCategory::Startup => "1-50 employees",
        TemplateCategory::Smb => "10-200 employees",
        TemplateCategory::MidMarket => "200-1,000 employees",
        TemplateCategory::Enterprise => "1,000+ employees",
        _ if model == BusinessModel::B2C => "Individual consumers",
        _ => "Any size",
    }
}

/// Fallback content for every section, most specific source first: review
/// evidence, then company data, then generic copy for the template.
fn section_defaults(
    profile: &CompanyProfile,
    template: &ICPTemplate,
    model: BusinessModel,
    evidence: Option<&ReviewEvidence>,
) -> SectionDefaults {
    let company = profile.display_name();
    let value_prop = profile
        .value_proposition()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} serves {} with a focused offering", company, template.name));

    let evidence_pains: Vec<String> = evidence
        .map(|e| {
            e.analysis
                .top_pain_points
                .iter()
                .take(4)
                .map(|p| p.item.clone())
                .collect()
        })
        .unwrap_or_default();
    let evidence_segments: Vec<String> = evidence
        .map(|e| {
            rank(e.analysis.customer_segments.clone(), 4)
                .into_iter()
                .map(|segment| segment.item)
                .collect()
        })
        .unwrap_or_default();
    let evidence_channels: Vec<String> = evidence
        .map(|e| e.insights.preferred_channels.iter().take(4).cloned().collect())
        .unwrap_or_default();

    let or = |preferred: Vec<String>, fallback: &[&str]| -> Vec<String> {
        if preferred.is_empty() {
            fallback.iter().map(|s| s.to_string()).collect()
        } else {
            preferred
        }
    };

    let mut lists = HashMap::new();

    lists.insert(
        Section::Segments,
        or(evidence_segments, &[template.name]),
    );
    lists.insert(
        Section::Personas,
        match model {
            BusinessModel::B2B => vec![
                "Executive sponsor".to_string(),
                "Department head".to_string(),
                "Day-to-day user".to_string(),
            ],
            BusinessModel::B2C => vec![template.name.to_string()],
            BusinessModel::B2B2C => vec![
                "Partner decision maker".to_string(),
                template.name.to_string(),
            ],
        },
    );
    lists.insert(
        Section::Pains,
        or(
            evidence_pains,
            &["Current options are slow or unreliable", "Hard to justify the cost"],
        ),
    );
    lists.insert(
        Section::Jobs,
        vec!["Find a dependable alternative to their current solution".to_string()],
    );
    lists.insert(
        Section::Outcomes,
        vec![
            "Save time".to_string(),
            "Get predictable results".to_string(),
        ],
    );
    lists.insert(
        Section::Triggers,
        match model {
            BusinessModel::B2B => vec![
                "New budget cycle".to_string(),
                "Leadership change".to_string(),
                "Growth outpacing current tools".to_string(),
            ],
            _ => vec![
                "Life event or change in routine".to_string(),
                "Recommendation from a friend".to_string(),
            ],
        },
    );
    lists.insert(
        Section::Objections,
        vec![
            "Price".to_string(),
            "Switching effort".to_string(),
            "Unproven provider".to_string(),
        ],
    );
    lists.insert(
        Section::Features,
        profile
            .main_offerings()
            .map(split_list)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| vec![format!("{} core offering", company)]),
    );
    lists.insert(
        Section::Advantages,
        profile
            .competitors()
            .map(|c| vec![format!("Differentiated from {}", c)])
            .unwrap_or_else(|| vec![format!("Built specifically for {}", template.name)]),
    );
    lists.insert(
        Section::Channels,
        or(
            evidence_channels,
            match model {
                BusinessModel::B2B => &["LinkedIn", "Email outreach", "Industry events"],
                BusinessModel::B2C => &["Instagram", "Search ads", "Word of mouth"],
                BusinessModel::B2B2C => &["Partner programs", "Marketplace listings", "Social media"],
            },
        ),
    );
    lists.insert(Section::Messages, vec![value_prop.clone()]);
    lists.insert(
        Section::Content,
        vec![
            format!("Customer story featuring a {}", template.name.to_lowercase()),
            "How-to guide".to_string(),
        ],
    );

    SectionDefaults { lists, value_prop }
}
