use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::company::BusinessModel;

/// A candidate persona archetype from the static catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ICPTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    // B2B
    Startup,
    Smb,
    MidMarket,
    Enterprise,
    IndustrySpecific,
    // B2C
    Demographic,
    Lifestyle,
    Behavioral,
    Specialized,
    // B2B2C
    Platform,
    Hybrid,
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateCategory::Startup => write!(f, "Startups"),
            TemplateCategory::Smb => write!(f, "Small & Medium Businesses"),
            TemplateCategory::MidMarket => write!(f, "Mid-Market"),
            TemplateCategory::Enterprise => write!(f, "Enterprise"),
            TemplateCategory::IndustrySpecific => write!(f, "Industry-Specific"),
            TemplateCategory::Demographic => write!(f, "Demographic"),
            TemplateCategory::Lifestyle => write!(f, "Lifestyle"),
            TemplateCategory::Behavioral => write!(f, "Behavioral"),
            TemplateCategory::Specialized => write!(f, "Specialized"),
            TemplateCategory::Platform => write!(f, "Platform"),
            TemplateCategory::Hybrid => write!(f, "Hybrid"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedICP {
    pub icp_id: String,
    pub icp_name: String,
    pub business_model: BusinessModel,
    pub meta: IcpMeta,
    pub segments: Vec<String>,
    pub fit_definition: FitDefinition,
    pub needs_pain_goals: NeedsPainGoals,
    pub buying_triggers: Vec<String>,
    pub common_objections: Vec<String>,
    pub value_prop_alignment: ValuePropAlignment,
    pub offerings_pricing: OfferingsPricing,
    pub go_to_market: GoToMarket,
    pub fit_scoring: FitScoring,
    pub abm_tier: AbmTier,
    pub confidence: Confidence,
}

impl GeneratedICP {
    /// Every list-typed field, labeled. Used to check the non-empty shape guarantee.
    pub fn list_fields(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("segments", self.segments.len()),
            (
                "fit_definition.company_attributes.industries",
                self.fit_definition.company_attributes.industries.len(),
            ),
            (
                "fit_definition.company_attributes.company_sizes",
                self.fit_definition.company_attributes.company_sizes.len(),
            ),
            (
                "fit_definition.company_attributes.regions",
                self.fit_definition.company_attributes.regions.len(),
            ),
            (
                "fit_definition.buyer_personas",
                self.fit_definition.buyer_personas.len(),
            ),
            ("needs_pain_goals.pains", self.needs_pain_goals.pains.len()),
            (
                "needs_pain_goals.jobs_to_be_done",
                self.needs_pain_goals.jobs_to_be_done.len(),
            ),
            (
                "needs_pain_goals.desired_outcomes",
                self.needs_pain_goals.desired_outcomes.len(),
            ),
            ("buying_triggers", self.buying_triggers.len()),
            ("common_objections", self.common_objections.len()),
            (
                "value_prop_alignment.unique_features",
                self.value_prop_alignment.unique_features.len(),
            ),
            (
                "value_prop_alignment.competitive_advantages",
                self.value_prop_alignment.competitive_advantages.len(),
            ),
            ("offerings_pricing.offerings", self.offerings_pricing.offerings.len()),
            (
                "go_to_market.primary_channels",
                self.go_to_market.primary_channels.len(),
            ),
            ("go_to_market.messages", self.go_to_market.messages.len()),
            ("go_to_market.content_ideas", self.go_to_market.content_ideas.len()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcpMeta {
    pub generated_at: DateTime<Utc>,
    pub source_company: String,
    pub template_id: String,
    pub template_category: TemplateCategory,
    pub review_evidence: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitDefinition {
    pub company_attributes: CompanyAttributes,
    pub buyer_personas: Vec<BuyerPersona>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyAttributes {
    pub industries: Vec<String>,
    pub company_sizes: Vec<String>,
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerPersona {
    pub title: String,
    pub role: PersonaRole,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PersonaRole {
    DecisionMaker,
    Influencer,
    EndUser,
}

impl PersonaRole {
    /// Personas are listed most senior first; roles follow list position.
    pub fn for_position(index: usize) -> Self {
        match index {
            0 => PersonaRole::DecisionMaker,
            1 => PersonaRole::Influencer,
            _ => PersonaRole::EndUser,
        }
    }
}

impl std::fmt::Display for PersonaRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonaRole::DecisionMaker => write!(f, "decision maker"),
            PersonaRole::Influencer => write!(f, "influencer"),
            PersonaRole::EndUser => write!(f, "end user"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeedsPainGoals {
    pub pains: Vec<String>,
    pub jobs_to_be_done: Vec<String>,
    pub desired_outcomes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuePropAlignment {
    pub value_prop: String,
    pub unique_features: Vec<String>,
    pub competitive_advantages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingsPricing {
    pub offerings: Vec<String>,
    pub pricing_model: String,
    pub price_sensitivity: PriceSensitivity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceSensitivity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for PriceSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSensitivity::Low => write!(f, "low"),
            PriceSensitivity::Medium => write!(f, "medium"),
            PriceSensitivity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoToMarket {
    pub primary_channels: Vec<String>,
    pub messages: Vec<String>,
    pub content_ideas: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitScoring {
    /// Weighted total in [0, 100].
    pub score: u8,
    pub score_breakdown: BTreeMap<String, u8>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AbmTier {
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
}

impl std::fmt::Display for AbmTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbmTier::Tier1 => write!(f, "Tier 1"),
            AbmTier::Tier2 => write!(f, "Tier 2"),
            AbmTier::Tier3 => write!(f, "Tier 3"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}
