use crate::models::{BusinessModel, CompanyProfile};

/// Industrial signals. Any hit forces B2B regardless of consumer keywords.
const MANUFACTURING_KEYWORDS: &[&str] = &[
    "manufactur",
    "industrial",
    "factory",
    "factories",
    "heavy industry",
    "machinery",
    "steel",
    "chemical",
    "metalwork",
    "fabrication",
    "foundry",
    "aerospace",
    "automotive parts",
    "mining",
    "oil and gas",
    "oil & gas",
    "petrochemical",
    "construction equipment",
    "semiconductor",
];

/// Explicit hybrid labels. Checked before the B2B and B2C sets.
const B2B2C_KEYWORDS: &[&str] = &["b2b2c", "b2b & b2c", "b2b and b2c", "b2b/b2c"];

const B2B_KEYWORDS: &[&str] = &[
    "b2b",
    "business",
    "businesses",
    "enterprise",
    "enterprises",
    "companies",
    "company",
    "corporate",
    "organization",
    "organizations",
    "organisation",
    "organisations",
    "saas",
    "smb",
    "smbs",
    "sme",
    "smes",
    "startup",
    "startups",
    "agency",
    "agencies",
    "teams",
    "professionals",
    "wholesale",
    "distributor",
    "distributors",
    "procurement",
    "clinic",
    "clinics",
    "hospital",
    "hospitals",
    "schools",
    "restaurants",
    "retailers",
    "merchants",
    "sellers",
    "vendors",
    "partners",
];

const B2C_KEYWORDS: &[&str] = &[
    "b2c",
    "d2c",
    "direct-to-consumer",
    "direct to consumer",
    "consumer",
    "consumers",
    "customers",
    "individuals",
    "people",
    "families",
    "parents",
    "kids",
    "students",
    "shoppers",
    "buyers",
    "households",
    "homeowners",
    "travelers",
    "travellers",
    "gamers",
    "millennials",
    "gen z",
    "women",
    "men",
    "pet owners",
    "fans",
    "users",
];

/// Decides B2B / B2C / B2B2C from free-text company data. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessModelClassifier;

impl BusinessModelClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, profile: &CompanyProfile) -> BusinessModel {
        let text = [
            profile.target_market(),
            profile.market_segment(),
            profile.industry(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

        if contains_stem(&text, MANUFACTURING_KEYWORDS) {
            tracing::debug!("Manufacturing signal found, classifying as B2B");
            return BusinessModel::B2B;
        }

        if contains_word(&text, B2B2C_KEYWORDS) {
            tracing::debug!("Explicit B2B2C label found");
            return BusinessModel::B2B2C;
        }

        let b2b = contains_word(&text, B2B_KEYWORDS);
        let b2c = contains_word(&text, B2C_KEYWORDS);

        let model = match (b2b, b2c) {
            (true, true) => BusinessModel::B2B2C,
            (true, false) => BusinessModel::B2B,
            _ => BusinessModel::B2C,
        };
        tracing::debug!("B2B signal: {}, B2C signal: {} -> {}", b2b, b2c, model);
        model
    }
}

/// Keyword bounded by non-alphanumerics on both sides: "men" matches "men's"
/// but not "mental" or "management".
fn contains_word(text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| find_bounded(text, keyword, true))
}

/// Keyword starting at a word boundary, any suffix allowed: "manufactur"
/// matches "manufacturer" and "manufacturing".
fn contains_stem(text: &str, stems: &[&str]) -> bool {
    stems.iter().any(|stem| find_bounded(text, stem, false))
}

fn find_bounded(text: &str, keyword: &str, bound_end: bool) -> bool {
    let is_boundary = |c: Option<char>| c.map_or(true, |c| !c.is_alphanumeric());

    text.match_indices(keyword).any(|(idx, _)| {
        is_boundary(text[..idx].chars().next_back())
            && (!bound_end || is_boundary(text[idx + keyword.len()..].chars().next()))
    })
}
