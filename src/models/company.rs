use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-text company data, the immutable input to one pipeline run.
///
/// Every field is optional. Blank strings are treated the same as missing ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub target_market: Option<String>,
    #[serde(default)]
    pub value_proposition: Option<String>,
    #[serde(default)]
    pub main_offerings: Option<String>,
    #[serde(default)]
    pub pricing_model: Option<String>,
    #[serde(default)]
    pub market_segment: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub competitors: Option<String>,
    /// Any other fields the caller supplied; only used to give the model more context.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CompanyProfile {
    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn industry(&self) -> Option<&str> {
        non_blank(&self.industry)
    }

    pub fn target_market(&self) -> Option<&str> {
        non_blank(&self.target_market)
    }

    pub fn value_proposition(&self) -> Option<&str> {
        non_blank(&self.value_proposition)
    }

    pub fn main_offerings(&self) -> Option<&str> {
        non_blank(&self.main_offerings)
    }

    pub fn pricing_model(&self) -> Option<&str> {
        non_blank(&self.pricing_model)
    }

    pub fn market_segment(&self) -> Option<&str> {
        non_blank(&self.market_segment)
    }

    pub fn company_size(&self) -> Option<&str> {
        non_blank(&self.company_size)
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn competitors(&self) -> Option<&str> {
        non_blank(&self.competitors)
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("the company")
    }

    /// Labeled, non-blank fields in a fixed order, for prompts and reports.
    pub fn labeled_fields(&self) -> Vec<(&'static str, &str)> {
        let fields = [
            ("Company name", self.name()),
            ("Industry", self.industry()),
            ("Target market", self.target_market()),
            ("Market segment", self.market_segment()),
            ("Value proposition", self.value_proposition()),
            ("Main offerings", self.main_offerings()),
            ("Pricing model", self.pricing_model()),
            ("Company size", self.company_size()),
            ("Location", self.location()),
            ("Description", self.description()),
            ("Competitors", self.competitors()),
        ];

        fields
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v)))
            .collect()
    }

    /// Share of the core fields that are filled in, in [0, 1].
    pub fn completeness(&self) -> f32 {
        let core = [
            self.name(),
            self.industry(),
            self.target_market(),
            self.value_proposition(),
            self.main_offerings(),
            self.pricing_model(),
            self.market_segment(),
            self.company_size(),
            self.location(),
        ];
        let filled = core.iter().filter(|v| v.is_some()).count();
        filled as f32 / core.len() as f32
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Splits a comma/semicolon separated free-text field into trimmed items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BusinessModel {
    B2B,
    B2C,
    B2B2C,
}

impl BusinessModel {
    pub fn all() -> [BusinessModel; 3] {
        [BusinessModel::B2B, BusinessModel::B2C, BusinessModel::B2B2C]
    }
}

impl std::fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessModel::B2B => write!(f, "B2B"),
            BusinessModel::B2C => write!(f, "B2C"),
            BusinessModel::B2B2C => write!(f, "B2B2C"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_camel_case_and_extras() {
        let json = r#"{
            "name": "Acme",
            "targetMarket": "small businesses",
            "valueProposition": "  ",
            "foundedYear": 2019
        }"#;
        let profile: CompanyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name(), Some("Acme"));
        assert_eq!(profile.target_market(), Some("small businesses"));
        assert_eq!(profile.value_proposition(), None);
        assert!(profile.extra.contains_key("foundedYear"));
    }

    #[test]
    fn test_completeness_counts_only_non_blank_core_fields() {
        let empty = CompanyProfile::default();
        assert_eq!(empty.completeness(), 0.0);

        let profile = CompanyProfile {
            name: Some("Acme".to_string()),
            industry: Some("Software".to_string()),
            location: Some("".to_string()),
            ..Default::default()
        };
        assert!((profile.completeness() - 2.0 / 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("CRM, invoicing;  payroll ,,"),
            vec!["CRM", "invoicing", "payroll"]
        );
        assert!(split_list(" , ").is_empty());
    }
}
