//! Deterministic scores attached to every generated ICP.
//!
//! Nothing here comes from the language model: the numbers are derived from how
//! much company data was supplied, how many sections the model actually filled,
//! and whether review evidence backs the profile. Every value is bounded.

use std::collections::BTreeMap;

use crate::llm::Section;
use crate::models::{AbmTier, CompanyProfile, Confidence, FitScoring, PriceSensitivity, ReviewEvidence};

const FIRMOGRAPHIC_MAX: f32 = 30.0;
const NEEDS_MAX: f32 = 30.0;
const CHANNEL_MAX: f32 = 20.0;
const EVIDENCE_MAX: f32 = 20.0;

/// Review count at which evidence volume stops adding to the score.
const EVIDENCE_SATURATION: usize = 20;

const NEEDS_SECTIONS: [Section; 6] = [
    Section::Pains,
    Section::Jobs,
    Section::Outcomes,
    Section::Triggers,
    Section::Objections,
    Section::ValueProp,
];

/// What the scorer needs to know about one build.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub profile: &'a CompanyProfile,
    pub defaulted: &'a [Section],
    /// Number of channels the model produced, zero when the section was defaulted.
    pub channel_count: usize,
    pub evidence: Option<&'a ReviewEvidence>,
}

pub fn fit_scoring(inputs: &ScoreInputs<'_>) -> FitScoring {
    let firmographic = inputs.profile.completeness().clamp(0.0, 1.0) * FIRMOGRAPHIC_MAX;

    let needs_filled = NEEDS_SECTIONS
        .iter()
        .filter(|s| !inputs.defaulted.contains(*s))
        .count();
    let needs = needs_filled as f32 / NEEDS_SECTIONS.len() as f32 * NEEDS_MAX;

    let channels = if inputs.defaulted.contains(&Section::Channels) {
        0.0
    } else {
        (inputs.channel_count.min(4) as f32 / 4.0) * CHANNEL_MAX
    };

    let evidence = match inputs.evidence.filter(|e| !e.is_empty()) {
        Some(evidence) => {
            let analysis = &evidence.analysis;
            let volume = analysis.total_reviews.min(EVIDENCE_SATURATION) as f32
                / EVIDENCE_SATURATION as f32;
            let signal = if analysis.top_pain_points.is_empty() && evidence.insights.is_empty() {
                0.0
            } else {
                1.0
            };
            volume * EVIDENCE_MAX * 0.5 + signal * EVIDENCE_MAX * 0.5
        }
        None => 0.0,
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert("firmographic_fit".to_string(), bounded(firmographic, FIRMOGRAPHIC_MAX));
    breakdown.insert("needs_alignment".to_string(), bounded(needs, NEEDS_MAX));
    breakdown.insert("channel_readiness".to_string(), bounded(channels, CHANNEL_MAX));
    breakdown.insert("evidence_strength".to_string(), bounded(evidence, EVIDENCE_MAX));

    let total: u32 = breakdown.values().map(|v| *v as u32).sum();

    FitScoring {
        score: total.min(100) as u8,
        score_breakdown: breakdown,
    }
}

fn bounded(value: f32, max: f32) -> u8 {
    if value.is_finite() {
        value.round().clamp(0.0, max) as u8
    } else {
        0
    }
}

pub fn abm_tier(score: u8) -> AbmTier {
    match score {
        75..=u8::MAX => AbmTier::Tier1,
        55..=74 => AbmTier::Tier2,
        _ => AbmTier::Tier3,
    }
}

pub fn confidence(profile: &CompanyProfile, defaulted: &[Section]) -> Confidence {
    let completeness = profile.completeness();
    match defaulted.len() {
        n if completeness >= 0.6 && n <= 2 => Confidence::High,
        n if completeness >= 0.3 && n <= 6 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

const PRICE_SENSITIVE_TERMS: &[&str] = &[
    "free", "freemium", "budget", "discount", "cheap", "low cost", "low-cost", "affordable",
    "pay as you go", "pay-as-you-go",
];

const PRICE_INSENSITIVE_TERMS: &[&str] = &[
    "enterprise", "premium", "luxury", "custom", "bespoke", "high-end", "annual contract",
];

/// Review complaints about price win over what the pricing model suggests.
pub fn price_sensitivity(profile: &CompanyProfile, evidence: Option<&ReviewEvidence>) -> PriceSensitivity {
    let price_complaints = evidence
        .map(|e| e.analysis.top_pain_points.iter().any(|p| p.item == "high prices"))
        .unwrap_or(false);
    if price_complaints {
        return PriceSensitivity::High;
    }

    let pricing = [profile.pricing_model(), profile.market_segment()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if PRICE_SENSITIVE_TERMS.iter().any(|t| pricing.contains(t)) {
        PriceSensitivity::High
    } else if PRICE_INSENSITIVE_TERMS.iter().any(|t| pricing.contains(t)) {
        PriceSensitivity::Low
    } else {
        PriceSensitivity::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchReviewAnalysis, RankedItem};

    fn full_profile() -> CompanyProfile {
        CompanyProfile {
            name: Some("Acme".to_string()),
            industry: Some("Software".to_string()),
            target_market: Some("SMBs".to_string()),
            value_proposition: Some("Faster invoicing".to_string()),
            main_offerings: Some("Invoicing app".to_string()),
            pricing_model: Some("Subscription".to_string()),
            market_segment: Some("SMB".to_string()),
            company_size: Some("50".to_string()),
            location: Some("Berlin".to_string()),
            description: Some("Invoicing for small firms".to_string()),
            ..Default::default()
        }
    }

    fn evidence(total: usize) -> ReviewEvidence {
        ReviewEvidence {
            analysis: BatchReviewAnalysis {
                total_reviews: total,
                top_pain_points: vec![RankedItem {
                    item: "high prices".to_string(),
                    count: 3,
                }],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_best_case_scores_100() {
        let profile = full_profile();
        let evidence = evidence(40);
        let scoring = fit_scoring(&ScoreInputs {
            profile: &profile,
            defaulted: &[],
            channel_count: 6,
            evidence: Some(&evidence),
        });

        assert_eq!(scoring.score, 100);
        assert_eq!(scoring.score_breakdown.len(), 4);
        assert_eq!(abm_tier(scoring.score), AbmTier::Tier1);
    }

    #[test]
    fn test_worst_case_scores_zero() {
        let profile = CompanyProfile::default();
        let scoring = fit_scoring(&ScoreInputs {
            profile: &profile,
            defaulted: &Section::ALL,
            channel_count: 0,
            evidence: None,
        });

        assert_eq!(scoring.score, 0);
        assert_eq!(abm_tier(scoring.score), AbmTier::Tier3);
    }

    #[test]
    fn test_score_is_sum_of_breakdown() {
        let profile = CompanyProfile {
            industry: Some("Retail".to_string()),
            ..Default::default()
        };
        let scoring = fit_scoring(&ScoreInputs {
            profile: &profile,
            defaulted: &[Section::Pains, Section::Channels],
            channel_count: 0,
            evidence: None,
        });

        let sum: u32 = scoring.score_breakdown.values().map(|v| *v as u32).sum();
        assert_eq!(scoring.score as u32, sum);
        assert_eq!(scoring.score_breakdown["channel_readiness"], 0);
        assert_eq!(scoring.score_breakdown["needs_alignment"], 25);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(abm_tier(75), AbmTier::Tier1);
        assert_eq!(abm_tier(74), AbmTier::Tier2);
        assert_eq!(abm_tier(55), AbmTier::Tier2);
        assert_eq!(abm_tier(54), AbmTier::Tier3);
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(confidence(&full_profile(), &[]), Confidence::High);
        assert_eq!(
            confidence(&full_profile(), &[Section::Pains, Section::Jobs, Section::Content]),
            Confidence::Medium
        );
        assert_eq!(confidence(&CompanyProfile::default(), &[]), Confidence::Low);
    }

    #[test]
    fn test_price_sensitivity() {
        let mut profile = CompanyProfile {
            pricing_model: Some("Freemium with paid tiers".to_string()),
            ..Default::default()
        };
        assert_eq!(price_sensitivity(&profile, None), PriceSensitivity::High);

        profile.pricing_model = Some("Enterprise annual contract".to_string());
        assert_eq!(price_sensitivity(&profile, None), PriceSensitivity::Low);
        assert_eq!(
            price_sensitivity(&profile, Some(&evidence(5))),
            PriceSensitivity::High
        );

        profile.pricing_model = None;
        assert_eq!(price_sensitivity(&profile, None), PriceSensitivity::Medium);
    }
}
