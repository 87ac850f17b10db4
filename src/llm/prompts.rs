use crate::llm::parser::Section;
use crate::models::{
    BusinessModel, CompanyProfile, ICPTemplate, RankedItem, ReviewEvidence, TemplateCategory,
};
use crate::reviews::analyzer::rank;

pub const SELECTION_SYSTEM_PROMPT: &str = r#"You are a B2B and B2C go-to-market strategist.
You choose which ideal customer profile templates best fit a company.
Respond with a JSON array of template ids and nothing else."#;

pub const ICP_SYSTEM_PROMPT: &str = r#"You are a senior marketing strategist writing Ideal Customer Profiles.

Output policy:
- Plain text only. No markdown, no bold, no headings, no numbering.
- Write one line per section, starting with the exact prefix given (for example "PAINS:").
- List sections contain 2 to 4 short items separated by commas. Do not use commas inside an item.
- VALUE_PROP contains exactly one sentence.
- Use a single language for the whole answer.
- Do not add any line that does not start with one of the requested prefixes."#;

/// Prompt asking the model to pick three templates out of a business model's catalog.
#[derive(Debug, Clone)]
pub struct SelectionRequest<'a> {
    pub profile: &'a CompanyProfile,
    pub business_model: BusinessModel,
    pub groups: Vec<(TemplateCategory, Vec<&'static ICPTemplate>)>,
}

impl SelectionRequest<'_> {
    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "Select the 3 Ideal Customer Profile templates that best fit {} ({} business model).\n\n",
            self.profile.display_name(),
            self.business_model
        );

        push_company_block(&mut prompt, self.profile);

        prompt.push_str("\nAvailable templates:\n");
        for (category, templates) in &self.groups {
            prompt.push_str(&format!("\n## {}\n", category));
            for template in templates {
                prompt.push_str(&format!(
                    "- {}: {} ({})\n",
                    template.id, template.name, template.description
                ));
            }
        }

        prompt.push_str(
            "\nReturn ONLY a JSON array with exactly 3 template ids from the list above, \
             most relevant first. Example: [\"id_one\", \"id_two\", \"id_three\"]\n",
        );
        prompt
    }
}

/// Prompt asking the model to write the sections of one ICP.
#[derive(Debug, Clone)]
pub struct IcpRequest<'a> {
    pub profile: &'a CompanyProfile,
    pub template: &'a ICPTemplate,
    pub business_model: BusinessModel,
    pub evidence: Option<&'a ReviewEvidence>,
}

impl IcpRequest<'_> {
    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "Write an Ideal Customer Profile for {} based on the template \"{}\".\n\
             Template description: {}\n\
             Business model: {}\n\n",
            self.profile.display_name(),
            self.template.name,
            self.template.description,
            self.business_model
        );

        push_company_block(&mut prompt, self.profile);

        if let Some(evidence) = self.evidence.filter(|e| !e.is_empty()) {
            push_evidence_block(&mut prompt, evidence);
        }

        prompt.push_str("\nAnswer with exactly these lines, in this order:\n");
        for section in Section::ALL {
            prompt.push_str(&format!("{}: {}\n", section.prefix(), section_hint(section)));
        }

        prompt
    }

    pub fn estimate_tokens(&self) -> usize {
        // Rough estimate: ~4 characters per token
        self.to_prompt().len() / 4
    }
}

fn section_hint(section: Section) -> &'static str {
    match section {
        Section::Segments => "customer segments this profile covers",
        Section::Personas => "job titles or persona labels, most senior decision maker first",
        Section::Pains => "main pains and frustrations",
        Section::Jobs => "jobs to be done",
        Section::Outcomes => "desired outcomes",
        Section::Triggers => "events that trigger a purchase",
        Section::Objections => "common objections before buying",
        Section::ValueProp => "one sentence value proposition for this profile",
        Section::Features => "product features that matter most to them",
        Section::Advantages => "competitive advantages versus alternatives",
        Section::Channels => "marketing channels where they can be reached",
        Section::Messages => "key marketing messages",
        Section::Content => "content ideas",
    }
}

fn push_company_block(prompt: &mut String, profile: &CompanyProfile) {
    let fields = profile.labeled_fields();
    if fields.is_empty() {
        prompt.push_str("Company data: (none provided)\n");
        return;
    }

    prompt.push_str("Company data:\n");
    for (label, value) in fields {
        prompt.push_str(&format!("- {}: {}\n", label, value));
    }
    for (key, value) in &profile.extra {
        let rendered = match value {
            serde_json::Value::String(s) => s.trim().to_string(),
            serde_json::Value::Null => continue,
            other => other.to_string(),
        };
        if !rendered.is_empty() {
            prompt.push_str(&format!("- {}: {}\n", key, rendered));
        }
    }
}

fn join_ranked(items: &[RankedItem]) -> String {
    items
        .iter()
        .take(5)
        .map(|r| format!("{} ({})", r.item, r.count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_evidence_block(prompt: &mut String, evidence: &ReviewEvidence) {
    let analysis = &evidence.analysis;
    let dist = &analysis.sentiment_distribution;

    prompt.push_str(&format!(
        "\nCustomer review evidence ({} reviews: {} positive, {} negative, {} neutral",
        analysis.total_reviews, dist.positive, dist.negative, dist.neutral
    ));
    if let Some(avg) = analysis.average_rating {
        prompt.push_str(&format!(", average rating {:.1}", avg));
    }
    prompt.push_str("):\n");

    if !analysis.top_pain_points.is_empty() {
        prompt.push_str(&format!(
            "- Pain points mentioned: {}\n",
            join_ranked(&analysis.top_pain_points)
        ));
    }
    if !analysis.top_topics.is_empty() {
        prompt.push_str(&format!("- Topics: {}\n", join_ranked(&analysis.top_topics)));
    }
    if !analysis.customer_segments.is_empty() {
        let segments = rank(analysis.customer_segments.clone(), usize::MAX);
        prompt.push_str(&format!("- Reviewer segments: {}\n", join_ranked(&segments)));
    }

    let insights = &evidence.insights;
    let lines = [
        ("Demographics", &insights.demographics),
        ("Psychographics", &insights.psychographics),
        ("Goals", &insights.goals),
        ("Preferred channels", &insights.preferred_channels),
        ("Purchasing behavior", &insights.purchasing_behavior),
    ];
    for (label, values) in lines {
        if !values.is_empty() {
            prompt.push_str(&format!("- {}: {}\n", label, values.join(", ")));
        }
    }

    for insight in analysis.top_insights.iter().take(3) {
        prompt.push_str(&format!("- Quote: \"{}\"\n", insight.item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateCatalog;
    use crate::models::{BatchReviewAnalysis, ICPInsights, SentimentDistribution};

    fn profile() -> CompanyProfile {
        CompanyProfile {
            name: Some("Brightdesk".to_string()),
            industry: Some("Software".to_string()),
            target_market: Some("small businesses".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_prompt_lists_whole_catalog_by_category() {
        let catalog = TemplateCatalog::new();
        let profile = profile();
        let request = SelectionRequest {
            profile: &profile,
            business_model: BusinessModel::B2B,
            groups: catalog.grouped(BusinessModel::B2B),
        };
        let prompt = request.to_prompt();

        for template in catalog.templates(BusinessModel::B2B) {
            assert!(prompt.contains(template.id), "missing {}", template.id);
        }
        assert!(prompt.contains("## Enterprise"));
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("Brightdesk"));
    }

    #[test]
    fn test_icp_prompt_requests_every_prefix() {
        let profile = profile();
        let template = &TemplateCatalog::new().templates(BusinessModel::B2B)[0];
        let request = IcpRequest {
            profile: &profile,
            template,
            business_model: BusinessModel::B2B,
            evidence: None,
        };
        let prompt = request.to_prompt();

        for section in Section::ALL {
            assert!(prompt.contains(&format!("{}:", section.prefix())));
        }
        assert!(!prompt.contains("Customer review evidence"));
    }

    #[test]
    fn test_icp_prompt_includes_review_evidence() {
        let profile = profile();
        let template = &TemplateCatalog::new().templates(BusinessModel::B2C)[0];
        let evidence = ReviewEvidence {
            analysis: BatchReviewAnalysis {
                total_reviews: 4,
                sentiment_distribution: SentimentDistribution {
                    positive: 3,
                    negative: 1,
                    neutral: 0,
                },
                average_rating: Some(4.25),
                rated_reviews: 4,
                top_pain_points: vec![RankedItem {
                    item: "long wait times".to_string(),
                    count: 2,
                }],
                ..Default::default()
            },
            insights: ICPInsights {
                preferred_channels: vec!["instagram".to_string()],
                ..Default::default()
            },
        };
        let request = IcpRequest {
            profile: &profile,
            template,
            business_model: BusinessModel::B2C,
            evidence: Some(&evidence),
        };
        let prompt = request.to_prompt();

        assert!(prompt.contains("4 reviews: 3 positive, 1 negative, 0 neutral"));
        assert!(prompt.contains("average rating 4.2") || prompt.contains("average rating 4.3"));
        assert!(prompt.contains("long wait times (2)"));
        assert!(prompt.contains("Preferred channels: instagram"));
    }
}
