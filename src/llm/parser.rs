use crate::error::{Error, Result};

/// Pulls the template-id array out of a selection response.
///
/// Takes the first bracket-delimited array that parses as JSON after code fences,
/// stray backticks and leading bullet markers are stripped. Non-string entries are
/// skipped; objects contribute their `id` field.
pub fn extract_id_array(response: &str) -> Result<Vec<String>> {
    let cleaned = strip_code_fences(response);

    let mut offset = 0;
    while let Some((start, end)) = find_bracketed(&cleaned[offset..]) {
        let candidate = strip_bullets(&cleaned[offset + start..offset + end]);

        if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(&candidate) {
            return Ok(values
                .into_iter()
                .filter_map(|v| match v {
                    serde_json::Value::String(s) => Some(s.trim().to_string()),
                    serde_json::Value::Object(map) => map
                        .get("id")
                        .and_then(|id| id.as_str())
                        .map(|s| s.trim().to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect());
        }

        offset += start + 1;
    }

    Err(Error::selection(
        "No parseable JSON array of template ids in response",
    ))
}

fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .replace('`', "")
}

fn strip_bullets(array_text: &str) -> String {
    array_text
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
                .or_else(|| trimmed.strip_prefix("• "))
                .unwrap_or(trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte range of the first `[...]` span, honoring nesting and JSON strings.
fn find_bracketed(text: &str) -> Option<(usize, usize)> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, start + i + 1));
                }
            }
            _ => {}
        }
    }

    None
}

/// The line-prefixed sections an ICP response is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Segments,
    Personas,
    Pains,
    Jobs,
    Outcomes,
    Triggers,
    Objections,
    ValueProp,
    Features,
    Advantages,
    Channels,
    Messages,
    Content,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::Segments,
        Section::Personas,
        Section::Pains,
        Section::Jobs,
        Section::Outcomes,
        Section::Triggers,
        Section::Objections,
        Section::ValueProp,
        Section::Features,
        Section::Advantages,
        Section::Channels,
        Section::Messages,
        Section::Content,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            Section::Segments => "SEGMENTS",
            Section::Personas => "PERSONAS",
            Section::Pains => "PAINS",
            Section::Jobs => "JOBS",
            Section::Outcomes => "OUTCOMES",
            Section::Triggers => "TRIGGERS",
            Section::Objections => "OBJECTIONS",
            Section::ValueProp => "VALUE_PROP",
            Section::Features => "FEATURES",
            Section::Advantages => "ADVANTAGES",
            Section::Channels => "CHANNELS",
            Section::Messages => "MESSAGES",
            Section::Content => "CONTENT",
        }
    }

    pub fn is_list(&self) -> bool {
        !matches!(self, Section::ValueProp)
    }

    fn from_key(key: &str) -> Option<Section> {
        let normalized = key
            .trim()
            .trim_matches('*')
            .trim()
            .to_uppercase()
            .replace([' ', '-'], "_");

        match normalized.as_str() {
            "SEGMENTS" => Some(Section::Segments),
            "PERSONAS" | "BUYER_PERSONAS" => Some(Section::Personas),
            "PAINS" | "PAIN_POINTS" => Some(Section::Pains),
            "JOBS" | "JOBS_TO_BE_DONE" => Some(Section::Jobs),
            "OUTCOMES" | "DESIRED_OUTCOMES" => Some(Section::Outcomes),
            "TRIGGERS" | "BUYING_TRIGGERS" => Some(Section::Triggers),
            "OBJECTIONS" => Some(Section::Objections),
            "VALUE_PROP" | "VALUE_PROPOSITION" => Some(Section::ValueProp),
            "FEATURES" | "UNIQUE_FEATURES" => Some(Section::Features),
            "ADVANTAGES" | "COMPETITIVE_ADVANTAGES" => Some(Section::Advantages),
            "CHANNELS" => Some(Section::Channels),
            "MESSAGES" => Some(Section::Messages),
            "CONTENT" | "CONTENT_IDEAS" => Some(Section::Content),
            _ => None,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

const MAX_ITEMS_PER_SECTION: usize = 8;

/// Raw sections as found in the response. Any of them may be empty.
#[derive(Debug, Clone, Default)]
pub struct ParsedSections {
    lists: std::collections::HashMap<Section, Vec<String>>,
    value_prop: Option<String>,
}

impl ParsedSections {
    /// Scans `text` line by line. Never fails; unknown lines are ignored.
    pub fn parse(text: &str) -> Self {
        let mut parsed = ParsedSections::default();

        for line in text.lines() {
            let line = line
                .trim()
                .trim_start_matches(|c: char| matches!(c, '-' | '*' | '•' | '#' | '>'))
                .trim_start();

            let Some((key, rest)) = line.split_once(':') else {
                continue;
            };
            let Some(section) = Section::from_key(key) else {
                continue;
            };
            let rest = rest.trim().trim_matches('*').trim();

            if section.is_list() {
                if parsed.list(section).is_empty() {
                    let items = split_items(rest);
                    if !items.is_empty() {
                        parsed.lists.insert(section, items);
                    }
                }
            } else if parsed.value_prop.is_none() {
                let sentence = rest.trim_matches(|c: char| c == '"' || c == '\'').trim();
                if !sentence.is_empty() {
                    parsed.value_prop = Some(sentence.to_string());
                }
            }
        }

        parsed
    }

    pub fn list(&self, section: Section) -> &[String] {
        self.lists.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn value_prop(&self) -> Option<&str> {
        self.value_prop.as_deref()
    }

    /// Fills every empty section from `defaults`, recording which ones needed it.
    pub fn resolve(self, defaults: &SectionDefaults) -> IcpSections {
        let mut defaulted = Vec::new();
        let mut lists = self.lists;

        for section in Section::ALL.iter().filter(|s| s.is_list()) {
            let has_items = lists.get(section).map(|v| !v.is_empty()).unwrap_or(false);
            if !has_items {
                defaulted.push(*section);
                lists.insert(*section, defaults.list(*section));
            }
        }

        let value_prop = match self.value_prop {
            Some(v) => v,
            None => {
                defaulted.push(Section::ValueProp);
                defaults.value_prop.clone()
            }
        };

        IcpSections {
            lists,
            value_prop,
            defaulted,
        }
    }
}

fn split_items(rest: &str) -> Vec<String> {
    rest.split(',')
        .map(|item| {
            item.trim()
                .trim_matches(|c: char| c == '"' || c == '\'' || c == '*')
                .trim_end_matches('.')
                .trim()
        })
        .filter(|item| !item.is_empty())
        .take(MAX_ITEMS_PER_SECTION)
        .map(str::to_string)
        .collect()
}

/// Deterministic fallback content for each section. Every list must be non-empty.
#[derive(Debug, Clone)]
pub struct SectionDefaults {
    pub lists: std::collections::HashMap<Section, Vec<String>>,
    pub value_prop: String,
}

impl SectionDefaults {
    fn list(&self, section: Section) -> Vec<String> {
        match self.lists.get(&section) {
            Some(items) if !items.is_empty() => items.clone(),
            _ => vec![format!("Not enough data ({})", section.prefix().to_lowercase())],
        }
    }
}

/// Fully populated sections: every list non-empty, value prop present.
#[derive(Debug, Clone)]
pub struct IcpSections {
    lists: std::collections::HashMap<Section, Vec<String>>,
    value_prop: String,
    defaulted: Vec<Section>,
}

impl IcpSections {
    pub fn take(&mut self, section: Section) -> Vec<String> {
        self.lists.remove(&section).unwrap_or_default()
    }

    pub fn value_prop(&self) -> &str {
        &self.value_prop
    }

    pub fn defaulted(&self) -> &[Section] {
        &self.defaulted
    }

    pub fn parsed_count(&self) -> usize {
        Section::ALL.len() - self.defaulted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn defaults() -> SectionDefaults {
        let mut lists = HashMap::new();
        for section in Section::ALL.iter().filter(|s| s.is_list()) {
            lists.insert(*section, vec![format!("default {}", section)]);
        }
        SectionDefaults {
            lists,
            value_prop: "default value prop".to_string(),
        }
    }

    #[test]
    fn test_extract_plain_array() {
        let ids = extract_id_array(r#"["a", "b", "c"]"#).unwrap();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extract_array_from_fenced_block_with_prose() {
        let input = "Sure! Here are my picks:\n```json\n[\"b2b_smb_owner\", \"b2b_revenue_team\"]\n```\nHope this helps.";
        let ids = extract_id_array(input).unwrap();
        assert_eq!(ids, vec!["b2b_smb_owner", "b2b_revenue_team"]);
    }

    #[test]
    fn test_extract_array_with_bullets_and_backticks() {
        let input = "[\n- \"`first`\",\n* \"second\"\n]";
        let ids = extract_id_array(input).unwrap();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_extract_skips_non_json_brackets() {
        let input = "[Note] choose wisely: [\"x\", {\"id\": \"y\"}, 3]";
        let ids = extract_id_array(input).unwrap();
        assert_eq!(ids, vec!["x", "y"]);
    }

    #[test]
    fn test_extract_fails_without_array() {
        assert!(matches!(
            extract_id_array("I think the best templates are SMB owner and retiree."),
            Err(Error::TemplateSelection { .. })
        ));
        assert!(extract_id_array("").is_err());
        assert!(extract_id_array("[\"unterminated\"").is_err());
    }

    #[test]
    fn test_parse_sections_reads_prefixed_lines() {
        let text = "SEGMENTS: Dental clinics, Physiotherapy practices\n\
                    PAINS: No-shows ,  manual scheduling, ,\n\
                    VALUE_PROP: Fill every chair without extra staff.\n\
                    random chatter line\n\
                    **CHANNELS:** LinkedIn, Industry newsletters";
        let parsed = ParsedSections::parse(text);
        assert_eq!(
            parsed.list(Section::Segments),
            &["Dental clinics", "Physiotherapy practices"]
        );
        assert_eq!(parsed.list(Section::Pains), &["No-shows", "manual scheduling"]);
        assert_eq!(
            parsed.value_prop(),
            Some("Fill every chair without extra staff.")
        );
        assert_eq!(
            parsed.list(Section::Channels),
            &["LinkedIn", "Industry newsletters"]
        );
        assert!(parsed.list(Section::Jobs).is_empty());
    }

    #[test]
    fn test_first_non_empty_occurrence_wins() {
        let text = "PAINS:\nPAINS: late payments\nPAINS: churn";
        let parsed = ParsedSections::parse(text);
        assert_eq!(parsed.list(Section::Pains), &["late payments"]);
    }

    #[test]
    fn test_resolve_fills_every_empty_section() {
        let mut sections = ParsedSections::parse("").resolve(&defaults());
        assert_eq!(sections.defaulted().len(), Section::ALL.len());
        assert_eq!(sections.parsed_count(), 0);
        assert_eq!(sections.value_prop(), "default value prop");
        for section in Section::ALL.iter().filter(|s| s.is_list()) {
            assert!(!sections.take(*section).is_empty(), "{} empty", section);
        }
    }

    #[test]
    fn test_resolve_keeps_parsed_sections() {
        let mut sections =
            ParsedSections::parse("JOBS: Close the books faster").resolve(&defaults());
        assert!(!sections.defaulted().contains(&Section::Jobs));
        assert!(sections.defaulted().contains(&Section::Pains));
        assert_eq!(sections.take(Section::Jobs), vec!["Close the books faster"]);
    }

    #[test]
    fn test_missing_default_still_non_empty() {
        let empty_defaults = SectionDefaults {
            lists: HashMap::new(),
            value_prop: "vp".to_string(),
        };
        let mut sections = ParsedSections::parse("").resolve(&empty_defaults);
        assert!(!sections.take(Section::Triggers).is_empty());
    }
}
