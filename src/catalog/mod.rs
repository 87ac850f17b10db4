mod b2b;
mod b2b2c;
mod b2c;

use crate::models::{BusinessModel, ICPTemplate, TemplateCategory};

/// The fixed set of persona templates, one list per business model.
///
/// Lists are static and ordered; that order is what the selector pads from.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCatalog;

impl TemplateCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn templates(&self, model: BusinessModel) -> &'static [ICPTemplate] {
        match model {
            BusinessModel::B2B => b2b::TEMPLATES,
            BusinessModel::B2C => b2c::TEMPLATES,
            BusinessModel::B2B2C => b2b2c::TEMPLATES,
        }
    }

    pub fn find(&self, model: BusinessModel, id: &str) -> Option<&'static ICPTemplate> {
        let id = id.trim();
        self.templates(model)
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Templates grouped by category, categories in order of first appearance.
    pub fn grouped(
        &self,
        model: BusinessModel,
    ) -> Vec<(TemplateCategory, Vec<&'static ICPTemplate>)> {
        let mut groups: Vec<(TemplateCategory, Vec<&'static ICPTemplate>)> = Vec::new();

        for template in self.templates(model) {
            match groups.iter_mut().find(|(c, _)| *c == template.category) {
                Some((_, members)) => members.push(template),
                None => groups.push((template.category, vec![template])),
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_model_has_enough_templates() {
        let catalog = TemplateCatalog::new();
        for model in BusinessModel::all() {
            assert!(
                catalog.templates(model).len() >= 3,
                "{} catalog too small",
                model
            );
        }
    }

    #[test]
    fn test_ids_unique_across_catalog() {
        let catalog = TemplateCatalog::new();
        let mut seen = HashSet::new();
        for model in BusinessModel::all() {
            for template in catalog.templates(model) {
                assert!(seen.insert(template.id), "duplicate id {}", template.id);
                assert!(!template.name.is_empty());
                assert!(!template.description.is_empty());
            }
        }
    }

    #[test]
    fn test_find_is_scoped_to_model() {
        let catalog = TemplateCatalog::new();
        assert!(catalog.find(BusinessModel::B2B, "b2b_smb_owner").is_some());
        assert!(catalog.find(BusinessModel::B2B, " B2B_SMB_OWNER ").is_some());
        assert!(catalog.find(BusinessModel::B2C, "b2b_smb_owner").is_none());
        assert!(catalog.find(BusinessModel::B2B2C, "made_up").is_none());
    }

    #[test]
    fn test_grouping_preserves_catalog_order() {
        let catalog = TemplateCatalog::new();
        let groups = catalog.grouped(BusinessModel::B2B);
        let categories: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                TemplateCategory::Startup,
                TemplateCategory::Smb,
                TemplateCategory::MidMarket,
                TemplateCategory::Enterprise,
                TemplateCategory::IndustrySpecific,
            ]
        );
        let total: usize = groups.iter().map(|(_, m)| m.len()).sum();
        assert_eq!(total, catalog.templates(BusinessModel::B2B).len());
    }
}
