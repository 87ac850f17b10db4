use crate::models::{ICPTemplate, TemplateCategory};

use TemplateCategory::*;

pub(super) const TEMPLATES: &[ICPTemplate] = &[
    // Platform
    ICPTemplate {
        id: "b2b2c_marketplace_seller",
        name: "Marketplace Seller",
        description: "Business selling to consumers through a marketplace it does not control.",
        category: Platform,
    },
    ICPTemplate {
        id: "b2b2c_platform_end_user",
        name: "Platform End User",
        description: "Consumer who experiences the product through a partner's app or storefront.",
        category: Platform,
    },
    ICPTemplate {
        id: "b2b2c_franchise_network",
        name: "Franchise Network",
        description: "Franchisor and franchisees sharing a brand while serving local consumers.",
        category: Platform,
    },
    ICPTemplate {
        id: "b2b2c_app_partner",
        name: "Embedded Integration Partner",
        description: "Software company embedding the offering inside its own consumer product.",
        category: Platform,
    },
    ICPTemplate {
        id: "b2b2c_channel_reseller",
        name: "Channel Reseller",
        description: "Retailer or distributor reselling to consumers under its own relationship.",
        category: Platform,
    },
    // Hybrid
    ICPTemplate {
        id: "b2b2c_employee_benefits",
        name: "Employee Benefits Buyer",
        description: "Employer buying for staff, where employees are the everyday users.",
        category: Hybrid,
    },
    ICPTemplate {
        id: "b2b2c_white_label_brand",
        name: "White-Label Brand",
        description: "Brand selling the product to consumers under its own label.",
        category: Hybrid,
    },
    ICPTemplate {
        id: "b2b2c_insurance_bundle",
        name: "Bundled Service Provider",
        description: "Insurer, telco or bank bundling the offering into consumer plans.",
        category: Hybrid,
    },
    ICPTemplate {
        id: "b2b2c_prosumer",
        name: "Prosumer Freelancer",
        description: "Independent professional who buys like a consumer but uses it for business.",
        category: Hybrid,
    },
    ICPTemplate {
        id: "b2b2c_community_organizer",
        name: "Community Organizer",
        description: "Club, school or association buying on behalf of its members.",
        category: Hybrid,
    },
];
