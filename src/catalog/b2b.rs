use crate::models::{ICPTemplate, TemplateCategory};

use TemplateCategory::*;

pub(super) const TEMPLATES: &[ICPTemplate] = &[
    // Startups
    ICPTemplate {
        id: "b2b_seed_startup",
        name: "Seed-Stage Startup Founder",
        description: "Founding team of a pre-product-market-fit company buying tools that replace a hire.",
        category: Startup,
    },
    ICPTemplate {
        id: "b2b_scaling_startup",
        name: "Venture-Backed Scale-Up",
        description: "Series A-C company adding process and tooling to support rapid headcount growth.",
        category: Startup,
    },
    ICPTemplate {
        id: "b2b_technical_founder",
        name: "Technical Founder",
        description: "Engineer-founder who evaluates products hands-on and prefers self-serve buying.",
        category: Startup,
    },
    ICPTemplate {
        id: "b2b_startup_ops_lead",
        name: "Startup Operations Lead",
        description: "First operations hire owning finance, HR and vendor management at once.",
        category: Startup,
    },
    // Small & medium businesses
    ICPTemplate {
        id: "b2b_smb_owner",
        name: "Owner-Operated Small Business",
        description: "Owner makes every purchase decision personally and values simplicity and price.",
        category: Smb,
    },
    ICPTemplate {
        id: "b2b_local_services",
        name: "Local Service Business",
        description: "Trades, clinics or agencies serving a local area that depend on bookings and referrals.",
        category: Smb,
    },
    ICPTemplate {
        id: "b2b_smb_office_manager",
        name: "SMB Office Manager",
        description: "Generalist administrator who researches vendors and recommends purchases to the owner.",
        category: Smb,
    },
    ICPTemplate {
        id: "b2b_growing_smb",
        name: "Growing Multi-Location SMB",
        description: "Business opening its second or third location and outgrowing spreadsheets.",
        category: Smb,
    },
    ICPTemplate {
        id: "b2b_professional_firm",
        name: "Professional Services Firm",
        description: "Accounting, legal or consulting practice selling billable expertise.",
        category: Smb,
    },
    // Mid-market
    ICPTemplate {
        id: "b2b_midmarket_department_head",
        name: "Mid-Market Department Head",
        description: "Director owning a budget line who needs to show measurable departmental results.",
        category: MidMarket,
    },
    ICPTemplate {
        id: "b2b_midmarket_it_buyer",
        name: "Mid-Market IT Buyer",
        description: "IT manager consolidating tools under security, integration and support requirements.",
        category: MidMarket,
    },
    ICPTemplate {
        id: "b2b_revenue_team",
        name: "Revenue Operations Team",
        description: "Sales and marketing operations group optimizing pipeline efficiency.",
        category: MidMarket,
    },
    ICPTemplate {
        id: "b2b_midmarket_finance",
        name: "Mid-Market Finance Leader",
        description: "Controller or CFO focused on cost control, forecasting and audit readiness.",
        category: MidMarket,
    },
    // Enterprise
    ICPTemplate {
        id: "b2b_enterprise_executive",
        name: "Enterprise Executive Sponsor",
        description: "VP or C-level sponsor of a strategic initiative with multi-year budget authority.",
        category: Enterprise,
    },
    ICPTemplate {
        id: "b2b_enterprise_procurement",
        name: "Enterprise Procurement",
        description: "Procurement and vendor-risk teams running formal RFPs and compliance reviews.",
        category: Enterprise,
    },
    ICPTemplate {
        id: "b2b_enterprise_innovation",
        name: "Enterprise Innovation Team",
        description: "Digital transformation group piloting new vendors before broad rollout.",
        category: Enterprise,
    },
    ICPTemplate {
        id: "b2b_global_operations",
        name: "Global Operations Leader",
        description: "Leader standardizing processes across regions, languages and regulatory regimes.",
        category: Enterprise,
    },
    // Industry-specific
    ICPTemplate {
        id: "b2b_manufacturing_plant",
        name: "Manufacturing Plant Manager",
        description: "Plant or production manager focused on uptime, throughput and safety.",
        category: IndustrySpecific,
    },
    ICPTemplate {
        id: "b2b_healthcare_provider",
        name: "Healthcare Provider Organization",
        description: "Clinic or hospital administrator balancing patient outcomes with compliance.",
        category: IndustrySpecific,
    },
    ICPTemplate {
        id: "b2b_retail_chain",
        name: "Retail Chain Operator",
        description: "Multi-store retailer managing inventory, staffing and omnichannel sales.",
        category: IndustrySpecific,
    },
    ICPTemplate {
        id: "b2b_logistics_provider",
        name: "Logistics & Distribution Provider",
        description: "Carrier, 3PL or distributor optimizing routes, warehouses and delivery times.",
        category: IndustrySpecific,
    },
    ICPTemplate {
        id: "b2b_financial_institution",
        name: "Financial Institution",
        description: "Bank, credit union or fintech operating under strict regulatory oversight.",
        category: IndustrySpecific,
    },
    ICPTemplate {
        id: "b2b_education_institution",
        name: "Education Institution",
        description: "School, university or training provider buying on academic calendars.",
        category: IndustrySpecific,
    },
];
