use crate::models::{ICPTemplate, TemplateCategory};

use TemplateCategory::*;

pub(super) const TEMPLATES: &[ICPTemplate] = &[
    // Demographic
    ICPTemplate {
        id: "b2c_young_professional",
        name: "Young Urban Professional",
        description: "25-35 year old city dweller with disposable income and little free time.",
        category: Demographic,
    },
    ICPTemplate {
        id: "b2c_young_family",
        name: "Young Family",
        description: "Parents of young children optimizing for convenience, safety and value.",
        category: Demographic,
    },
    ICPTemplate {
        id: "b2c_student",
        name: "Student",
        description: "High-school or university student, budget-constrained and mobile-first.",
        category: Demographic,
    },
    ICPTemplate {
        id: "b2c_empty_nester",
        name: "Empty Nester",
        description: "50+ adult whose children have left home, with time and money for new interests.",
        category: Demographic,
    },
    ICPTemplate {
        id: "b2c_retiree",
        name: "Active Retiree",
        description: "Retired consumer valuing trust, personal service and clear communication.",
        category: Demographic,
    },
    // Lifestyle
    ICPTemplate {
        id: "b2c_health_enthusiast",
        name: "Health & Fitness Enthusiast",
        description: "Consumer who plans purchases around training, nutrition and wellbeing.",
        category: Lifestyle,
    },
    ICPTemplate {
        id: "b2c_eco_conscious",
        name: "Eco-Conscious Consumer",
        description: "Buyer who favors sustainable, ethical and local brands and pays a premium for them.",
        category: Lifestyle,
    },
    ICPTemplate {
        id: "b2c_foodie",
        name: "Food & Experience Seeker",
        description: "Consumer who spends on dining, travel and memorable experiences.",
        category: Lifestyle,
    },
    ICPTemplate {
        id: "b2c_pet_owner",
        name: "Devoted Pet Owner",
        description: "Treats pets as family and buys premium products and services for them.",
        category: Lifestyle,
    },
    ICPTemplate {
        id: "b2c_home_improver",
        name: "Home Improver",
        description: "Homeowner investing in renovation, decoration and DIY projects.",
        category: Lifestyle,
    },
    // Behavioral
    ICPTemplate {
        id: "b2c_bargain_hunter",
        name: "Bargain Hunter",
        description: "Price-driven shopper who compares options and waits for promotions.",
        category: Behavioral,
    },
    ICPTemplate {
        id: "b2c_loyal_regular",
        name: "Loyal Regular",
        description: "Repeat customer who returns out of habit and responds to loyalty rewards.",
        category: Behavioral,
    },
    ICPTemplate {
        id: "b2c_premium_buyer",
        name: "Premium Quality Seeker",
        description: "Buyer who pays more for quality, craftsmanship and exclusivity.",
        category: Behavioral,
    },
    ICPTemplate {
        id: "b2c_convenience_seeker",
        name: "Convenience Seeker",
        description: "Time-poor consumer who buys whatever is fastest and easiest.",
        category: Behavioral,
    },
    ICPTemplate {
        id: "b2c_early_adopter",
        name: "Early Adopter",
        description: "Trend-aware consumer who tries new products first and shares them socially.",
        category: Behavioral,
    },
    // Specialized
    ICPTemplate {
        id: "b2c_tourist",
        name: "Visiting Tourist",
        description: "Short-term visitor relying on reviews and maps to choose where to spend.",
        category: Specialized,
    },
    ICPTemplate {
        id: "b2c_gift_buyer",
        name: "Occasion Gift Buyer",
        description: "Shopper buying for someone else around holidays and life events.",
        category: Specialized,
    },
    ICPTemplate {
        id: "b2c_hobbyist",
        name: "Dedicated Hobbyist",
        description: "Enthusiast with deep product knowledge in a specific hobby or craft.",
        category: Specialized,
    },
    ICPTemplate {
        id: "b2c_accessibility_needs",
        name: "Consumer With Accessibility Needs",
        description: "Customer whose choices depend on accessible products, spaces and service.",
        category: Specialized,
    },
];
