//! Copy and figures shown on the landing page. Positions in these slices
//! are the identities the components key on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Calendar,
    Message,
    Shield,
    CreditCard,
    LineChart,
    Wand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price: u32,
    pub highlighted: bool,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStat {
    pub icon: FeatureIcon,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const BRAND: &str = "SmilesCloud";

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Is my data secure and HIPAA compliant?",
        answer: "Yes. We use encryption in transit and at rest, role-based access controls, and maintain detailed audit logs. Our infrastructure aligns with HIPAA best practices.",
    },
    FaqEntry {
        question: "Can I migrate from my existing system?",
        answer: "Absolutely. Our team assists with secure imports of patients, appointments, and billing history. Most practices are fully migrated in a few days.",
    },
    FaqEntry {
        question: "How does the free trial work?",
        answer: "You get 14 days with all features enabled. No credit card is required. You can invite teammates and test automations without limits.",
    },
    FaqEntry {
        question: "Do you offer support and training?",
        answer: "Yes. Live chat and email support is included on all plans. Growth and Scale plans include onboarding sessions and priority support.",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Calendar,
        title: "Smart scheduling",
        description: "Auto-fill cancellations, handle waitlists, and reduce no-shows with AI reminders.",
    },
    Feature {
        icon: FeatureIcon::Message,
        title: "Patient messaging",
        description: "Two-way SMS, confirmations, and feedback forms, all in one place.",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "HIPAA-ready security",
        description: "Enterprise-grade encryption and audit logs keep your data safe.",
    },
    Feature {
        icon: FeatureIcon::CreditCard,
        title: "Frictionless billing",
        description: "Send invoices, take payments, and reconcile with a click.",
    },
    Feature {
        icon: FeatureIcon::LineChart,
        title: "Realtime insights",
        description: "Track growth, chair utilization, and production at a glance.",
    },
    Feature {
        icon: FeatureIcon::Wand,
        title: "Automation studio",
        description: "Drag-and-drop workflows that work while you sleep.",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        monthly_price: 29,
        highlighted: false,
        features: &["1000 SMS reminders/mo", "Online booking", "Basic analytics"],
    },
    PricingTier {
        name: "Growth",
        monthly_price: 79,
        highlighted: true,
        features: &[
            "Unlimited reminders",
            "Automation studio",
            "Advanced analytics",
            "Priority support",
        ],
    },
    PricingTier {
        name: "Scale",
        monthly_price: 149,
        highlighted: false,
        features: &["All Growth features", "Custom roles & SSO", "Dedicated success manager"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Our no-shows dropped 37% in two months. Patients love the reminders.",
        name: "Dr. Patel",
        role: "Orthodontist, BrightAlign",
    },
    Testimonial {
        quote: "Billing is painless now. The automation freed up 10 hrs/week.",
        name: "Dr. Nguyen",
        role: "Owner, Riverfront Dental",
    },
    Testimonial {
        quote: "We finally have clarity on production and chair time. Game-changer.",
        name: "Dr. Lopez",
        role: "Pediatric Dentist, HappySmiles",
    },
];

pub const DASHBOARD_STATS: &[DashboardStat] = &[
    DashboardStat { icon: FeatureIcon::Calendar, label: "Schedule", value: "32" },
    DashboardStat { icon: FeatureIcon::Message, label: "Reminders", value: "118" },
    DashboardStat { icon: FeatureIcon::CreditCard, label: "Invoices", value: "24" },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", anchor: "features" },
    NavLink { label: "Pricing", anchor: "pricing" },
    NavLink { label: "Testimonials", anchor: "testimonials" },
    NavLink { label: "Contact", anchor: "contact" },
];

/// Links repeated in the footer; contact is left to the call-to-action.
pub fn footer_links() -> &'static [NavLink] {
    &NAV_LINKS[..3]
}

/// Peak height in pixels of bar `index` in the mock revenue chart.
pub fn revenue_bar_peak(index: usize) -> f64 {
    10.0 + (index as f64).sin().abs() * 80.0
}

/// Fill width of the progress bar under dashboard stat `index`.
pub fn stat_bar_percent(index: usize) -> u32 {
    60 + index as u32 * 12
}

#[cfg(test)]
mod tests {
    use super::*;

    // Section ids rendered by the page, in document order.
    const SECTION_ANCHORS: &[&str] = &["features", "pricing", "testimonials", "faq", "contact"];

    #[test]
    fn exactly_one_tier_is_highlighted() {
        let highlighted: Vec<_> = PRICING_TIERS.iter().filter(|tier| tier.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Growth");
    }

    #[test]
    fn nav_links_point_at_rendered_sections() {
        for link in NAV_LINKS {
            assert!(SECTION_ANCHORS.contains(&link.anchor), "missing section {}", link.anchor);
            assert_eq!(link.href(), format!("#{}", link.anchor));
        }
    }

    #[test]
    fn footer_skips_contact() {
        let labels: Vec<_> = footer_links().iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Features", "Pricing", "Testimonials"]);
    }

    #[test]
    fn faq_has_four_entries() {
        assert_eq!(FAQ_ENTRIES.len(), 4);
        assert!(FAQ_ENTRIES.iter().all(|entry| !entry.question.is_empty() && !entry.answer.is_empty()));
    }

    #[test]
    fn revenue_bars_stay_within_chart() {
        assert_eq!(revenue_bar_peak(0), 10.0);
        for index in 0..16 {
            let peak = revenue_bar_peak(index);
            assert!((10.0..=90.0).contains(&peak));
        }
    }

    #[test]
    fn stat_bars_grow_by_index() {
        let widths: Vec<_> = (0..DASHBOARD_STATS.len()).map(stat_bar_percent).collect();
        assert_eq!(widths, [60, 72, 84]);
    }
}
