//! Site-wide settings and the fixed copy around the tab view.

use page_leptos::types::{FeatureItem, NavLink, NavTarget, TriggerId};
use serde::Deserialize;

use crate::catalog::ContentCatalog;

/// Crop recommendation lives on its own page.
pub const CROP_RECOMMENDATION_PATH: &str = "/crop-recommendation";

/// Trigger of the compact header menu button.
pub const MENU_TRIGGER: &str = "toggle-menu";

const FEATURES_HEADING: &str = "How Farm Tech Connect Empowers Indian Farmers";

const FEATURES: [(&str, &str); 3] = [
    (
        "Disaster Resilience",
        "Stay prepared with AI-powered alerts and actionable advice tailored to India's diverse agro-climatic zones.",
    ),
    (
        "Data-Driven Decisions",
        "Make informed choices about crop selection, planting times, and resource management based on ML predictions.",
    ),
    (
        "Market Intelligence",
        "Maximize profits with AI-driven market insights, helping you decide when and where to sell your produce.",
    ),
];

/// `[site]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub title: String,
    pub tagline: String,
    pub copyright_year: u16,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Farm Tech Connect".into(),
            tagline: "Your AI-powered smart farming companion for Indian agriculture".into(),
            copyright_year: 2023,
        }
    }
}

impl SiteSettings {
    pub fn hero_title(&self) -> String {
        format!("Welcome to {}", self.title)
    }

    pub fn footer_notice(&self) -> String {
        format!("\u{a9} {} {}. All rights reserved.", self.copyright_year, self.title)
    }

    pub fn menu_trigger(&self) -> TriggerId {
        TriggerId::from(MENU_TRIGGER)
    }
}

/// Header links: one in-page anchor per category, then the external
/// crop-recommendation page.
pub fn header_links(catalog: &ContentCatalog) -> Vec<NavLink> {
    catalog
        .list()
        .iter()
        .map(|category| NavLink {
            label: category.label.clone(),
            target: NavTarget::new(format!("#{}", category.key)),
        })
        .chain(std::iter::once(NavLink {
            label: "Crop Recommendation".into(),
            target: NavTarget::from(CROP_RECOMMENDATION_PATH),
        }))
        .collect()
}

pub fn features_heading() -> &'static str {
    FEATURES_HEADING
}

pub fn feature_items() -> Vec<FeatureItem> {
    FEATURES
        .iter()
        .map(|(title, text)| FeatureItem {
            title: title.to_string(),
            text: text.to_string(),
        })
        .collect()
}
