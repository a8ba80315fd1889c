//! # page-leptos
//!
//! Leptos SSR renderer for the Farm Tech Connect landing page.
//!
//! The page model (header, hero, tab view, feature summary, footer) is
//! described by the plain data types in [`types`]; this crate turns a list
//! of [`types::PageSection`] into a complete static HTML document. No
//! hydration and no client script: every tab selection is its own page.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::render_page;
//! use page_leptos::types::PageSection;
//!
//! let sections = vec![
//!     PageSection::Hero {
//!         title: "Welcome to Farm Tech Connect".into(),
//!         tagline: "Your smart farming companion".into(),
//!     },
//!     PageSection::Footer { notice: "(c) 2023 Farm Tech Connect".into() },
//! ];
//!
//! let html = render_page(&sections);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Welcome to Farm Tech Connect"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Page data model
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::PageSection;

/// Render the page sections into a complete HTML document.
///
/// Sections keep their relative order; header sections are placed before
/// the `<main>` column and footer sections after it.
pub fn render_page(sections: &[PageSection]) -> String {
    let doc = view! { <PageDocument sections=sections.to_vec() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::{ContentBlock, FeatureItem, IconKind, NavControl, NavLink, TabRender};

    fn tab_render(selected: &str) -> TabRender {
        let controls = ["disaster", "prediction", "market"]
            .iter()
            .map(|key| NavControl {
                key: key.to_string(),
                label: format!("{} label", key),
                active: *key == selected,
            })
            .collect();

        TabRender {
            controls,
            selected: selected.into(),
            title: format!("{} title", selected),
            content: vec![
                ContentBlock::Heading {
                    text: format!("{} heading", selected),
                    icon: Some(IconKind::TrendingUp),
                },
                ContentBlock::BulletList {
                    items: vec!["first item".into(), "second item".into()],
                },
                ContentBlock::CallToAction {
                    label: "Check Market Rates".into(),
                    trigger: "check-market-rates".into(),
                    target: None,
                },
            ],
        }
    }

    fn full_page(selected: &str) -> Vec<PageSection> {
        vec![
            PageSection::Header {
                title: "Farm Tech Connect".into(),
                links: vec![NavLink {
                    label: "Crop Recommendation".into(),
                    target: "/crop-recommendation".into(),
                }],
                menu_trigger: "toggle-menu".into(),
            },
            PageSection::Hero {
                title: "Welcome".into(),
                tagline: "Tagline".into(),
            },
            PageSection::Tabs(tab_render(selected)),
            PageSection::Features {
                heading: "Why".into(),
                items: vec![FeatureItem {
                    title: "Disaster Resilience".into(),
                    text: "Stay prepared".into(),
                }],
            },
            PageSection::Footer {
                notice: "All rights reserved.".into(),
            },
        ]
    }

    /// Opening tag of the first element carrying `marker`.
    fn tag_with<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html.find(marker).expect("marker present");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn renders_empty_page() {
        let html = render_page(&[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Farm Tech Connect"));
        assert!(html.contains("<main"));
    }

    #[test]
    fn renders_sections_in_layout_order() {
        let html = render_page(&full_page("disaster"));

        let header = html.find("class=\"site-header\"").expect("header");
        let hero = html.find("class=\"hero-title\"").expect("hero");
        let tabs = html.find("class=\"tab-bar\"").expect("tabs");
        let features = html.find("class=\"features-grid\"").expect("features");
        let footer = html.find("class=\"site-footer\"").expect("footer");

        assert!(header < hero);
        assert!(hero < tabs);
        assert!(tabs < features);
        assert!(features < footer);
    }

    #[test]
    fn marks_only_selected_tab_active() {
        let html = render_page(&full_page("market"));

        let market = tag_with(&html, "data-tab=\"market\"");
        assert!(market.contains("tab-trigger active"));
        assert!(market.contains("aria-selected=\"true\""));
        assert!(market.contains("href=\"market.html\""));

        let disaster = tag_with(&html, "data-tab=\"disaster\"");
        assert!(!disaster.contains("active"));
        assert!(disaster.contains("aria-selected=\"false\""));

        assert_eq!(html.matches("tab-trigger active").count(), 1);
    }

    #[test]
    fn renders_selected_content_blocks() {
        let html = render_page(&full_page("prediction"));

        assert!(html.contains("prediction title"));
        assert!(html.contains("prediction heading"));
        assert!(html.contains("first item"));
        assert!(html.contains("class=\"block-list\""));
        assert!(tag_with(&html, "class=\"icon\"").contains("data-icon=\"trending-up\""));
        assert!(!html.contains("market heading"));
    }

    #[test]
    fn call_to_action_exposes_trigger_and_optional_link() {
        let mut tab = tab_render("prediction");
        tab.content.push(ContentBlock::CallToAction {
            label: "Access ML Predictions".into(),
            trigger: "access-ml-predictions".into(),
            target: Some("/ml-predictions".into()),
        });
        let html = render_page(&[PageSection::Tabs(tab)]);

        assert!(html.contains("data-trigger=\"check-market-rates\""));
        assert!(html.contains("data-trigger=\"access-ml-predictions\""));
        assert!(html.contains("href=\"/ml-predictions\""));
        assert_eq!(html.matches("cta-link").count(), 1);
    }

    #[test]
    fn header_links_are_passed_through_untouched() {
        let html = render_page(&full_page("disaster"));

        assert!(html.contains("href=\"/crop-recommendation\""));
        assert!(html.contains("data-trigger=\"toggle-menu\""));
        let title = html.find("<title>").expect("title tag");
        assert!(html[title..].starts_with("<title>Farm Tech Connect"));
    }

    #[test]
    fn escapes_text_content() {
        let html = render_page(&[PageSection::Hero {
            title: "Rain & <Sun>".into(),
            tagline: String::new(),
        }]);

        assert!(!html.contains("<Sun>"));
        assert!(html.contains("&lt;Sun&gt;"));
    }
}
