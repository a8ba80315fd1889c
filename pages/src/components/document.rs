//! Root document component - the complete HTML page
//!
//! Header and footer frame a `<main>` column holding the hero banner, the
//! tab view and the feature summary, in the order the sections were given.

use super::{FeatureGrid, Hero, SiteFooter, SiteHeader, TabPanel};
use crate::styles::{CSP, PAGE_CSS};
use crate::types::PageSection;
use leptos::prelude::*;

const FALLBACK_TITLE: &str = "Farm Tech Connect";

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(sections: Vec<PageSection>) -> impl IntoView {
    let title = sections
        .iter()
        .find_map(|section| match section {
            PageSection::Header { title, .. } => Some(title.clone()),
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let mut top = Vec::new();
    let mut body = Vec::new();
    let mut bottom = Vec::new();
    for section in sections {
        match section {
            PageSection::Header { .. } => top.push(section),
            PageSection::Footer { .. } => bottom.push(section),
            _ => body.push(section),
        }
    }

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div class="page">
                    {sections_view(top)}
                    <main class="container page-main">
                        {sections_view(body)}
                    </main>
                    {sections_view(bottom)}
                </div>
            </body>
        </html>
    }
}

fn sections_view(sections: Vec<PageSection>) -> Vec<AnyView> {
    sections
        .into_iter()
        .map(|section| view! { <SectionView section=section /> }.into_any())
        .collect()
}

/// One page section
#[component]
pub fn SectionView(section: PageSection) -> impl IntoView {
    match section {
        PageSection::Header {
            title,
            links,
            menu_trigger,
        } => view! { <SiteHeader title=title links=links menu_trigger=menu_trigger /> }.into_any(),
        PageSection::Hero { title, tagline } => view! { <Hero title=title tagline=tagline /> }.into_any(),
        PageSection::Tabs(tab) => view! { <TabPanel tab=tab /> }.into_any(),
        PageSection::Features { heading, items } => {
            view! { <FeatureGrid heading=heading items=items /> }.into_any()
        }
        PageSection::Footer { notice } => view! { <SiteFooter notice=notice /> }.into_any(),
    }
}
