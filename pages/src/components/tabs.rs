//! Tab navigation components

use leptos::prelude::*;

use super::ContentBlocks;
use crate::types::{NavControl, TabRender};

/// Page that shows the given tab selected.
///
/// Each selection state is rendered as its own static page, so a tab control
/// is a plain link to the page of its category.
pub fn tab_page_href(key: &str) -> String {
    format!("{}.html", key)
}

/// Tab bar with one control per category
#[component]
pub fn TabBar(controls: Vec<NavControl>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {controls.into_iter().map(|control| {
                let class = if control.active { "tab-trigger active" } else { "tab-trigger" };
                let selected = if control.active { "true" } else { "false" };
                view! {
                    <a
                        class=class
                        role="tab"
                        aria-selected=selected
                        data-tab=control.key.clone()
                        href=tab_page_href(&control.key)
                    >
                        {control.label}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Tab bar plus the selected category's card
#[component]
pub fn TabPanel(tab: TabRender) -> impl IntoView {
    let TabRender {
        controls,
        selected,
        title,
        content,
    } = tab;

    view! {
        <section class="tabs">
            <TabBar controls=controls />
            <div class="tab-content active" id=selected.clone() data-tab-panel=selected role="tabpanel">
                <article class="card">
                    <header class="card-header">
                        <h2 class="card-title">{title}</h2>
                    </header>
                    <div class="card-body">
                        <ContentBlocks blocks=content />
                    </div>
                </article>
            </div>
        </section>
    }
}
