//! Header, hero banner, feature summary and footer.

use leptos::prelude::*;

use super::{Icon, ICON_MENU};
use crate::types::{FeatureItem, NavLink, TriggerId};

/// Site header with title, navigation links and the compact-menu button
#[component]
pub fn SiteHeader(title: String, links: Vec<NavLink>, menu_trigger: TriggerId) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <h1 class="site-title">{title}</h1>
                <nav class="site-nav">
                    <ul>
                        {links.into_iter().map(|link| view! {
                            <li>
                                <a class="nav-link" href=link.target.to_string()>{link.label}</a>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </nav>
                <button
                    class="menu-button"
                    type="button"
                    aria-label="Menu"
                    data-trigger=menu_trigger.to_string()
                >
                    <Icon path=ICON_MENU />
                </button>
            </div>
        </header>
    }
}

/// Welcome banner
#[component]
pub fn Hero(title: String, tagline: String) -> impl IntoView {
    view! {
        <section class="hero">
            <h2 class="hero-title">{title}</h2>
            <p class="hero-tagline">{tagline}</p>
        </section>
    }
}

/// Static feature summary grid
#[component]
pub fn FeatureGrid(heading: String, items: Vec<FeatureItem>) -> impl IntoView {
    view! {
        <section class="features">
            <h2 class="section-title">{heading}</h2>
            <div class="features-grid">
                {items.into_iter().map(|item| view! {
                    <article class="card feature-card">
                        <header class="card-header">
                            <h3 class="card-title">{item.title}</h3>
                        </header>
                        <div class="card-body">
                            <p>{item.text}</p>
                        </div>
                    </article>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Page footer
#[component]
pub fn SiteFooter(notice: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{notice}</p>
            </div>
        </footer>
    }
}
