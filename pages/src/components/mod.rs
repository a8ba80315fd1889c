//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function; together they turn a
//! list of [`crate::types::PageSection`] values into static HTML.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── SiteHeader
//! ├── <main>
//! │   ├── Hero
//! │   ├── TabPanel
//! │   │   ├── TabBar
//! │   │   └── ContentBlocks
//! │   │       └── ContentBlockView (heading, paragraph, list, highlights, call-to-action)
//! │   └── FeatureGrid
//! └── SiteFooter
//! ```

mod blocks;
mod chrome;
mod document;
mod icons;
mod tabs;

pub use blocks::{ContentBlockView, ContentBlocks};
pub use chrome::{FeatureGrid, Hero, SiteFooter, SiteHeader};
pub use document::{PageDocument, SectionView};
pub use icons::*;
pub use tabs::{TabBar, TabPanel, tab_page_href};
