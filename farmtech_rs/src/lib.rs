//! # farmtech
//!
//! **Farm Tech Connect landing page** - the page model behind the portal's
//! tabbed home page: disaster alerts, ML predictions and market rates.
//!
//! ## Features
//!
//! - **Content Catalog** - ordered, validated, immutable tab categories
//! - **Tab View** - owned selection state with strict key checking
//! - **Page Composer** - header, hero, tabs, feature grid and footer in order
//! - **Host Callbacks** - navigation and button triggers handed to the embedder
//! - **Static HTML** - every selection rendered through Leptos SSR
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use farmtech::{ContentCatalog, PageComposer, SiteSettings};
//!
//! let mut page = PageComposer::new(ContentCatalog::builtin(), SiteSettings::default());
//! page.select("market").unwrap();
//!
//! let tab = page.tab_view().render();
//! assert_eq!(tab.selected, "market");
//! assert!(page.select("flood").is_err());
//! assert_eq!(page.tab_view().selected_key(), "market");
//!
//! let html = page.render_html();
//! assert!(html.contains("Real-time Price Analytics"));
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! farmtech tabs                          # list categories
//! farmtech show market                   # print one category
//! farmtech render --tab market -o m.html # render one state
//! farmtech site --out-dir public         # index.html + one page per tab
//! ```

pub mod catalog;
pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod host;
pub mod site;
pub mod tab_view;

pub use catalog::ContentCatalog;
pub use composer::PageComposer;
pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use host::{NoopHost, PageHost, TracingHost};
pub use site::SiteSettings;
pub use tab_view::{TabView, TabViewState};

pub use page_leptos::types;
