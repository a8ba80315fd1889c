//! Page composer: assembles header, hero, tab view, feature summary and
//! footer into one ordered layout.

use page_leptos::render_page;
use page_leptos::types::{NavTarget, PageSection, TriggerId};
use tracing::debug;

use crate::catalog::ContentCatalog;
use crate::error::{PortalError, Result};
use crate::host::{NoopHost, PageHost};
use crate::site::{self, SiteSettings};
use crate::tab_view::TabView;

/// Builds the landing page around a tab view it owns.
pub struct PageComposer<'c> {
    site: SiteSettings,
    tabs: TabView<'c>,
    host: Box<dyn PageHost>,
}

impl<'c> PageComposer<'c> {
    pub fn new(catalog: &'c ContentCatalog, site: SiteSettings) -> Self {
        Self {
            site,
            tabs: TabView::new(catalog),
            host: Box::new(NoopHost),
        }
    }

    /// Attach the environment's navigation and trigger callbacks.
    pub fn with_host(mut self, host: impl PageHost + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    pub fn site(&self) -> &SiteSettings {
        &self.site
    }

    pub fn tab_view(&self) -> &TabView<'c> {
        &self.tabs
    }

    /// Forward a selection to the tab view.
    pub fn select(&mut self, key: &str) -> Result<()> {
        self.tabs.select(key)
    }

    /// Page sections in layout order.
    pub fn compose(&self) -> Vec<PageSection> {
        let catalog = self.tabs.catalog();
        vec![
            PageSection::Header {
                title: self.site.title.clone(),
                links: site::header_links(catalog),
                menu_trigger: self.site.menu_trigger(),
            },
            PageSection::Hero {
                title: self.site.hero_title(),
                tagline: self.site.tagline.clone(),
            },
            PageSection::Tabs(self.tabs.render()),
            PageSection::Features {
                heading: site::features_heading().to_string(),
                items: site::feature_items(),
            },
            PageSection::Footer {
                notice: self.site.footer_notice(),
            },
        ]
    }

    /// Complete HTML document for the current state.
    pub fn render_html(&self) -> String {
        let sections = self.compose();
        debug!(
            sections = sections.len(),
            tab = self.tabs.selected_key(),
            "rendering page"
        );
        render_page(&sections)
    }

    /// Trigger points on the page as currently composed.
    pub fn triggers(&self) -> Vec<TriggerId> {
        let sections = self.compose();
        sections
            .iter()
            .flat_map(PageSection::triggers)
            .cloned()
            .collect()
    }

    /// Hand a trigger press to the host.
    ///
    /// Only triggers visible on the current page can be fired.
    pub fn fire(&self, id: &str) -> Result<()> {
        let Some(trigger) = self.triggers().into_iter().find(|t| t.as_str() == id) else {
            return Err(PortalError::UnknownTrigger { id: id.to_string() });
        };
        self.host.trigger(&trigger);
        Ok(())
    }

    /// Hand a navigation target to the host. Targets are never validated.
    pub fn navigate(&self, target: &NavTarget) {
        self.host.navigate(target);
    }
}
