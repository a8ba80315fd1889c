//! Tab view: the only stateful piece of the page.
//!
//! The view borrows the catalog and owns its selection. Selection always
//! points at a catalog category, so rendering cannot fail; a rejected
//! selection leaves the previous one in place.

use page_leptos::types::{Category, NavControl, TabRender};
use serde::Serialize;
use tracing::debug;

use crate::catalog::ContentCatalog;
use crate::error::{PortalError, Result};

/// Snapshot of the tab view's selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabViewState {
    pub selected_key: String,
}

/// Navigation controls for every category plus the selected category's pane.
#[derive(Debug, Clone)]
pub struct TabView<'c> {
    catalog: &'c ContentCatalog,
    /// Selected category, held by reference so it always exists; the owned
    /// key is `state().selected_key`.
    selected: &'c Category,
}

impl<'c> TabView<'c> {
    /// Mount a view with the first category selected.
    pub fn new(catalog: &'c ContentCatalog) -> Self {
        Self {
            catalog,
            selected: catalog.first(),
        }
    }

    pub fn catalog(&self) -> &'c ContentCatalog {
        self.catalog
    }

    pub fn selected(&self) -> &'c Category {
        self.selected
    }

    pub fn selected_key(&self) -> &'c str {
        &self.selected.key
    }

    pub fn state(&self) -> TabViewState {
        TabViewState {
            selected_key: self.selected.key.clone(),
        }
    }

    /// Move the selection to `key`.
    ///
    /// A key outside the catalog fails with [`PortalError::InvalidSelection`]
    /// and the current selection is kept.
    pub fn select(&mut self, key: &str) -> Result<()> {
        let Ok(category) = self.catalog.get(key) else {
            return Err(PortalError::InvalidSelection {
                key: key.to_string(),
            });
        };
        debug!(from = %self.selected.key, to = %category.key, "tab selected");
        self.selected = category;
        Ok(())
    }

    /// Describe what should be displayed for the current selection.
    pub fn render(&self) -> TabRender {
        let controls = self
            .catalog
            .list()
            .iter()
            .map(|category| NavControl {
                key: category.key.clone(),
                label: category.label.clone(),
                active: category.key == self.selected.key,
            })
            .collect();

        TabRender {
            controls,
            selected: self.selected.key.clone(),
            title: self.selected.title.clone(),
            content: self.selected.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_category() {
        let catalog = ContentCatalog::builtin();
        let view = TabView::new(catalog);
        assert_eq!(view.selected_key(), catalog.list()[0].key);
        assert_eq!(
            view.state(),
            TabViewState {
                selected_key: "disaster".into()
            }
        );
    }

    #[test]
    fn select_then_render_shows_exactly_that_content() {
        let catalog = ContentCatalog::builtin();
        let mut view = TabView::new(catalog);

        for key in catalog.keys() {
            view.select(key).expect("valid key");
            let rendered = view.render();
            let category = catalog.get(key).expect("present");
            assert_eq!(rendered.selected, key);
            assert_eq!(rendered.title, category.title);
            assert_eq!(rendered.content, category.content);
        }
    }

    #[test]
    fn render_lists_all_controls_with_one_active() {
        let catalog = ContentCatalog::builtin();
        let mut view = TabView::new(catalog);
        view.select("prediction").expect("valid key");

        let rendered = view.render();
        let keys: Vec<_> = rendered.controls.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["disaster", "prediction", "market"]);
        assert_eq!(rendered.controls.iter().filter(|c| c.active).count(), 1);
        assert_eq!(rendered.active_control().map(|c| c.key.as_str()), Some("prediction"));
        assert_eq!(rendered.controls[1].label, "ML Predictions");
    }

    #[test]
    fn invalid_selection_keeps_previous_state() {
        let catalog = ContentCatalog::builtin();
        let mut view = TabView::new(catalog);
        view.select("market").expect("valid key");
        let before = view.state();

        let err = view.select("flood").unwrap_err();
        assert!(matches!(err, PortalError::InvalidSelection { ref key } if key == "flood"));
        assert_eq!(view.state(), before);
        assert_eq!(view.render().selected, "market");
    }

    #[test]
    fn last_selection_wins() {
        let catalog = ContentCatalog::builtin();
        let mut view = TabView::new(catalog);
        for key in ["market", "prediction", "disaster", "market"] {
            view.select(key).expect("valid key");
        }
        assert_eq!(view.selected_key(), "market");
    }

    #[test]
    fn end_to_end_selection_scenario() {
        let catalog = ContentCatalog::builtin();
        let mut view = TabView::new(catalog);

        let initial = view.render();
        assert_eq!(initial.content, catalog.get("disaster").expect("present").content);

        view.select("market").expect("valid key");
        let market = view.render();
        assert_eq!(market.content, catalog.get("market").expect("present").content);
        assert_eq!(market.active_control().map(|c| c.key.as_str()), Some("market"));

        assert!(matches!(
            view.select("flood"),
            Err(PortalError::InvalidSelection { .. })
        ));
        assert_eq!(view.render(), market);
    }
}
