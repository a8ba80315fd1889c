//! Content catalog: the fixed, ordered list of tab categories.
//!
//! A catalog is validated once at construction (non-empty, unique page-safe
//! keys) and
//! never mutated afterwards. The built-in catalog carries the Farm Tech
//! Connect copy; a custom one can be loaded from TOML:
//!
//! ```toml
//! [[categories]]
//! key = "market"
//! label = "Market Rates"
//! title = "AI-Driven Market Rate Insights"
//!
//! [[categories.content]]
//! type = "paragraph"
//! text = "Prices from major APMCs across India."
//! ```

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use page_leptos::types::{Category, ContentBlock, Highlight, IconKind};
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

static BUILTIN: Lazy<ContentCatalog> = Lazy::new(|| ContentCatalog {
    categories: vec![disaster(), prediction(), market()],
});

/// Immutable ordered collection of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    categories: Vec<Category>,
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

impl ContentCatalog {
    /// Build a catalog, rejecting an empty list, a malformed key or a
    /// repeated key.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(PortalError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for category in &categories {
            if !is_valid_key(&category.key) {
                return Err(PortalError::InvalidKey {
                    key: category.key.clone(),
                });
            }
            if !seen.insert(category.key.as_str()) {
                return Err(PortalError::DuplicateKey {
                    key: category.key.clone(),
                });
            }
        }
        Ok(Self { categories })
    }

    /// The Farm Tech Connect catalog: disaster, prediction, market.
    pub fn builtin() -> &'static ContentCatalog {
        &BUILTIN
    }

    /// Parse a TOML catalog document. `origin` names the source in errors.
    pub fn from_toml_str(src: &str, origin: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(src).map_err(|source| PortalError::CatalogParse {
            origin: origin.to_string(),
            source,
        })?;
        Self::new(file.categories)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|source| PortalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&src, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "loaded content catalog"
        );
        Ok(catalog)
    }

    /// Categories in display order.
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, key: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|category| category.key == key)
            .ok_or_else(|| PortalError::NotFound {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.iter().any(|category| category.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.key.as_str())
    }

    /// First category; the initial tab selection.
    pub fn first(&self) -> &Category {
        // non-empty by construction
        &self.categories[0]
    }

    /// Serialize back to the TOML file format.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(&CatalogFile {
            categories: self.categories.clone(),
        })
    }
}

/// Name of the page holding the initial selection; no tab may claim it.
const RESERVED_KEY: &str = "index";

/// Keys become `<key>.html` file names and `#<key>` anchors.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key != RESERVED_KEY
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

// ============================================================================
// Built-in content
// ============================================================================

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::Paragraph { text: text.into() }
}

fn bullets(items: &[&str]) -> ContentBlock {
    ContentBlock::BulletList {
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

fn disaster() -> Category {
    Category {
        key: "disaster".into(),
        label: "Disaster Management".into(),
        title: "AI-Powered Disaster Management".into(),
        content: vec![
            ContentBlock::Heading {
                text: "Early Warning System for Indian Agriculture".into(),
                icon: Some(IconKind::AlertTriangle),
            },
            paragraph(
                "Our advanced machine learning models analyze multiple data sources to predict \
                 and alert you about potential natural disasters affecting Indian farmlands:",
            ),
            bullets(&[
                "Monsoon patterns and flood predictions",
                "Drought forecasting using satellite imagery",
                "Locust swarm movement predictions",
                "Cyclone path and intensity forecasts for coastal regions",
            ]),
            paragraph(
                "We integrate data from the India Meteorological Department (IMD) and Indian \
                 Space Research Organisation (ISRO) to provide accurate, localized alerts.",
            ),
            ContentBlock::CallToAction {
                label: "View Disaster Alerts".into(),
                trigger: "view-disaster-alerts".into(),
                target: None,
            },
        ],
    }
}

fn prediction() -> Category {
    let highlight = |icon, title: &str, text: &str| Highlight {
        icon: Some(icon),
        title: title.into(),
        text: text.into(),
    };

    Category {
        key: "prediction".into(),
        label: "ML Predictions".into(),
        title: "ML-Based Agricultural Predictions".into(),
        content: vec![
            ContentBlock::Heading {
                text: "Precision Farming Insights".into(),
                icon: Some(IconKind::BarChart),
            },
            paragraph(
                "Our machine learning models provide crucial predictions for Indian farming \
                 conditions:",
            ),
            ContentBlock::Highlights {
                items: vec![
                    highlight(
                        IconKind::CloudRain,
                        "Rainfall Prediction",
                        "Accurate forecasts for your specific location",
                    ),
                    highlight(
                        IconKind::Thermometer,
                        "Temperature Trends",
                        "Long-term temperature projections for crop planning",
                    ),
                    highlight(
                        IconKind::Sprout,
                        "Crop Yield Estimation",
                        "AI-driven yield predictions for major Indian crops",
                    ),
                    highlight(
                        IconKind::Wind,
                        "Soil Health Analysis",
                        "ML-based soil quality and nutrient predictions",
                    ),
                ],
            },
            paragraph(
                "Our models are trained on extensive Indian agricultural data, ensuring \
                 relevance to local conditions and crop varieties.",
            ),
            ContentBlock::CallToAction {
                label: "Access ML Predictions".into(),
                trigger: "access-ml-predictions".into(),
                target: Some("/ml-predictions".into()),
            },
        ],
    }
}

fn market() -> Category {
    Category {
        key: "market".into(),
        label: "Market Rates".into(),
        title: "AI-Driven Market Rate Insights".into(),
        content: vec![
            ContentBlock::Heading {
                text: "Real-time Price Analytics for Indian Markets".into(),
                icon: Some(IconKind::TrendingUp),
            },
            paragraph(
                "Our machine learning algorithms analyze vast amounts of data to provide \
                 accurate market insights for Indian farmers:",
            ),
            bullets(&[
                "Real-time prices from major Agricultural Produce Market Committees (APMCs) across India",
                "Price predictions for the next 1-3 months for major crops",
                "Supply and demand forecasts based on crop yield predictions and market trends",
                "Personalized price alerts for your specific crops and region",
            ]),
            paragraph(
                "We integrate data from the National Agriculture Market (eNAM) and state-level \
                 market information systems to provide comprehensive coverage.",
            ),
            ContentBlock::CallToAction {
                label: "Check Market Rates".into(),
                trigger: "check-market-rates".into(),
                target: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(key: &str) -> Category {
        Category {
            key: key.into(),
            label: key.to_uppercase(),
            title: format!("{} title", key),
            content: vec![paragraph(key)],
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = ContentCatalog::builtin();
        let rebuilt = ContentCatalog::new(builtin.list().to_vec()).expect("valid builtin");
        assert_eq!(&rebuilt, builtin);
        assert_eq!(
            builtin.keys().collect::<Vec<_>>(),
            vec!["disaster", "prediction", "market"]
        );
    }

    #[test]
    fn get_round_trips_every_category() {
        let catalog = ContentCatalog::builtin();
        for category in catalog.list() {
            assert_eq!(catalog.get(&category.key).expect("present"), category);
        }
    }

    #[test]
    fn get_unknown_key_is_not_found() {
        let err = ContentCatalog::builtin().get("flood").unwrap_err();
        assert!(matches!(err, PortalError::NotFound { ref key } if key == "flood"));
    }

    #[test]
    fn list_is_idempotent_and_order_stable() {
        let catalog = ContentCatalog::builtin();
        let first: Vec<_> = catalog.list().to_vec();
        for _ in 0..3 {
            assert_eq!(catalog.list(), first.as_slice());
        }
        assert_eq!(catalog.first().key, "disaster");
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            ContentCatalog::new(vec![]),
            Err(PortalError::EmptyCatalog)
        ));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = ContentCatalog::new(vec![category("a"), category("b"), category("a")]).unwrap_err();
        assert!(matches!(err, PortalError::DuplicateKey { ref key } if key == "a"));
    }

    #[test]
    fn rejects_keys_unusable_as_page_names() {
        for key in ["", "../escaped", "index", "Market", "crop rates", "a/b", "tab.html"] {
            let err = ContentCatalog::new(vec![category("home"), category(key)]).unwrap_err();
            assert!(
                matches!(err, PortalError::InvalidKey { key: ref bad } if bad == key),
                "{:?} accepted",
                key
            );
        }
    }

    #[test]
    fn accepts_lowercase_keys_with_digits_and_separators() {
        let catalog =
            ContentCatalog::new(vec![category("kharif-2024"), category("soil_health")]).expect("valid keys");
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["kharif-2024", "soil_health"]);
    }

    #[test]
    fn every_builtin_category_has_one_call_to_action() {
        for category in ContentCatalog::builtin().list() {
            assert_eq!(category.triggers().count(), 1, "{}", category.key);
        }
    }

    #[test]
    fn toml_round_trip_preserves_catalog() {
        let builtin = ContentCatalog::builtin();
        let src = builtin.to_toml_string().expect("serialize");
        let parsed = ContentCatalog::from_toml_str(&src, "inline").expect("parse");
        assert_eq!(&parsed, builtin);
    }

    #[test]
    fn malformed_toml_names_its_origin() {
        let err = ContentCatalog::from_toml_str("categories = 3", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn load_reads_catalog_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
[[categories]]
key = "weather"
label = "Weather"
title = "Weather Watch"

[[categories.content]]
type = "paragraph"
text = "Daily forecasts."
"#,
        )
        .expect("write catalog");

        let catalog = ContentCatalog::load(&path).expect("load");
        assert_eq!(catalog.first().key, "weather");
        assert_eq!(catalog.first().content, vec![paragraph("Daily forecasts.")]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ContentCatalog::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, PortalError::Io { .. }));
    }
}
