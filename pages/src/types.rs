//! Page data types shared by the renderer and the page model.
//!
//! Everything here is plain data: serializable, cloneable and comparable.
//! Content is a closed set of block variants rather than a markup tree.
//!
//! # Example
//!
//! ```rust
//! use page_leptos::types::{Category, ContentBlock, IconKind};
//!
//! let category = Category {
//!     key: "market".into(),
//!     label: "Market Rates".into(),
//!     title: "AI-Driven Market Rate Insights".into(),
//!     content: vec![
//!         ContentBlock::Heading {
//!             text: "Real-time Price Analytics".into(),
//!             icon: Some(IconKind::TrendingUp),
//!         },
//!         ContentBlock::Paragraph { text: "Prices from major APMCs.".into() },
//!     ],
//! };
//! assert!(category.triggers().next().is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inert icon tag attached to headings and highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Warning triangle (disaster alerts)
    AlertTriangle,
    /// Bar chart (predictions)
    BarChart,
    /// Rising trend line (market rates)
    TrendingUp,
    /// Cloud with rain
    CloudRain,
    /// Thermometer
    Thermometer,
    /// Seedling
    Sprout,
    /// Wind gusts
    Wind,
    /// Hamburger menu
    Menu,
}

impl IconKind {
    /// Stable kebab-case name, matches the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            IconKind::AlertTriangle => "alert-triangle",
            IconKind::BarChart => "bar-chart",
            IconKind::TrendingUp => "trending-up",
            IconKind::CloudRain => "cloud-rain",
            IconKind::Thermometer => "thermometer",
            IconKind::Sprout => "sprout",
            IconKind::Wind => "wind",
            IconKind::Menu => "menu",
        }
    }
}

/// Opaque path of another page, handed to the host's navigator untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTarget(String);

impl NavTarget {
    /// Wrap a path or anchor.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Raw path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavTarget {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a button trigger point. The page never handles these itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(String);

impl TriggerId {
    /// Wrap a trigger name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Raw trigger name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TriggerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cell of a highlights grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Optional icon shown beside the title
    #[serde(default)]
    pub icon: Option<IconKind>,
    /// Short title
    pub title: String,
    /// One-line description
    pub text: String,
}

/// One static unit of display content inside a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Section heading
    Heading {
        /// Heading text
        text: String,
        /// Optional icon shown before the text
        #[serde(default)]
        icon: Option<IconKind>,
    },
    /// Body paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },
    /// Unordered list
    BulletList {
        /// List entries, in display order
        items: Vec<String>,
    },
    /// Grid of icon + title + text cells
    Highlights {
        /// Grid cells, in display order
        items: Vec<Highlight>,
    },
    /// Button exposing a named trigger, optionally linking to another page
    CallToAction {
        /// Button caption
        label: String,
        /// Trigger fired when the button is pressed
        trigger: TriggerId,
        /// Page the button leads to, if any
        #[serde(default)]
        target: Option<NavTarget>,
    },
}

impl ContentBlock {
    /// Trigger carried by this block, if it is a call-to-action.
    pub fn trigger(&self) -> Option<&TriggerId> {
        match self {
            ContentBlock::CallToAction { trigger, .. } => Some(trigger),
            _ => None,
        }
    }
}

/// A selectable content grouping in the tabbed view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable key
    pub key: String,
    /// Navigation control caption
    pub label: String,
    /// Card title above the content
    pub title: String,
    /// Ordered content blocks
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Category {
    /// Triggers of all call-to-action blocks, in content order.
    pub fn triggers(&self) -> impl Iterator<Item = &TriggerId> {
        self.content.iter().filter_map(ContentBlock::trigger)
    }
}

/// Navigation control for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControl {
    /// Category key
    pub key: String,
    /// Category label
    pub label: String,
    /// Whether this control is the selected one
    pub active: bool,
}

/// Description of the tab view: every control plus the selected pane.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRender {
    /// One control per category, in catalog order
    pub controls: Vec<NavControl>,
    /// Key of the selected category
    pub selected: String,
    /// Card title of the selected category
    pub title: String,
    /// Content blocks of the selected category
    pub content: Vec<ContentBlock>,
}

impl TabRender {
    /// The control marked active.
    pub fn active_control(&self) -> Option<&NavControl> {
        self.controls.iter().find(|control| control.active)
    }
}

/// Header navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link caption
    pub label: String,
    /// Where the link points
    pub target: NavTarget,
}

/// Card of the static feature summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Card title
    pub title: String,
    /// Card body
    pub text: String,
}

/// One top-level region of the page, in layout order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum PageSection {
    /// Site title, navigation links and the compact-menu button
    Header {
        /// Site title
        title: String,
        /// Navigation links
        links: Vec<NavLink>,
        /// Trigger of the compact-menu button
        menu_trigger: TriggerId,
    },
    /// Welcome banner
    Hero {
        /// Banner heading
        title: String,
        /// Banner subheading
        tagline: String,
    },
    /// Tab view output
    Tabs(TabRender),
    /// Static feature summary
    Features {
        /// Section heading
        heading: String,
        /// Feature cards
        items: Vec<FeatureItem>,
    },
    /// Page footer
    Footer {
        /// Copyright line
        notice: String,
    },
}

impl PageSection {
    /// Short name of the section kind, used for logging and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            PageSection::Header { .. } => "header",
            PageSection::Hero { .. } => "hero",
            PageSection::Tabs(_) => "tabs",
            PageSection::Features { .. } => "features",
            PageSection::Footer { .. } => "footer",
        }
    }

    /// Trigger points exposed by this section, in display order.
    pub fn triggers(&self) -> Vec<&TriggerId> {
        match self {
            PageSection::Header { menu_trigger, .. } => vec![menu_trigger],
            PageSection::Tabs(tab) => tab.content.iter().filter_map(ContentBlock::trigger).collect(),
            _ => Vec::new(),
        }
    }
}
