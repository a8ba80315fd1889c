//! Error taxonomy for the page model.
//!
//! Every variant signals a mismatch between the catalog and whoever talks to
//! it. None of them is recovered from by picking a default category.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the catalog, the tab view and the page composer.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Lookup by key found no category.
    #[error("no category with key `{key}` in the content catalog")]
    NotFound { key: String },

    /// A selection named a key absent from the catalog. State is unchanged.
    #[error("cannot select `{key}`: not a key of the content catalog")]
    InvalidSelection { key: String },

    /// Two categories share a key.
    #[error("duplicate category key `{key}`")]
    DuplicateKey { key: String },

    /// A key that cannot name a page file or an in-page anchor.
    #[error("invalid category key `{key}`: use lowercase letters, digits, `-` or `_` (and not `index`)")]
    InvalidKey { key: String },

    /// A catalog needs at least one category to have an initial selection.
    #[error("content catalog has no categories")]
    EmptyCatalog,

    /// A trigger was fired that the composed page does not expose.
    #[error("trigger `{id}` is not present on the page")]
    UnknownTrigger { id: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}")]
    CatalogParse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, PortalError>;
