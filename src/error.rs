//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for pulp-search front-ends.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the binary and server edges.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a search catalog fails.
///
/// Searching itself never fails; only turning catalog data into a [`Catalog`]
/// can.
///
/// [`Catalog`]: crate::catalog::Catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid TOML or does not match the entry schema.
    #[error("failed to parse catalog {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// An entry is missing a required value.
    #[error("catalog entry #{index} ('{title}') has an empty `{field}`")]
    MissingField {
        index: usize,
        title: String,
        field: &'static str,
    },

    /// The catalog document declares no entries at all.
    #[error("catalog {origin} contains no entries")]
    Empty { origin: String },
}
