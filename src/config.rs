//! Runtime configuration: where the catalog comes from.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::search::SearchEngine;
use anyhow::Context;
use std::borrow::Cow;
use std::path::PathBuf;

/// Environment variable naming a replacement catalog file.
pub const CATALOG_ENV: &str = "PULP_SEARCH_CATALOG";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Replacement catalog file. `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Load the configured catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                let path = PathBuf::from(&*expand_tilde(&path.to_string_lossy()));
                Catalog::load(&path)
                    .with_context(|| format!("Failed to load catalog from {}", path.display()))
            }
            None => {
                let catalog = Catalog::builtin().context("Built-in catalog is invalid")?;
                tracing::debug!("Using built-in catalog ({} entries)", catalog.len());
                Ok(catalog)
            }
        }
    }

    /// Load the catalog and wrap it in a search engine.
    pub fn engine(&self) -> Result<SearchEngine> {
        Ok(SearchEngine::new(self.load_catalog()?))
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
