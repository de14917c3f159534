//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `builtin_engine`: a [`SearchEngine`] over the catalog shipped in the binary
//! - `tie_engine`: a small catalog where two entries score identically for "cli"
//!
//! [`TempCatalog`] writes a catalog TOML file into a temporary directory for
//! tests that exercise loading from disk.

use pulp_search::{Catalog, Entry, EntryKind, ScoredEntry, SearchEngine};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A catalog file inside a temporary directory, removed on drop.
#[allow(dead_code)] // Used by some integration test crates only
pub struct TempCatalog {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)] // Used by some integration test crates only
impl TempCatalog {
    /// Writes `content` to `catalog.toml` in a fresh temp directory.
    ///
    /// # Panics
    /// Panics if the directory or file cannot be created.
    pub fn new(content: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("catalog.toml");
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Engine over the built-in catalog.
#[allow(dead_code)] // Used by some integration test crates only
#[fixture]
pub fn builtin_engine() -> SearchEngine {
    SearchEngine::new(Catalog::builtin().expect("built-in catalog must load"))
}

/// Two CLI pages with identical scoring text, preceded and followed by entries
/// that score differently for "cli".
#[allow(dead_code)] // Used by some integration test crates only
#[fixture]
pub fn tie_engine() -> SearchEngine {
    let tied = |title: &str, url: &str| {
        Entry::new(EntryKind::Page, title, "Command-line documentation", url)
            .with_keywords(["cli", "terminal"])
    };
    let entries = vec![
        Entry::new(EntryKind::Page, "Homepage", "Main page", "/").with_keywords(["home"]),
        tied("CLI Guide A", "cli-a.html"),
        tied("CLI Guide B", "cli-b.html"),
        Entry::new(EntryKind::Action, "Install CLI", "Install the CLI globally", "install.html")
            .with_command("npm install -g pulp-image")
            .with_keywords(["install", "npm", "cli"]),
    ];
    SearchEngine::new(Catalog::from_entries(entries).expect("fixture catalog is valid"))
}

/// Titles of a result list, in order.
#[allow(dead_code)] // Used by some integration test crates only
pub fn titles(results: &[ScoredEntry]) -> Vec<&str> {
    results.iter().map(|r| r.entry.title.as_str()).collect()
}
