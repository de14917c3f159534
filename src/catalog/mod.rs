//! The fixed set of searchable documentation entries.
//!
//! A catalog is built once, validated, and then shared read-only. The default
//! catalog ships inside the binary as TOML (`builtin.toml`); a replacement file
//! with the same layout can be loaded with [`Catalog::load`].

mod entry;

pub use entry::{Entry, EntryKind};

use crate::error::CatalogError;
use rapidfuzz::distance::jaro_winkler;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// On-disk layout: a list of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

/// A title that resembles a lookup that did not match anything.
#[derive(Debug, Clone)]
pub struct TitleSuggestion {
    pub entry: Arc<Entry>,
    pub score: f64,
}

/// Immutable, validated collection of entries in declaration order.
///
/// Cloning is cheap: entries live behind a shared `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Arc<[Arc<Entry>]>,
}

impl Catalog {
    /// Build a catalog from entries, validating required fields and
    /// normalizing keywords.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, mut entry)| {
                if let Some(field) = entry.first_blank_field() {
                    return Err(CatalogError::MissingField {
                        index,
                        title: entry.title,
                        field,
                    });
                }
                entry.normalize_keywords();
                Ok(Arc::new(entry))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Parse a TOML catalog document. `origin` names the source in errors.
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source).map_err(|source| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        if file.entries.is_empty() {
            return Err(CatalogError::Empty {
                origin: origin.to_string(),
            });
        }

        Self::from_entries(file.entries)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_toml_str(&source, &path.display().to_string())?;
        tracing::info!(
            "Loaded catalog from {} ({} entries)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG, "<builtin>")
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of a single kind, in declaration order.
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &Arc<Entry>> {
        self.entries.iter().filter(move |entry| entry.kind == kind)
    }

    /// Look up an entry by title, ignoring case and surrounding whitespace.
    pub fn find_by_title(&self, title: &str) -> Option<&Arc<Entry>> {
        let wanted = title.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.title.to_lowercase() == wanted)
    }

    /// Titles similar to `title`, best first, by Jaro-Winkler similarity.
    pub fn suggest_titles(&self, title: &str) -> Vec<TitleSuggestion> {
        let wanted = title.trim().to_lowercase();
        let mut suggestions: Vec<_> = self
            .entries
            .iter()
            .map(|entry| TitleSuggestion {
                entry: Arc::clone(entry),
                score: jaro_winkler::similarity(
                    wanted.chars(),
                    entry.title.to_lowercase().chars(),
                ),
            })
            .collect();
        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions
    }
}
