//! Catalog entry records and their kinds.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a searchable entry.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Cli,
    Example,
    Ui,
    Format,
    Page,
    Download,
    Action,
}

impl EntryKind {
    /// Short label shown next to a result.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cli => "CLI",
            Self::Example => "Example",
            Self::Ui => "UI",
            Self::Format => "Format",
            Self::Page => "Page",
            Self::Download => "Download",
            Self::Action => "Action",
        }
    }

    /// Glyph shown at the start of a result row.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Cli => "⌘",
            Self::Ui => "🎛️",
            Self::Example => "📝",
            Self::Format => "📄",
            Self::Page => "📖",
            Self::Download => "⬇️",
            Self::Action => "🔗",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single searchable record.
///
/// Entries are validated when a [`Catalog`](super::Catalog) is built and are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub title: String,
    pub description: String,
    /// Example invocation, for entries that document a command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Entry {
    /// Create an entry without command or keywords.
    pub fn new(
        kind: EntryKind,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            command: None,
            url: url.into(),
            keywords: Vec::new(),
        }
    }

    /// Attach an example command.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Attach recall keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Lower-case and trim keywords, dropping the ones left empty.
    pub(crate) fn normalize_keywords(&mut self) {
        self.keywords = self
            .keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
    }

    /// Name of the first required field that is blank, if any.
    pub(crate) fn first_blank_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.description.trim().is_empty() {
            Some("description")
        } else if self.url.trim().is_empty() {
            Some("url")
        } else {
            None
        }
    }
}
