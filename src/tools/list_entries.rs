//! Catalog listing handler.

use crate::catalog::EntryKind;
use crate::format::render_listing;
use crate::search::SearchEngine;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListEntriesRequest {
    /// Only list entries of this type
    #[serde(default)]
    pub kind: Option<EntryKind>,
}

pub fn handle_list_entries(engine: &SearchEngine, request: &ListEntriesRequest) -> String {
    let catalog = engine.catalog();
    let entries: Vec<_> = match request.kind {
        Some(kind) => catalog.of_kind(kind).map(|entry| &**entry).collect(),
        None => catalog.entries().iter().map(|entry| &**entry).collect(),
    };

    let heading = match request.kind {
        Some(kind) => format!("{} entries of type {}:\n\n", entries.len(), kind),
        None => format!("{} entries:\n\n", entries.len()),
    };

    heading + &render_listing(entries)
}
