pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod repl;
pub mod search;
pub mod server;
pub mod session;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, Entry, EntryKind};
pub use error::{CatalogError, Result};
pub use search::{MAX_RESULTS, ScoredEntry, SearchEngine, fuzzy_score, score_entry};
pub use server::SearchServer;
pub use session::{InputEvent, SearchSession, SessionEffect};
