pub mod inspect_entry;
pub mod list_entries;
pub mod search;

pub use inspect_entry::*;
pub use list_entries::*;
pub use search::*;
