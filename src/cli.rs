use crate::catalog::EntryKind;
use crate::config::{CATALOG_ENV, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pulp-search")]
#[command(about = "Fuzzy search over the Pulp Image documentation", long_about = None)]
pub struct Cli {
    /// Catalog file to search instead of the built-in one
    #[arg(long, global = true, env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one search and print the ranked results
    Query {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog entries
    List {
        #[arg(short, long, value_enum)]
        kind: Option<EntryKind>,
    },
    /// Interactive search reading queries and /commands from stdin
    Repl,
    /// Serve the search tools over MCP on stdio
    Serve,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            catalog_path: self.catalog.clone(),
        }
    }
}
