//! MCP server exposing catalog search as tools.

use crate::search::SearchEngine;
use crate::tools::inspect_entry::{InspectEntryRequest, handle_inspect_entry};
use crate::tools::list_entries::{ListEntriesRequest, handle_list_entries};
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for Pulp Image documentation search.
#[derive(Clone)]
pub struct SearchServer {
    /// Shared read-only engine
    engine: Arc<SearchEngine>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for SearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchServer")
            .field("entries", &self.engine.catalog().len())
            .finish()
    }
}

#[tool_router]
impl SearchServer {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            tool_router: Self::tool_router(),
        }
    }

    pub fn engine(&self) -> &Arc<SearchEngine> {
        &self.engine
    }

    #[tool(
        description = "Fuzzy-search the Pulp Image documentation: CLI flags, CLI examples, UI options, image formats, pages, downloads and support links. Returns up to 10 entries ranked by relevance, with their URL and example command.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.engine, &request)
    }

    #[tool(
        description = "List catalog entries, optionally restricted to one type (cli, example, ui, format, page, download, action).",
        input_schema = inline_schema_for_type::<ListEntriesRequest>()
    )]
    async fn list_entries(
        &self,
        Parameters(request): Parameters<ListEntriesRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_list_entries(&self.engine, &request))
    }

    #[tool(
        description = "Show every field of one catalog entry by its exact title. Suggests close titles when there is no exact match.",
        input_schema = inline_schema_for_type::<InspectEntryRequest>()
    )]
    async fn inspect_entry(
        &self,
        Parameters(request): Parameters<InspectEntryRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_inspect_entry(&self.engine, &request))
    }
}

#[tool_handler]
impl ServerHandler for SearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "pulp-search: fuzzy search over the Pulp Image documentation. \
                 Use search for free-text queries, list_entries to browse by type, \
                 and inspect_entry for the full record of one entry.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays the entry type filter as a dropdown rather than a raw JSON input field.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => Arc::new(object),
        other => {
            tracing::error!("Schema serialization produced non-object value: {:?}", other);
            Arc::new(JsonObject::new())
        }
    }
}
