use anyhow::Context;
use clap::Parser;
use pulp_search::cli::{Cli, Commands};
use pulp_search::format::render_query;
use pulp_search::tools::list_entries::{ListEntriesRequest, handle_list_entries};
use pulp_search::{SearchEngine, SearchServer, repl};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries results or the MCP protocol
    pulp_search::tracing::init();

    let cli = Cli::parse();
    let engine = cli.config().engine()?;

    match cli.command {
        Commands::Query { terms, json } => query(&engine, &terms.join(" "), json),
        Commands::List { kind } => {
            print!(
                "{}",
                handle_list_entries(&engine, &ListEntriesRequest { kind })
            );
            Ok(())
        }
        Commands::Repl => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl::run(&engine, stdin, tokio::io::stdout()).await
        }
        Commands::Serve => serve(engine).await,
    }
}

fn query(engine: &SearchEngine, query: &str, json: bool) -> anyhow::Result<()> {
    let results = engine.search(query);
    if json {
        let rendered =
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", rendered);
    } else {
        print!("{}", render_query(query, &results));
    }
    Ok(())
}

async fn serve(engine: SearchEngine) -> anyhow::Result<()> {
    tracing::info!(
        "Starting pulp-search MCP server ({} entries)",
        engine.catalog().len()
    );

    let service = SearchServer::new(engine)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error serving MCP server: {:?}", e);
        })?;

    service.waiting().await?;

    Ok(())
}
