//! Print the stored edges.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use kgb_core::{fetch_context, AppConfig, CONTEXT_LIMIT};

#[derive(Args)]
pub struct GraphArgs {
    /// Maximum number of edges (capped at 50)
    #[arg(long, default_value = "50")]
    pub limit: usize,
}

pub async fn execute(args: GraphArgs, config: &AppConfig) -> Result<()> {
    let graph = super::connect_graph(config).await?;
    let edges = fetch_context(&graph, args.limit.min(CONTEXT_LIMIT)).await?;

    if edges.is_empty() {
        println!(
            "{}",
            "Graph is empty. Run 'kgb run <text>' to generate some data first.".dimmed()
        );
        return Ok(());
    }

    for edge in &edges {
        println!(
            "  {} {}{}{} {}",
            edge.source.green(),
            "-[".dimmed(),
            edge.relation.yellow(),
            "]->".dimmed(),
            edge.target.blue()
        );
    }
    println!("\n{} edges.", edges.len().to_string().bold());

    Ok(())
}
