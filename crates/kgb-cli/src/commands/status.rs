//! Service status.

use anyhow::Result;
use colored::Colorize;
use kgb_core::{AppConfig, ModelInvoker};

pub async fn execute(config: &AppConfig) -> Result<()> {
    println!("{}", "Knowledge Graph Status".bold());
    println!("{}", "─".repeat(40));

    match super::connect_graph(config).await {
        Ok(graph) => {
            let counts = graph.get_counts().await?;
            println!("  Database:      {}", "connected".green());
            println!("  Nodes:         {}", counts.nodes.to_string().cyan());
            println!("  Relationships: {}", counts.relationships.to_string().cyan());
        }
        Err(e) => println!("  Database:      {} ({:#})", "unreachable".red(), e),
    }

    let (model, _) = super::load_model(config)?;
    if model.is_available().await {
        println!("  Model:         {} {}", model.model().cyan(), "ready".green());
    } else {
        println!("  Model:         {} {}", model.model().cyan(), "unavailable".red());
    }

    println!("{}", "─".repeat(40));
    Ok(())
}
