//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use kgb_core::AppConfig;
use kgb_web::AppState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (default: kgb-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: &AppConfig) -> Result<()> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    let graph = super::connect_graph(config).await?;
    let (model, prompts) = super::load_model(config)?;
    let state = AppState::new(Arc::new(model), Arc::new(graph), prompts);

    println!();
    println!("  {} {}", "KGB".cyan().bold(), "Knowledge Graph Builder".bold());
    println!();
    println!("  {}  http://{}:{}", "Dashboard".green(), host, port);
    println!("  {}        http://{}:{}/api", "API".green(), host, port);
    println!("  {}      {}", "Neo4j".green(), config.graph.uri);
    println!("  {}      {} @ {}", "Model".green(), config.model.model, config.model.base_url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    kgb_web::run_server(state, &host, port).await?;

    Ok(())
}
