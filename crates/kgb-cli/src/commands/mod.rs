//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kgb_core::{AppConfig, PromptStore};
use kgb_graph::GraphClient;
use kgb_llm::OllamaChat;
use std::path::PathBuf;

pub mod extract;
pub mod graph;
pub mod run;
pub mod serve;
pub mod status;

/// Knowledge Graph Builder - text in, Neo4j graph out
#[derive(Parser)]
#[command(name = "kgb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (defaults to ./kgb.toml when present)
    #[arg(short, long, global = true, env = "KGB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Route text and generate graph data or answer a question
    Run(run::RunArgs),

    /// Extract Cypher statements from model output (offline)
    Extract(extract::ExtractArgs),

    /// Print the edges currently in the graph
    Graph(graph::GraphArgs),

    /// Show graph and model status
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config_path = self.config.as_deref();

        match self.command {
            Commands::Serve(args) => serve::execute(args, &AppConfig::load(config_path)?).await,
            Commands::Run(args) => run::execute(args, &AppConfig::load(config_path)?).await,
            Commands::Graph(args) => graph::execute(args, &AppConfig::load(config_path)?).await,
            Commands::Status => status::execute(&AppConfig::load(config_path)?).await,
            Commands::Extract(args) => extract::execute(args),
        }
    }
}

/// Connect to Neo4j.
pub(crate) async fn connect_graph(config: &AppConfig) -> Result<GraphClient> {
    GraphClient::connect(&config.graph)
        .await
        .context("Database connection failed. Check NEO4J_URI, NEO4J_USERNAME and NEO4J_PASSWORD")
}

/// Build the model client and load the prompt templates.
pub(crate) fn load_model(config: &AppConfig) -> Result<(OllamaChat, PromptStore)> {
    let prompts = PromptStore::from_dir(config.prompts.dir.as_deref())?;
    Ok((OllamaChat::new(&config.model), prompts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_config() {
        let cli = Cli::try_parse_from(["kgb", "--config", "x.toml", "run", "Ada knows Bob"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Run(args) if args.text == "Ada knows Bob"));
    }

    #[test]
    fn test_log_file_requires_log() {
        assert!(Cli::try_parse_from(["kgb", "serve", "--log-file", "a.log"]).is_err());
        assert!(Cli::try_parse_from(["kgb", "serve", "--log", "--log-file", "a.log"]).is_ok());
    }
}
