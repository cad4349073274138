//! Single pipeline run from the terminal.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use kgb_core::{AppConfig, Pipeline};

use crate::output;

#[derive(Args)]
pub struct RunArgs {
    /// Text to store in the graph, or a question about it
    pub text: String,
}

pub async fn execute(args: RunArgs, config: &AppConfig) -> Result<()> {
    if args.text.trim().is_empty() {
        bail!("Please type something.");
    }

    let graph = super::connect_graph(config).await?;
    let (model, prompts) = super::load_model(config)?;

    println!("{}", "Routing...".dimmed());
    let outcome = Pipeline::new(&model, &graph, &prompts)
        .run(&args.text)
        .await?;

    output::print_outcome(&outcome);

    if let Some(failure) = outcome.batch_failure() {
        bail!(
            "Write batch stopped at statement {} ({})",
            failure.index + 1,
            failure.kind
        );
    }
    Ok(())
}
