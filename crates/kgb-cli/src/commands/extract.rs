//! Offline Cypher extraction.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct ExtractArgs {
    /// File holding raw model output (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

pub fn execute(args: ExtractArgs) -> Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let statements = kgb_core::extract(&raw);
    if statements.is_empty() {
        eprintln!("{}", "No valid queries found.".yellow());
        return Ok(());
    }

    for statement in &statements {
        println!("{};", statement);
    }
    Ok(())
}
