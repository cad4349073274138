//! Terminal output formatting.

use colored::Colorize;
use kgb_core::{ExecutionResult, PipelineOutcome};

/// Print the outcome of a pipeline run.
pub fn print_outcome(outcome: &PipelineOutcome) {
    match outcome {
        PipelineOutcome::Unknown { reply } => {
            println!("{} {}", "AI Intent:".bold(), reply.trim().to_uppercase().yellow());
        }
        PipelineOutcome::Generate { statements, result } => {
            println!("{} {}", "AI Intent:".bold(), "GENERATE".cyan());
            if statements.is_empty() {
                println!("{}", "No valid queries found.".yellow());
                return;
            }
            for (i, statement) in statements.iter().enumerate() {
                let marker = statement_marker(i, result);
                println!("  {} {}", marker, statement);
            }
            print_result(result, statements.len());
        }
        PipelineOutcome::Answer { answer, context } => {
            println!("{} {}", "AI Intent:".bold(), "ANSWER".cyan());
            println!("{}", format!("({} edges of context)", context.len()).dimmed());
            println!();
            println!("{}", "Answer:".bold());
            println!("{}", answer.trim());
        }
    }
}

fn statement_marker(index: usize, result: &ExecutionResult) -> colored::ColoredString {
    match &result.failure {
        Some(f) if f.index == index => "✗".red(),
        _ if index < result.succeeded => "✓".green(),
        _ => "·".dimmed(),
    }
}

fn print_result(result: &ExecutionResult, total: usize) {
    match &result.failure {
        None => println!("\n{}", format!("Executed {} queries!", result.succeeded).green().bold()),
        Some(failure) => {
            println!(
                "\n{} executed {} of {} queries",
                "Error:".red().bold(),
                result.succeeded,
                total
            );
            println!(
                "  statement {} {}: {}",
                failure.index + 1,
                failure.kind,
                failure.message
            );
        }
    }
}
