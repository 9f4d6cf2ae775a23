//! Check command - run a single check outside the pipeline.

use std::path::PathBuf;

use colored::Colorize;

use autoreview::{Autoreview, CheckStatus, CANONICAL_ORDER};

use super::load_context;

pub fn run(
    file: PathBuf,
    check: String,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let context = load_context(&file)?;

    let engine = Autoreview::new();
    let Some(result) = engine.run_single_check(&check, &context) else {
        let known: Vec<&str> = CANONICAL_ORDER.iter().map(|id| id.as_str()).collect();
        return Err(format!(
            "Unknown check '{}'. Available checks: {}.",
            check,
            known.join(", ")
        )
        .into());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let status = match result.status {
        CheckStatus::Ok => result.status.label().green().bold(),
        CheckStatus::Fail => result.status.label().red().bold(),
        CheckStatus::NotOk => result.status.label().yellow().bold(),
    };
    println!("{}: {}", result.check.title().white().bold(), status);
    println!("  reason: {}", result.reason);
    println!("  {}", result.label.dimmed());

    Ok(())
}
