//! Evaluate command - run the full pipeline and print the decision.

use std::path::PathBuf;

use colored::Colorize;

use autoreview::{CheckStatus, Outcome};

use super::load_context;

pub fn run(
    file: PathBuf,
    json_output: bool,
    show_trace: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let context = load_context(&file)?;

    if verbose {
        eprintln!(
            "Evaluating revision {} on '{}'...",
            context.revision.revid, context.page.title
        );
    }

    let decision = autoreview::evaluate(&context);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    let outcome = match decision.outcome {
        Outcome::Approve => decision.outcome.label().green().bold(),
        Outcome::Reject => decision.outcome.label().red().bold(),
        Outcome::ManualReview => decision.outcome.label().yellow().bold(),
    };
    println!("{} ({})", outcome, decision.reason.white());

    if show_trace || verbose {
        println!();
        println!("{}", "Checks:".yellow().bold());
        for result in &decision.trace {
            let status = match result.status {
                CheckStatus::Ok => result.status.label().green(),
                CheckStatus::Fail => result.status.label().red(),
                CheckStatus::NotOk => result.status.label().dimmed(),
            };
            println!(
                "  {:22} {:8} {}",
                result.check.title().white(),
                status,
                result.label.dimmed()
            );
        }
    }

    Ok(())
}
