//! Checks command - list the registry in pipeline order.

use colored::Colorize;

use autoreview::CANONICAL_ORDER;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        let ids: Vec<&str> = CANONICAL_ORDER.iter().map(|id| id.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    println!("{}", "Checks in pipeline order:".yellow().bold());
    for (position, id) in CANONICAL_ORDER.iter().enumerate() {
        let role = if id.decides_approval() {
            "can approve".green()
        } else {
            "reject only".dimmed()
        };
        println!(
            "  {}. {:22} {:22} ({})",
            position + 1,
            id.as_str().white().bold(),
            id.title(),
            role
        );
    }

    Ok(())
}
