//! Command implementations.

pub mod check;
pub mod checks;
pub mod evaluate;

use std::path::Path;

use autoreview::CheckContext;

/// Load and validate a check context from a JSON file.
pub fn load_context(path: &Path) -> Result<CheckContext, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Context file not found: {}", path.display()).into());
    }

    let json = std::fs::read_to_string(path)?;
    let context = CheckContext::from_json(&json)?;
    context.config.validate()?;
    Ok(context)
}
