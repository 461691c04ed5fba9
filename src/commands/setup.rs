//! # Setup Command
//!
//! One-time setup for permid: creates the global config with commented
//! defaults and checks an existing one for unknown fields.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, id::Permuter, ui};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    eprintln!("{}\n", "Setting up permid...".bold());

    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::success(format!("Created global config: {}", path.display()));
    } else {
        ui::success(format!("Global config already exists: {}", path.display()));
        for field in GlobalConfig::unknown_fields()? {
            ui::warning(format!("Unknown field '{field}' is ignored"));
        }
    }

    // Surface invalid parameters now rather than on first encode
    let config = GlobalConfig::load()?;
    Permuter::new(config.prime_p, config.prime_q, config.exponent)
        .with_context(|| format!("Invalid parameters in {}", path.display()))?;

    eprintln!("\n{} Setup complete!", "✓".green().bold());

    Ok(())
}
