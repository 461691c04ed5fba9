//! # Init Command
//!
//! Pins the permutation parameters of a new ID namespace by writing a
//! `.permid` file in the current directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::env;

use anyhow::{Context, Result};

use crate::{
    config::{Config, ProjectConfig},
    constants::PROJECT_CONFIG_FILE,
    ui,
};

/// Arguments for the init command
#[derive(Debug, Clone, Copy, Default)]
pub struct InitArgs {
    /// Explicit exponent to pin
    pub exponent: Option<u64>,
    /// Pick a random valid exponent instead
    pub random_exponent: bool,
    /// Overwrite an existing .permid file
    pub force: bool,
}

/// Executes the init command.
pub fn execute(args: InitArgs) -> Result<()> {
    let root = env::current_dir().context("Cannot get current directory")?;
    let config_path = ProjectConfig::path(&root);

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Project already initialized (found {}). Use --force to overwrite, \
             but IDs issued with the old parameters will no longer decode.",
            config_path.display()
        );
    }

    // The file being replaced may be malformed, so --force starts from the global config
    let config = if args.force {
        Config::load_global()?
    } else {
        Config::load()?
    }
    .with_exponent(args.exponent);
    let mut codec = config.codec()?;

    if args.random_exponent {
        let permuter = codec.permuter();
        let exponent = permuter.random_exponent(&mut rand::rng());
        codec = config.with_exponent(Some(exponent)).codec()?;
    }

    let permuter = codec.permuter();
    let (p, q) = permuter.primes();
    let project = ProjectConfig {
        exponent: Some(permuter.public_exponent()),
        prime_p: Some(p),
        prime_q: Some(q),
    };
    project.save(&root)?;

    ui::success(format!("Initialized {PROJECT_CONFIG_FILE}"));
    ui::detail("Config:", config_path.display());
    ui::detail("Exponent:", permuter.public_exponent());
    ui::detail("Capacity:", permuter.modulus());

    Ok(())
}
