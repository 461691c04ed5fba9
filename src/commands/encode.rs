//! # Encode Command
//!
//! Converts counters into IDs, one per line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::{config::Config, id::IdCodec};

/// Arguments for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeArgs {
    pub counters: Vec<u64>,
    pub exponent: Option<u64>,
}

/// Executes the encode command.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    let codec = Config::load()?.with_exponent(args.exponent).codec()?;
    let mut out = io::stdout().lock();
    write_ids(&codec, &args.counters, &mut out)
}

/// Writes the ID for each counter, stopping at the first invalid one.
pub fn write_ids(codec: &IdCodec, counters: &[u64], out: &mut impl Write) -> Result<()> {
    for &counter in counters {
        let id = codec
            .encode(counter)
            .with_context(|| format!("Cannot encode counter {counter}"))?;
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(())
}
