//! # Decode Command
//!
//! Recovers counters from IDs. Meant for debugging and administration;
//! the hot path only ever encodes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::{config::Config, id::IdCodec};

/// Arguments for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    pub ids: Vec<String>,
    pub exponent: Option<u64>,
}

/// Executes the decode command.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let codec = Config::load()?.with_exponent(args.exponent).codec()?;
    let mut out = io::stdout().lock();
    write_counters(&codec, &args.ids, &mut out)
}

/// Writes the counter for each ID, stopping at the first malformed one.
pub fn write_counters(codec: &IdCodec, ids: &[String], out: &mut impl Write) -> Result<()> {
    for id in ids {
        let counter = codec
            .decode(id.trim())
            .with_context(|| format!("Cannot decode ID '{id}'"))?;
        writeln!(out, "{counter}")?;
    }
    out.flush()?;
    Ok(())
}
