//! # Stream Command
//!
//! Streams IDs for consecutive counters to stdout. Each counter is used once;
//! the stream ends at the requested count, at the end of the domain, or when
//! the reader goes away (e.g. `permid stream | head`).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufWriter, ErrorKind, Write};

use anyhow::Result;

use crate::{config::Config, id::IdCodec};

/// Arguments for the stream command
#[derive(Debug, Clone)]
pub struct StreamArgs {
    /// First counter to encode
    pub start: u64,
    /// Maximum number of IDs to emit (until the domain ends if unset)
    pub count: Option<u64>,
    pub exponent: Option<u64>,
}

impl Default for StreamArgs {
    fn default() -> Self {
        Self {
            start: 1,
            count: None,
            exponent: None,
        }
    }
}

/// Executes the stream command.
pub fn execute(args: &StreamArgs) -> Result<()> {
    let codec = Config::load()?.with_exponent(args.exponent).codec()?;
    let mut out = BufWriter::new(io::stdout().lock());

    match write_stream(&codec, args.start, args.count, &mut out) {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.map(|_| ()).map_err(Into::into),
    }
}

/// Writes IDs for `start..` and returns how many were written.
pub fn write_stream(
    codec: &IdCodec,
    start: u64,
    count: Option<u64>,
    out: &mut impl Write,
) -> io::Result<u64> {
    let modulus = codec.permuter().modulus();
    let end = count.map_or(modulus, |count| start.saturating_add(count).min(modulus));

    let mut written = 0;
    for counter in start..end {
        let id = codec
            .encode(counter)
            .map_err(|err| io::Error::new(ErrorKind::InvalidInput, err))?;
        writeln!(out, "{id}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
