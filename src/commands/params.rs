//! # Params Command
//!
//! Shows the effective permutation parameters and where they come from.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::Result;

use crate::{config::Config, id::IdCodec};

/// Executes the params command.
pub fn execute(exponent: Option<u64>) -> Result<()> {
    let config = Config::load()?.with_exponent(exponent);
    let codec = config.codec()?;

    let mut out = io::stdout().lock();
    writeln!(out, "source = {}", config.source())?;
    write_params(&codec, &mut out)
}

/// Writes the parameters as `key = value` lines.
pub fn write_params(codec: &IdCodec, out: &mut impl Write) -> Result<()> {
    let permuter = codec.permuter();
    let (p, q) = permuter.primes();

    writeln!(out, "P = {p}")?;
    writeln!(out, "Q = {q}")?;
    writeln!(out, "N = {}", permuter.modulus())?;
    writeln!(out, "F = {}", permuter.totient())?;
    writeln!(out, "E = {}", permuter.public_exponent())?;
    writeln!(out, "D = {}", permuter.private_exponent())?;
    writeln!(out, "length = {}", codec.text().width())?;
    writeln!(out, "id_space = {}", codec.text().capacity())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_default_params() {
        let mut out = Vec::new();
        write_params(&IdCodec::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("N = 2148498091\n"));
        assert!(text.contains("F = 2148399792\n"));
        assert!(text.contains("E = 127\n"));
        assert!(text.contains("D = 744327487\n"));
        assert!(text.contains("length = 7\n"));
        assert!(text.contains("id_space = 34359738368\n"));
        assert_eq!(text.matches("2148498091").count(), 1);
    }
}
