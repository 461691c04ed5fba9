//! # UI Utilities
//!
//! Status messages for humans. Everything here goes to stderr so that
//! stdout stays a plain, line-separated list of IDs or counters.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Prints a green check followed by the message.
pub fn success(message: impl Display) {
    eprintln!("{} {message}", "✓".green());
}

/// Prints a yellow warning.
pub fn warning(message: impl Display) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Prints an indented `label value` detail line.
pub fn detail(label: &str, value: impl Display) {
    eprintln!("  {} {value}", label.dimmed());
}

/// Prints an error with its full context chain.
pub fn error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}
