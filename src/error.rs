//! # Errors
//!
//! Domain errors raised by the permutation and text encoding core.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors returned by [`crate::id`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// Parameters cannot form a valid permutation.
    #[error("invalid permutation parameters: {0}")]
    Construction(String),

    /// A decoded string contained a symbol outside the alphabet.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// A decoded string did not have the fixed ID length.
    #[error("invalid length {actual}, expected {expected} characters")]
    InvalidLength { expected: usize, actual: usize },

    /// Counter (or permuted value) outside `[0, N)`.
    #[error("value {value} is outside the domain [0, {modulus})")]
    OutOfRange { value: u64, modulus: u64 },

    /// Integer does not fit in the fixed number of base-32 characters.
    #[error("value {value} does not fit in {width} base-32 characters")]
    ValueTooLarge { value: u64, width: usize },
}

impl IdError {
    pub(crate) fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }
}
