//! # ID Generation
//!
//! Turns a monotonically increasing counter into a short, non-sequential ID
//! and back.
//!
//! `id = base32(counter^E mod N)`, `counter = (base32⁻¹(id))^D mod N`.
//!
//! With the default parameters (`P = 65497`, `Q = 32803`, `E = 127`) the
//! domain holds 2,148,498,091 counters and every ID is 7 characters long
//! (e.g. counter `2` becomes `K61PVA0`).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base32;
pub mod math;
pub mod permuter;

pub use self::{base32::TextCodec, permuter::Permuter};
use crate::error::IdError;

/// Permuter and text codec for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdCodec {
    permuter: Permuter,
    text: TextCodec,
}

impl IdCodec {
    /// Combines a permuter with a text codec.
    ///
    /// Every permuted value must fit in the codec's width.
    pub fn new(permuter: Permuter, text: TextCodec) -> Result<Self, IdError> {
        if permuter.modulus() > text.capacity() {
            return Err(IdError::construction(format!(
                "modulus {} does not fit in {} base-32 characters",
                permuter.modulus(),
                text.width()
            )));
        }
        Ok(Self { permuter, text })
    }

    pub const fn permuter(&self) -> &Permuter {
        &self.permuter
    }

    pub const fn text(&self) -> &TextCodec {
        &self.text
    }

    /// Encodes a counter in `[0, N)` into an ID.
    pub fn encode(&self, counter: u64) -> Result<String, IdError> {
        let permuted = self.permuter.encrypt(counter)?;
        self.text.encode(permuted)
    }

    /// Recovers the counter from an ID produced with the same parameters.
    pub fn decode(&self, id: &str) -> Result<u64, IdError> {
        let permuted = self.text.decode(id)?;
        self.permuter.decrypt(permuted)
    }
}

/// Encodes a counter with the default parameters.
pub fn encode_id(counter: u64) -> Result<String, IdError> {
    IdCodec::default().encode(counter)
}

/// Decodes an ID produced by [`encode_id`].
pub fn decode_id(id: &str) -> Result<u64, IdError> {
    IdCodec::default().decode(id)
}
