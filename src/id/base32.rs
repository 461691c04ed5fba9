//! # Base32 Encoding
//!
//! Fixed-width base-32 encoding for human-readable, URL-safe identifiers.
//! Uses alphabet: 0-9, A-Z excluding I, L, O, T (32 characters).
//!
//! The first character carries the least-significant 5 bits, so `1` encodes
//! as `1000000` at the default width.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    constants::{ALPHABET, BITS_PER_CHAR, ID_LENGTH},
    error::IdError,
};

/// Widest codec whose capacity still fits in a `u64`.
pub const MAX_WIDTH: usize = 12;

/// Marker for bytes that are not part of the alphabet.
const INVALID: u8 = 0xFF;

/// Reverse lookup table: ASCII byte -> alphabet index.
const CHARSMAP: [u8; 128] = build_charsmap();

const fn build_charsmap() -> [u8; 128] {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Returns the alphabet symbol for a 5-bit group.
///
/// # Panics
/// Panics if `index >= 32`.
pub const fn symbol(index: u8) -> char {
    ALPHABET[index as usize] as char
}

/// Returns the 5-bit value of an alphabet symbol.
///
/// Lowercase letters are accepted for their uppercase counterparts.
pub fn index_of(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match CHARSMAP[ch.to_ascii_uppercase() as usize] {
        INVALID => None,
        idx => Some(idx),
    }
}

/// Fixed-length base-32 codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextCodec {
    width: usize,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self { width: ID_LENGTH }
    }
}

impl TextCodec {
    /// Creates a codec producing strings of exactly `width` characters.
    pub fn new(width: usize) -> Result<Self, IdError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(IdError::construction(format!(
                "ID length must be between 1 and {MAX_WIDTH}, got {width}"
            )));
        }
        Ok(Self { width })
    }

    /// Number of characters per encoded value.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of distinct values representable: `32^width`.
    pub const fn capacity(&self) -> u64 {
        1 << (self.width as u32 * BITS_PER_CHAR)
    }

    /// Encodes `value` into exactly `width` characters, least-significant group first.
    ///
    /// Values that need more than `width` characters are rejected rather
    /// than truncated.
    pub fn encode(&self, mut value: u64) -> Result<String, IdError> {
        if value >= self.capacity() {
            return Err(IdError::ValueTooLarge {
                value,
                width: self.width,
            });
        }

        let mut result = String::with_capacity(self.width);
        for _ in 0..self.width {
            result.push(symbol((value & 0x1F) as u8));
            value >>= BITS_PER_CHAR;
        }
        Ok(result)
    }

    /// Decodes a string produced by [`TextCodec::encode`].
    ///
    /// The input must be exactly `width` alphabet symbols long.
    pub fn decode(&self, s: &str) -> Result<u64, IdError> {
        let actual = s.chars().count();
        if actual != self.width {
            return Err(IdError::InvalidLength {
                expected: self.width,
                actual,
            });
        }

        let mut value = 0u64;
        for (position, ch) in s.chars().enumerate() {
            let digit = index_of(ch).ok_or(IdError::InvalidCharacter { ch, position })?;
            value |= u64::from(digit) << (position as u32 * BITS_PER_CHAR);
        }
        Ok(value)
    }
}
