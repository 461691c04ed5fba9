//! # Constants
//!
//! Centralized constants for magic values used throughout permid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Permutation Parameters
// =============================================================================

/// Default first prime factor of the modulus (largest prime below 2^16).
pub const DEFAULT_PRIME_P: u64 = 65497;

/// Default second prime factor of the modulus (near 2^15).
pub const DEFAULT_PRIME_Q: u64 = 32803;

/// Default public exponent. Small so that encoding stays cheap.
pub const DEFAULT_EXPONENT: u64 = 127;

// =============================================================================
// ID Format
// =============================================================================

/// Number of characters in an encoded ID.
pub const ID_LENGTH: usize = 7;

/// Bits carried by a single base-32 character.
pub const BITS_PER_CHAR: u32 = 5;

/// Base-32 alphabet: digits plus letters without I, L, O and T.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSUVWXYZ";

// =============================================================================
// File System
// =============================================================================

/// Project configuration file name (searched upward from the working directory).
pub const PROJECT_CONFIG_FILE: &str = ".permid";

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "permid";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
