//! # permid
//!
//! Short, URL-safe, human-typable identifiers from a monotonically increasing
//! counter.
//!
//! Consecutive counters map to IDs that look unrelated, yet every ID decodes
//! back to exactly one counter:
//!
//! ```
//! let id = permid::encode_id(12345).unwrap();
//! assert_eq!(id, "0XXZ0M1");
//! assert_eq!(permid::decode_id(&id).unwrap(), 12345);
//! ```
//!
//! ## Features
//!
//! - **Permutation**: RSA-style `x^E mod N` bijection scrambles counter order
//! - **Readable**: 7-character base-32 IDs without I, L, O or T
//! - **Reversible**: decode any ID back to its counter with the same parameters
//! - **Configurable**: per-project exponents pinned in a `.permid` file
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::IdError;
pub use id::{decode_id, encode_id, IdCodec, Permuter, TextCodec};
