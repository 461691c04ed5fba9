//! # Commands
//!
//! CLI command implementations for permid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod decode;
pub mod encode;
pub mod init;
pub mod params;
pub mod setup;
pub mod stream;

pub use self::{
    completions::execute as completions,
    decode::{execute as decode, DecodeArgs},
    encode::{execute as encode, EncodeArgs},
    init::{execute as init, InitArgs},
    params::execute as params,
    setup::execute as setup,
    stream::{execute as stream, StreamArgs},
};
