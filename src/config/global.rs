//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/permid/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXPONENT, DEFAULT_PRIME_P, DEFAULT_PRIME_Q, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["exponent", "prime_p", "prime_q"];

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/permid/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Public exponent E
    #[serde(default = "default_exponent")]
    pub exponent: u64,

    /// First prime factor P of the modulus
    #[serde(default = "default_prime_p")]
    pub prime_p: u64,

    /// Second prime factor Q of the modulus
    #[serde(default = "default_prime_q")]
    pub prime_q: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            prime_p: DEFAULT_PRIME_P,
            prime_q: DEFAULT_PRIME_Q,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_exponent() -> u64 {
    DEFAULT_EXPONENT
}

#[allow(clippy::missing_const_for_fn)]
fn default_prime_p() -> u64 {
    DEFAULT_PRIME_P
}

#[allow(clippy::missing_const_for_fn)]
fn default_prime_q() -> u64 {
    DEFAULT_PRIME_Q
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/permid/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(
                home.join(".config")
                    .join(GLOBAL_CONFIG_DIR)
                    .join(GLOBAL_CONFIG_FILENAME),
            );
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `permid setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    fn save_with_comments(path: &PathBuf, config: &Self) -> Result<()> {
        let content = format!(
            r#"# permid Global Configuration
# Parameters used by every project that has no .permid file of its own.
# Location: ~/.config/permid/config
#
# WARNING: IDs can only be decoded with the parameters that produced them.
# Changing any value below after IDs have been issued breaks decoding.

# Public exponent E. Must be coprime with (prime_p - 1) * (prime_q - 1).
# Small values keep encoding fast. Default: {DEFAULT_EXPONENT}
exponent = {exponent}

# Prime factors of the modulus N = prime_p * prime_q.
# N bounds the number of distinct IDs and must fit in 7 base-32 characters.
# Defaults: {DEFAULT_PRIME_P} and {DEFAULT_PRIME_Q}
prime_p = {prime_p}
prime_q = {prime_q}
"#,
            exponent = config.exponent,
            prime_p = config.prime_p,
            prime_q = config.prime_q,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Returns unknown field names present in the global config file.
    pub fn unknown_fields() -> Result<Vec<String>> {
        let Some(path) = Self::path().filter(|p| p.exists()) else {
            return Ok(Vec::new());
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        Ok(table
            .keys()
            .filter(|key| !VALID_FIELDS.contains(&key.as_str()))
            .cloned()
            .collect())
    }
}
