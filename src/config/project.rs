//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.permid` in the project
//! root. A project pins the parameters of one ID namespace.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::PROJECT_CONFIG_FILE;

/// Project configuration stored at .permid in project root.
/// Unset fields fall back to the global configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Public exponent override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent: Option<u64>,

    /// First prime factor override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime_p: Option<u64>,

    /// Second prime factor override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime_q: Option<u64>,
}

impl ProjectConfig {
    /// Finds the project root by searching for .permid file upward
    pub fn find_project_root() -> Option<PathBuf> {
        let mut current = env::current_dir().ok()?;

        loop {
            if current.join(PROJECT_CONFIG_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .permid in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }

    /// Saves the project config to .permid
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        let content = toml::to_string_pretty(self).context("Failed to serialize project config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write project config: {}", path.display()))
    }
}
