//! # Configuration
//!
//! Merged configuration combining global (~/.config/permid/config) and
//! project (.permid) settings. Command-line overrides win over both.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use self::{
    global::{set_home_override, GlobalConfig},
    project::ProjectConfig,
};
use crate::id::{IdCodec, Permuter, TextCodec};

/// Merged configuration with project settings overriding global
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Project configuration (default when no .permid file was found)
    pub project: ProjectConfig,

    /// Resolved project root path, if inside a project
    pub project_root: Option<PathBuf>,

    /// Exponent given on the command line
    pub exponent_override: Option<u64>,
}

impl Config {
    /// Loads configuration from both global and project sources
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;

        let project_root = ProjectConfig::find_project_root();
        let project = match &project_root {
            Some(root) => ProjectConfig::load(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            global,
            project,
            project_root,
            exponent_override: None,
        })
    }

    /// Loads the global configuration only, ignoring any .permid file
    pub fn load_global() -> Result<Self> {
        Ok(Self {
            global: GlobalConfig::load()?,
            project: ProjectConfig::default(),
            project_root: None,
            exponent_override: None,
        })
    }

    /// Applies a command-line exponent override
    #[must_use]
    pub fn with_exponent(mut self, exponent: Option<u64>) -> Self {
        if exponent.is_some() {
            self.exponent_override = exponent;
        }
        self
    }

    /// Returns the effective exponent (CLI > project > global)
    pub fn exponent(&self) -> u64 {
        self.exponent_override
            .or(self.project.exponent)
            .unwrap_or(self.global.exponent)
    }

    /// Returns the effective prime factors (project > global)
    pub fn primes(&self) -> (u64, u64) {
        (
            self.project.prime_p.unwrap_or(self.global.prime_p),
            self.project.prime_q.unwrap_or(self.global.prime_q),
        )
    }

    /// Describes where the parameters come from, for error context
    pub fn source(&self) -> String {
        if self.exponent_override.is_some() {
            return "--exponent".to_string();
        }
        if let Some(root) = &self.project_root {
            return ProjectConfig::path(root).display().to_string();
        }
        GlobalConfig::path()
            .filter(|path| path.exists())
            .map_or_else(
                || "default parameters".to_string(),
                |path| path.display().to_string(),
            )
    }

    /// Builds the validated codec for the effective parameters
    pub fn codec(&self) -> Result<IdCodec> {
        let (p, q) = self.primes();
        let permuter = Permuter::new(p, q, self.exponent())
            .with_context(|| format!("Invalid parameters from {}", self.source()))?;
        IdCodec::new(permuter, TextCodec::default())
            .with_context(|| format!("Invalid parameters from {}", self.source()))
    }
}
