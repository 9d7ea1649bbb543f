//! Configuration management for Northwind
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (NORTHWIND_* prefix, `__` between nested keys)
//! 2. northwind.local.toml (gitignored, local overrides)
//! 3. northwind.toml (git-tracked, project config)
//! 4. ~/.config/northwind/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! ```toml
//! [data]
//! path = "fixtures/northwind.json"
//!
//! [queries]
//! default_threshold = 6520
//! phone_check = "literal"
//!
//! [queries.tiers]
//! cheap_max = 20
//! middle_max = 60
//! ```

use northwind_types::Money;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use northwind_query::{PhoneCheck, QuerySettings, TierBounds};
pub use paths::{ConfigFiles, LOCAL_FILE, PROJECT_FILE};

/// Main Northwind configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NorthwindConfig {
    pub data: DataConfig,
    pub queries: QuerySettings,
    pub output: OutputConfig,
}

/// Where the dataset comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// JSON dataset on disk. The embedded fixture is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl NorthwindConfig {
    /// Read a single TOML file, without layering
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no routine can work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiers = self.queries.tiers;
        if !tiers.is_ordered() {
            return Err(ConfigError::UnorderedTiers {
                cheap_max: tiers.cheap_max,
                middle_max: tiers.middle_max,
            });
        }
        if tiers.cheap_max < Money::ZERO {
            return Err(ConfigError::NegativeTier(tiers.cheap_max));
        }
        Ok(())
    }

    /// Resolve relative paths to absolute
    pub fn resolve_paths(&mut self, base_dir: impl AsRef<Path>) {
        let base = base_dir.as_ref();

        if let Some(path) = &self.data.path {
            if path.is_relative() {
                self.data.path = Some(base.join(path));
            }
        }
    }
}
