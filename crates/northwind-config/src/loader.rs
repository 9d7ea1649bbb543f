//! Configuration loader with multi-source merging

use crate::{ConfigFiles, NorthwindConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "NORTHWIND".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "NORTHWIND")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/northwind/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<NorthwindConfig> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        let defaults = NorthwindConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2-4. User, project and local files (~/.config/northwind/config.toml,
        // northwind.toml, northwind.local.toml)
        let mut files = ConfigFiles::discover(&self.project_dir);
        if !self.user_config {
            files = files.without_user();
        }
        for file in files.existing() {
            debug!(path = %file.display(), "Reading config file");
            builder = builder.add_source(
                config::File::from(file.to_path_buf())
                    .required(true)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (NORTHWIND_QUERIES__PHONE_CHECK=corrected)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut northwind_config: NorthwindConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        northwind_config.resolve_paths(&self.project_dir);
        northwind_config.validate()?;

        Ok(northwind_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, PhoneCheck};
    use std::fs;
    use tempfile::tempdir;

    fn loader(project_dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("NORTHWIND_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path()).load().expect("Failed to load config");

        assert_eq!(config, NorthwindConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[queries]
default_threshold = 15000
phone_check = "corrected"

[queries.tiers]
cheap_max = 10
middle_max = 50

[output]
color = false
"#;
        fs::write(project_dir.join("northwind.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.queries.default_threshold.to_string(), "15000");
        assert_eq!(config.queries.phone_check, PhoneCheck::Corrected);
        assert_eq!(config.queries.tiers.cheap_max.to_string(), "10");
        assert_eq!(config.queries.tiers.middle_max.to_string(), "50");
        assert!(!config.output.color);
        assert_eq!(config.data.path, None);
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("northwind.toml"),
            r#"
[queries]
phone_check = "corrected"
default_threshold = 100
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("northwind.local.toml"),
            r#"
[queries]
phone_check = "literal"
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.queries.phone_check, PhoneCheck::Literal);
        assert_eq!(config.queries.default_threshold.to_string(), "100");
    }

    #[test]
    fn test_data_path_resolved_against_project_dir() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("northwind.toml"),
            r#"
[data]
path = "fixtures/northwind.json"
"#,
        )
        .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(
            config.data.path,
            Some(project_dir.join("fixtures/northwind.json"))
        );
    }

    #[test]
    fn test_unordered_tiers_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("northwind.toml"),
            r#"
[queries.tiers]
cheap_max = 80
middle_max = 60
"#,
        )
        .expect("Failed to write config");

        let err = loader(project_dir).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnorderedTiers { .. })
        ));
    }
}
