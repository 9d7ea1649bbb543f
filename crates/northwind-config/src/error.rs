//! Configuration error types

use northwind_types::Money;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "queries.tiers.cheap_max ({cheap_max}) must not exceed queries.tiers.middle_max ({middle_max})"
    )]
    UnorderedTiers { cheap_max: Money, middle_max: Money },

    #[error("queries.tiers.cheap_max ({0}) must not be negative")]
    NegativeTier(Money),
}
