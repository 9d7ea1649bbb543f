//! Evaluation context handed to every registered routine.

use northwind_data::DataSource;
use northwind_types::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::TierBounds;
use crate::quality::PhoneCheck;

/// Literal parameters used when a routine is run without an explicit one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuerySettings {
    /// Threshold for the turnover and large-order routines.
    pub default_threshold: Money,
    pub tiers: TierBounds,
    pub phone_check: PhoneCheck,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            default_threshold: Decimal::from(6520),
            tiers: TierBounds::default(),
            phone_check: PhoneCheck::default(),
        }
    }
}

/// Dataset plus settings, passed by reference into routines.
#[derive(Debug, Clone, Copy)]
pub struct QueryContext<'a> {
    pub data: &'a DataSource,
    pub settings: &'a QuerySettings,
}

impl<'a> QueryContext<'a> {
    pub fn new(data: &'a DataSource, settings: &'a QuerySettings) -> Self {
        Self { data, settings }
    }
}
