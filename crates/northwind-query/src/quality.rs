//! Contact data-quality checks.
//!
//! A customer is reported when its region is not filled, its postal code
//! holds a non-digit character, or its phone lacks an area code (taken to mean
//! "no opening parenthesis at the start").

use std::fmt::{self, Display};

use northwind_data::DataSource;
use northwind_types::Customer;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the missing-area-code check reads the phone number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneCheck {
    /// `!starts_with('(') || !starts_with(')')`.
    ///
    /// No string starts with both characters, so this is true for every
    /// phone and every customer is reported.
    #[default]
    Literal,
    /// `!starts_with('(')`.
    Corrected,
}

impl PhoneCheck {
    /// True when `phone` is considered to lack an area code.
    pub fn missing_area_code(self, phone: &str) -> bool {
        match self {
            PhoneCheck::Literal => !phone.starts_with('(') || !phone.starts_with(')'),
            PhoneCheck::Corrected => !phone.starts_with('('),
        }
    }
}

/// A single reason a customer was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityProblem {
    MissingRegion,
    NonDigitPostalCode,
    MissingAreaCode,
}

impl Display for QualityProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QualityProblem::MissingRegion => "missing region",
            QualityProblem::NonDigitPostalCode => "non-digit postal code",
            QualityProblem::MissingAreaCode => "missing area code",
        })
    }
}

/// A reported customer with the offending fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityIssue {
    pub customer: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub phone: String,
    pub problems: Vec<QualityProblem>,
}

/// Every problem found on one customer, in a fixed order.
pub fn problems_of(customer: &Customer, phone_check: PhoneCheck) -> Vec<QualityProblem> {
    let mut problems = Vec::new();
    if customer.region.as_deref().is_none_or(str::is_empty) {
        problems.push(QualityProblem::MissingRegion);
    }
    if customer
        .postal_code
        .as_deref()
        .is_some_and(|code| code.chars().any(|ch| !ch.is_ascii_digit()))
    {
        problems.push(QualityProblem::NonDigitPostalCode);
    }
    if phone_check.missing_area_code(&customer.phone) {
        problems.push(QualityProblem::MissingAreaCode);
    }
    problems
}

/// Customers with at least one contact problem, in source order.
pub fn data_quality_issues(data: &DataSource, phone_check: PhoneCheck) -> Vec<QualityIssue> {
    if phone_check == PhoneCheck::Literal {
        warn!("Literal phone check is always true; every customer will be reported");
    }

    data.customers()
        .iter()
        .filter_map(|c| {
            let problems = problems_of(c, phone_check);
            if problems.is_empty() {
                return None;
            }
            Some(QualityIssue {
                customer: c.company_name.clone(),
                region: c.region.clone(),
                postal_code: c.postal_code.clone(),
                phone: c.phone.clone(),
                problems,
            })
        })
        .collect()
}
