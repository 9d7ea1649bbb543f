//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

use northwind_types::{CustomerId, OrderId, ProductId};

/// Dataset loading errors.
///
/// Raised only while the snapshot is being constructed. Once a
/// [`DataSource`](crate::DataSource) exists no further data errors are possible.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The backing file could not be read.
    #[error("Failed to read dataset at {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not a well-formed dataset.
    #[error("Failed to parse dataset from {origin}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    /// Two orders of one customer share an identifier.
    #[error("Customer {customer} has duplicate order {order}")]
    DuplicateOrder { customer: CustomerId, order: OrderId },

    /// An order total is below zero.
    #[error("Order {order} of customer {customer} has a negative total")]
    NegativeTotal { customer: CustomerId, order: OrderId },

    /// A customer's order totals do not fit in a `Decimal` when summed.
    #[error("Order totals of customer {customer} overflow when summed")]
    TotalOverflow { customer: CustomerId },

    /// The summed turnover of one city's customers does not fit in a `Decimal`.
    #[error("Customer turnover in {city} overflows when summed")]
    CityTotalOverflow { city: String },

    /// A product price is below zero.
    #[error("Product {product} has a negative unit price")]
    NegativePrice { product: ProductId },
}

/// Result type for dataset loading.
pub type Result<T> = std::result::Result<T, DataLoadError>;
