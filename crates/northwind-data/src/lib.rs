//! # northwind-data: read-only dataset for the query routines
//!
//! A [`DataSource`] is an immutable snapshot of the four entity collections.
//! It is built once, validated, and then only observed:
//!
//! ```ignore
//! use northwind_data::DataSource;
//!
//! let data = DataSource::embedded()?;
//! for customer in data.customers() {
//!     println!("{} {}", customer.company_name, customer.total());
//! }
//! ```
//!
//! ## Sources
//!
//! - [`DataSource::embedded`] - JSON fixture compiled into this crate
//! - [`DataSource::from_path`] - JSON document on disk
//! - [`DataSource::from_json_str`] - JSON text
//! - [`DataSource::from_parts`] - already-built collections (synthetic fixtures)
//!
//! Every constructor runs the same validation, so a `DataSource` always holds
//! unique order ids per customer, non-negative money values, and customer and
//! city turnovers that fit in a `Decimal`.

mod error;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use northwind_types::{Customer, Money, Order, Product, Supplier};
use serde::Deserialize;
use tracing::{debug, info};

pub use error::{DataLoadError, Result};

/// Fixture shipped with the crate.
const EMBEDDED_DATASET: &str = include_str!("../data/northwind.json");

/// On-disk / embedded document layout. All three collections are required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    customers: Vec<Customer>,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
}

/// Immutable snapshot of customers, orders, products and suppliers.
///
/// All accessors return collections in source order.
#[derive(Debug, Clone, Default)]
pub struct DataSource {
    customers: Vec<Customer>,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
}

impl DataSource {
    /// Loads the fixture compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_DATASET, "embedded fixture")
    }

    /// Loads a JSON dataset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Parses a JSON dataset.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, "inline document")
    }

    /// Builds a snapshot from already constructed collections.
    pub fn from_parts(
        customers: Vec<Customer>,
        products: Vec<Product>,
        suppliers: Vec<Supplier>,
    ) -> Result<Self> {
        let source = Self {
            customers,
            products,
            suppliers,
        };
        source.validate()?;
        Ok(source)
    }

    /// Snapshot holding only customers.
    pub fn with_customers(customers: Vec<Customer>) -> Result<Self> {
        Self::from_parts(customers, Vec::new(), Vec::new())
    }

    /// Snapshot holding only products.
    pub fn with_products(products: Vec<Product>) -> Result<Self> {
        Self::from_parts(Vec::new(), products, Vec::new())
    }

    fn parse(text: &str, origin: &str) -> Result<Self> {
        debug!(origin, "Parsing dataset");
        let document: Document =
            serde_json::from_str(text).map_err(|source| DataLoadError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        let source = Self::from_parts(document.customers, document.products, document.suppliers)?;
        info!(
            origin,
            customers = source.customers.len(),
            orders = source.order_count(),
            products = source.products.len(),
            suppliers = source.suppliers.len(),
            "Dataset loaded"
        );
        Ok(source)
    }

    fn validate(&self) -> Result<()> {
        let mut city_turnover: HashMap<&str, Money> = HashMap::new();

        for customer in &self.customers {
            let mut seen = HashSet::with_capacity(customer.orders.len());
            for order in &customer.orders {
                if !seen.insert(order.id) {
                    return Err(DataLoadError::DuplicateOrder {
                        customer: customer.id.clone(),
                        order: order.id,
                    });
                }
                if order.total < Money::ZERO {
                    return Err(DataLoadError::NegativeTotal {
                        customer: customer.id.clone(),
                        order: order.id,
                    });
                }
            }

            // Routines sum turnover unchecked.
            let total = customer
                .orders
                .iter()
                .try_fold(Money::ZERO, |acc, o| acc.checked_add(o.total))
                .ok_or_else(|| DataLoadError::TotalOverflow {
                    customer: customer.id.clone(),
                })?;

            let city = city_turnover.entry(customer.city.as_str()).or_default();
            *city = city
                .checked_add(total)
                .ok_or_else(|| DataLoadError::CityTotalOverflow {
                    city: customer.city.clone(),
                })?;
        }

        if let Some(product) = self
            .products
            .iter()
            .find(|p| p.unit_price < Money::ZERO)
        {
            return Err(DataLoadError::NegativePrice {
                product: product.id,
            });
        }

        Ok(())
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Every order paired with the customer that owns it.
    pub fn orders(&self) -> impl Iterator<Item = (&Customer, &Order)> {
        self.customers
            .iter()
            .flat_map(|c| c.orders.iter().map(move |o| (c, o)))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Total number of orders across all customers.
    pub fn order_count(&self) -> usize {
        self.customers.iter().map(Customer::order_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.products.is_empty() && self.suppliers.is_empty()
    }
}
