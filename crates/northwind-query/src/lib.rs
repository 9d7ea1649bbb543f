//! # northwind-query: query routines over the `Northwind` dataset
//!
//! Each routine is a pure function of a [`DataSource`] (and sometimes a
//! literal parameter) returning owned result records. Nothing is mutated and
//! no routine depends on another.
//!
//! ## Routines
//!
//! | Name                         | Function                              |
//! |------------------------------|---------------------------------------|
//! | `high-value-customers`       | [`high_value_customers`]              |
//! | `colocated-pairs`            | [`colocated_pairs_join`]              |
//! | `colocated-pairs-grouped`    | [`colocated_pairs_grouped`]           |
//! | `customers-with-large-order` | [`customers_with_large_order`]        |
//! | `first-order-dates`          | [`first_order_dates`]                 |
//! | `customers-by-acquisition`   | [`customers_by_acquisition`]          |
//! | `data-quality-issues`        | [`data_quality_issues`]               |
//! | `catalog-breakdown`          | [`catalog_breakdown`]                 |
//! | `price-tiers`                | [`price_tiers`]                       |
//! | `city-averages`              | [`city_averages`]                     |
//! | `order-activity`             | [`order_activity`]                    |
//!
//! ## Usage
//!
//! ```ignore
//! use northwind_data::DataSource;
//! use northwind_query::{QueryContext, QuerySettings, registry};
//!
//! let data = DataSource::embedded()?;
//! let settings = QuerySettings::default();
//! let ctx = QueryContext::new(&data, &settings);
//!
//! // Same query, different thresholds
//! let rich = northwind_query::high_value_customers(&data, 6520.into());
//! let richer = northwind_query::high_value_customers(&data, 15000.into());
//!
//! // By name, rendered as text
//! registry::run("price-tiers", &ctx, None, &mut std::io::stdout())?;
//! ```

mod catalog;
mod context;
mod error;
mod group;
mod locations;
mod quality;
pub mod registry;
pub mod render;
mod timeline;
mod totals;


pub use catalog::{
    CategoryGroup, PriceGroup, PriceTier, ProductPrice, StockGroup, TierBounds, TierGroup,
    catalog_breakdown, price_tiers,
};
pub use context::{QueryContext, QuerySettings};
pub use error::{QueryError, Result};
pub use group::{count_by, group_by};
pub use locations::{
    CityAverage, CustomerSupplierPair, CustomerSuppliers, city_averages, colocated_pairs_grouped,
    colocated_pairs_join,
};
pub use quality::{PhoneCheck, QualityIssue, QualityProblem, data_quality_issues, problems_of};
pub use registry::{Parameter, Routine};
pub use timeline::{
    AcquisitionRow, CustomerActivity, FirstOrder, customers_by_acquisition, first_order_dates,
    order_activity,
};
pub use totals::{
    CustomerLargestOrder, CustomerTotal, customers_with_large_order, high_value_customers,
    high_value_customers_for, total_exceeds,
};

pub use northwind_data::DataSource;
