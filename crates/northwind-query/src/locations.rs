//! Location-based queries: co-located suppliers and per-city averages.

use std::collections::HashMap;

use northwind_data::DataSource;
use northwind_types::{Money, Supplier};
use rust_decimal::Decimal;

use crate::group::group_by;

/// A customer and a supplier sharing both country and city.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerSupplierPair {
    pub customer: String,
    pub supplier: String,
}

/// A customer and every supplier located in its country and city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSuppliers {
    pub customer: String,
    pub suppliers: Vec<String>,
}

impl CustomerSuppliers {
    /// Flattens back into one pair per supplier.
    pub fn pairs(&self) -> impl Iterator<Item = CustomerSupplierPair> + '_ {
        self.suppliers.iter().map(|s| CustomerSupplierPair {
            customer: self.customer.clone(),
            supplier: s.clone(),
        })
    }
}

/// Co-located pairs via a flattening join.
///
/// Suppliers drive the outer loop; every customer in the same country and
/// city yields one pair.
pub fn colocated_pairs_join(data: &DataSource) -> Vec<CustomerSupplierPair> {
    data.suppliers()
        .iter()
        .flat_map(|s| {
            data.customers()
                .iter()
                .filter(move |c| c.country == s.country && c.city == s.city)
                .map(move |c| CustomerSupplierPair {
                    customer: c.company_name.clone(),
                    supplier: s.name.clone(),
                })
        })
        .collect()
}

/// Co-located pairs via grouping.
///
/// Suppliers are grouped by `(country, city)` once; each customer then looks
/// up its own location. Customers with no local supplier are omitted.
pub fn colocated_pairs_grouped(data: &DataSource) -> Vec<CustomerSuppliers> {
    let by_location: HashMap<(&str, &str), Vec<&Supplier>> =
        group_by(data.suppliers(), |&s| s.location())
            .into_iter()
            .collect();

    data.customers()
        .iter()
        .filter_map(|c| {
            let suppliers = by_location.get(&(c.country.as_str(), c.city.as_str()))?;
            Some(CustomerSuppliers {
                customer: c.company_name.clone(),
                suppliers: suppliers.iter().map(|s| s.name.clone()).collect(),
            })
        })
        .collect()
}

/// Mean turnover and mean order count of the customers in one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityAverage {
    pub city: String,
    pub customers: usize,
    /// Mean of the customers' summed order totals.
    pub average_income: Money,
    /// Mean number of orders per customer.
    pub average_intensity: Decimal,
}

/// Per-city averages, cities in first-appearance order.
pub fn city_averages(data: &DataSource) -> Vec<CityAverage> {
    group_by(data.customers(), |c| c.city.clone())
        .into_iter()
        .map(|(city, members)| {
            let n = Decimal::from(members.len());
            let income: Money = members.iter().map(|c| c.total()).sum();
            let orders: usize = members.iter().map(|c| c.order_count()).sum();
            CityAverage {
                city,
                customers: members.len(),
                average_income: income / n,
                average_intensity: Decimal::from(orders) / n,
            }
        })
        .collect()
}
