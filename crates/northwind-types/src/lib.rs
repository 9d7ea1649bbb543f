//! # northwind-types: Entity definitions for the `Northwind` dataset
//!
//! This crate contains the read-only records every query routine observes:
//! - Entity IDs ([`CustomerId`], [`OrderId`], [`ProductId`], [`SupplierId`])
//! - Customers and the orders they own ([`Customer`], [`Order`])
//! - Catalog entries ([`Product`], [`Supplier`])
//! - Exact monetary amounts ([`Money`])
//!
//! Money is always a [`rust_decimal::Decimal`]. Totals are summed and compared
//! against thresholds, so binary floating point is never used for it.

use std::fmt::{self, Display};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use chrono;
pub use rust_decimal::Decimal;

/// Exact decimal monetary amount.
pub type Money = Decimal;

// ============================================================================
// Entity IDs
// ============================================================================

/// Customer code, e.g. `ALFKI`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Generates a `Copy` numeric identifier with the usual conversions.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub fn new(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

numeric_id!(
    /// Order number. Unique within one customer's order list only.
    OrderId
);
numeric_id!(
    /// Catalog product number.
    ProductId
);
numeric_id!(
    /// Supplier number.
    SupplierId
);

// ============================================================================
// Entities
// ============================================================================

/// A single order placed by a customer.
///
/// Orders compare by identifier first. Date and total only take part in the
/// comparison to keep `Ord` consistent with `Eq`, since identifiers are
/// unique within a customer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_date: NaiveDate,
    pub total: Money,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, order_date: NaiveDate, total: Money) -> Self {
        Self {
            id: id.into(),
            order_date,
            total,
        }
    }
}

/// A trading customer together with the orders it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub company_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
    pub phone: String,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Creates a customer with only the fields the queries need.
    ///
    /// Optional contact fields start out empty; set them directly.
    pub fn new(
        id: impl Into<CustomerId>,
        company_name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            company_name: company_name.into(),
            address: None,
            city: city.into(),
            region: None,
            postal_code: None,
            country: country.into(),
            phone: String::new(),
            fax: None,
            orders: Vec::new(),
        }
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// Sum of all order totals.
    pub fn total(&self) -> Money {
        self.orders.iter().map(|o| o.total).sum()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Earliest order date, or `None` for a customer without orders.
    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|o| o.order_date).min()
    }

    /// Largest single order total, or `None` for a customer without orders.
    pub fn largest_order(&self) -> Option<Money> {
        self.orders.iter().map(|o| o.total).max()
    }
}

impl From<String> for CustomerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub units_in_stock: u32,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        units_in_stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            unit_price,
            units_in_stock,
        }
    }
}

/// A supplier of catalog products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub country: String,
    pub city: String,
}

impl Supplier {
    pub fn new(
        id: impl Into<SupplierId>,
        name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            country: country.into(),
            city: city.into(),
        }
    }

    /// Location key used when matching suppliers to customers.
    pub fn location(&self) -> (&str, &str) {
        (&self.country, &self.city)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn orders_sort_by_identifier() {
        let mut orders = vec![
            Order::new(10_702, date(1997, 10, 13), money("330")),
            Order::new(10_643, date(1997, 8, 25), money("814.5")),
            Order::new(10_692, date(1997, 10, 3), money("878")),
        ];
        orders.sort();

        let ids: Vec<u32> = orders.iter().map(|o| u32::from(o.id)).collect();
        assert_eq!(ids, vec![10_643, 10_692, 10_702]);
    }

    #[test]
    fn customer_total_is_exact() {
        let customer = Customer::new("EXACT", "Exact Ltd", "UK", "London").with_orders(vec![
            Order::new(1, date(1997, 1, 1), money("0.1")),
            Order::new(2, date(1997, 1, 2), money("0.2")),
        ]);

        assert_eq!(customer.total(), money("0.3"));
    }

    #[test]
    fn customer_without_orders() {
        let customer = Customer::new("EMPTY", "Empty Co", "UK", "London");

        assert_eq!(customer.total(), Money::ZERO);
        assert_eq!(customer.order_count(), 0);
        assert_eq!(customer.first_order_date(), None);
        assert_eq!(customer.largest_order(), None);
    }

    #[test_case(&[(1998, 1, 5), (1996, 7, 4), (1997, 3, 1)], date(1996, 7, 4) ; "earliest in the middle")]
    #[test_case(&[(1997, 3, 1)], date(1997, 3, 1) ; "single order")]
    #[test_case(&[(1997, 3, 1), (1997, 3, 1)], date(1997, 3, 1) ; "same day twice")]
    fn first_order_date_is_minimum(dates: &[(i32, u32, u32)], expected: NaiveDate) {
        let orders = dates
            .iter()
            .zip(1u32..)
            .map(|(&(y, m, d), id)| Order::new(id, date(y, m, d), Money::ONE))
            .collect();
        let customer = Customer::new("C", "C", "X", "Y").with_orders(orders);

        assert_eq!(customer.first_order_date(), Some(expected));
    }

    #[test]
    fn customer_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "ALFKI",
            "company_name": "Alfreds Futterkiste",
            "city": "Berlin",
            "country": "Germany",
            "phone": "030-0074321",
            "orders": [{"id": 10643, "order_date": "1997-08-25", "total": "814.50"}]
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id.as_str(), "ALFKI");
        assert_eq!(customer.region, None);
        assert_eq!(customer.postal_code, None);
        assert_eq!(customer.orders[0].total, money("814.50"));
        assert_eq!(customer.orders[0].order_date, date(1997, 8, 25));
    }

    #[test]
    fn supplier_location_pairs_country_and_city() {
        let supplier = Supplier::new(1, "Exotic Liquids", "UK", "London");
        assert_eq!(supplier.location(), ("UK", "London"));
    }
}
