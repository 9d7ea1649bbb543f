//! Property-based tests using proptest.
//!
//! Invariants that must hold for any dataset, not just the fixtures.

use std::collections::HashSet;

use chrono::NaiveDate;
use northwind_data::DataSource;
use northwind_types::{Customer, Money, Order, Product, Supplier};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::{
    CustomerSupplierPair, TierBounds, city_averages, colocated_pairs_grouped,
    colocated_pairs_join, customers_by_acquisition, high_value_customers, price_tiers,
};

// ============================================================================
// Strategies
// ============================================================================

fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..2_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1996i32..=1998, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn orders_strategy() -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec((date_strategy(), money_strategy()), 0..6).prop_map(|orders| {
        orders
            .into_iter()
            .zip(1u32..)
            .map(|((date, total), id)| Order::new(id, date, total))
            .collect()
    })
}

/// Small pools of names and places so that collisions actually happen.
fn place_strategy() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("UK", "London"),
        ("UK", "Manchester"),
        ("Germany", "Berlin"),
        ("France", "Paris"),
        ("Canada", "London"),
    ])
}

fn customer_strategy() -> impl Strategy<Value = Customer> {
    (
        prop::sample::select(vec!["Alfreds", "Around the Horn", "Bolido", "QUICK-Stop"]),
        place_strategy(),
        orders_strategy(),
    )
        .prop_map(|(name, (country, city), orders)| {
            Customer::new(name, name, country, city).with_orders(orders)
        })
}

fn customers_strategy() -> impl Strategy<Value = Vec<Customer>> {
    prop::collection::vec(customer_strategy(), 0..12)
}

fn suppliers_strategy() -> impl Strategy<Value = Vec<Supplier>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Exotic Liquids", "Heli", "Ma Maison"]),
            place_strategy(),
        ),
        0..8,
    )
    .prop_map(|suppliers| {
        suppliers
            .into_iter()
            .zip(1u32..)
            .map(|((name, (country, city)), id)| Supplier::new(id, name, country, city))
            .collect()
    })
}

fn products_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((0i64..20_000, 0u32..50), 0..20).prop_map(|products| {
        products
            .into_iter()
            .zip(1u32..)
            .map(|((cents, stock), id)| {
                Product::new(id, format!("P{id}"), "Any", Decimal::new(cents, 2), stock)
            })
            .collect()
    })
}

proptest! {
    // ========================================================================
    // Turnover
    // ========================================================================

    /// Result is exactly the customers whose total strictly exceeds X
    #[test]
    fn high_value_matches_definition(customers in customers_strategy(), x in money_strategy()) {
        let data = DataSource::with_customers(customers.clone()).unwrap();
        let rows = high_value_customers(&data, x);

        let expected: Vec<(String, Money)> = customers
            .iter()
            .filter(|c| c.total() > x)
            .map(|c| (c.company_name.clone(), c.total()))
            .collect();
        let actual: Vec<(String, Money)> = rows
            .into_iter()
            .map(|r| (r.customer, r.total))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Raising the threshold can only shrink the result
    #[test]
    fn high_value_is_monotonic(
        customers in customers_strategy(),
        low in money_strategy(),
        raise in money_strategy(),
    ) {
        let data = DataSource::with_customers(customers).unwrap();
        let high = low + raise;

        let low_rows = high_value_customers(&data, low);
        let high_rows = high_value_customers(&data, high);

        prop_assert!(high_rows.len() <= low_rows.len());
        for row in &high_rows {
            prop_assert!(low_rows.contains(row));
        }
    }

    // ========================================================================
    // Co-location
    // ========================================================================

    /// Join and grouping formulations produce the same pairs
    #[test]
    fn colocation_formulations_agree(
        customers in customers_strategy(),
        suppliers in suppliers_strategy(),
    ) {
        let data = DataSource::from_parts(customers, Vec::new(), suppliers).unwrap();

        let mut joined = colocated_pairs_join(&data);
        let mut grouped: Vec<CustomerSupplierPair> = colocated_pairs_grouped(&data)
            .iter()
            .flat_map(|g| g.pairs())
            .collect();
        joined.sort();
        grouped.sort();
        prop_assert_eq!(joined, grouped);
    }

    // ========================================================================
    // Acquisition ranking
    // ========================================================================

    /// Adjacent rows never increase on (year, month, day, total) and never repeat
    #[test]
    fn acquisition_sorted_and_distinct(customers in customers_strategy()) {
        let data = DataSource::with_customers(customers).unwrap();
        let rows = customers_by_acquisition(&data);

        for pair in rows.windows(2) {
            prop_assert!(pair[0].sort_key() >= pair[1].sort_key());
        }
        let distinct: HashSet<_> = rows.iter().collect();
        prop_assert_eq!(distinct.len(), rows.len());
    }

    // ========================================================================
    // Price tiers
    // ========================================================================

    /// Every product lands in exactly one tier, the one its price dictates
    #[test]
    fn price_tiers_partition_products(products in products_strategy()) {
        let data = DataSource::with_products(products.clone()).unwrap();
        let bounds = TierBounds::default();
        let tiers = price_tiers(&data, &bounds);

        let placed: usize = tiers.iter().map(|t| t.products.len()).sum();
        prop_assert_eq!(placed, products.len());

        for tier in &tiers {
            prop_assert!(!tier.products.is_empty());
            for p in &tier.products {
                prop_assert_eq!(bounds.classify(p.unit_price), tier.tier);
            }
        }
    }

    /// Classification is a pure function of price
    #[test]
    fn tier_classification_is_deterministic(cents in 0i64..100_000) {
        let bounds = TierBounds::default();
        let price = Decimal::new(cents, 2);
        prop_assert_eq!(bounds.classify(price), bounds.classify(price));
    }

    // ========================================================================
    // City averages
    // ========================================================================

    /// Average income times the customer count gives back the summed totals
    #[test]
    fn city_average_income_is_mean(customers in customers_strategy()) {
        let data = DataSource::with_customers(customers.clone()).unwrap();
        let tolerance = Decimal::new(1, 10);

        for row in city_averages(&data) {
            let members: Vec<&Customer> = customers.iter().filter(|c| c.city == row.city).collect();
            prop_assert_eq!(members.len(), row.customers);

            let sum: Money = members.iter().map(|c| c.total()).sum();
            let n = Decimal::from(members.len());
            prop_assert!((row.average_income * n - sum).abs() <= tolerance);
        }
    }
}
