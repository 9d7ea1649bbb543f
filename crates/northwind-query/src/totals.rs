//! Turnover filters: summed totals and single large orders.

use northwind_data::DataSource;
use northwind_types::{Customer, Money};

/// A customer with its summed order totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerTotal {
    pub customer: String,
    pub total: Money,
}

/// A customer with its largest single order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerLargestOrder {
    pub customer: String,
    pub largest: Money,
}

/// Predicate: the customer's summed turnover is strictly above `threshold`.
///
/// Built once and applied to any number of customers, so the same filter can
/// be evaluated for several thresholds without restating it.
pub fn total_exceeds(threshold: Money) -> impl Fn(&Customer) -> bool + Copy {
    move |customer| customer.total() > threshold
}

/// Customers whose summed order totals exceed `threshold`, in source order.
pub fn high_value_customers(data: &DataSource, threshold: Money) -> Vec<CustomerTotal> {
    let exceeds = total_exceeds(threshold);
    data.customers()
        .iter()
        .filter(|&c| exceeds(c))
        .map(|c| CustomerTotal {
            customer: c.company_name.clone(),
            total: c.total(),
        })
        .collect()
}

/// Evaluates [`high_value_customers`] once per threshold.
pub fn high_value_customers_for(
    data: &DataSource,
    thresholds: &[Money],
) -> Vec<(Money, Vec<CustomerTotal>)> {
    thresholds
        .iter()
        .map(|&x| (x, high_value_customers(data, x)))
        .collect()
}

/// Customers having at least one single order above `threshold`.
///
/// Unlike [`high_value_customers`] nothing is summed: one qualifying order is
/// enough.
pub fn customers_with_large_order(
    data: &DataSource,
    threshold: Money,
) -> Vec<CustomerLargestOrder> {
    data.customers()
        .iter()
        .filter(|c| c.orders.iter().any(|o| o.total > threshold))
        .filter_map(|c| {
            c.largest_order().map(|largest| CustomerLargestOrder {
                customer: c.company_name.clone(),
                largest,
            })
        })
        .collect()
}
