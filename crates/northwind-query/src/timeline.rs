//! Date-driven queries: first orders, acquisition ranking, activity statistics.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use northwind_data::DataSource;
use northwind_types::Money;

use crate::group::count_by;

/// The date a customer placed its earliest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstOrder {
    pub customer: String,
    pub date: NaiveDate,
}

/// First order per customer. Customers without orders are left out.
pub fn first_order_dates(data: &DataSource) -> Vec<FirstOrder> {
    data.customers()
        .iter()
        .filter_map(|c| {
            c.first_order_date().map(|date| FirstOrder {
                customer: c.company_name.clone(),
                date,
            })
        })
        .collect()
}

/// One customer's acquisition date split into its parts, plus turnover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AcquisitionRow {
    pub customer: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub total: Money,
}

impl AcquisitionRow {
    /// Composite sort key: year, month, day, total.
    pub fn sort_key(&self) -> (i32, u32, u32, Money) {
        (self.year, self.month, self.day, self.total)
    }
}

/// Customers ranked newest-acquired first, then by turnover.
///
/// Sorted by year, month, day and total, all descending. The sort is stable,
/// so rows with equal keys stay in source order. Identical rows are dropped,
/// keeping the first.
pub fn customers_by_acquisition(data: &DataSource) -> Vec<AcquisitionRow> {
    let mut rows: Vec<AcquisitionRow> = data
        .customers()
        .iter()
        .filter_map(|c| {
            let first = c.first_order_date()?;
            Some(AcquisitionRow {
                customer: c.company_name.clone(),
                year: first.year(),
                month: first.month(),
                day: first.day(),
                total: c.total(),
            })
        })
        .collect();

    rows.sort_by_key(|row| Reverse(row.sort_key()));

    let mut seen = HashSet::new();
    rows.retain(|row| seen.insert(row.clone()));
    rows
}

/// Order counts for one customer, three ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerActivity {
    pub customer: String,
    /// Orders per calendar month, all years folded together.
    pub by_month: Vec<(u32, usize)>,
    pub by_year: Vec<(i32, usize)>,
    /// Orders per `(year, month)`.
    pub by_year_month: Vec<((i32, u32), usize)>,
}

/// Monthly, yearly and year-month order statistics per customer.
///
/// Every customer gets an entry; keys appear in order of first occurrence.
pub fn order_activity(data: &DataSource) -> Vec<CustomerActivity> {
    data.customers()
        .iter()
        .map(|c| {
            let dates = || c.orders.iter().map(|o| o.order_date);
            CustomerActivity {
                customer: c.company_name.clone(),
                by_month: count_by(dates(), |d| d.month()),
                by_year: count_by(dates(), |d| d.year()),
                by_year_month: count_by(dates(), |d| (d.year(), d.month())),
            }
        })
        .collect()
}
