//! Plain-text rendering of routine results.
//!
//! One function per result shape. Output is line oriented and meant for
//! people; tests assert on the result records instead.

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::catalog::{CategoryGroup, TierGroup};
use crate::locations::{CityAverage, CustomerSupplierPair, CustomerSuppliers};
use crate::quality::QualityIssue;
use crate::timeline::{AcquisitionRow, CustomerActivity, FirstOrder};
use crate::totals::{CustomerLargestOrder, CustomerTotal};

/// Rounds to at most three decimal places and drops trailing zeros.
pub fn three_places(value: Decimal) -> Decimal {
    value.round_dp(3).normalize()
}

pub fn customer_totals(out: &mut dyn Write, rows: &[CustomerTotal]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{} {}", row.customer, row.total)?;
    }
    Ok(())
}

pub fn supplier_pairs(out: &mut dyn Write, rows: &[CustomerSupplierPair]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "Customer:{} - Supplier:{}", row.customer, row.supplier)?;
    }
    Ok(())
}

pub fn supplier_groups(out: &mut dyn Write, rows: &[CustomerSuppliers]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "Customer:{}", row.customer)?;
        for supplier in &row.suppliers {
            writeln!(out, "\tSupplier:{supplier}")?;
        }
    }
    Ok(())
}

pub fn largest_orders(out: &mut dyn Write, rows: &[CustomerLargestOrder]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "Customer:{} - largest order {}", row.customer, row.largest)?;
    }
    Ok(())
}

pub fn first_orders(out: &mut dyn Write, rows: &[FirstOrder]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "Customer:{} - {}", row.customer, row.date)?;
    }
    Ok(())
}

pub fn acquisitions(out: &mut dyn Write, rows: &[AcquisitionRow]) -> io::Result<()> {
    for row in rows {
        writeln!(
            out,
            "Customer:{} - {}/{}/{} - {}",
            row.customer, row.year, row.month, row.day, row.total
        )?;
    }
    Ok(())
}

pub fn quality_issues(out: &mut dyn Write, rows: &[QualityIssue]) -> io::Result<()> {
    for row in rows {
        let problems: Vec<String> = row.problems.iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "{}: {} - region, {} - postal code, {} - phone [{}]",
            row.customer,
            row.region.as_deref().unwrap_or_default(),
            row.postal_code.as_deref().unwrap_or_default(),
            row.phone,
            problems.join(", ")
        )?;
    }
    Ok(())
}

pub fn catalog(out: &mut dyn Write, groups: &[CategoryGroup]) -> io::Result<()> {
    for group in groups {
        writeln!(out, "category - {}", group.category)?;
        for stock in &group.stock_levels {
            writeln!(out, "\tNumber in stock - {}", stock.units_in_stock)?;
            for price in &stock.prices {
                writeln!(
                    out,
                    "\t\tprice - {} ({})",
                    price.unit_price,
                    price.products.join(", ")
                )?;
            }
        }
    }
    Ok(())
}

pub fn tiers(out: &mut dyn Write, groups: &[TierGroup]) -> io::Result<()> {
    for group in groups {
        writeln!(out, "{}", group.tier)?;
        for product in &group.products {
            writeln!(out, "\t{} - {}", product.product, product.unit_price)?;
        }
    }
    Ok(())
}

pub fn city_averages(out: &mut dyn Write, rows: &[CityAverage]) -> io::Result<()> {
    for row in rows {
        writeln!(
            out,
            "{} income - {} intensity - {}",
            row.city,
            three_places(row.average_income),
            three_places(row.average_intensity)
        )?;
    }
    Ok(())
}

pub fn activity(out: &mut dyn Write, rows: &[CustomerActivity]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row.customer)?;
        for (month, count) in &row.by_month {
            writeln!(out, "\tMonth {month} - {count}")?;
        }
        for (year, count) in &row.by_year {
            writeln!(out, "\tYear {year} - {count}")?;
        }
        for ((year, month), count) in &row.by_year_month {
            writeln!(out, "\t{year}/{month} - {count}")?;
        }
    }
    Ok(())
}
