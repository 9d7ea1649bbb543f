//! Routine registry: name -> callable, with descriptive metadata as data.
//!
//! Every entry evaluates one routine against a [`QueryContext`] and renders
//! the result. Lookup is by kebab-case name.

use std::io::Write;
use std::str::FromStr;

use northwind_types::Money;
use tracing::debug;

use crate::context::QueryContext;
use crate::error::{QueryError, Result};
use crate::{catalog, locations, quality, render, timeline, totals};

/// Literal parameter a routine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    None,
    /// Decimal threshold; defaults to `QuerySettings::default_threshold`.
    Threshold,
}

type RunFn = fn(&QueryContext<'_>, Option<Money>, &mut dyn Write) -> Result<()>;

/// A registered routine.
#[derive(Debug, Clone, Copy)]
pub struct Routine {
    pub name: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub parameter: Parameter,
    run: RunFn,
}

impl Routine {
    /// Evaluates and renders the routine.
    ///
    /// `argument` must be `None` for routines without a parameter.
    pub fn run(
        &self,
        ctx: &QueryContext<'_>,
        argument: Option<Money>,
        out: &mut dyn Write,
    ) -> Result<()> {
        if self.parameter == Parameter::None && argument.is_some() {
            return Err(QueryError::UnexpectedParameter {
                routine: self.name.to_string(),
            });
        }
        debug!(routine = self.name, ?argument, "Running routine");
        (self.run)(ctx, argument, out)
    }

    /// Parses a textual literal for this routine's parameter.
    pub fn parse_argument(&self, raw: Option<&str>) -> Result<Option<Money>> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        if self.parameter == Parameter::None {
            return Err(QueryError::UnexpectedParameter {
                routine: self.name.to_string(),
            });
        }
        Money::from_str(raw.trim())
            .map(Some)
            .map_err(|_| QueryError::InvalidParameter {
                routine: self.name.to_string(),
                value: raw.to_string(),
            })
    }
}

fn threshold(ctx: &QueryContext<'_>, argument: Option<Money>) -> Money {
    argument.unwrap_or(ctx.settings.default_threshold)
}

static ROUTINES: &[Routine] = &[
    Routine {
        name: "high-value-customers",
        category: "Aggregate",
        title: "Sum",
        description: "Customers whose summed order totals exceed a threshold",
        parameter: Parameter::Threshold,
        run: |ctx, arg, out| {
            let rows = totals::high_value_customers(ctx.data, threshold(ctx, arg));
            Ok(render::customer_totals(out, &rows)?)
        },
    },
    Routine {
        name: "colocated-pairs",
        category: "Restriction",
        title: "Join",
        description: "Customer and supplier pairs sharing country and city (flattening join)",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let rows = locations::colocated_pairs_join(ctx.data);
            Ok(render::supplier_pairs(out, &rows)?)
        },
    },
    Routine {
        name: "colocated-pairs-grouped",
        category: "Grouping",
        title: "Join by group",
        description: "Suppliers in each customer's country and city (grouping)",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let rows = locations::colocated_pairs_grouped(ctx.data);
            Ok(render::supplier_groups(out, &rows)?)
        },
    },
    Routine {
        name: "customers-with-large-order",
        category: "Restriction",
        title: "Any",
        description: "Customers with at least one order above a threshold",
        parameter: Parameter::Threshold,
        run: |ctx, arg, out| {
            let rows = totals::customers_with_large_order(ctx.data, threshold(ctx, arg));
            Ok(render::largest_orders(out, &rows)?)
        },
    },
    Routine {
        name: "first-order-dates",
        category: "Restriction",
        title: "Min",
        description: "Date of each customer's earliest order",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let rows = timeline::first_order_dates(ctx.data);
            Ok(render::first_orders(out, &rows)?)
        },
    },
    Routine {
        name: "customers-by-acquisition",
        category: "Ordering",
        title: "Order by",
        description: "Customers by first-order year, month, day and turnover, newest first",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let rows = timeline::customers_by_acquisition(ctx.data);
            Ok(render::acquisitions(out, &rows)?)
        },
    },
    Routine {
        name: "data-quality-issues",
        category: "Restriction",
        title: "Where",
        description: "Customers with no region, a non-digit postal code or no phone area code",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let rows = quality::data_quality_issues(ctx.data, ctx.settings.phone_check);
            Ok(render::quality_issues(out, &rows)?)
        },
    },
    Routine {
        name: "catalog-breakdown",
        category: "Grouping",
        title: "Nested group by",
        description: "Products by category, then units in stock, then unit price",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let groups = catalog::catalog_breakdown(ctx.data);
            Ok(render::catalog(out, &groups)?)
        },
    },
    Routine {
        name: "price-tiers",
        category: "Grouping",
        title: "Group by tier",
        description: "Products split into cheap, middle and high price tiers",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let groups = catalog::price_tiers(ctx.data, &ctx.settings.tiers);
            Ok(render::tiers(out, &groups)?)
        },
    },
    Routine {
        name: "city-averages",
        category: "Grouping",
        title: "Average",
        description: "Average turnover and average order count per customer in each city",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let rows = locations::city_averages(ctx.data);
            Ok(render::city_averages(out, &rows)?)
        },
    },
    Routine {
        name: "order-activity",
        category: "Grouping",
        title: "Count",
        description: "Orders per month, per year and per year-month for each customer",
        parameter: Parameter::None,
        run: |ctx, _, out| {
            let rows = timeline::order_activity(ctx.data);
            Ok(render::activity(out, &rows)?)
        },
    },
];

/// All registered routines, in presentation order.
pub fn routines() -> &'static [Routine] {
    ROUTINES
}

/// Looks up a routine by name.
pub fn find(name: &str) -> Result<&'static Routine> {
    ROUTINES
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| QueryError::UnknownRoutine(name.to_string()))
}

/// Looks up `name` and runs it with a textual argument.
pub fn run(
    name: &str,
    ctx: &QueryContext<'_>,
    argument: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let routine = find(name)?;
    let argument = routine.parse_argument(argument)?;
    routine.run(ctx, argument, out)
}
