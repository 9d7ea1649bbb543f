//! Product catalog groupings: nested breakdown and price tiers.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use northwind_data::DataSource;
use northwind_types::{Money, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::group::group_by;

// ============================================================================
// Catalog breakdown
// ============================================================================

/// Products sharing one unit price within a stock level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceGroup {
    pub unit_price: Money,
    pub products: Vec<String>,
}

/// Products sharing one units-in-stock value within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockGroup {
    pub units_in_stock: u32,
    pub prices: Vec<PriceGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub stock_levels: Vec<StockGroup>,
}

/// Category -> units in stock -> unit price.
///
/// Categories keep first-appearance order. Stock levels and prices ascend.
/// Product names inside a price keep source order.
pub fn catalog_breakdown(data: &DataSource) -> Vec<CategoryGroup> {
    group_by(data.products(), |p| p.category.clone())
        .into_iter()
        .map(|(category, products)| {
            let mut by_stock: BTreeMap<u32, Vec<&Product>> = BTreeMap::new();
            for p in products {
                by_stock.entry(p.units_in_stock).or_default().push(p);
            }

            let stock_levels = by_stock
                .into_iter()
                .map(|(units_in_stock, products)| {
                    let mut by_price: BTreeMap<Money, Vec<String>> = BTreeMap::new();
                    for p in products {
                        by_price.entry(p.unit_price).or_default().push(p.name.clone());
                    }
                    StockGroup {
                        units_in_stock,
                        prices: by_price
                            .into_iter()
                            .map(|(unit_price, products)| PriceGroup {
                                unit_price,
                                products,
                            })
                            .collect(),
                    }
                })
                .collect();

            CategoryGroup {
                category,
                stock_levels,
            }
        })
        .collect()
}

// ============================================================================
// Price tiers
// ============================================================================

/// Price bucket assigned to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceTier {
    Cheap,
    Middle,
    High,
}

impl PriceTier {
    pub fn label(self) -> &'static str {
        match self {
            PriceTier::Cheap => "Cheap",
            PriceTier::Middle => "Middle",
            PriceTier::High => "High",
        }
    }
}

impl Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive upper bounds of the cheap and middle tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierBounds {
    pub cheap_max: Money,
    pub middle_max: Money,
}

impl Default for TierBounds {
    fn default() -> Self {
        Self {
            cheap_max: Decimal::from(20),
            middle_max: Decimal::from(60),
        }
    }
}

impl TierBounds {
    /// Tier for a price: `<= cheap_max` is cheap, `<= middle_max` is middle,
    /// anything above is high.
    pub fn classify(&self, price: Money) -> PriceTier {
        if price <= self.cheap_max {
            PriceTier::Cheap
        } else if price <= self.middle_max {
            PriceTier::Middle
        } else {
            PriceTier::High
        }
    }

    /// False when the cheap ceiling sits above the middle one.
    pub fn is_ordered(&self) -> bool {
        self.cheap_max <= self.middle_max
    }
}

/// A product name with its unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPrice {
    pub product: String,
    pub unit_price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierGroup {
    pub tier: PriceTier,
    pub products: Vec<ProductPrice>,
}

/// Products partitioned into price tiers.
///
/// Tiers are emitted cheap to high and empty tiers are omitted. Products
/// keep source order within a tier.
pub fn price_tiers(data: &DataSource, bounds: &TierBounds) -> Vec<TierGroup> {
    let mut tiers: BTreeMap<PriceTier, Vec<ProductPrice>> = BTreeMap::new();
    for p in data.products() {
        tiers
            .entry(bounds.classify(p.unit_price))
            .or_default()
            .push(ProductPrice {
                product: p.name.clone(),
                unit_price: p.unit_price,
            });
    }

    tiers
        .into_iter()
        .map(|(tier, products)| TierGroup { tier, products })
        .collect()
}
