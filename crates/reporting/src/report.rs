//! Report output records.

use serde::{Deserialize, Serialize};

use salesperf_core::{SellerId, Sku, round_money};

use crate::stats::SellerStat;

/// One best-selling product of a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: i64,
}

/// Final, immutable report line for one seller.
///
/// Money values are rounded to cents; bonus is whatever the bonus strategy
/// returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

impl SellerReport {
    pub(crate) fn from_stat(stat: &SellerStat, bonus: f64, top_products: Vec<TopProduct>) -> Self {
        Self {
            seller_id: stat.seller_id().clone(),
            name: stat.name().to_owned(),
            revenue: round_money(stat.revenue()),
            profit: round_money(stat.profit()),
            sales_count: stat.sales_count(),
            top_products,
            bonus,
        }
    }
}
