//! Per-seller running totals.
//!
//! A [`SellerStat`] only lives for one report run. The engine owns the whole
//! set; strategies and callers see it read-only.

use std::collections::HashMap;

use salesperf_core::{DomainError, DomainResult, SellerId, Sku};
use salesperf_sales::Seller;

use crate::report::TopProduct;

/// Cumulative quantity per sku, remembering first-seen order.
///
/// Ranking ties are resolved by that order, so a plain hash map is not enough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTally {
    entries: Vec<(Sku, i64)>,
    positions: HashMap<Sku, usize>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units sold of `sku`.
    ///
    /// Fails with `InvalidInput` if the running quantity would overflow; the
    /// tally is left unchanged in that case.
    pub fn record(&mut self, sku: &Sku, quantity: i64) -> DomainResult<()> {
        match self.positions.get(sku) {
            Some(&pos) => {
                let entry = &mut self.entries[pos].1;
                *entry = entry.checked_add(quantity).ok_or_else(|| {
                    DomainError::invalid_input(format!("sku {sku}: quantity sold overflowed"))
                })?;
            }
            None => {
                self.positions.insert(sku.clone(), self.entries.len());
                self.entries.push((sku.clone(), quantity));
            }
        }
        Ok(())
    }

    pub fn quantity_of(&self, sku: &Sku) -> Option<i64> {
        self.positions.get(sku).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Sku, i64)> {
        self.entries.iter().map(|(sku, qty)| (sku, *qty))
    }

    /// Best sellers by quantity, at most `limit` of them.
    ///
    /// Equal quantities keep first-seen order (stable sort).
    pub fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<&(Sku, i64)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect()
    }
}

/// Running totals for one seller during a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    seller_id: SellerId,
    name: String,
    revenue: f64,
    profit: f64,
    sales_count: u64,
    products_sold: ProductTally,
}

impl SellerStat {
    /// Zeroed stat for a seller.
    pub fn for_seller(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: ProductTally::new(),
        }
    }

    pub fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unrounded sum of receipt totals.
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Unrounded sum of line-item margins.
    pub fn profit(&self) -> f64 {
        self.profit
    }

    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    pub fn products_sold(&self) -> &ProductTally {
        &self.products_sold
    }

    /// Count one receipt and add its charged total.
    pub(crate) fn record_sale(&mut self, total_amount: f64) -> DomainResult<()> {
        let revenue = self.revenue + total_amount;
        if !revenue.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "seller {}: revenue total overflowed",
                self.seller_id
            )));
        }
        self.revenue = revenue;
        self.sales_count += 1;
        Ok(())
    }

    /// Add one line item's margin and sold quantity.
    ///
    /// Nothing is recorded when either running total would overflow.
    pub(crate) fn record_line(
        &mut self,
        sku: &Sku,
        quantity: i64,
        margin: f64,
    ) -> DomainResult<()> {
        let profit = self.profit + margin;
        if !profit.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "seller {}: profit total overflowed",
                self.seller_id
            )));
        }
        self.products_sold.record(sku, quantity)?;
        self.profit = profit;
        Ok(())
    }
}
