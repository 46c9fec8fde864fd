//! Strategy configuration for a report run.

use std::sync::Arc;

use salesperf_core::{DomainError, DomainResult};
use salesperf_sales::{LineItem, Product};

use crate::bonus::calculate_bonus_by_profit;
use crate::pricing::calculate_simple_revenue;
use crate::stats::SellerStat;

/// Revenue of one line item: `(item, product) -> revenue`.
pub type RevenueFn = dyn Fn(&LineItem, &Product) -> DomainResult<f64> + Send + Sync;

/// Bonus of one ranked seller: `(rank_index, total_sellers, stat) -> bonus`.
pub type BonusFn = dyn Fn(usize, usize, &SellerStat) -> DomainResult<f64> + Send + Sync;

/// Pricing and incentive policy for [`produce_report`](crate::produce_report).
///
/// Swapping either strategy changes the policy without touching the engine.
/// Both are shared, so one options value can serve concurrent runs.
#[derive(Clone)]
pub struct ReportOptions {
    calculate_revenue: Arc<RevenueFn>,
    calculate_bonus: Arc<BonusFn>,
}

impl ReportOptions {
    pub fn new<R, B>(calculate_revenue: R, calculate_bonus: B) -> Self
    where
        R: Fn(&LineItem, &Product) -> DomainResult<f64> + Send + Sync + 'static,
        B: Fn(usize, usize, &SellerStat) -> DomainResult<f64> + Send + Sync + 'static,
    {
        Self {
            calculate_revenue: Arc::new(calculate_revenue),
            calculate_bonus: Arc::new(calculate_bonus),
        }
    }

    pub fn with_revenue<R>(mut self, calculate_revenue: R) -> Self
    where
        R: Fn(&LineItem, &Product) -> DomainResult<f64> + Send + Sync + 'static,
    {
        self.calculate_revenue = Arc::new(calculate_revenue);
        self
    }

    pub fn with_bonus<B>(mut self, calculate_bonus: B) -> Self
    where
        B: Fn(usize, usize, &SellerStat) -> DomainResult<f64> + Send + Sync + 'static,
    {
        self.calculate_bonus = Arc::new(calculate_bonus);
        self
    }

    /// Run the revenue strategy; a non-finite result is rejected.
    pub fn revenue(&self, item: &LineItem, product: &Product) -> DomainResult<f64> {
        let revenue = (self.calculate_revenue)(item, product)?;
        if !revenue.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "revenue strategy returned a non-finite value for {}",
                item.sku
            )));
        }
        Ok(revenue)
    }

    /// Run the bonus strategy; a non-finite result is rejected.
    pub fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> DomainResult<f64> {
        let bonus = (self.calculate_bonus)(index, total, seller)?;
        if !bonus.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "bonus strategy returned a non-finite value for seller {}",
                seller.seller_id()
            )));
        }
        Ok(bonus)
    }
}

impl Default for ReportOptions {
    /// Simple discount pricing and the 15/10/5 profit-rank bonus.
    fn default() -> Self {
        Self::new(calculate_simple_revenue, calculate_bonus_by_profit)
    }
}

impl core::fmt::Debug for ReportOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReportOptions").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesperf_sales::Seller;

    fn item() -> LineItem {
        LineItem::new("SKU_001", 2, 100.0, 25.0)
    }

    fn product() -> Product {
        Product::new("SKU_001", 50.0)
    }

    #[test]
    fn defaults_use_simple_revenue_and_profit_bonus() {
        let options = ReportOptions::default();
        assert_eq!(options.revenue(&item(), &product()).unwrap(), 150.0);

        let stat = SellerStat::for_seller(&Seller::new("seller_1", "Ann", "Lee"));
        assert_eq!(options.bonus(0, 1, &stat).unwrap(), 0.0);
    }

    #[test]
    fn strategies_can_be_swapped() {
        let options = ReportOptions::default()
            .with_revenue(|item: &LineItem, _: &Product| Ok(item.sale_price * item.quantity as f64))
            .with_bonus(|index: usize, _: usize, _: &SellerStat| {
                Ok(if index == 0 { 1.0 } else { 0.0 })
            });

        assert_eq!(options.revenue(&item(), &product()).unwrap(), 200.0);
        let stat = SellerStat::for_seller(&Seller::new("seller_1", "Ann", "Lee"));
        assert_eq!(options.bonus(0, 3, &stat).unwrap(), 1.0);
        assert_eq!(options.bonus(1, 3, &stat).unwrap(), 0.0);
    }

    #[test]
    fn non_finite_strategy_output_is_invalid_input() {
        let options = ReportOptions::default()
            .with_revenue(|_: &LineItem, _: &Product| Ok(f64::NAN))
            .with_bonus(|_: usize, _: usize, _: &SellerStat| Ok(f64::INFINITY));

        assert!(options.revenue(&item(), &product()).unwrap_err().is_invalid_input());
        let stat = SellerStat::for_seller(&Seller::new("seller_1", "Ann", "Lee"));
        assert!(options.bonus(0, 1, &stat).unwrap_err().is_invalid_input());
    }

    #[test]
    fn strategy_errors_propagate_unchanged() {
        let options = ReportOptions::default()
            .with_revenue(|_: &LineItem, _: &Product| Err(DomainError::invalid_input("nope")));
        assert_eq!(
            options.revenue(&item(), &product()).unwrap_err(),
            DomainError::invalid_input("nope")
        );
    }
}
