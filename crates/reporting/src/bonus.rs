//! Rank-based bonus strategies.

use salesperf_core::{DomainResult, share_of};

use crate::stats::SellerStat;

/// Profit-share rates by rank.
///
/// Branches are checked in a fixed order: leader, runners-up (ranks 1 and 2),
/// last place, everyone else. A lone seller is therefore paid as leader, and
/// with two or three sellers the last one is still a runner-up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BonusSchedule {
    /// Rank 0.
    pub leader_rate: f64,
    /// Ranks 1 and 2.
    pub runner_up_rate: f64,
    /// Every other rank except the last one, which earns nothing.
    pub base_rate: f64,
}

impl Default for BonusSchedule {
    fn default() -> Self {
        Self {
            leader_rate: 0.15,
            runner_up_rate: 0.10,
            base_rate: 0.05,
        }
    }
}

impl BonusSchedule {
    pub fn rate_for(&self, index: usize, total: usize) -> f64 {
        if index == 0 {
            self.leader_rate
        } else if index == 1 || index == 2 {
            self.runner_up_rate
        } else if index + 1 == total {
            0.0
        } else {
            self.base_rate
        }
    }

    /// Bonus for the seller at `index` of `total`, rounded to cents.
    pub fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> f64 {
        let rate = self.rate_for(index, total);
        if rate == 0.0 {
            return 0.0;
        }
        share_of(seller.profit(), rate)
    }
}

/// Default bonus policy: 15% / 10% / 5% of profit, nothing for last place.
pub fn calculate_bonus_by_profit(
    index: usize,
    total: usize,
    seller: &SellerStat,
) -> DomainResult<f64> {
    Ok(BonusSchedule::default().bonus(index, total, seller))
}
