//! `salesperf-reporting`
//!
//! **Responsibility:** turn one sales snapshot into a ranked per-seller
//! performance report.
//!
//! - Pure and one-shot: no IO, no shared state between runs.
//! - Pricing and bonus rules are strategies carried by [`ReportOptions`].
//! - Fails as a whole; a partial report is never returned.

pub mod bonus;
pub mod engine;
pub mod options;
pub mod pricing;
pub mod report;
pub mod stats;

pub use bonus::{BonusSchedule, calculate_bonus_by_profit};
pub use engine::{TOP_PRODUCTS_LIMIT, produce_report};
pub use options::{BonusFn, ReportOptions, RevenueFn};
pub use pricing::calculate_simple_revenue;
pub use report::{SellerReport, TopProduct};
pub use stats::{ProductTally, SellerStat};
