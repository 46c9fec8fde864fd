//! Aggregation engine: join, accumulate, rank, reward.

use core::cmp::Ordering;

use salesperf_core::{DomainError, DomainResult, ReferenceKind, index_by_id};
use salesperf_sales::SalesDataset;

use crate::options::ReportOptions;
use crate::report::SellerReport;
use crate::stats::SellerStat;

/// Maximum number of entries in a seller's `top_products`.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Compute the per-seller performance report for one snapshot.
///
/// Output has one entry per input seller, ordered by profit descending;
/// sellers with equal profit keep their input order. Money totals are
/// accumulated unrounded and rounded to cents only in the returned entries.
///
/// Fails with `InvalidInput` when the snapshot has no sellers, carries
/// unusable numbers or overflows a running total, and with
/// `UnresolvedReference` when a record names an unknown seller or sku.
/// Nothing is returned on failure.
pub fn produce_report(
    data: &SalesDataset,
    options: &ReportOptions,
) -> DomainResult<Vec<SellerReport>> {
    data.validate()?;

    tracing::debug!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "producing seller report"
    );

    let seller_slots = index_by_id(&data.sellers, "seller")?;
    let product_slots = index_by_id(&data.products, "product")?;

    // Arena in seller-list order; `seller_slots` positions index into it.
    let mut stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::for_seller).collect();

    for record in &data.purchase_records {
        let slot = *seller_slots.get(&record.seller_id).ok_or_else(|| {
            DomainError::unresolved(ReferenceKind::Seller, record.seller_id.as_str())
        })?;
        let stat = &mut stats[slot];
        stat.record_sale(record.total_amount)?;

        for item in &record.items {
            let product = product_slots
                .get(&item.sku)
                .map(|&pos| &data.products[pos])
                .ok_or_else(|| DomainError::unresolved(ReferenceKind::Product, item.sku.as_str()))?;

            let cost = product.cost_of(item.quantity)?;
            let revenue = options.revenue(item, product)?;
            stat.record_line(&item.sku, item.quantity, revenue - cost)?;
        }
    }

    // `sort_by` is stable: equal profits keep seller-list order.
    stats.sort_by(|a, b| b.profit().partial_cmp(&a.profit()).unwrap_or(Ordering::Equal));

    let total = stats.len();
    let report = stats
        .iter()
        .enumerate()
        .map(|(index, stat)| -> DomainResult<SellerReport> {
            let bonus = options.bonus(index, total, stat)?;
            let top_products = stat.products_sold().top(TOP_PRODUCTS_LIMIT);
            Ok(SellerReport::from_stat(stat, bonus, top_products))
        })
        .collect::<DomainResult<Vec<_>>>()?;

    if let Some(leader) = report.first() {
        tracing::debug!(
            sellers = report.len(),
            leader = %leader.seller_id,
            leader_profit = leader.profit,
            "seller report ready"
        );
    }

    Ok(report)
}
