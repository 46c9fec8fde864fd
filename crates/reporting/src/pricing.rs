//! Line-item revenue strategies.

use salesperf_core::{DomainError, DomainResult};
use salesperf_sales::{LineItem, Product};

/// Revenue of one sold line item after its percentage discount.
///
/// `sale_price * quantity * (1 - discount / 100)`, unrounded. The product card
/// is part of the strategy signature but this rule does not need it.
pub fn calculate_simple_revenue(item: &LineItem, _product: &Product) -> DomainResult<f64> {
    if !(0.0..=100.0).contains(&item.discount) {
        return Err(DomainError::invalid_input(format!(
            "line item {}: discount must be within [0, 100] (got {})",
            item.sku, item.discount
        )));
    }

    let remaining = 1.0 - item.discount / 100.0;
    Ok(item.sale_price * item.quantity as f64 * remaining)
}
