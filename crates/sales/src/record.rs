use serde::{Deserialize, Serialize};

use salesperf_core::{DomainError, DomainResult, SellerId, Sku};

/// One product-and-quantity entry within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    pub quantity: i64,
    /// Unit sale price before discount.
    pub sale_price: f64,
    /// Discount percentage, expected within `[0, 100]`.
    pub discount: f64,
}

impl LineItem {
    pub fn new(sku: impl Into<Sku>, quantity: i64, sale_price: f64, discount: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }

    /// Shape checks that hold for every pricing policy.
    ///
    /// The discount *range* is a pricing concern and is checked by the
    /// revenue strategy, not here.
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity < 0 {
            return Err(DomainError::invalid_input(format!(
                "line item {}: quantity must not be negative (got {})",
                self.sku, self.quantity
            )));
        }
        if !self.sale_price.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "line item {}: sale_price must be a finite number",
                self.sku
            )));
        }
        if !self.discount.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "line item {}: discount must be a finite number",
                self.sku
            )));
        }
        Ok(())
    }
}

/// A purchase receipt attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: SellerId,
    /// Amount actually charged for the whole receipt.
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<SellerId>, total_amount: f64, items: Vec<LineItem>) -> Self {
        Self {
            seller_id: seller_id.into(),
            total_amount,
            items,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.total_amount.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "purchase record for seller {}: total_amount must be a finite number",
                self.seller_id
            )));
        }
        self.items.iter().try_for_each(LineItem::validate)
    }
}
