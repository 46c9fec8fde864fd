use serde::{Deserialize, Serialize};

use salesperf_core::{DomainError, DomainResult, Entity, Sku};

/// Product card: sku and the price it was bought in at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    /// Cost per unit, in currency units.
    pub purchase_price: f64,
}

impl Product {
    pub fn new(sku: impl Into<Sku>, purchase_price: f64) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
        }
    }

    /// Cost of `quantity` units at purchase price.
    ///
    /// Fails with `InvalidInput` when the product does not fit in an `f64`.
    pub fn cost_of(&self, quantity: i64) -> DomainResult<f64> {
        let cost = self.purchase_price * quantity as f64;
        if !cost.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "product {}: cost of {quantity} units overflowed",
                self.sku
            )));
        }
        Ok(cost)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.purchase_price.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "product {}: purchase_price must be a finite number",
                self.sku
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}
