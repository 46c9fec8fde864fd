use serde::{Deserialize, Serialize};

use salesperf_core::{DomainError, DomainResult};

use crate::{Product, PurchaseRecord, Seller};

/// One reporting snapshot: the three joined collections.
///
/// Every collection defaults to empty when absent from serialized input, so a
/// payload without `sellers` surfaces as an invalid-input failure of the
/// report instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesDataset {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers,
            products,
            purchase_records,
        }
    }

    /// Check the snapshot before any aggregation starts.
    pub fn validate(&self) -> DomainResult<()> {
        if self.sellers.is_empty() {
            return Err(DomainError::invalid_input(
                "dataset must contain at least one seller",
            ));
        }
        self.products.iter().try_for_each(Product::validate)?;
        self.purchase_records
            .iter()
            .try_for_each(PurchaseRecord::validate)
    }
}
