//! Sales input model.
//!
//! Immutable records describing one reporting snapshot: who sells, what is
//! sold at which cost, and the purchase receipts. Upstream loaders hand these
//! over already parsed; this crate only checks that the numbers are usable.

pub mod dataset;
pub mod product;
pub mod record;
pub mod seller;

pub use dataset::SalesDataset;
pub use product::Product;
pub use record::{LineItem, PurchaseRecord};
pub use seller::Seller;
