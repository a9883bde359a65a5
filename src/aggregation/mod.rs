//! Aggregation - "who bought this product, on which list".

mod error;
mod service;

pub use error::BoughtProductsError;
pub use service::BoughtProductsService;

use crate::models::BoughtProducts;

/// A query returning every purchase of one product, ordered by client name
/// then grocery list name.
pub trait BoughtProductsQuery {
    fn get(&self, product_id: Option<i64>) -> Result<Vec<BoughtProducts>, BoughtProductsError>;
}
