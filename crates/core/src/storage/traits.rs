use async_trait::async_trait;

use crate::sale::{Sale, SaveOutcome};

use super::Result;

/// Repository for sale records.
///
/// Implementations keep records in insertion order and hold at most one
/// record per product id.
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Returns every sale in collection order.
    async fn find_all(&self) -> Result<Vec<Sale>>;

    /// Inserts the sale, or replaces the record with the same product id in place.
    async fn save(&self, sale: Sale) -> Result<SaveOutcome>;

    /// Removes all sales with the given product id. Returns the number removed.
    async fn delete_by_id(&self, product_id: i32) -> Result<usize>;
}
