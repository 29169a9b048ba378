//! Test doubles shared by unit tests.

use async_trait::async_trait;

use salesdemo_core::sale::{Sale, SaveOutcome};
use salesdemo_core::storage::{RepositoryError, Result, SaleRepository};

/// Repository whose every call fails.
pub struct FailingRepository;

#[async_trait]
impl SaleRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Sale>> {
        Err(RepositoryError::ConnectionFailed("offline".to_string()))
    }

    async fn save(&self, _sale: Sale) -> Result<SaveOutcome> {
        Err(RepositoryError::QueryFailed("write rejected".to_string()))
    }

    async fn delete_by_id(&self, _product_id: i32) -> Result<usize> {
        Err(RepositoryError::QueryFailed("delete rejected".to_string()))
    }
}
