//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use salesdemo_core::sale::{remove_sales_by_id, upsert_sale, Sale, SaveOutcome};
use salesdemo_core::storage::{Result, SaleRepository};

/// In-memory storage backend.
///
/// A single coarse lock guards the collection: readers share it, writers
/// hold it exclusively for one linear scan. Data is lost when the last
/// clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    sales: Arc<RwLock<Vec<Sale>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given sales.
    ///
    /// Input is folded through the upsert rule, so a repeated product id
    /// keeps the first position and the last value.
    pub fn with_sales(initial: impl IntoIterator<Item = Sale>) -> Self {
        let mut sales = Vec::new();
        for sale in initial {
            upsert_sale(&mut sales, sale);
        }
        Self {
            sales: Arc::new(RwLock::new(sales)),
        }
    }
}

#[async_trait]
impl SaleRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Sale>> {
        let sales = self.sales.read().await;
        Ok(sales.clone())
    }

    async fn save(&self, sale: Sale) -> Result<SaveOutcome> {
        let mut sales = self.sales.write().await;
        Ok(upsert_sale(&mut sales, sale))
    }

    async fn delete_by_id(&self, product_id: i32) -> Result<usize> {
        let mut sales = self.sales.write().await;
        Ok(remove_sales_by_id(&mut sales, product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_repository_is_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_new_id_appends() {
        let repo = InMemoryRepository::new();

        repo.save(Sale::new(1, "A", 5)).await.unwrap();
        let outcome = repo.save(Sale::new(2, "B", 7)).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Inserted { index: 1 });
        assert_eq!(
            repo.find_all().await.unwrap(),
            vec![Sale::new(1, "A", 5), Sale::new(2, "B", 7)]
        );
    }

    #[tokio::test]
    async fn test_save_existing_id_keeps_position() {
        let repo = InMemoryRepository::new();
        repo.save(Sale::new(1, "A", 5)).await.unwrap();
        repo.save(Sale::new(2, "B", 7)).await.unwrap();

        let outcome = repo.save(Sale::new(1, "A2", 6)).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Replaced { index: 0 });
        assert_eq!(
            repo.find_all().await.unwrap(),
            vec![Sale::new(1, "A2", 6), Sale::new(2, "B", 7)]
        );
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryRepository::with_sales([Sale::new(1, "A", 5), Sale::new(2, "B", 7)]);

        assert_eq!(repo.delete_by_id(1).await.unwrap(), 1);
        assert_eq!(repo.find_all().await.unwrap(), vec![Sale::new(2, "B", 7)]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let repo = InMemoryRepository::with_sales([Sale::new(1, "A", 5)]);

        assert_eq!(repo.delete_by_id(99).await.unwrap(), 0);
        assert_eq!(repo.find_all().await.unwrap(), vec![Sale::new(1, "A", 5)]);
    }

    #[tokio::test]
    async fn test_with_sales_collapses_duplicate_ids() {
        let repo = InMemoryRepository::with_sales([
            Sale::new(1, "first", 1),
            Sale::new(2, "other", 2),
            Sale::new(1, "second", 3),
        ]);

        assert_eq!(
            repo.find_all().await.unwrap(),
            vec![Sale::new(1, "second", 3), Sale::new(2, "other", 2)]
        );
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();

        other.save(Sale::new(5, "Shared", 1)).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![Sale::new(5, "Shared", 1)]);
    }

    #[tokio::test]
    async fn test_concurrent_saves_do_not_lose_updates() {
        let repo = InMemoryRepository::new();

        let handles: Vec<_> = (0..50)
            .map(|id| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.save(Sale::new(id, "item", id)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.find_all().await.unwrap().len(), 50);
    }
}
