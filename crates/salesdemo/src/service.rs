//! Sale service.
//!
//! A thin layer between the HTTP handlers and the repository. Repository
//! failures never propagate past this point: reads degrade to an empty list
//! and writes report a [`WriteOutcome`].

use std::sync::Arc;

use salesdemo_core::sale::Sale;
use salesdemo_core::storage::{RepositoryError, SaleRepository};

/// Result of a write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    Failed { reason: String },
}

impl WriteOutcome {
    /// Returns true if the write reached the repository successfully.
    pub fn succeeded(&self) -> bool {
        matches!(self, WriteOutcome::Applied)
    }
}

impl<T> From<Result<T, RepositoryError>> for WriteOutcome {
    fn from(result: Result<T, RepositoryError>) -> Self {
        match result {
            Ok(_) => WriteOutcome::Applied,
            Err(e) => WriteOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Service exposing the sale operations used by the HTTP layer.
#[derive(Clone)]
pub struct SaleService {
    repo: Arc<dyn SaleRepository>,
}

impl SaleService {
    pub fn new(repo: Arc<dyn SaleRepository>) -> Self {
        Self { repo }
    }

    /// Returns all sales in collection order.
    pub async fn get_all_sales(&self) -> Vec<Sale> {
        match self.repo.find_all().await {
            Ok(sales) => sales,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list sales");
                Vec::new()
            }
        }
    }

    /// Inserts a sale, replacing any record with the same product id.
    pub async fn insert_data(&self, sale: Sale) -> WriteOutcome {
        self.save("insert", sale).await
    }

    /// Replaces the sale with the same product id, inserting it if absent.
    pub async fn update_data(&self, sale: Sale) -> WriteOutcome {
        self.save("update", sale).await
    }

    /// Removes every sale with the given product id.
    pub async fn delete_sale(&self, product_id: i32) -> WriteOutcome {
        let result = self.repo.delete_by_id(product_id).await;
        match &result {
            Ok(removed) => tracing::info!(product_id, removed, "Deleted sale"),
            Err(e) => tracing::warn!(product_id, error = %e, "Sale delete failed"),
        }
        result.into()
    }

    async fn save(&self, operation: &'static str, sale: Sale) -> WriteOutcome {
        let product_id = sale.product_id;
        let result = self.repo.save(sale).await;
        match &result {
            Ok(outcome) => tracing::info!(
                operation,
                product_id,
                index = outcome.index(),
                replaced = outcome.is_replaced(),
                "Saved sale"
            ),
            Err(e) => tracing::warn!(operation, product_id, error = %e, "Sale save failed"),
        }
        result.into()
    }
}
