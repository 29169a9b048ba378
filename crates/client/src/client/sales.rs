//! Sale API operations.

use super::SalesdemoClient;
use crate::error::{ClientError, Result};
use salesdemo_core::sale::Sale;

impl SalesdemoClient {
    /// List all sales.
    pub async fn list_sales(&self) -> Result<Vec<Sale>> {
        let response = self.client.get(self.url("/employee")).send().await?;
        self.handle_response(response).await
    }

    /// Insert a sale (POST). Replaces an existing record with the same product id.
    pub async fn create_sale(&self, sale: &Sale) -> Result<()> {
        let response = self
            .client
            .post(self.url("/employee"))
            .json(sale)
            .send()
            .await?;
        let accepted: bool = self.handle_response(response).await?;
        ensure_accepted(accepted, "create", sale.product_id)
    }

    /// Replace a sale (PUT).
    pub async fn update_sale(&self, sale: &Sale) -> Result<()> {
        let response = self
            .client
            .put(self.url("/employee"))
            .json(sale)
            .send()
            .await?;
        let accepted: bool = self.handle_response(response).await?;
        ensure_accepted(accepted, "update", sale.product_id)
    }

    /// Delete sales by product id.
    pub async fn delete_sale(&self, product_id: i32) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/employee/{}", product_id)))
            .send()
            .await?;
        let accepted: bool = self.handle_response(response).await?;
        ensure_accepted(accepted, "delete", product_id)
    }
}

/// Map the server's boolean answer onto a result.
fn ensure_accepted(accepted: bool, operation: &'static str, product_id: i32) -> Result<()> {
    if accepted {
        Ok(())
    } else {
        Err(ClientError::Rejected {
            operation,
            product_id,
        })
    }
}
