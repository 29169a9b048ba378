//! Health check operations.

use super::SalesdemoClient;
use crate::error::{ClientError, Result};

impl SalesdemoClient {
    /// Check that the server is accepting requests (GET /livez).
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "liveness probe failed".to_string(),
            })
        }
    }
}
