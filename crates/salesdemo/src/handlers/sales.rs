//! Sale CRUD handlers.
//!
//! Each handler forwards to [`SaleService`](crate::service::SaleService).
//! Write handlers answer with a bare JSON boolean.

use axum::{
    extract::{Path, State},
    Json,
};

use salesdemo_core::sale::Sale;

use crate::{service::WriteOutcome, state::AppState};

/// Collapse a write outcome into the boolean the API returns.
fn respond(outcome: WriteOutcome) -> Json<bool> {
    if let WriteOutcome::Failed { reason } = &outcome {
        tracing::debug!(%reason, "Reporting failed write as false");
    }
    Json(outcome.succeeded())
}

/// List all sales (GET /employee).
pub async fn list_sales(State(state): State<AppState>) -> Json<Vec<Sale>> {
    Json(state.sales.get_all_sales().await)
}

/// Insert or replace a sale (POST /employee).
pub async fn add_sale(State(state): State<AppState>, Json(sale): Json<Sale>) -> Json<bool> {
    respond(state.sales.insert_data(sale).await)
}

/// Replace a sale (PUT /employee).
pub async fn update_sale(State(state): State<AppState>, Json(sale): Json<Sale>) -> Json<bool> {
    respond(state.sales.update_data(sale).await)
}

/// Delete sales by product id (DELETE /employee/{id}).
pub async fn delete_sale(State(state): State<AppState>, Path(id): Path<i32>) -> Json<bool> {
    respond(state.sales.delete_sale(id).await)
}
