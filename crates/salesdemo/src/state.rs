//! Shared application state.
//!
//! The state owns the sale service, which in turn owns the repository. It is
//! cloned into every handler; clones share the same underlying collection.

use std::{sync::Arc, time::Duration};

use salesdemo_core::sale::generate_seed_sales;
use salesdemo_core::storage::SaleRepository;

use crate::{config::Config, service::SaleService, storage::InMemoryRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Sale operations backed by the configured repository.
    pub sales: SaleService,
    /// Timeout applied to every request by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn build(repo: Arc<dyn SaleRepository>, config: &Config) -> Self {
        Self {
            sales: SaleService::new(repo),
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates an AppState backed by an empty in-memory repository.
    pub fn new(config: &Config) -> Self {
        Self::build(Arc::new(InMemoryRepository::new()), config)
    }

    /// Creates an AppState pre-loaded with demo sales.
    pub fn with_demo_data(config: &Config) -> Self {
        let repo = InMemoryRepository::with_sales(generate_seed_sales());
        tracing::info!("Seeded in-memory repository with demo sales");
        Self::build(Arc::new(repo), config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
