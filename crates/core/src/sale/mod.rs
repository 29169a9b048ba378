mod mock_data;
mod operations;
mod types;

pub use mock_data::generate_seed_sales;
pub use operations::{position_of, remove_sales_by_id, upsert_sale};
pub use types::{Sale, SaveOutcome};
