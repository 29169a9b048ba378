//! salesdemo_client - CLI client for the salesdemo API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::SalesdemoClient;
pub use error::{ClientError, Result};
