//! Sale CLI commands.

use clap::{Args, Parser, Subcommand};
use salesdemo_core::sale::Sale;

/// Sale management commands.
#[derive(Debug, Parser)]
pub struct SalesCommand {
    #[command(subcommand)]
    pub action: SalesAction,
}

/// Fields of a sale record.
#[derive(Debug, Args)]
pub struct SaleArgs {
    /// Product ID (identity key).
    #[arg(long, allow_negative_numbers = true)]
    pub product_id: i32,
    /// Product name.
    #[arg(long)]
    pub name: String,
    /// Price.
    #[arg(long, allow_negative_numbers = true)]
    pub price: i32,
}

impl SaleArgs {
    /// Build the sale record these arguments describe.
    pub fn into_sale(self) -> Sale {
        Sale::new(self.product_id, self.name, self.price)
    }
}

/// Available sale actions.
#[derive(Debug, Subcommand)]
pub enum SalesAction {
    /// List all sales.
    List,
    /// Insert a sale (replaces an existing one with the same product ID).
    Create(SaleArgs),
    /// Replace a sale.
    Update(SaleArgs),
    /// Delete sales by product ID.
    Delete {
        /// Product ID.
        product_id: i32,
    },
}
