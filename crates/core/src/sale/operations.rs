//! Pure functions over an ordered collection of sales.
//!
//! The collection is a plain `Vec<Sale>` in insertion order. Lookups are a
//! linear scan, which keeps the position of a record stable across updates.

use super::types::{Sale, SaveOutcome};

/// Returns the index of the first sale with the given product id.
pub fn position_of(sales: &[Sale], product_id: i32) -> Option<usize> {
    sales.iter().position(|sale| sale.product_id == product_id)
}

/// Inserts a sale, or replaces the first one sharing its product id.
///
/// A replacement keeps the original position. A new product id is appended.
pub fn upsert_sale(sales: &mut Vec<Sale>, sale: Sale) -> SaveOutcome {
    match position_of(sales, sale.product_id) {
        Some(index) => {
            sales[index] = sale;
            SaveOutcome::Replaced { index }
        }
        None => {
            sales.push(sale);
            SaveOutcome::Inserted {
                index: sales.len() - 1,
            }
        }
    }
}

/// Removes every sale with the given product id and returns how many were removed.
///
/// The relative order of the remaining sales is unchanged.
pub fn remove_sales_by_id(sales: &mut Vec<Sale>, product_id: i32) -> usize {
    let before = sales.len();
    sales.retain(|sale| sale.product_id != product_id);
    before - sales.len()
}
