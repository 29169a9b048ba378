//! Demo data for seeding a fresh server.

use super::types::Sale;

/// Returns a fixed set of demo sales with distinct product ids.
///
/// # Example
///
/// ```
/// use salesdemo_core::sale::generate_seed_sales;
///
/// let sales = generate_seed_sales();
/// assert!(!sales.is_empty());
/// ```
pub fn generate_seed_sales() -> Vec<Sale> {
    vec![
        Sale::new(101, "Espresso Machine", 349),
        Sale::new(102, "Burr Grinder", 129),
        Sale::new(103, "Milk Frother", 45),
        Sale::new(104, "Pour-Over Kettle", 60),
        Sale::new(105, "Coffee Beans (1kg)", 28),
    ]
}
