//! Pretty output formatting.

use salesdemo_core::sale::Sale;

/// Format a sale for display.
pub fn format_sale(sale: &Sale) -> String {
    format!(
        "{}\n  Product ID: {}\n  Price: {}",
        sale.product_name, sale.product_id, sale.price
    )
}

/// Format sales for display.
pub fn format_sales(sales: &[Sale]) -> String {
    if sales.is_empty() {
        return "No sales found.".to_string();
    }
    let mut output = format!("SALES ({})\n", sales.len());
    output.push_str(&"-".repeat(40));
    for sale in sales {
        output.push_str(&format!("\n{}", format_sale(sale)));
        output.push('\n');
    }
    output
}
