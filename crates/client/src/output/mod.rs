//! Output formatting functions.

pub mod pretty;

use salesdemo_core::sale::Sale;

use crate::cli::OutputFormat;

/// Values the CLI knows how to print in human-readable form.
pub trait Render: serde::Serialize {
    fn render(&self) -> String;
}

impl Render for Sale {
    fn render(&self) -> String {
        pretty::format_sale(self)
    }
}

impl Render for Vec<Sale> {
    fn render(&self) -> String {
        pretty::format_sales(self)
    }
}

/// Format a value for output.
pub fn format_output<T: Render>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => value.render(),
    }
}
