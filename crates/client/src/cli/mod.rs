//! CLI command definitions.

pub mod sales;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the salesdemo API.
#[derive(Debug, Parser)]
#[command(name = "salesdemo-client")]
#[command(about = "CLI client for the salesdemo API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "SALESDEMO_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sale management.
    Sales(sales::SalesCommand),
    /// Check that the server is up.
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales::SalesAction;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "salesdemo-client",
            "--base-url",
            "http://localhost:9000",
            "sales",
            "create",
            "--product-id",
            "1",
            "--name",
            "Widget",
            "--price",
            "10",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://localhost:9000");
        match cli.command {
            Commands::Sales(cmd) => match cmd.action {
                SalesAction::Create(args) => {
                    assert_eq!(args.into_sale(), salesdemo_core::sale::Sale::new(1, "Widget", 10));
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete_negative_id() {
        let cli = Cli::try_parse_from(["salesdemo-client", "sales", "delete", "--", "-3"]).unwrap();

        match cli.command {
            Commands::Sales(cmd) => {
                assert!(matches!(cmd.action, SalesAction::Delete { product_id: -3 }))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_health() {
        let cli = Cli::try_parse_from(["salesdemo-client", "--format", "json", "health"]).unwrap();

        assert!(matches!(cli.command, Commands::Health));
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
