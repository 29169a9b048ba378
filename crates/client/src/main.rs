//! salesdemo-client CLI entry point.

use clap::Parser;
use salesdemo_client::cli::sales::SalesAction;
use salesdemo_client::cli::{Cli, Commands, OutputFormat};
use salesdemo_client::client::SalesdemoClient;
use salesdemo_client::output::format_output;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = SalesdemoClient::new(&cli.base_url);

    match cli.command {
        Commands::Sales(sales_cmd) => match sales_cmd.action {
            SalesAction::List => {
                let sales = client.list_sales().await?;
                println!("{}", format_output(&sales, cli.format));
            }
            SalesAction::Create(args) => {
                let sale = args.into_sale();
                client.create_sale(&sale).await?;
                if !cli.quiet {
                    if let OutputFormat::Pretty = cli.format {
                        println!("Saved:");
                    }
                    println!("{}", format_output(&sale, cli.format));
                }
            }
            SalesAction::Update(args) => {
                let sale = args.into_sale();
                client.update_sale(&sale).await?;
                if !cli.quiet {
                    if let OutputFormat::Pretty = cli.format {
                        println!("Updated:");
                    }
                    println!("{}", format_output(&sale, cli.format));
                }
            }
            SalesAction::Delete { product_id } => {
                client.delete_sale(product_id).await?;
                if !cli.quiet {
                    println!("Deleted sales with product ID {}", product_id);
                }
            }
        },
        Commands::Health => {
            client.livez().await?;
            if !cli.quiet {
                println!("{} is up", client.base_url());
            }
        }
    }

    Ok(())
}
