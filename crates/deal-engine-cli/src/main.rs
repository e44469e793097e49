mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::quote::{CompareArgs, FinanceArgs, LeaseArgs, QuoteArgs};
use commands::seed::BlankArgs;

/// Vehicle deal-structuring calculations
#[derive(Parser)]
#[command(
    name = "deal",
    version,
    about = "Vehicle deal-structuring calculations",
    long_about = "Computes monthly payments and financial totals for proposed vehicle \
                  purchase and lease structures with decimal precision: loan \
                  amortization, lease depreciation and rent charge, tax and fee \
                  composition, and blank comparison-column seeding."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an amortizing-loan payment and loan totals
    Finance(FinanceArgs),
    /// Compute a lease payment and lease totals
    Lease(LeaseArgs),
    /// Compute a payment quote for a full deal option, dispatching by type
    Quote(QuoteArgs),
    /// Summarize payment quotes for a set of comparison options
    Compare(CompareArgs),
    /// Seed a blank deal option from dealership defaults and a credit tier
    Blank(BlankArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Finance(args) => commands::quote::run_finance(args),
        Commands::Lease(args) => commands::quote::run_lease(args),
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Compare(args) => commands::quote::run_compare(args),
        Commands::Blank(args) => commands::seed::run_blank(args),
        Commands::Version => {
            println!("deal {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
