mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::chart::ChartArgs;
use commands::examples::ExamplesArgs;
use commands::fixed_income::{BondPriceArgs, YtmArgs};
use commands::time_value::{
    AnnuityArgs, FutureValueArgs, NpvArgs, PerpetuityArgs, PresentValueArgs,
    RequiredInvestmentArgs,
};

/// Textbook time-value-of-money calculations
#[derive(Parser)]
#[command(
    name = "tvm",
    version,
    about = "Textbook time-value-of-money and bond valuation calculations",
    long_about = "A CLI for working through textbook corporate finance formulas with \
                  decimal precision. Supports present value, net present value, \
                  annuities, perpetuities, bond pricing, yield to maturity, and \
                  cash-flow charts. For learning purposes; not investment advice."
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
    /// Present value of a cash-flow sequence
    PresentValue(PresentValueArgs),
    /// Value of a lump-sum investment after a number of years
    FutureValue(FutureValueArgs),
    /// Amount to invest today to produce a target payoff
    RequiredInvestment(RequiredInvestmentArgs),
    /// Net present value: discounted flows less the initial investment
    Npv(NpvArgs),
    /// Present value of a level annuity
    Annuity(AnnuityArgs),
    /// Present value of a perpetuity
    Perpetuity(PerpetuityArgs),
    /// Price a bond from its coupon, face value, term, and yield
    BondPrice(BondPriceArgs),
    /// Recover the yield to maturity from an observed bond price
    Ytm(YtmArgs),
    /// Render a cash-flow bar chart to an SVG file
    Chart(ChartArgs),
    /// Print the worked textbook examples
    Examples(ExamplesArgs),
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
        Commands::PresentValue(args) => commands::time_value::run_present_value(args),
        Commands::FutureValue(args) => commands::time_value::run_future_value(args),
        Commands::RequiredInvestment(args) => {
            commands::time_value::run_required_investment(args)
        }
        Commands::Npv(args) => commands::time_value::run_npv(args),
        Commands::Annuity(args) => commands::time_value::run_annuity(args),
        Commands::Perpetuity(args) => commands::time_value::run_perpetuity(args),
        Commands::BondPrice(args) => commands::fixed_income::run_bond_price(args),
        Commands::Ytm(args) => commands::fixed_income::run_ytm(args),
        Commands::Chart(args) => commands::chart::run_chart(args),
        Commands::Examples(args) => {
            if let Err(e) = commands::examples::run_examples(args) {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
            return;
        }
        Commands::Version => {
            println!("tvm {}", env!("CARGO_PKG_VERSION"));
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
