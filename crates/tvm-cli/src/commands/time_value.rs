use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use tvm_core::time_value;

/// Arguments for present value
#[derive(Args)]
pub struct PresentValueArgs {
    /// Per-period discount rate as a decimal (0.07 = 7%)
    #[arg(long)]
    pub rate: Decimal,
    /// Comma-separated cash flows, starting at the end of period 1
    #[arg(long, value_delimiter = ',', required = true)]
    pub cash_flows: Vec<Decimal>,
}

pub fn run_present_value(args: PresentValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = time_value::present_value(args.rate, &args.cash_flows)?;
    Ok(json!({ "present_value": value }))
}

/// Arguments for future value of a lump sum
#[derive(Args)]
pub struct FutureValueArgs {
    /// Number of years the investment compounds
    #[arg(long)]
    pub years: u32,
    /// Amount invested today
    #[arg(long)]
    pub principal: Decimal,
    /// Fixed yearly interest rate as a decimal
    #[arg(long)]
    pub rate: Decimal,
}

pub fn run_future_value(args: FutureValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = time_value::investment_value_after_years(args.years, args.principal, args.rate)?;
    Ok(json!({ "future_value": value }))
}

/// Arguments for the investment needed to reach a payoff
#[derive(Args)]
pub struct RequiredInvestmentArgs {
    /// Target payoff amount
    #[arg(long)]
    pub payoff: Decimal,
    /// Number of years until the payoff
    #[arg(long)]
    pub years: u32,
    /// Fixed yearly interest rate as a decimal
    #[arg(long)]
    pub rate: Decimal,
}

pub fn run_required_investment(
    args: RequiredInvestmentArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let value = time_value::required_investment_today(args.payoff, args.years, args.rate)?;
    Ok(json!({ "required_investment": value }))
}

/// Arguments for net present value
#[derive(Args)]
pub struct NpvArgs {
    /// Up-front investment paid today
    #[arg(long)]
    pub initial_investment: Decimal,
    /// Per-period discount rate as a decimal
    #[arg(long)]
    pub rate: Decimal,
    /// Comma-separated cash flows, starting at the end of period 1
    #[arg(long, value_delimiter = ',', required = true)]
    pub cash_flows: Vec<Decimal>,
}

pub fn run_npv(args: NpvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value =
        time_value::net_present_value(args.initial_investment, args.rate, &args.cash_flows)?;
    Ok(json!({ "net_present_value": value }))
}

/// Arguments for a level annuity
#[derive(Args)]
pub struct AnnuityArgs {
    /// Payment received at the end of every period
    #[arg(long)]
    pub payment: Decimal,
    /// Per-period discount rate as a decimal
    #[arg(long)]
    pub rate: Decimal,
    /// Number of payments
    #[arg(long)]
    pub years: u32,
}

pub fn run_annuity(args: AnnuityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = time_value::present_value_of_annuity(args.payment, args.rate, args.years)?;
    Ok(json!({ "present_value": value }))
}

/// Arguments for a perpetuity
#[derive(Args)]
pub struct PerpetuityArgs {
    /// Payment received at the end of every period, forever
    #[arg(long)]
    pub payment: Decimal,
    /// Per-period discount rate as a decimal
    #[arg(long)]
    pub rate: Decimal,
}

pub fn run_perpetuity(args: PerpetuityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = time_value::present_value_of_perpetuity(args.payment, args.rate)?;
    Ok(json!({ "present_value": value }))
}
