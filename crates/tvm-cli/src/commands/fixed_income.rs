use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use tvm_core::fixed_income::bonds::{self, BondPricingInput};
use tvm_core::fixed_income::yields::{self, YieldInput};

use crate::input;

/// Arguments for bond pricing
#[derive(Args)]
pub struct BondPriceArgs {
    /// Path to JSON input file (alternative to the inline flags)
    #[arg(long)]
    pub input: Option<String>,
    /// Coupon paid at the end of each period
    #[arg(long)]
    pub coupon: Option<Decimal>,
    /// Face value repaid at maturity
    #[arg(long)]
    pub face_value: Option<Decimal>,
    /// Number of coupon periods
    #[arg(long)]
    pub num_years: Option<u32>,
    /// Yield to maturity as a decimal
    #[arg(long)]
    pub ytm: Option<Decimal>,
}

pub fn run_bond_price(args: BondPriceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pricing_input: BondPricingInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let (Some(coupon), Some(face_value), Some(num_years), Some(ytm)) =
        (args.coupon, args.face_value, args.num_years, args.ytm)
    {
        BondPricingInput {
            coupon,
            face_value,
            num_years,
            ytm,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(
            "--input <file.json>, the four inline flags, or stdin required for bond pricing"
                .into(),
        );
    };
    let result = bonds::price_bond(&pricing_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for yield to maturity
#[derive(Args)]
pub struct YtmArgs {
    /// Path to JSON input file (alternative to the inline flags)
    #[arg(long)]
    pub input: Option<String>,
    /// Observed market price of the bond
    #[arg(long)]
    pub price: Option<Decimal>,
    /// Coupon paid at the end of each period
    #[arg(long)]
    pub coupon: Option<Decimal>,
    /// Face value repaid at maturity
    #[arg(long)]
    pub face_value: Option<Decimal>,
    /// Number of coupon periods
    #[arg(long)]
    pub num_years: Option<u32>,
}

pub fn run_ytm(args: YtmArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let yield_input: YieldInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let (Some(price), Some(coupon), Some(face_value), Some(num_years)) =
        (args.price, args.coupon, args.face_value, args.num_years)
    {
        YieldInput {
            price,
            coupon,
            face_value,
            num_years,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(
            "--input <file.json>, the four inline flags, or stdin required for yield solving"
                .into(),
        );
    };
    let result = yields::yield_to_maturity(&yield_input)?;
    Ok(serde_json::to_value(result)?)
}
