//! Worked textbook examples, printed as question/answer pairs with every
//! value rounded to 9 decimal places.

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tvm_core::fixed_income::bonds::{self, BondPricingInput};
use tvm_core::fixed_income::yields::{self, YieldInput};
use tvm_core::time_value;

/// Arguments for the worked examples
#[derive(Args)]
pub struct ExamplesArgs {
    /// Which chapter of examples to print
    #[arg(long, default_value = "all")]
    pub topic: Topic,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Topic {
    Npv,
    Bonds,
    All,
}

pub fn run_examples(args: ExamplesArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.topic {
        Topic::Npv => print_npv_examples()?,
        Topic::Bonds => print_bond_examples()?,
        Topic::All => {
            print_npv_examples()?;
            print_bond_examples()?;
        }
    }
    Ok(())
}

fn rounded(value: Decimal) -> Decimal {
    value.round_dp(9).normalize()
}

fn print_npv_examples() -> Result<(), Box<dyn std::error::Error>> {
    println!("How much should I invest to get 107$ after one year at an interest rate of 7%?");
    let value = time_value::present_value(dec!(0.07), &[dec!(107)])?;
    println!("\tAnswer: {}", rounded(value));

    println!("What is the value of a 100$ investment after 2 years at an interest rate of 7%?");
    let value = time_value::investment_value_after_years(2, dec!(100), dec!(0.07))?;
    println!("\tAnswer: {}", rounded(value));

    println!(
        "How much do I need to invest today to produce 114.49$ after 2 years at an interest \
         rate of 7%?"
    );
    let value = time_value::required_investment_today(dec!(114.49), 2, dec!(0.07))?;
    println!("\tAnswer: {}", rounded(value));
    let value = time_value::present_value(dec!(0.07), &[dec!(0), dec!(114.49)])?;
    println!("\tSolve another way: {}", rounded(value));

    println!(
        "What is the present value of an annuity paying 1$ every year forever at a discount \
         rate of 10%? (approximated with 2000 payments)"
    );
    let flows = vec![dec!(1); 2000];
    let value = time_value::present_value(dec!(0.1), &flows)?;
    println!("\tAnswer: {}", rounded(value));
    let value = time_value::present_value_of_perpetuity(dec!(1), dec!(0.1))?;
    println!("\tClosed form: {}", rounded(value));

    println!(
        "What is the present value of an annuity paying 1$ every year for 10 years at a \
         discount rate of 10%?"
    );
    let value = time_value::present_value_of_annuity(dec!(1), dec!(0.1), 10)?;
    println!("\tAnswer: {}", rounded(value));
    let flows = vec![dec!(1); 10];
    let value = time_value::present_value(dec!(0.1), &flows)?;
    println!("\tSolve another way: {}", rounded(value));

    Ok(())
}

fn print_bond_examples() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "What is the value of a bond with a face value of 100$ that pays a 4.25$ coupon until \
         it matures in 4 years, when the opportunity cost of capital is 0.15%?"
    );
    let input = BondPricingInput {
        coupon: dec!(4.25),
        face_value: dec!(100),
        num_years: 4,
        ytm: dec!(0.0015),
    };
    let result = bonds::price_bond(&input)?;
    println!("\tAnswer: {}", rounded(result.result.present_value));

    println!(
        "What is the yield to maturity of a bond priced at 116.34$ with a face value of 100$, \
         paying a 4.25$ coupon until it matures in 4 years?"
    );
    let input = YieldInput {
        price: dec!(116.34),
        coupon: dec!(4.25),
        face_value: dec!(100),
        num_years: 4,
    };
    let result = yields::yield_to_maturity(&input)?;
    println!("\tAnswer: {}", rounded(result.result.yield_to_maturity));

    Ok(())
}
