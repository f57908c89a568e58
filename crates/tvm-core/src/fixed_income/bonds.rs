//! Bond pricing: derive the coupon schedule and discount it at the yield.
//!
//! A bond here is the textbook instrument: one coupon per period, face value
//! repaid together with the final coupon.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::TvmError;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::TvmResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for bond pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondPricingInput {
    /// Coupon amount paid at the end of every period
    pub coupon: Money,
    /// Par amount repaid with the final coupon
    pub face_value: Money,
    /// Number of coupon periods until maturity
    pub num_years: u32,
    /// Yield to maturity as a decimal (e.g. 0.05 = 5%)
    pub ytm: Rate,
}

/// A single bond cashflow entry (coupon, or coupon plus principal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondCashflow {
    /// 1-based period index; the flow lands at the end of this period
    pub period: u32,
    pub amount: Money,
    pub cashflow_type: String,
}

/// Output of bond pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondPricingOutput {
    /// Present value of the full schedule at the given yield
    pub present_value: Money,
    /// Sum of the schedule with no discounting; an upper bound on the price
    /// for any positive yield
    pub undiscounted_total: Money,
    /// Full schedule of future cashflows (coupons + principal)
    pub cashflows: Vec<BondCashflow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Price a bond as the present value of its coupon schedule.
pub fn price_bond(input: &BondPricingInput) -> TvmResult<ComputationOutput<BondPricingOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let amounts = cash_flow_amounts(input.coupon, input.face_value, input.num_years);
    let present_value = time_value::present_value(input.ytm, &amounts)?;
    let undiscounted_total: Money = amounts.iter().sum();

    if present_value.is_zero() {
        warnings.push("Present value rounded to zero at this yield".into());
    }

    let output = BondPricingOutput {
        present_value,
        undiscounted_total,
        cashflows: build_cashflow_schedule(&amounts),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Bond Pricing — coupon schedule discounted at yield to maturity",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &BondPricingInput) -> TvmResult<()> {
    if input.num_years == 0 {
        return Err(TvmError::InvalidInput {
            field: "num_years".into(),
            reason: "A bond needs at least one period; a zero-length schedule has no final payment"
                .into(),
        });
    }
    if input.face_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "face_value".into(),
            reason: "Face value must be positive".into(),
        });
    }
    if input.coupon < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "coupon".into(),
            reason: "Coupon cannot be negative".into(),
        });
    }
    if input.ytm <= dec!(-1) {
        return Err(TvmError::InvalidInput {
            field: "ytm".into(),
            reason: "Yield must be greater than -100%".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Cashflow schedule
// ---------------------------------------------------------------------------

/// Coupon repeated once per period, face value added to the final payment.
pub(crate) fn cash_flow_amounts(coupon: Money, face_value: Money, num_years: u32) -> Vec<Money> {
    let mut amounts = vec![coupon; num_years as usize];
    if let Some(last) = amounts.last_mut() {
        *last += face_value;
    }
    amounts
}

fn build_cashflow_schedule(amounts: &[Money]) -> Vec<BondCashflow> {
    let mut cashflows = Vec::with_capacity(amounts.len());

    for (i, &amount) in amounts.iter().enumerate() {
        let is_last = i == amounts.len() - 1;
        cashflows.push(BondCashflow {
            period: i as u32 + 1,
            amount,
            cashflow_type: if is_last {
                "coupon+principal".into()
            } else {
                "coupon".into()
            },
        });
    }

    cashflows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
