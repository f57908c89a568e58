//! Yield-to-maturity solver.
//!
//! Recovers the yield from an observed price by bisection over the
//! present-value function. Bond price is strictly decreasing in yield for a
//! schedule of non-negative flows with at least one positive entry, so a
//! single bracket always contains the root when the price is achievable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::TvmError;
use crate::fixed_income::bonds;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::TvmResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const BRACKET_LOW: Decimal = dec!(0.000001);
const BRACKET_HIGH: Decimal = dec!(1000000);
/// Absolute tolerance on price, not on rate. Precision scales with the
/// magnitude of the target price.
const PRICE_TOLERANCE: Decimal = dec!(0.001);
const MAX_BISECTION_ITERATIONS: u32 = 200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the yield solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldInput {
    /// Observed market price of the bond
    pub price: Money,
    /// Coupon amount paid at the end of every period
    pub coupon: Money,
    /// Par amount repaid with the final coupon
    pub face_value: Money,
    /// Number of coupon periods until maturity
    pub num_years: u32,
}

/// Output of the yield solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldOutput {
    /// The converged per-period yield
    pub yield_to_maturity: Rate,
    /// Bisection iterations spent
    pub iterations: u32,
    /// Present value of the bond at the converged yield; within tolerance of
    /// the observed price
    pub achieved_price: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Find the yield at which the bond's present value matches the observed
/// price.
///
/// The search brackets the root in [1e-6, 1e6] and halves the bracket each
/// step, keeping the half whose prices straddle the target. Targets outside
/// the achievable price range fail fast instead of exhausting the iteration
/// cap.
pub fn yield_to_maturity(input: &YieldInput) -> TvmResult<ComputationOutput<YieldOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let amounts = bonds::cash_flow_amounts(input.coupon, input.face_value, input.num_years);

    // The bracket endpoints bound the achievable price range.
    let price_at_low = time_value::present_value(BRACKET_LOW, &amounts)?;
    let price_at_high = time_value::present_value(BRACKET_HIGH, &amounts)?;
    if input.price > price_at_low || input.price < price_at_high {
        return Err(TvmError::FinancialImpossibility(format!(
            "No yield in [{}, {}] reproduces price {}; achievable prices are [{}, {}]",
            BRACKET_LOW, BRACKET_HIGH, input.price, price_at_high, price_at_low
        )));
    }

    let mut low = BRACKET_LOW;
    let mut high = BRACKET_HIGH;
    let mut last_delta = Decimal::MAX;

    for iteration in 0..MAX_BISECTION_ITERATIONS {
        let guess = (low + high) / dec!(2);
        let calculated = time_value::present_value(guess, &amounts)?;
        last_delta = input.price - calculated;

        if last_delta.abs() <= PRICE_TOLERANCE {
            let output = YieldOutput {
                yield_to_maturity: guess,
                iterations: iteration + 1,
                achieved_price: calculated,
            };
            let elapsed = start.elapsed().as_micros() as u64;
            return Ok(with_metadata(
                "Yield to Maturity — bisection on the present-value function",
                input,
                warnings,
                elapsed,
                output,
            ));
        }

        // A guess that prices the bond below the target is too high.
        if calculated < input.price {
            high = guess;
        } else {
            low = guess;
        }
    }

    Err(TvmError::ConvergenceFailure {
        function: "YTM".into(),
        iterations: MAX_BISECTION_ITERATIONS,
        last_delta,
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &YieldInput) -> TvmResult<()> {
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
    if input.price <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "price".into(),
            reason: "Observed price must be positive".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_bond(price: Money) -> YieldInput {
        YieldInput {
            price,
            coupon: dec!(4.25),
            face_value: dec!(100),
            num_years: 4,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Reference yield
    // -----------------------------------------------------------------------
    #[test]
    fn test_reference_yield() {
        let result = yield_to_maturity(&reference_bond(dec!(116.34))).unwrap();
        let ytm = result.result.yield_to_maturity;
        assert!(
            (ytm - dec!(0.0015)).abs() < dec!(0.001),
            "Expected YTM ~0.15%, got {}",
            ytm
        );
    }

    // -----------------------------------------------------------------------
    // 2. Achieved price within tolerance
    // -----------------------------------------------------------------------
    #[test]
    fn test_achieved_price_within_tolerance() {
        let result = yield_to_maturity(&reference_bond(dec!(116.34))).unwrap();
        let delta = (result.result.achieved_price - dec!(116.34)).abs();
        assert!(delta <= dec!(0.001), "Residual {} exceeds tolerance", delta);
    }

    // -----------------------------------------------------------------------
    // 3. Bounded iteration count
    // -----------------------------------------------------------------------
    #[test]
    fn test_iterations_bounded() {
        let result = yield_to_maturity(&reference_bond(dec!(116.34))).unwrap();
        assert!(result.result.iterations <= MAX_BISECTION_ITERATIONS);
    }

    // -----------------------------------------------------------------------
    // 4. Price above undiscounted total is unreachable
    // -----------------------------------------------------------------------
    #[test]
    fn test_price_above_undiscounted_sum_fails_fast() {
        // The schedule totals 117; no positive yield prices the bond at 200.
        let result = yield_to_maturity(&reference_bond(dec!(200)));
        assert!(matches!(result, Err(TvmError::FinancialImpossibility(_))));
    }

    // -----------------------------------------------------------------------
    // 5. Price below the deep-discount floor is unreachable
    // -----------------------------------------------------------------------
    #[test]
    fn test_price_below_floor_fails_fast() {
        let result = yield_to_maturity(&reference_bond(dec!(0.000000001)));
        assert!(matches!(result, Err(TvmError::FinancialImpossibility(_))));
    }

    // -----------------------------------------------------------------------
    // 6. Non-positive price rejected up front
    // -----------------------------------------------------------------------
    #[test]
    fn test_non_positive_price_rejected() {
        match yield_to_maturity(&reference_bond(dec!(-5))).unwrap_err() {
            TvmError::InvalidInput { field, .. } => assert_eq!(field, "price"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 7. Par bond yields its coupon rate
    // -----------------------------------------------------------------------
    #[test]
    fn test_par_bond_yield() {
        // 5% coupon bond priced at par: the yield is the coupon rate.
        let input = YieldInput {
            price: dec!(100),
            coupon: dec!(5),
            face_value: dec!(100),
            num_years: 10,
        };
        let result = yield_to_maturity(&input).unwrap();
        assert!(
            (result.result.yield_to_maturity - dec!(0.05)).abs() < dec!(0.0001),
            "Par bond YTM should be ~5%, got {}",
            result.result.yield_to_maturity
        );
    }
}
