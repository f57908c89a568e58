use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::TvmError;
use crate::types::{Money, Rate, Years};
use crate::TvmResult;

/// Present value of a sequence of future cash flows.
///
/// Index 0 is paid at the end of period 1, so every entry is discounted at
/// least once: PV = Σ c_t / (1+r)^(t+1). An empty sequence is worth zero.
pub fn present_value(rate: Rate, cash_flows: &[Money]) -> TvmResult<Money> {
    if rate <= dec!(-1) {
        return Err(TvmError::InvalidInput {
            field: "rate".into(),
            reason: "Discount rate must be greater than -100%".into(),
        });
    }

    let mut result = Decimal::ZERO;
    let one_plus_r = Decimal::ONE + rate;
    let mut discount = Decimal::ONE;

    for (t, cf) in cash_flows.iter().enumerate() {
        discount = match discount.checked_mul(one_plus_r) {
            Some(d) => d,
            // Factor left Decimal's range; every remaining term is below
            // representable precision.
            None => break,
        };
        if discount.is_zero() {
            return Err(TvmError::DivisionByZero {
                context: format!("present value discount factor at period {}", t + 1),
            });
        }
        let term = cf
            .checked_div(discount)
            .ok_or_else(|| TvmError::NumericOverflow {
                context: format!("present value term at period {}", t + 1),
            })?;
        result = result
            .checked_add(term)
            .ok_or_else(|| TvmError::NumericOverflow {
                context: "present value sum".into(),
            })?;
    }

    Ok(result)
}

/// Net present value: the discounted cash flows less the initial investment
/// paid today.
pub fn net_present_value(
    initial_investment: Money,
    rate: Rate,
    cash_flows: &[Money],
) -> TvmResult<Money> {
    Ok(present_value(rate, cash_flows)? - initial_investment)
}

/// Value of a lump-sum investment after a number of years at a fixed rate.
pub fn investment_value_after_years(
    years: Years,
    principal: Money,
    rate: Rate,
) -> TvmResult<Money> {
    let factor = compound_factor(rate, years)?;
    principal
        .checked_mul(factor)
        .ok_or_else(|| TvmError::NumericOverflow {
            context: "investment value".into(),
        })
}

/// Lump sum to invest today to produce a target payoff after a number of
/// years at a fixed rate.
pub fn required_investment_today(payoff: Money, years: Years, rate: Rate) -> TvmResult<Money> {
    let factor = compound_factor(rate, years)?;
    if factor.is_zero() {
        return Err(TvmError::DivisionByZero {
            context: "required investment compound factor".into(),
        });
    }
    Ok(payoff / factor)
}

/// Present value of an ordinary annuity of level payments, via the
/// geometric-series identity: payment * (1/r - 1/(r * (1+r)^n)).
///
/// Matches the term-by-term evaluator for the same level sequence; when the
/// compounding factor exceeds Decimal's range the tail term is below
/// representable precision and the value collapses to the perpetuity limit.
pub fn present_value_of_annuity(payment: Money, rate: Rate, years: Years) -> TvmResult<Money> {
    if rate.is_zero() {
        return Err(TvmError::DivisionByZero {
            context: "annuity discount rate".into(),
        });
    }

    let inverse_rate = Decimal::ONE / rate;
    let tail = match compound_factor(rate, years) {
        Ok(factor) => inverse_rate / factor,
        Err(TvmError::NumericOverflow { .. }) => Decimal::ZERO,
        Err(e) => return Err(e),
    };

    Ok(payment * (inverse_rate - tail))
}

/// Present value of a perpetuity of level payments: payment / rate.
pub fn present_value_of_perpetuity(payment: Money, rate: Rate) -> TvmResult<Money> {
    if rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "rate".into(),
            reason: "Perpetuity requires a positive discount rate".into(),
        });
    }
    Ok(payment / rate)
}

/// (1+rate)^years by iterative multiplication. Overflow surfaces as an
/// explicit error instead of a panic.
fn compound_factor(rate: Rate, years: Years) -> TvmResult<Decimal> {
    if rate <= dec!(-1) {
        return Err(TvmError::InvalidInput {
            field: "rate".into(),
            reason: "Rate must be greater than -100%".into(),
        });
    }

    let one_plus_r = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..years {
        factor = factor
            .checked_mul(one_plus_r)
            .ok_or_else(|| TvmError::NumericOverflow {
                context: "compound factor".into(),
            })?;
    }
    Ok(factor)
}
