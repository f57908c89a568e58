use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tvm_core::error::TvmError;
use tvm_core::time_value;

// ===========================================================================
// Present value
// ===========================================================================

#[test]
fn test_single_flow_discounts_one_period() {
    // A single flow c at period 1 is worth c / (1+r) for any positive rate
    for rate in [dec!(0.01), dec!(0.07), dec!(0.25), dec!(1.5)] {
        let flow = dec!(250);
        let pv = time_value::present_value(rate, &[flow]).unwrap();
        assert_eq!(pv, flow / (Decimal::ONE + rate));
    }
}

#[test]
fn test_textbook_present_value() {
    // Brealey-Myers opener: 107 in one year at 7% is worth 100 today
    let pv = time_value::present_value(dec!(0.07), &[dec!(107)]).unwrap();
    assert_eq!(pv, dec!(100));
}

#[test]
fn test_present_value_sums_discounted_terms() {
    // 4.25 / 1.0015 + 104.25 / 1.0015^2, checked term by term
    let rate = dec!(0.0015);
    let one_plus_r = Decimal::ONE + rate;
    let expected = dec!(4.25) / one_plus_r + dec!(104.25) / (one_plus_r * one_plus_r);
    let pv = time_value::present_value(rate, &[dec!(4.25), dec!(104.25)]).unwrap();
    assert_eq!(pv, expected);
}

#[test]
fn test_empty_sequence_is_worth_zero() {
    let pv = time_value::present_value(dec!(0.07), &[]).unwrap();
    assert_eq!(pv, Decimal::ZERO);
}

#[test]
fn test_zero_rate_sums_flows_undiscounted() {
    let pv = time_value::present_value(dec!(0), &[dec!(10), dec!(20), dec!(30)]).unwrap();
    assert_eq!(pv, dec!(60));
}

#[test]
fn test_rate_at_or_below_minus_one_rejected() {
    for rate in [dec!(-1), dec!(-2)] {
        let result = time_value::present_value(rate, &[dec!(100)]);
        assert!(matches!(
            result,
            Err(TvmError::InvalidInput { ref field, .. }) if field == "rate"
        ));
    }
}

#[test]
fn test_negative_rate_in_range_is_accepted() {
    // Rates in (-1, 0) inflate rather than discount
    let pv = time_value::present_value(dec!(-0.5), &[dec!(100)]).unwrap();
    assert_eq!(pv, dec!(200));
}

// ===========================================================================
// Net present value
// ===========================================================================

#[test]
fn test_npv_is_pv_less_initial_investment() {
    let flows = vec![dec!(300), dec!(400), dec!(500)];
    for rate in [dec!(0.05), dec!(0.10), dec!(0.20)] {
        let pv = time_value::present_value(rate, &flows).unwrap();
        let npv = time_value::net_present_value(dec!(1000), rate, &flows).unwrap();
        assert_eq!(npv, pv - dec!(1000));
    }
}

#[test]
fn test_npv_negative_when_investment_exceeds_pv() {
    let npv = time_value::net_present_value(dec!(1000), dec!(0.10), &[dec!(500)]).unwrap();
    assert!(npv < Decimal::ZERO);
}

// ===========================================================================
// Compounding
// ===========================================================================

#[test]
fn test_investment_value_textbook_scenario() {
    // 100 at 7% for two years: 100 * 1.07^2 = 114.49
    let value = time_value::investment_value_after_years(2, dec!(100), dec!(0.07)).unwrap();
    assert_eq!(value, dec!(114.49));
}

#[test]
fn test_required_investment_round_trips_compounding() {
    let value = time_value::required_investment_today(dec!(114.49), 2, dec!(0.07)).unwrap();
    assert_eq!(value.round_dp(9), dec!(100));
}

#[test]
fn test_zero_years_leaves_principal_unchanged() {
    let value = time_value::investment_value_after_years(0, dec!(100), dec!(0.07)).unwrap();
    assert_eq!(value, dec!(100));
}

#[test]
fn test_compounding_overflow_is_an_error_not_a_panic() {
    let result = time_value::investment_value_after_years(5000, dec!(1), dec!(1));
    assert!(matches!(result, Err(TvmError::NumericOverflow { .. })));
}

// ===========================================================================
// Annuities and perpetuities
// ===========================================================================

#[test]
fn test_annuity_closed_form_matches_term_by_term() {
    let tolerance = dec!(0.000000001);
    for (rate, years) in [
        (dec!(0.01), 1000u32),
        (dec!(0.07), 30),
        (dec!(0.1), 10),
        (dec!(0.5), 1000),
        (dec!(0.9), 50),
    ] {
        let closed =
            time_value::present_value_of_annuity(dec!(1), rate, years).unwrap();
        let flows = vec![dec!(1); years as usize];
        let summed = time_value::present_value(rate, &flows).unwrap();
        assert!(
            (closed - summed).abs() < tolerance,
            "rate {} years {}: closed {} vs summed {}",
            rate,
            years,
            closed,
            summed
        );
    }
}

#[test]
fn test_ten_year_annuity_textbook_value() {
    // 1 per year for 10 years at 10% is worth ~6.14
    let value = time_value::present_value_of_annuity(dec!(1), dec!(0.1), 10).unwrap();
    assert!((value - dec!(6.144567)).abs() < dec!(0.000001));
}

#[test]
fn test_long_annuity_approaches_perpetuity() {
    // The original demonstration: 2000 payments at 10% is the perpetuity
    // value to well past nine decimals
    let annuity = time_value::present_value_of_annuity(dec!(1), dec!(0.1), 2000).unwrap();
    let perpetuity = time_value::present_value_of_perpetuity(dec!(1), dec!(0.1)).unwrap();
    assert!((annuity - perpetuity).abs() < dec!(0.000000001));
    assert_eq!(perpetuity, dec!(10));
}

#[test]
fn test_annuity_zero_rate_rejected() {
    let result = time_value::present_value_of_annuity(dec!(1), dec!(0), 10);
    assert!(matches!(result, Err(TvmError::DivisionByZero { .. })));
}
