// tests/decimal.rs
use pixel_economy::EconomyError;
use pixel_economy::mechanics::decimal::{self, Decimal};
use pixel_economy::mechanics::format_number;
use proptest::prelude::*;

fn d(text: &str) -> Decimal {
    Decimal::parse(text).unwrap()
}

/* ──────────────────────────────────────────────────────────────────────────
1) Adapter entry points coerce text, integers and floats alike
────────────────────────────────────────────────────────────────────────── */

#[test]
fn adapter_coerces_mixed_operands() {
    assert_eq!(decimal::add("0.1", 0.2).unwrap(), d("0.3"));
    assert_eq!(decimal::subtract(10u32, "2.5").unwrap(), d("7.5"));
    assert_eq!(decimal::multiply("1.5", "1.5").unwrap(), d("2.25"));
    assert_eq!(decimal::power("2", 10u32).unwrap(), d("1024"));
    assert!(decimal::gte("10", "10").unwrap());
    assert!(!decimal::gte("9.99", 10u32).unwrap());
}

#[test]
fn malformed_text_is_a_hard_failure() {
    assert_eq!(
        decimal::add("ten", "1"),
        Err(EconomyError::MalformedDecimal("ten".to_string()))
    );
    assert!(matches!(decimal::add(f64::NAN, 1u32), Err(EconomyError::NonFiniteFloat(_))));
}

#[test]
fn power_wants_an_integral_exponent() {
    assert!(matches!(decimal::power("2", "0.5"), Err(EconomyError::NonIntegralExponent(_))));
    assert_eq!(decimal::power("2", "-2").unwrap(), d("0.25"));
    assert_eq!(decimal::power("7", 0u32).unwrap(), Decimal::one());
    assert_eq!(decimal::power("0", "-1"), Err(EconomyError::DivisionByZero));
}

#[test]
fn magnitudes_past_f64_stay_exact_enough_to_compare() {
    let huge = decimal::power("10", 400u32).unwrap();
    let bigger = &huge + &huge;
    assert!(bigger > huge);
    assert_eq!(huge.order_of_magnitude(), Some(400));
    assert_eq!(format_number(&huge), "1e+400");
}

#[test]
fn serde_keeps_decimals_as_text() {
    let json = serde_json::to_string(&d("1.50")).unwrap();
    assert_eq!(json, "\"1.5\"");
    let back: Decimal = serde_json::from_str("\"123456789012345678901234567890\"").unwrap();
    assert_eq!(back.to_string(), "123456789012345678901234567890");
    assert!(serde_json::from_str::<Decimal>("12").is_err());
}

/* ──────────────────────────────────────────────────────────────────────────
2) Suffix formatting
────────────────────────────────────────────────────────────────────────── */

#[test]
fn small_values_print_with_trimmed_two_decimals() {
    assert_eq!(format_number(&Decimal::zero()), "0");
    assert_eq!(format_number(&d("12.5")), "12.5");
    assert_eq!(format_number(&d("100")), "100");
    assert_eq!(format_number(&d("3.14159")), "3.14");
    assert_eq!(format_number(&d("999")), "999");
}

#[test]
fn large_values_take_a_short_scale_suffix() {
    assert_eq!(format_number(&d("1000")), "1K");
    assert_eq!(format_number(&d("1234")), "1.23K");
    assert_eq!(format_number(&d("45600000")), "45.6M");
    assert_eq!(format_number(&d("2e9")), "2B");
    assert_eq!(format_number(&d("7e33")), "7Dc");
    assert_eq!(format_number(&d("999e171")), "999Sg");
}

#[test]
fn past_the_last_suffix_falls_back_to_exponential() {
    assert_eq!(format_number(&d("1e174")), "1e+174");
    assert_eq!(format_number(&d("1.5e180")), "1.5e+180");
    assert_eq!(format_number(&d("2.345e200")), "2.35e+200");
}

/* ──────────────────────────────────────────────────────────────────────────
3) Properties
────────────────────────────────────────────────────────────────────────── */

proptest! {
    #[test]
    fn gte_agrees_with_integer_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(decimal::gte(a, b).unwrap(), a >= b);
    }

    #[test]
    fn add_then_subtract_returns_the_start(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let sum = decimal::add(a, b).unwrap();
        prop_assert_eq!(decimal::subtract(sum, b).unwrap(), Decimal::from(a));
    }
}
