use care_invest_quickcheck::money::{
    format_amount, format_amount_opt, format_capacity, parse_amount, round_half_up, NOT_AVAILABLE,
};
use care_invest_quickcheck::quickcheck::Capacity;
use rust_decimal_macros::dec;

#[test]
fn rounds_half_away_from_zero_not_to_even() {
    assert_eq!(round_half_up(dec!(2.5)), dec!(3));
    assert_eq!(round_half_up(dec!(3.5)), dec!(4));
    assert_eq!(round_half_up(dec!(-2.5)), dec!(-3));
    assert_eq!(round_half_up(dec!(2.4)), dec!(2));
}

#[test]
fn formats_with_swiss_grouping() {
    assert_eq!(format_amount(dec!(1_234_567)), "1'234'567");
    assert_eq!(format_amount(dec!(20_645_000)), "20'645'000");
    assert_eq!(format_amount(dec!(999)), "999");
    assert_eq!(format_amount(dec!(1000)), "1'000");
    assert_eq!(format_amount(dec!(0)), "0");
}

#[test]
fn formats_rounded_and_signed() {
    assert_eq!(format_amount(dec!(2.5)), "3");
    assert_eq!(format_amount(dec!(-2.5)), "-3");
    assert_eq!(format_amount(dec!(999.5)), "1'000");
    assert_eq!(format_amount(dec!(-1_234_567.4)), "-1'234'567");
    // Auf null gerundete Negativwerte verlieren das Vorzeichen.
    assert_eq!(format_amount(dec!(-0.4)), "0");
}

#[test]
fn missing_value_renders_placeholder() {
    assert_eq!(format_amount_opt(None), NOT_AVAILABLE);
    assert_eq!(format_amount_opt(Some(dec!(42))), "42");
}

#[test]
fn capacity_sentinel_uses_label() {
    assert_eq!(format_capacity(&Capacity::Unbounded, "Unbegrenzt"), "Unbegrenzt");
    assert_eq!(format_capacity(&Capacity::Unbounded, "Unbounded"), "Unbounded");
    assert_eq!(
        format_capacity(&Capacity::Bounded(dec!(20_645_000)), "Unbegrenzt"),
        "20'645'000"
    );
}

#[test]
fn parses_grouped_user_input() {
    assert_eq!(parse_amount("5'000'000"), Some(dec!(5_000_000)));
    assert_eq!(parse_amount("  250.50 "), Some(dec!(250.50)));
    assert_eq!(parse_amount("-300"), Some(dec!(-300)));
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount(""), None);
}
