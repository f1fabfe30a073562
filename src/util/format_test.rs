use super::*;

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(828_000), "828,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands(-12_000), "-12,000");
}

#[test]
fn krw_prices_use_won_suffix() {
    assert_eq!(format_price(828_000, "KRW"), "828,000원");
}

#[test]
fn usd_prices_use_dollar_prefix() {
    assert_eq!(format_price(499, "USD"), "$499");
}

#[test]
fn unknown_currency_is_appended() {
    assert_eq!(format_price(100, "JPY"), "100 JPY");
}

#[test]
fn phone_formats_progressively_while_typing() {
    assert_eq!(format_phone("010"), "010");
    assert_eq!(format_phone("0101234"), "010-1234");
    assert_eq!(format_phone("01012345678"), "010-1234-5678");
}

#[test]
fn phone_strips_non_digits_and_truncates() {
    assert_eq!(format_phone("010-1234-5678"), "010-1234-5678");
    assert_eq!(format_phone("010 1234 5678 999"), "010-1234-5678");
    assert_eq!(format_phone("abc"), "");
}

#[test]
fn strip_phone_removes_separators() {
    assert_eq!(strip_phone("010-1234-5678"), "01012345678");
}
