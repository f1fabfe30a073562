//! Display formatting for prices, phone numbers, and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group an amount with thousands separators (`828000` → `"828,000"`).
#[must_use]
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a plan price for display; KRW reads as `828,000원`.
#[must_use]
pub fn format_price(amount: i64, currency: &str) -> String {
    match currency {
        "KRW" => format!("{}원", group_thousands(amount)),
        "USD" => format!("${}", group_thousands(amount)),
        _ => format!("{} {currency}", group_thousands(amount)),
    }
}

/// Normalize a phone input into `010-1234-5678` form while typing.
/// Non-digits are stripped; partial numbers keep partial grouping.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(11).collect();
    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}

/// Digits-only form sent to the backend (`010-1234-5678` → `01012345678`).
#[must_use]
pub fn strip_phone(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
