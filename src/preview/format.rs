//! Display formatting for Indian invoices.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Indian rupee sign.
pub const RUPEE_SIGN: &str = "₹";

/// Format an amount with Indian digit grouping and exactly two decimals,
/// e.g. `1234567.891` → `"12,34,567.89"`.
///
/// Rounds half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let whole = abs.trunc();
    // Decimal's range (< 8e28) always fits u128; the fraction is 0..=99
    let rupees = whole.to_u128().unwrap_or_default();
    let paise = ((abs - whole) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();
    format!("{sign}{}.{paise:02}", group_indian(&rupees.to_string()))
}

/// [`format_amount`] with the rupee sign prefixed.
pub fn format_rupees(amount: Decimal) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(positive) => format!("-{RUPEE_SIGN}{positive}"),
        None => format!("{RUPEE_SIGN}{formatted}"),
    }
}

/// `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Tax rate without trailing zeros: 18 → "18", 2.50 → "2.5".
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

/// Group digits as thousands, then in pairs: "1234567" → "12,34,567".
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
