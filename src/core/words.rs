//! Amount in words, Indian numbering system.
//!
//! Indian tax invoices must state the invoice value in words. Rupees are
//! grouped as crore (1,00,00,000), lakh (1,00,000), thousand and the
//! remainder below one thousand; paise follow as a two-digit number.
//!
//! ```
//! use beejak::core::amount_to_words;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(
//!     amount_to_words(dec!(1234567.89)).unwrap(),
//!     "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees and Eighty Nine Paise"
//! );
//! assert_eq!(amount_to_words(dec!(0.5)).unwrap(), "Fifty Paise");
//! ```

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::BeejakError;

pub const CRORE: u128 = 10_000_000;
pub const LAKH: u128 = 100_000;
pub const THOUSAND: u128 = 1_000;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out a non-negative rupee amount.
///
/// The amount is rounded to whole paise (half away from zero) before it is
/// split, so `1.999` reads as "Two Rupees". Negative amounts are rejected
/// with [`BeejakError::InvalidAmount`].
pub fn amount_to_words(amount: Decimal) -> Result<String, BeejakError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BeejakError::InvalidAmount(format!(
            "amount must not be negative: {amount}"
        )));
    }

    let (rupees, paise) = split_rupees_paise(amount)?;
    if rupees == 0 && paise == 0 {
        return Ok("Zero Rupees".to_string());
    }

    let mut result = String::new();
    if rupees > 0 {
        result.push_str(&indian_words(rupees));
        result.push_str(if rupees == 1 { " Rupee" } else { " Rupees" });
    }
    if paise > 0 {
        if !result.is_empty() {
            result.push_str(" and ");
        }
        result.push_str(&two_digits(paise));
        result.push_str(" Paise");
    }

    Ok(capitalize_first(result))
}

/// Spell out an `f64` amount, rejecting NaN, infinities and negatives.
///
/// Paise are rounded from the float's exact binary value, so `1.005_f64`
/// reads "One Rupee" and `2500.505_f64` (stored slightly above the half)
/// reads "... and Fifty One Paise".
pub fn amount_to_words_f64(amount: f64) -> Result<String, BeejakError> {
    if !amount.is_finite() {
        return Err(BeejakError::InvalidAmount(format!(
            "amount must be finite: {amount}"
        )));
    }
    if amount < 0.0 {
        return Err(BeejakError::InvalidAmount(format!(
            "amount must not be negative: {amount}"
        )));
    }
    // Keep the exact binary value so halves that are not representable
    // (1.005 is stored as 1.00499...) round the way the float actually reads
    let decimal = Decimal::from_f64_retain(amount)
        .or_else(|| Decimal::from_f64(amount))
        .ok_or_else(|| BeejakError::InvalidAmount(format!("amount {amount} is out of range")))?;
    amount_to_words(decimal)
}

/// Round to paise and split into whole rupees and remaining paise (0..=99).
fn split_rupees_paise(amount: Decimal) -> Result<(u128, u32), BeejakError> {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc();
    let rupees = whole.to_u128().ok_or_else(|| {
        BeejakError::InvalidAmount(format!("amount {amount} is out of range"))
    })?;
    let paise = ((rounded - whole) * Decimal::ONE_HUNDRED)
        .to_u32()
        .ok_or_else(|| BeejakError::InvalidAmount(format!("amount {amount} is out of range")))?;
    Ok((rupees, paise))
}

/// Words for a positive whole number using crore/lakh/thousand grouping.
///
/// A crore count above 999 is itself spelled in Indian grouping,
/// e.g. 1,00,00,00,00,000 is "One Lakh Crore".
fn indian_words(n: u128) -> String {
    let mut parts = Vec::new();

    let crores = n / CRORE;
    let mut rest = n % CRORE;
    if crores > 0 {
        parts.push(format!("{} Crore", indian_words(crores)));
    }

    for (divisor, unit) in [(LAKH, "Lakh"), (THOUSAND, "Thousand")] {
        let quotient = rest / divisor;
        rest %= divisor;
        if quotient > 0 {
            // lakh and thousand quotients are always below 100 here
            parts.push(format!("{} {unit}", three_digits(quotient as u32)));
        }
    }

    if rest > 0 {
        parts.push(three_digits(rest as u32));
    }

    parts.join(" ")
}

/// 0..=999. Zero yields an empty string.
fn three_digits(n: u32) -> String {
    let hundred = n / 100;
    let remainder = n % 100;
    let mut result = String::new();
    if hundred > 0 {
        result.push_str(ONES[hundred as usize]);
        result.push_str(" Hundred");
        if remainder > 0 {
            result.push(' ');
        }
    }
    result.push_str(&two_digits(remainder));
    result
}

/// 0..=99. Zero yields an empty string.
fn two_digits(n: u32) -> String {
    match n {
        0 => String::new(),
        1..=19 => ONES[n as usize].to_string(),
        _ => {
            let ten = TENS[(n / 10) as usize];
            match n % 10 {
                0 => ten.to_string(),
                one => format!("{ten} {}", ONES[one as usize]),
            }
        }
    }
}

fn capitalize_first(s: String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => s,
    }
}
