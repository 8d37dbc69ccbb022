use rust_decimal::Decimal;

use super::types::{LineItem, Totals};

/// Compute subtotal, tax and grand total for a set of line items.
///
/// Negative amounts are summed as given. Nothing is rounded: the result is
/// exact, and rounding to two places is left to the display layer.
///
/// Defined for every input. Sums beyond `Decimal`'s range saturate at
/// `Decimal::MAX` / `Decimal::MIN` instead of panicking, which is the only
/// case where the totals are not exact.
pub fn compute_totals(items: &[LineItem], tax_rate_percent: Decimal) -> Totals {
    let subtotal = items
        .iter()
        .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.amount));
    let tax_amount = match subtotal.checked_mul(tax_rate_percent) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        // scale down first when the product alone would overflow
        None => (subtotal / Decimal::ONE_HUNDRED).saturating_mul(tax_rate_percent),
    };
    Totals {
        subtotal,
        tax_amount,
        grand_total: subtotal.saturating_add(tax_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(amount: Decimal) -> LineItem {
        LineItem::new("Work", "995473", amount)
    }

    #[test]
    fn cgst_sgst_scenario() {
        let totals = compute_totals(&[item(dec!(1000)), item(dec!(2500.50))], dec!(18));
        assert_eq!(totals.subtotal, dec!(3500.50));
        assert_eq!(totals.tax_amount, dec!(630.09));
        assert_eq!(totals.grand_total, dec!(4130.59));
    }

    #[test]
    fn empty_items() {
        let totals = compute_totals(&[], dec!(18));
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
    }

    #[test]
    fn negative_amounts_are_summed() {
        let totals = compute_totals(&[item(dec!(500)), item(dec!(-200))], dec!(5));
        assert_eq!(totals.subtotal, dec!(300));
        assert_eq!(totals.tax_amount, dec!(15));
        assert_eq!(totals.grand_total, dec!(315));
    }

    #[test]
    fn fractional_rate_is_not_rounded() {
        let totals = compute_totals(&[item(dec!(99.99))], dec!(2.5));
        assert_eq!(totals.tax_amount, dec!(2.49975));
        assert_eq!(totals.grand_total, dec!(102.48975));
    }

    #[test]
    fn zero_rate() {
        let totals = compute_totals(&[item(dec!(1200))], Decimal::ZERO);
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        assert_eq!(totals.grand_total, dec!(1200));
    }

    #[test]
    fn sums_beyond_decimal_range_saturate() {
        let totals = compute_totals(&[item(Decimal::MAX), item(Decimal::MAX)], dec!(18));
        assert_eq!(totals.subtotal, Decimal::MAX);
        assert_eq!(totals.grand_total, Decimal::MAX);

        let totals = compute_totals(&[item(Decimal::MIN), item(Decimal::MIN)], dec!(18));
        assert_eq!(totals.subtotal, Decimal::MIN);
        assert_eq!(totals.grand_total, Decimal::MIN);
    }

    #[test]
    fn large_product_is_scaled_before_multiplying() {
        let ten_pow_28 = Decimal::from_i128_with_scale(10_i128.pow(28), 0);
        let totals = compute_totals(&[item(ten_pow_28)], dec!(18));
        assert_eq!(totals.subtotal, ten_pow_28);
        assert_eq!(totals.tax_amount, Decimal::from_i128_with_scale(18 * 10_i128.pow(26), 0));
        assert_eq!(totals.grand_total, Decimal::from_i128_with_scale(118 * 10_i128.pow(26), 0));
    }
}
