//! Number rendering for chat replies.

use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum fraction digits shown in grouped numbers (matches en-US locale output).
const GROUPED_FRACTION_DIGITS: u32 = 3;

/// Render with exactly `places` fraction digits.
pub fn fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// Render with comma thousands separators and at most three fraction digits.
///
/// Trailing fraction zeros are dropped, so `5000000` renders as `5,000,000`
/// and `1234.5678` as `1,234.568`.
pub fn grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(GROUPED_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut result = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        result.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    if let Some(frac_part) = frac_part {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_pads_to_six_places() {
        assert_eq!(fixed(dec!(1.2), 6), "1.200000");
        assert_eq!(fixed(dec!(0), 6), "0.000000");
        assert_eq!(fixed(dec!(42), 6), "42.000000");
    }

    #[test]
    fn test_fixed_rounds_extra_precision() {
        assert_eq!(fixed(dec!(0.00001234567), 6), "0.000012");
        assert_eq!(fixed(dec!(0.0000125), 6), "0.000013");
        assert_eq!(fixed(dec!(0.00000012), 6), "0.000000");
    }

    #[test]
    fn test_grouped_integers() {
        assert_eq!(grouped(dec!(5000000)), "5,000,000");
        assert_eq!(grouped(dec!(999)), "999");
        assert_eq!(grouped(dec!(1000)), "1,000");
        assert_eq!(grouped(dec!(0)), "0");
    }

    #[test]
    fn test_grouped_fraction_is_trimmed_and_rounded() {
        assert_eq!(grouped(dec!(1234.5678)), "1,234.568");
        assert_eq!(grouped(dec!(1234.50)), "1,234.5");
        assert_eq!(grouped(dec!(5000000.000)), "5,000,000");
        assert_eq!(grouped(dec!(0.0004)), "0");
    }

    #[test]
    fn test_grouped_negative() {
        assert_eq!(grouped(dec!(-1234567.1)), "-1,234,567.1");
    }
}
