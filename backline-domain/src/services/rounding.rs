//! Half-up rounding of decimal intermediates back to whole minor units.

use crate::model::{Money, Percent};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Rounds half away from zero to a whole minor unit.
///
/// Values that do not fit in `i64` saturate to [`Money::MAX`] or [`Money::MIN`].
pub fn round_money(value: Decimal) -> Money {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    match rounded.to_i64() {
        Some(units) => Money::from_i64(units),
        None => saturated(rounded.is_sign_negative()),
    }
}

/// `round(amount × percent / 100)`.
pub fn share_of(amount: Money, percent: Percent) -> Money {
    let product = amount
        .as_decimal()
        .checked_mul(percent.as_decimal())
        .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED));

    match product {
        Some(value) => round_money(value),
        None => {
            let negative = amount.is_negative() != percent.as_decimal().is_sign_negative();
            tracing::debug!(
                amount = amount.amount(),
                percent = %percent.as_decimal(),
                "Share computation overflowed and was saturated"
            );
            saturated(negative)
        }
    }
}

fn saturated(negative: bool) -> Money {
    if negative { Money::MIN } else { Money::MAX }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::below_midpoint(Decimal::new(149, 2), 1)]
    #[case::midpoint(Decimal::new(5, 1), 1)]
    #[case::negative_midpoint(Decimal::new(-5, 1), -1)]
    #[case::negative_below_midpoint(Decimal::new(-149, 2), -1)]
    #[case::exact(Decimal::new(6_500, 0), 6_500)]
    fn round_money_is_half_up(#[case] value: Decimal, #[case] expected: i64) {
        assert_eq!(round_money(value), Money::from_i64(expected));
    }

    #[test]
    fn round_money_saturates_out_of_range() {
        let huge = Decimal::from(i64::MAX) * Decimal::from(10);
        assert_eq!(round_money(huge), Money::MAX);
        assert_eq!(round_money(-huge), Money::MIN);
    }

    #[rstest]
    #[case::ten_percent(100_000, Percent::from_hundredths(1_000), 10_000)]
    #[case::five_percent(100_000, Percent::from_hundredths(500), 5_000)]
    #[case::half_cent_rounds_up(1, Percent::from_hundredths(5_000), 1)]
    #[case::negative_half_cent(-1, Percent::from_hundredths(5_000), -1)]
    #[case::third(58_500, Percent::from_hundredths(3_333), 19_498)]
    #[case::zero_percent(58_500, Percent::ZERO, 0)]
    fn share_of_rounds_to_minor_units(
        #[case] amount: i64,
        #[case] percent: Percent,
        #[case] expected: i64,
    ) {
        assert_eq!(
            share_of(Money::from_i64(amount), percent),
            Money::from_i64(expected)
        );
    }

    #[test]
    fn share_of_saturates_on_overflow() {
        let percent = Percent::new(Decimal::from(i64::MAX));
        assert_eq!(share_of(Money::MAX, percent), Money::MAX);
        assert_eq!(share_of(Money::MIN, percent), Money::MIN);
    }
}
