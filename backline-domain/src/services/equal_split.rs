use crate::model::Percent;
use rust_decimal::Decimal;

/// How far a set of cuts may drift from 100.00 and still count as whole.
pub const PERCENT_TOLERANCE: Percent = Percent::new(Decimal::from_parts(1, 0, 0, false, 2));

/// Splits 100% into `count` shares rounded to two places.
///
/// Every share is `round2(100 / count)` except the last, which also absorbs
/// `round2(100 - Σ shares)` so the total is exactly 100.00.
///
/// The last share is only guaranteed to be non-negative while
/// `(count - 1) × base ≤ 100`. Between 10,002 and 20,000 participants the base
/// rounds up to 0.01 and the last share goes negative, so the result would be
/// rejected by the cut range check if it were saved.
pub fn equal_split(count: usize) -> Vec<Percent> {
    if count == 0 {
        return Vec::new();
    }

    let base = Percent::new(Decimal::ONE_HUNDRED / Decimal::from(count)).round2();
    let mut shares = vec![base; count];
    let allocated: Percent = shares.iter().copied().sum();
    let remainder = (Percent::HUNDRED - allocated).round2();
    if let Some(last) = shares.last_mut() {
        *last = *last + remainder;
    }
    shares
}

pub fn is_whole(total: Percent) -> bool {
    (total.as_decimal() - Decimal::ONE_HUNDRED).abs() <= PERCENT_TOLERANCE.as_decimal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hundredths(values: &[i64]) -> Vec<Percent> {
        values.iter().copied().map(Percent::from_hundredths).collect()
    }

    #[rstest]
    #[case::single(1, hundredths(&[10_000]))]
    #[case::pair(2, hundredths(&[5_000, 5_000]))]
    #[case::three(3, hundredths(&[3_333, 3_333, 3_334]))]
    #[case::six(6, hundredths(&[1_667, 1_667, 1_667, 1_667, 1_667, 1_665]))]
    #[case::seven(7, hundredths(&[1_429, 1_429, 1_429, 1_429, 1_429, 1_429, 1_426]))]
    fn last_share_absorbs_remainder(#[case] count: usize, #[case] expected: Vec<Percent>) {
        assert_eq!(equal_split(count), expected);
    }

    #[test]
    fn huge_rosters_push_last_share_negative() {
        let shares = equal_split(19_999);

        assert_eq!(shares[0], Percent::from_hundredths(1));
        assert_eq!(shares.last(), Some(&Percent::from_hundredths(-9_998)));
        assert_eq!(shares.iter().copied().sum::<Percent>(), Percent::HUNDRED);
        assert!(!shares.iter().all(|share| share.is_within_bounds()));
    }

    #[test]
    fn zero_members_split_nothing() {
        assert!(equal_split(0).is_empty());
    }

    #[rstest]
    #[case::exact(Percent::HUNDRED, true)]
    #[case::just_under(Percent::from_hundredths(9_999), true)]
    #[case::just_over(Percent::from_hundredths(10_001), true)]
    #[case::too_low(Percent::from_hundredths(9_998), false)]
    #[case::too_high(Percent::from_hundredths(10_002), false)]
    #[case::empty(Percent::ZERO, false)]
    fn whole_within_tolerance(#[case] total: Percent, #[case] expected: bool) {
        assert_eq!(is_whole(total), expected);
    }
}
