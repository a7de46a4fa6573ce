use backline_domain::{
    CutOverrides, FinanceSettings, Member, MemberId, MemberRole, Money, Percent,
    SettlementCalculator, equal_split,
};
use proptest::prelude::*;

fn members(count: usize) -> Vec<Member> {
    (0..count)
        .map(|idx| {
            Member::new(
                MemberId(idx as u64 + 1),
                format!("member-{idx}"),
                MemberRole::Member,
            )
        })
        .collect()
}

fn settings(savings: i64, manager: i64, agent: i64) -> FinanceSettings {
    FinanceSettings::try_new(
        Percent::from_hundredths(savings),
        Percent::from_hundredths(manager),
        Percent::from_hundredths(agent),
    )
    .expect("percentages are generated within range")
}

proptest! {
    #[test]
    fn equal_split_always_sums_to_hundred(count in 1usize..=500) {
        let shares = equal_split(count);
        prop_assert_eq!(shares.len(), count);
        let total: Percent = shares.into_iter().sum();
        prop_assert_eq!(total, Percent::HUNDRED);
    }
}

proptest! {
    #[test]
    fn savings_never_withheld_from_non_positive_net(
        income in 0i64..=1_000_000,
        extra_expense in 0i64..=1_000_000,
        savings in 0i64..=10_000,
        manager in 0i64..=10_000,
        agent in 0i64..=10_000,
    ) {
        let expense = income + extra_expense;
        let outcome = SettlementCalculator.calculate(
            Money::from_i64(income),
            Money::from_i64(expense),
            &settings(savings, manager, agent),
            &members(3),
            &CutOverrides::default(),
        );

        prop_assert!(!outcome.net_after_fees_and_expenses.is_positive());
        prop_assert_eq!(outcome.savings, Money::ZERO);
        prop_assert_eq!(outcome.distributable, outcome.net_after_fees_and_expenses);
    }
}

proptest! {
    #[test]
    fn equal_split_payouts_stay_within_rounding_slack(
        income in 0i64..=100_000_000,
        expense in 0i64..=100_000_000,
        savings in 0i64..=10_000,
        manager in 0i64..=5_000,
        agent in 0i64..=5_000,
        member_count in 1usize..=12,
    ) {
        let outcome = SettlementCalculator.calculate(
            Money::from_i64(income),
            Money::from_i64(expense),
            &settings(savings, manager, agent),
            &members(member_count),
            &CutOverrides::default(),
        );

        prop_assert_eq!(outcome.percent_total(), Percent::HUNDRED);
        let slack = outcome.unallocated().amount().abs();
        prop_assert!(
            slack <= member_count as i64 - 1,
            "slack {} for {} members",
            slack,
            member_count
        );
    }
}

proptest! {
    #[test]
    fn feeding_percentages_back_reproduces_payouts(
        income in 0i64..=100_000_000,
        expense in 0i64..=100_000_000,
        savings in 0i64..=10_000,
        member_count in 1usize..=12,
        explicit in prop::collection::vec(0i64..=10_000, 0..=12),
    ) {
        let members = members(member_count);
        let overrides: CutOverrides = explicit
            .iter()
            .enumerate()
            .take(member_count)
            .map(|(idx, hundredths)| {
                (
                    MemberId(idx as u64 + 1),
                    Percent::from_hundredths(*hundredths),
                )
            })
            .collect();
        let settings = settings(savings, 0, 0);

        let first = SettlementCalculator.calculate(
            Money::from_i64(income),
            Money::from_i64(expense),
            &settings,
            &members,
            &overrides,
        );
        let second = SettlementCalculator.calculate(
            Money::from_i64(income),
            Money::from_i64(expense),
            &settings,
            &members,
            &first.as_overrides(),
        );

        let first_table: Vec<(MemberId, Percent, Money)> =
            first.payouts.iter().map(|p| (p.member, p.percent, p.payout)).collect();
        let second_table: Vec<(MemberId, Percent, Money)> =
            second.payouts.iter().map(|p| (p.member, p.percent, p.payout)).collect();
        prop_assert_eq!(first_table, second_table);
    }
}
