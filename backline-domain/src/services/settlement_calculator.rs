use crate::{
    model::{
        CutChoice, CutOverrides, FinanceSettings, Member, MemberPayout, Money, Percent,
        SettlementOutcome,
    },
    services::{equal_split::equal_split, rounding::share_of},
};

/// Tour settlement: fees, savings withholding and per-member payouts.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Settle a tour from pre-aggregated ledger totals.
    ///
    /// Only active members take part. A member with an entry in `overrides`
    /// is paid that percentage; everyone else gets the equal share computed
    /// over all participants, with the last participant absorbing the
    /// rounding remainder. Overrides are not checked to sum to 100 here.
    ///
    /// # Arguments
    /// * `total_income` - Sum of income entries
    /// * `total_expense` - Sum of expense entries
    /// * `settings` - Workspace fee and savings percentages
    /// * `members` - Workspace members in creation order
    /// * `overrides` - Explicit cut percentages (may be partial or empty)
    pub fn calculate(
        &self,
        total_income: Money,
        total_expense: Money,
        settings: &FinanceSettings,
        members: &[Member],
        overrides: &CutOverrides,
    ) -> SettlementOutcome {
        let manager_fee = share_of(total_income, settings.manager_percent());
        let agent_fee = share_of(total_income, settings.agent_percent());
        let net_after_fees_and_expenses = total_income - manager_fee - agent_fee - total_expense;
        let savings = if net_after_fees_and_expenses.is_positive() {
            share_of(net_after_fees_and_expenses, settings.savings_percent())
        } else {
            Money::ZERO
        };
        let distributable = net_after_fees_and_expenses - savings;

        let payouts: Vec<MemberPayout> = resolve_cuts(members, overrides)
            .into_iter()
            .map(|(member, choice, percent)| MemberPayout {
                member: member.id,
                choice,
                percent,
                payout: share_of(distributable, percent),
            })
            .collect();

        tracing::debug!(
            total_income = total_income.amount(),
            total_expense = total_expense.amount(),
            manager_fee = manager_fee.amount(),
            agent_fee = agent_fee.amount(),
            net_after_fees_and_expenses = net_after_fees_and_expenses.amount(),
            savings = savings.amount(),
            distributable = distributable.amount(),
            participant_count = payouts.len(),
            "Settlement calculated"
        );

        SettlementOutcome {
            total_income,
            total_expense,
            manager_fee,
            agent_fee,
            net_after_fees_and_expenses,
            savings,
            distributable,
            payouts,
        }
    }
}

fn resolve_cuts<'m>(
    members: &'m [Member],
    overrides: &CutOverrides,
) -> Vec<(&'m Member, CutChoice, Percent)> {
    let participants: Vec<&Member> = members.iter().filter(|member| member.active).collect();

    let ignored = overrides
        .keys()
        .filter(|id| !participants.iter().any(|member| member.id == **id))
        .count();
    if ignored > 0 {
        tracing::debug!(
            ignored,
            participant_count = participants.len(),
            "Cut overrides for non-participating members were ignored"
        );
    }

    let equal_shares = equal_split(participants.len());
    participants
        .into_iter()
        .zip(equal_shares)
        .map(|(member, equal_share)| match overrides.get(&member.id) {
            Some(&percent) => (member, CutChoice::Explicit(percent), percent),
            None => (member, CutChoice::EqualShare, equal_share),
        })
        .collect()
}
