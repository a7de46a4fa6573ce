use crate::{
    currency::CurrencyFormat,
    text_table::{Alignment, TextTableBuilder},
};
use backline_application::{MemberDirectory, SettlementReport};
use backline_domain::{CutChoice, LedgerTotals, MemberId, MemberRole, SettlementOutcome};
use backline_i18n as i18n;
use std::borrow::Cow;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub summary_table: String,
    pub payout_table: String,
    pub category_table: Option<String>,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(
            self.summary_table.len()
                + self.payout_table.len()
                + self.category_table.as_ref().map_or(0, String::len)
                + 2,
        );
        text.push_str(&self.summary_table);
        text.push('\n');
        text.push_str(&self.payout_table);
        if let Some(category_table) = &self.category_table {
            text.push('\n');
            text.push_str(category_table);
        }
        text
    }
}

impl SettlementPresenter {
    pub fn render(report: &SettlementReport, currency: &CurrencyFormat) -> SettlementView {
        Self::render_with_members(report, currency, &report.members)
    }

    pub fn render_text(report: &SettlementReport, currency: &CurrencyFormat) -> String {
        Self::render(report, currency).to_text()
    }

    pub fn render_with_members(
        report: &SettlementReport,
        currency: &CurrencyFormat,
        member_directory: &dyn MemberDirectory,
    ) -> SettlementView {
        let title = format!("{} {}", i18n::SETTLEMENT, report.tour);
        let summary_table = Self::build_summary_table(&title, &report.outcome, currency);
        let payout_table = Self::build_payout_table(report, currency, member_directory);
        let category_table = report
            .totals
            .categories()
            .next()
            .is_some()
            .then(|| Self::build_category_table(&report.totals, currency));

        SettlementView {
            summary_table,
            payout_table,
            category_table,
        }
    }

    pub fn build_summary_table(
        title: &str,
        outcome: &SettlementOutcome,
        currency: &CurrencyFormat,
    ) -> String {
        let rows = [
            (i18n::TOTAL_INCOME, outcome.total_income),
            (i18n::TOTAL_EXPENSES, outcome.total_expense),
            (i18n::MANAGER_FEE, outcome.manager_fee),
            (i18n::AGENT_FEE, outcome.agent_fee),
            (i18n::NET_AFTER_FEES, outcome.net_after_fees_and_expenses),
            (i18n::SAVINGS, outcome.savings),
            (i18n::DISTRIBUTABLE, outcome.distributable),
        ];

        let mut builder = TextTableBuilder::new()
            .title(title)
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::ITEM), Cow::Borrowed(i18n::AMOUNT)])
            .rows(rows.into_iter().map(|(label, amount)| {
                [Cow::Borrowed(label), Cow::Owned(currency.format(amount))]
            }));

        let unallocated = outcome.unallocated();
        if !unallocated.is_zero() {
            builder = builder.row([
                Cow::Borrowed(i18n::UNALLOCATED),
                Cow::Owned(currency.format(unallocated)),
            ]);
        }

        builder.build()
    }

    pub fn build_payout_table(
        report: &SettlementReport,
        currency: &CurrencyFormat,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        if report.outcome.payouts.is_empty() {
            return format!("{}\n", i18n::NO_PARTICIPANTS);
        }

        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::ROLE),
                Cow::Borrowed(i18n::CUT),
                Cow::Borrowed(i18n::BASIS),
                Cow::Borrowed(i18n::PAYOUT),
            ]);

        for payout in &report.outcome.payouts {
            let role = report
                .member(payout.member)
                .map_or("", |member| role_label(member.role));
            let basis = match payout.choice {
                CutChoice::Explicit(_) => i18n::EXPLICIT_CUT,
                CutChoice::EqualShare => i18n::EQUAL_SHARE,
            };
            builder = builder.row([
                format_member_label(payout.member, member_directory),
                Cow::Borrowed(role),
                Cow::Owned(format!("{}%", payout.percent)),
                Cow::Borrowed(basis),
                Cow::Owned(currency.format(payout.payout)),
            ]);
        }

        builder.build()
    }

    pub fn build_category_table(totals: &LedgerTotals, currency: &CurrencyFormat) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::CATEGORY),
                Cow::Borrowed(i18n::INCOME),
                Cow::Borrowed(i18n::EXPENSE),
            ])
            .rows(totals.categories().map(|(tag, total)| {
                [
                    Cow::Borrowed(tag),
                    Cow::Owned(currency.format(total.income)),
                    Cow::Owned(currency.format(total.expense)),
                ]
            }))
            .build()
    }
}

pub(crate) fn role_label(role: MemberRole) -> &'static str {
    match role {
        MemberRole::Owner => i18n::ROLE_OWNER,
        MemberRole::Manager => i18n::ROLE_MANAGER,
        MemberRole::Member => i18n::ROLE_MEMBER,
    }
}

pub(crate) fn format_member_label<'a>(
    member_id: MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("#{member_id}")),
    }
}
