//! Cell layout for the settlement workbook export.
//!
//! The workbook writer owns file generation; this module only decides which
//! value goes in which cell and how each cell should be formatted.

use backline_application::{MemberDirectory, SettlementReport};
use backline_domain::{CutChoice, Money, Percent};
use backline_i18n as i18n;

use crate::settlement_presenter::{format_member_label, role_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    Empty,
    Text(String),
    /// Minor units; writers divide by 100 for display.
    Currency(Money),
    /// Percentage points, e.g. `33.33` rather than `0.3333`.
    Percent(Percent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFormat {
    General,
    Currency,
    Percent,
}

impl CellValue {
    pub fn format(&self) -> CellFormat {
        match self {
            CellValue::Empty | CellValue::Text(_) => CellFormat::General,
            CellValue::Currency(_) => CellFormat::Currency,
            CellValue::Percent(_) => CellFormat::Percent,
        }
    }
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl ExportSheet {
    /// Summary block, payout table, then the per-category breakdown, each
    /// separated by an empty row.
    pub fn from_report(report: &SettlementReport) -> Self {
        Self::from_report_with_members(report, &report.members)
    }

    pub fn from_report_with_members(
        report: &SettlementReport,
        member_directory: &dyn MemberDirectory,
    ) -> Self {
        let outcome = &report.outcome;
        let mut rows = vec![
            vec![text(i18n::ITEM), text(i18n::AMOUNT)],
            vec![
                text(i18n::TOTAL_INCOME),
                CellValue::Currency(outcome.total_income),
            ],
            vec![
                text(i18n::TOTAL_EXPENSES),
                CellValue::Currency(outcome.total_expense),
            ],
            vec![
                text(i18n::MANAGER_FEE),
                CellValue::Currency(outcome.manager_fee),
            ],
            vec![
                text(i18n::AGENT_FEE),
                CellValue::Currency(outcome.agent_fee),
            ],
            vec![
                text(i18n::NET_AFTER_FEES),
                CellValue::Currency(outcome.net_after_fees_and_expenses),
            ],
            vec![text(i18n::SAVINGS), CellValue::Currency(outcome.savings)],
            vec![
                text(i18n::DISTRIBUTABLE),
                CellValue::Currency(outcome.distributable),
            ],
            vec![
                text(i18n::UNALLOCATED),
                CellValue::Currency(outcome.unallocated()),
            ],
            Vec::new(),
            vec![
                text(i18n::MEMBER),
                text(i18n::ROLE),
                text(i18n::CUT),
                text(i18n::BASIS),
                text(i18n::PAYOUT),
            ],
        ];

        for payout in &outcome.payouts {
            let name = format_member_label(payout.member, member_directory).into_owned();
            let role = report
                .member(payout.member)
                .map_or(CellValue::Empty, |member| text(role_label(member.role)));
            let basis = match payout.choice {
                CutChoice::Explicit(_) => i18n::EXPLICIT_CUT,
                CutChoice::EqualShare => i18n::EQUAL_SHARE,
            };
            rows.push(vec![
                CellValue::Text(name),
                role,
                CellValue::Percent(payout.percent),
                text(basis),
                CellValue::Currency(payout.payout),
            ]);
        }

        rows.push(Vec::new());
        rows.push(vec![
            text(i18n::CATEGORY),
            text(i18n::INCOME),
            text(i18n::EXPENSE),
        ]);
        for (tag, total) in report.totals.categories() {
            rows.push(vec![
                text(tag),
                CellValue::Currency(total.income),
                CellValue::Currency(total.expense),
            ]);
        }

        Self {
            name: format!("{} {}", i18n::SETTLEMENT, report.tour),
            rows,
        }
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
