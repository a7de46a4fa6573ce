#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    CategoryTotal, Cut, CutChoice, CutOverrides, EntryType, FinanceSettings, LedgerEntry,
    LedgerTotals, Member, MemberId, MemberPayout, MemberRole, Money, Percent, SettlementOutcome,
    TourId, ValueError, WorkspaceId, overrides_from_cuts,
};
pub use services::{PERCENT_TOLERANCE, SettlementCalculator, equal_split, is_whole};
