use fxhash::FxHashMap;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkspaceId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TourId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u64);

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Currency amount in integer minor units (cents).
///
/// Arithmetic saturates at the `i64` bounds so that settlement stays total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A percentage where `100` means the whole amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(Decimal);

impl Percent {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Wraps a value without range checks. Explicit cut overrides go through
    /// here; [`Percent::bounded`] is for anything that gets persisted.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn bounded(value: Decimal) -> Result<Self, ValueError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(ValueError::PercentOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// `units / 100` with two decimal places, e.g. `3333` is `33.33%`.
    pub fn from_hundredths(units: i64) -> Self {
        Self(Decimal::new(units, 2))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn is_within_bounds(self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE_HUNDRED
    }

    /// Rounds half away from zero to two decimal places.
    pub fn round2(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.round2().0;
        value.rescale(2);
        write!(f, "{value}")
    }
}

impl Add for Percent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Percent {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Percent {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    NegativeAmount(Money),
    PercentOutOfRange(Decimal),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryType {
    Income,
    Expense,
}

/// A recorded ledger row. Amounts are never negative; direction comes from
/// the entry type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    entry_type: EntryType,
    category_tag: String,
    amount: Money,
}

impl LedgerEntry {
    pub fn try_new(
        entry_type: EntryType,
        category_tag: impl Into<String>,
        amount: Money,
    ) -> Result<Self, ValueError> {
        if amount.is_negative() {
            return Err(ValueError::NegativeAmount(amount));
        }
        Ok(Self {
            entry_type,
            category_tag: category_tag.into(),
            amount,
        })
    }

    pub fn income(category_tag: impl Into<String>, amount: Money) -> Result<Self, ValueError> {
        Self::try_new(EntryType::Income, category_tag, amount)
    }

    pub fn expense(category_tag: impl Into<String>, amount: Money) -> Result<Self, ValueError> {
        Self::try_new(EntryType::Expense, category_tag, amount)
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn category_tag(&self) -> &str {
        &self.category_tag
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryTotal {
    pub income: Money,
    pub expense: Money,
}

impl CategoryTotal {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Ledger sums for one tour, with a per-category breakdown kept in
/// first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    income: Money,
    expense: Money,
    categories: IndexMap<String, CategoryTotal>,
}

impl LedgerTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate<'e>(entries: impl IntoIterator<Item = &'e LedgerEntry>) -> Self {
        let mut totals = Self::new();
        for entry in entries {
            totals.record(entry);
        }
        totals
    }

    pub fn record(&mut self, entry: &LedgerEntry) {
        let category = self
            .categories
            .entry(entry.category_tag.clone())
            .or_default();
        match entry.entry_type {
            EntryType::Income => {
                self.income += entry.amount;
                category.income += entry.amount;
            }
            EntryType::Expense => {
                self.expense += entry.amount;
                category.expense += entry.amount;
            }
        }
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn expense(&self) -> Money {
        self.expense
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryTotal)> + '_ {
        self.categories.iter().map(|(tag, total)| (tag.as_str(), total))
    }

    pub fn category(&self, tag: &str) -> Option<&CategoryTotal> {
        self.categories.get(tag)
    }
}

/// Per-workspace fee and withholding configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinanceSettings {
    savings: Percent,
    manager: Percent,
    agent: Percent,
}

impl FinanceSettings {
    pub fn try_new(savings: Percent, manager: Percent, agent: Percent) -> Result<Self, ValueError> {
        for percent in [savings, manager, agent] {
            if !percent.is_within_bounds() {
                return Err(ValueError::PercentOutOfRange(percent.as_decimal()));
            }
        }
        Ok(Self {
            savings,
            manager,
            agent,
        })
    }

    pub fn savings_percent(&self) -> Percent {
        self.savings
    }

    pub fn manager_percent(&self) -> Percent {
        self.manager
    }

    pub fn agent_percent(&self) -> Percent {
        self.agent
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberRole {
    Owner,
    Manager,
    Member,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub display_name: String,
    pub role: MemberRole,
    pub active: bool,
}

impl Member {
    pub fn new(id: MemberId, display_name: impl Into<String>, role: MemberRole) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role,
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// A saved explicit percentage for one member on one tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cut {
    pub tour: TourId,
    pub member: MemberId,
    pub percent: Percent,
}

/// How a member's percentage was decided for a computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutChoice {
    Explicit(Percent),
    EqualShare,
}

pub type CutOverrides = FxHashMap<MemberId, Percent>;

pub fn overrides_from_cuts<'c>(cuts: impl IntoIterator<Item = &'c Cut>) -> CutOverrides {
    cuts.into_iter()
        .map(|cut| (cut.member, cut.percent))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberPayout {
    pub member: MemberId,
    pub choice: CutChoice,
    pub percent: Percent,
    pub payout: Money,
}

/// Everything derived from one settlement computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementOutcome {
    pub total_income: Money,
    pub total_expense: Money,
    pub manager_fee: Money,
    pub agent_fee: Money,
    pub net_after_fees_and_expenses: Money,
    pub savings: Money,
    pub distributable: Money,
    pub payouts: Vec<MemberPayout>,
}

impl SettlementOutcome {
    pub fn allocated(&self) -> Money {
        self.payouts.iter().map(|payout| payout.payout).sum()
    }

    /// Rounding slack left over after paying every member.
    pub fn unallocated(&self) -> Money {
        self.distributable - self.allocated()
    }

    pub fn percent_total(&self) -> Percent {
        self.payouts.iter().map(|payout| payout.percent).sum()
    }

    pub fn payout_for(&self, member: MemberId) -> Option<&MemberPayout> {
        self.payouts.iter().find(|payout| payout.member == member)
    }

    pub fn as_overrides(&self) -> CutOverrides {
        self.payouts
            .iter()
            .map(|payout| (payout.member, payout.percent))
            .collect()
    }
}
