use backline_domain::{
    FinanceSettings, LedgerTotals, Member, MemberId, SettlementOutcome, TourId, WorkspaceId,
};

/// A cut as typed by the user, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutInput {
    pub member: MemberId,
    pub percent: String,
}

impl CutInput {
    pub fn new(member: MemberId, percent: impl Into<String>) -> Self {
        Self {
            member,
            percent: percent.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    pub workspace: WorkspaceId,
    pub tour: TourId,
    pub totals: LedgerTotals,
    pub settings: FinanceSettings,
    pub members: Vec<Member>,
    pub outcome: SettlementOutcome,
}

impl SettlementReport {
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }
}
