use crate::error::StoreError;
use backline_domain::{Cut, FinanceSettings, LedgerEntry, Member, MemberId, TourId, WorkspaceId};
use std::collections::HashMap;

pub trait LedgerSource: Send + Sync {
    /// Workspace that owns `tour`.
    fn tour_workspace(&self, tour: TourId) -> Result<WorkspaceId, StoreError>;

    fn entries(&self, tour: TourId) -> Result<Vec<LedgerEntry>, StoreError>;
}

pub trait SettingsSource: Send + Sync {
    /// `None` when the workspace never saved finance settings.
    fn finance_settings(
        &self,
        workspace: WorkspaceId,
    ) -> Result<Option<FinanceSettings>, StoreError>;
}

pub trait MemberRoster: Send + Sync {
    /// Members in creation order.
    fn members(&self, workspace: WorkspaceId) -> Result<Vec<Member>, StoreError>;
}

pub trait CutStore: Send + Sync {
    fn cuts(&self, tour: TourId) -> Result<Vec<Cut>, StoreError>;

    fn replace_cuts(&self, tour: TourId, cuts: Vec<Cut>) -> Result<(), StoreError>;

    fn clear_cuts(&self, tour: TourId) -> Result<(), StoreError>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.get(&member_id).map(String::as_str)
    }
}

impl MemberDirectory for Vec<Member> {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.iter()
            .find(|member| member.id == member_id)
            .map(|member| member.display_name.as_str())
    }
}
