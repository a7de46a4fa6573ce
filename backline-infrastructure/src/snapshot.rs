//! On-disk snapshot of workspace data, as exported from the relational store.

use backline_application::ValidationError;
use serde::Deserialize;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed snapshot: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{context}: {source}")]
    Invalid {
        context: String,
        #[source]
        source: ValidationError,
    },
    #[error("{kind} {id} is declared more than once")]
    DuplicateId { kind: &'static str, id: u64 },
    #[error("{kind} {id} refers to unknown {target} {target_id}")]
    DanglingReference {
        kind: &'static str,
        id: u64,
        target: &'static str,
        target_id: u64,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    pub workspaces: Vec<WorkspaceRecord>,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
    #[serde(default)]
    pub tours: Vec<TourRecord>,
    #[serde(default)]
    pub ledger: Vec<LedgerRecord>,
    #[serde(default)]
    pub cuts: Vec<CutRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceRecord {
    pub id: u64,
    pub name: String,
    pub finance: Option<FinanceRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinanceRecord {
    #[serde(default)]
    pub savings_percent: String,
    #[serde(default)]
    pub manager_percent: String,
    #[serde(default)]
    pub agent_percent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleRecord {
    Owner,
    Manager,
    Member,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberRecord {
    pub id: u64,
    pub workspace: u64,
    pub name: String,
    pub role: RoleRecord,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TourRecord {
    pub id: u64,
    pub workspace: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryTypeRecord {
    Income,
    Expense,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerRecord {
    pub tour: u64,
    #[serde(rename = "type")]
    pub entry_type: EntryTypeRecord,
    pub category: String,
    pub amount: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CutRecord {
    pub tour: u64,
    pub member: u64,
    pub percent: String,
}

fn default_active() -> bool {
    true
}

impl Snapshot {
    pub fn from_toml_str(source: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(source)?)
    }
}
