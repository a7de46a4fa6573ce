use crate::snapshot::{
    CutRecord, EntryTypeRecord, LedgerRecord, MemberRecord, RoleRecord, Snapshot, SnapshotError,
};
use backline_application::{
    CutStore, Field, FinanceSettingsInput, LedgerSource, MemberRoster, SettingsSource, StoreError,
    ValidationError, parse_money, parse_percent,
};
use backline_domain::{
    Cut, EntryType, FinanceSettings, LedgerEntry, Member, MemberId, MemberRole, TourId,
    WorkspaceId,
};
use dashmap::DashMap;
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

struct WorkspaceData {
    name: String,
    settings: Option<FinanceSettings>,
    members: Vec<Member>,
}

struct TourData {
    workspace: WorkspaceId,
    name: String,
}

/// Read-mostly store backed by a snapshot file. Saved cuts live in memory.
pub struct SnapshotStore {
    workspaces: HashMap<WorkspaceId, WorkspaceData>,
    tours: HashMap<TourId, TourData>,
    entries: HashMap<TourId, Vec<LedgerEntry>>,
    cuts: DashMap<TourId, Vec<Cut>>,
}

impl SnapshotStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_snapshot(Snapshot::from_toml_str(&source)?)?;
        tracing::info!(
            path = %path.display(),
            workspace_count = store.workspaces.len(),
            tour_count = store.tours.len(),
            "Snapshot loaded"
        );
        Ok(store)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let mut workspaces = HashMap::with_capacity(snapshot.workspaces.len());
        for record in snapshot.workspaces {
            let settings = match record.finance {
                Some(finance) => Some(
                    FinanceSettingsInput {
                        savings_percent: finance.savings_percent,
                        manager_percent: finance.manager_percent,
                        agent_percent: finance.agent_percent,
                    }
                    .parse()
                    .map_err(|source| SnapshotError::Invalid {
                        context: format!("workspace {} finance settings", record.id),
                        source,
                    })?,
                ),
                None => None,
            };
            let data = WorkspaceData {
                name: record.name,
                settings,
                members: Vec::new(),
            };
            if workspaces.insert(WorkspaceId(record.id), data).is_some() {
                return Err(SnapshotError::DuplicateId {
                    kind: "workspace",
                    id: record.id,
                });
            }
        }

        let mut member_workspace = HashMap::with_capacity(snapshot.members.len());
        for record in snapshot.members {
            let workspace = WorkspaceId(record.workspace);
            let Some(data) = workspaces.get_mut(&workspace) else {
                return Err(SnapshotError::DanglingReference {
                    kind: "member",
                    id: record.id,
                    target: "workspace",
                    target_id: record.workspace,
                });
            };
            if member_workspace
                .insert(MemberId(record.id), workspace)
                .is_some()
            {
                return Err(SnapshotError::DuplicateId {
                    kind: "member",
                    id: record.id,
                });
            }
            data.members.push(to_member(record));
        }

        let mut tours = HashMap::with_capacity(snapshot.tours.len());
        for record in snapshot.tours {
            if !workspaces.contains_key(&WorkspaceId(record.workspace)) {
                return Err(SnapshotError::DanglingReference {
                    kind: "tour",
                    id: record.id,
                    target: "workspace",
                    target_id: record.workspace,
                });
            }
            let data = TourData {
                workspace: WorkspaceId(record.workspace),
                name: record.name,
            };
            if tours.insert(TourId(record.id), data).is_some() {
                return Err(SnapshotError::DuplicateId {
                    kind: "tour",
                    id: record.id,
                });
            }
        }

        let mut entries: HashMap<TourId, Vec<LedgerEntry>> = HashMap::new();
        for (line, record) in snapshot.ledger.into_iter().enumerate() {
            let tour = TourId(record.tour);
            if !tours.contains_key(&tour) {
                return Err(SnapshotError::DanglingReference {
                    kind: "ledger entry",
                    id: line as u64 + 1,
                    target: "tour",
                    target_id: record.tour,
                });
            }
            entries
                .entry(tour)
                .or_default()
                .push(to_ledger_entry(line + 1, record)?);
        }

        let cuts: DashMap<TourId, Vec<Cut>> = DashMap::new();
        let mut seen_cuts = HashSet::new();
        for record in snapshot.cuts {
            let cut = to_cut(&record, &tours, &member_workspace)?;
            if !seen_cuts.insert((cut.tour, cut.member)) {
                return Err(SnapshotError::DuplicateId {
                    kind: "cut for member",
                    id: record.member,
                });
            }
            cuts.entry(cut.tour).or_default().push(cut);
        }

        Ok(Self {
            workspaces,
            tours,
            entries,
            cuts,
        })
    }

    /// Tour ids in ascending order.
    pub fn tour_ids(&self) -> Vec<TourId> {
        let mut ids: Vec<TourId> = self.tours.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn tour_name(&self, tour: TourId) -> Option<&str> {
        self.tours.get(&tour).map(|data| data.name.as_str())
    }

    pub fn workspace_name(&self, workspace: WorkspaceId) -> Option<&str> {
        self.workspaces
            .get(&workspace)
            .map(|data| data.name.as_str())
    }

    fn workspace(&self, workspace: WorkspaceId) -> Result<&WorkspaceData, StoreError> {
        self.workspaces
            .get(&workspace)
            .ok_or(StoreError::WorkspaceNotFound(workspace))
    }

    fn ensure_tour(&self, tour: TourId) -> Result<(), StoreError> {
        if self.tours.contains_key(&tour) {
            Ok(())
        } else {
            Err(StoreError::TourNotFound(tour))
        }
    }
}

fn to_member(record: MemberRecord) -> Member {
    let role = match record.role {
        RoleRecord::Owner => MemberRole::Owner,
        RoleRecord::Manager => MemberRole::Manager,
        RoleRecord::Member => MemberRole::Member,
    };
    Member {
        id: MemberId(record.id),
        display_name: record.name,
        role,
        active: record.active,
    }
}

fn to_ledger_entry(line: usize, record: LedgerRecord) -> Result<LedgerEntry, SnapshotError> {
    let invalid = |source| SnapshotError::Invalid {
        context: format!("ledger entry {line}"),
        source,
    };
    let amount = parse_money(Field::Amount, &record.amount).map_err(invalid)?;
    let entry_type = match record.entry_type {
        EntryTypeRecord::Income => EntryType::Income,
        EntryTypeRecord::Expense => EntryType::Expense,
    };
    LedgerEntry::try_new(entry_type, record.category, amount).map_err(|_| {
        invalid(ValidationError::NegativeAmount {
            field: Field::Amount,
            input: record.amount.clone(),
        })
    })
}

fn to_cut(
    record: &CutRecord,
    tours: &HashMap<TourId, TourData>,
    member_workspace: &HashMap<MemberId, WorkspaceId>,
) -> Result<Cut, SnapshotError> {
    let tour = TourId(record.tour);
    let member = MemberId(record.member);
    let Some(tour_data) = tours.get(&tour) else {
        return Err(SnapshotError::DanglingReference {
            kind: "cut for member",
            id: record.member,
            target: "tour",
            target_id: record.tour,
        });
    };
    if member_workspace.get(&member) != Some(&tour_data.workspace) {
        return Err(SnapshotError::DanglingReference {
            kind: "cut on tour",
            id: record.tour,
            target: "member",
            target_id: record.member,
        });
    }
    let percent =
        parse_percent(Field::Cut(member), &record.percent).map_err(|source| {
            SnapshotError::Invalid {
                context: format!("cut for member {} on tour {}", record.member, record.tour),
                source,
            }
        })?;
    Ok(Cut {
        tour,
        member,
        percent,
    })
}

impl LedgerSource for SnapshotStore {
    fn tour_workspace(&self, tour: TourId) -> Result<WorkspaceId, StoreError> {
        self.tours
            .get(&tour)
            .map(|data| data.workspace)
            .ok_or(StoreError::TourNotFound(tour))
    }

    fn entries(&self, tour: TourId) -> Result<Vec<LedgerEntry>, StoreError> {
        self.ensure_tour(tour)?;
        Ok(self.entries.get(&tour).cloned().unwrap_or_default())
    }
}

impl SettingsSource for SnapshotStore {
    fn finance_settings(
        &self,
        workspace: WorkspaceId,
    ) -> Result<Option<FinanceSettings>, StoreError> {
        Ok(self.workspace(workspace)?.settings)
    }
}

impl MemberRoster for SnapshotStore {
    fn members(&self, workspace: WorkspaceId) -> Result<Vec<Member>, StoreError> {
        Ok(self.workspace(workspace)?.members.clone())
    }
}

impl CutStore for SnapshotStore {
    fn cuts(&self, tour: TourId) -> Result<Vec<Cut>, StoreError> {
        self.ensure_tour(tour)?;
        Ok(self
            .cuts
            .get(&tour)
            .map(|cuts| cuts.value().clone())
            .unwrap_or_default())
    }

    fn replace_cuts(&self, tour: TourId, cuts: Vec<Cut>) -> Result<(), StoreError> {
        self.ensure_tour(tour)?;
        self.cuts.insert(tour, cuts);
        Ok(())
    }

    fn clear_cuts(&self, tour: TourId) -> Result<(), StoreError> {
        self.ensure_tour(tour)?;
        self.cuts.remove(&tour);
        Ok(())
    }
}
