use backline_application::{
    CutInput, CutStore, LedgerSource, MemberRoster, SettingsSource, SettlementService,
    SettlementServiceError, StoreError, ValidationError,
};
use backline_domain::{
    Cut, CutChoice, FinanceSettings, LedgerEntry, Member, MemberId, MemberRole, Money, Percent,
    TourId, WorkspaceId, equal_split,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};
use std::{collections::HashMap, sync::RwLock};

const WORKSPACE: WorkspaceId = WorkspaceId(1);
const OTHER_WORKSPACE: WorkspaceId = WorkspaceId(2);
const TOUR: TourId = TourId(10);

#[derive(Default)]
struct FakeStore {
    tours: HashMap<TourId, WorkspaceId>,
    entries: HashMap<TourId, Vec<LedgerEntry>>,
    settings: HashMap<WorkspaceId, FinanceSettings>,
    members: HashMap<WorkspaceId, Vec<Member>>,
    cuts: RwLock<HashMap<TourId, Vec<Cut>>>,
}

impl LedgerSource for FakeStore {
    fn tour_workspace(&self, tour: TourId) -> Result<WorkspaceId, StoreError> {
        self.tours
            .get(&tour)
            .copied()
            .ok_or(StoreError::TourNotFound(tour))
    }

    fn entries(&self, tour: TourId) -> Result<Vec<LedgerEntry>, StoreError> {
        Ok(self.entries.get(&tour).cloned().unwrap_or_default())
    }
}

impl SettingsSource for FakeStore {
    fn finance_settings(
        &self,
        workspace: WorkspaceId,
    ) -> Result<Option<FinanceSettings>, StoreError> {
        Ok(self.settings.get(&workspace).copied())
    }
}

impl MemberRoster for FakeStore {
    fn members(&self, workspace: WorkspaceId) -> Result<Vec<Member>, StoreError> {
        Ok(self.members.get(&workspace).cloned().unwrap_or_default())
    }
}

impl CutStore for FakeStore {
    fn cuts(&self, tour: TourId) -> Result<Vec<Cut>, StoreError> {
        Ok(self
            .cuts
            .read()
            .expect("cut lock")
            .get(&tour)
            .cloned()
            .unwrap_or_default())
    }

    fn replace_cuts(&self, tour: TourId, cuts: Vec<Cut>) -> Result<(), StoreError> {
        self.cuts.write().expect("cut lock").insert(tour, cuts);
        Ok(())
    }

    fn clear_cuts(&self, tour: TourId) -> Result<(), StoreError> {
        self.cuts.write().expect("cut lock").remove(&tour);
        Ok(())
    }
}

fn money(value: i64) -> Money {
    Money::from_i64(value)
}

fn band() -> Vec<Member> {
    vec![
        Member::new(MemberId(1), "Vox", MemberRole::Owner),
        Member::new(MemberId(2), "Guitar", MemberRole::Member),
        Member::new(MemberId(3), "Drums", MemberRole::Member),
    ]
}

#[fixture]
fn store() -> FakeStore {
    let mut store = FakeStore::default();
    store.tours.insert(TOUR, WORKSPACE);
    store.entries.insert(
        TOUR,
        vec![
            LedgerEntry::income("guarantee", money(80_000)).unwrap(),
            LedgerEntry::income("merch", money(20_000)).unwrap(),
            LedgerEntry::expense("fuel", money(12_000)).unwrap(),
            LedgerEntry::expense("hotel", money(8_000)).unwrap(),
        ],
    );
    store.settings.insert(
        WORKSPACE,
        FinanceSettings::try_new(
            Percent::from_hundredths(1_000),
            Percent::from_hundredths(1_000),
            Percent::from_hundredths(500),
        )
        .unwrap(),
    );
    store.members.insert(WORKSPACE, band());
    store
}

fn service(store: &FakeStore) -> SettlementService<'_> {
    SettlementService::new(store, store, store, store)
}

#[rstest]
fn settle_aggregates_ledger_and_applies_settings(store: FakeStore) {
    let report = service(&store).settle(WORKSPACE, TOUR).expect("settles");

    assert_eq!(report.totals.income(), money(100_000));
    assert_eq!(report.totals.expense(), money(20_000));
    assert_eq!(report.outcome.manager_fee, money(10_000));
    assert_eq!(report.outcome.agent_fee, money(5_000));
    assert_eq!(report.outcome.savings, money(6_500));
    assert_eq!(report.outcome.distributable, money(58_500));
    assert_eq!(report.outcome.payouts.len(), 3);
    assert_eq!(report.members, band());
}

#[rstest]
fn missing_settings_mean_no_fees(mut store: FakeStore) {
    store.settings.clear();

    let report = service(&store).settle(WORKSPACE, TOUR).expect("settles");

    assert_eq!(report.settings, FinanceSettings::default());
    assert_eq!(report.outcome.manager_fee, Money::ZERO);
    assert_eq!(report.outcome.savings, Money::ZERO);
    assert_eq!(report.outcome.distributable, money(80_000));
}

#[rstest]
fn saved_cuts_drive_the_next_settlement(store: FakeStore) {
    let service = service(&store);
    let inputs = [
        CutInput::new(MemberId(1), "50"),
        CutInput::new(MemberId(2), "25"),
        CutInput::new(MemberId(3), "25"),
    ];

    let saved = service
        .save_cuts(WORKSPACE, TOUR, &inputs)
        .expect("cuts are valid");
    assert_eq!(saved.len(), 3);

    let report = service.settle(WORKSPACE, TOUR).expect("settles");
    let payouts: Vec<(CutChoice, Money)> = report
        .outcome
        .payouts
        .iter()
        .map(|p| (p.choice, p.payout))
        .collect();
    assert_eq!(
        payouts,
        [
            (CutChoice::Explicit(Percent::from_hundredths(5_000)), money(29_250)),
            (CutChoice::Explicit(Percent::from_hundredths(2_500)), money(14_625)),
            (CutChoice::Explicit(Percent::from_hundredths(2_500)), money(14_625)),
        ]
    );
}

#[rstest]
fn rejected_cuts_are_not_persisted(store: FakeStore) {
    let service = service(&store);
    let inputs = [
        CutInput::new(MemberId(1), "50"),
        CutInput::new(MemberId(2), "25"),
        CutInput::new(MemberId(3), "24.98"),
    ];

    let result = service.save_cuts(WORKSPACE, TOUR, &inputs);

    assert_eq!(
        result,
        Err(SettlementServiceError::Validation(
            ValidationError::CutsNotWhole {
                total: Percent::from_hundredths(9_998),
            }
        ))
    );
    assert!(store.cuts(TOUR).expect("cuts").is_empty());
}

#[rstest]
fn reset_returns_to_equal_shares(store: FakeStore) {
    let service = service(&store);
    let inputs = [
        CutInput::new(MemberId(1), "60"),
        CutInput::new(MemberId(2), "20"),
        CutInput::new(MemberId(3), "20"),
    ];
    service
        .save_cuts(WORKSPACE, TOUR, &inputs)
        .expect("cuts are valid");

    service.reset_cuts(WORKSPACE, TOUR).expect("reset");

    let report = service.settle(WORKSPACE, TOUR).expect("settles");
    assert!(
        report
            .outcome
            .payouts
            .iter()
            .all(|p| p.choice == CutChoice::EqualShare)
    );
}

#[rstest]
fn foreign_tour_is_refused(store: FakeStore) {
    let result = service(&store).settle(OTHER_WORKSPACE, TOUR);

    assert_eq!(
        result,
        Err(SettlementServiceError::Store(StoreError::ForeignTour {
            workspace: OTHER_WORKSPACE,
            tour: TOUR,
        }))
    );
}

#[rstest]
fn unknown_tour_is_reported(store: FakeStore) {
    let result = service(&store).settle(WORKSPACE, TourId(99));

    assert_eq!(
        result,
        Err(SettlementServiceError::Store(StoreError::TourNotFound(
            TourId(99)
        )))
    );
}

proptest! {
    #[test]
    fn equal_split_percentages_are_always_saveable(member_count in 1usize..=40) {
        let mut store = FakeStore::default();
        store.tours.insert(TOUR, WORKSPACE);
        let members: Vec<Member> = (0..member_count)
            .map(|idx| Member::new(MemberId(idx as u64 + 1), format!("m{idx}"), MemberRole::Member))
            .collect();
        store.members.insert(WORKSPACE, members.clone());

        let inputs: Vec<CutInput> = members
            .iter()
            .zip(equal_split(member_count))
            .map(|(member, percent)| CutInput::new(member.id, percent.to_string()))
            .collect();

        let saved = service(&store).save_cuts(WORKSPACE, TOUR, &inputs);
        prop_assert!(saved.is_ok(), "{:?}", saved);
    }
}
