use crate::{
    cut_validator::CutValidator,
    error::{SettlementServiceError, StoreError},
    model::{CutInput, SettlementReport},
    ports::{CutStore, LedgerSource, MemberRoster, SettingsSource},
};
use backline_domain::{
    Cut, LedgerTotals, SettlementCalculator, TourId, WorkspaceId, overrides_from_cuts,
};

#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    ledger: &'a dyn LedgerSource,
    settings: &'a dyn SettingsSource,
    roster: &'a dyn MemberRoster,
    cuts: &'a dyn CutStore,
}

impl<'a> SettlementService<'a> {
    pub fn new(
        ledger: &'a dyn LedgerSource,
        settings: &'a dyn SettingsSource,
        roster: &'a dyn MemberRoster,
        cuts: &'a dyn CutStore,
    ) -> Self {
        Self {
            ledger,
            settings,
            roster,
            cuts,
        }
    }

    /// Fetches everything a tour settlement needs and runs the calculator.
    ///
    /// Missing finance settings count as all-zero. Saved cuts are applied as
    /// explicit overrides; members without one get an equal share.
    pub fn settle(
        &self,
        workspace: WorkspaceId,
        tour: TourId,
    ) -> Result<SettlementReport, SettlementServiceError> {
        self.ensure_tour_in_workspace(workspace, tour)?;

        let entries = self.ledger.entries(tour)?;
        let settings = match self.settings.finance_settings(workspace)? {
            Some(settings) => settings,
            None => {
                tracing::debug!(%workspace, "No finance settings saved; using zero fees");
                Default::default()
            }
        };
        let members = self.roster.members(workspace)?;
        let saved_cuts = self.cuts.cuts(tour)?;

        let totals = LedgerTotals::aggregate(&entries);
        let overrides = overrides_from_cuts(&saved_cuts);
        let outcome = SettlementCalculator.calculate(
            totals.income(),
            totals.expense(),
            &settings,
            &members,
            &overrides,
        );

        tracing::info!(
            %workspace,
            %tour,
            entry_count = entries.len(),
            saved_cut_count = saved_cuts.len(),
            distributable = outcome.distributable.amount(),
            "Tour settled"
        );

        Ok(SettlementReport {
            workspace,
            tour,
            totals,
            settings,
            members,
            outcome,
        })
    }

    /// Validates and persists a full set of cuts. Nothing is written when
    /// validation fails.
    pub fn save_cuts(
        &self,
        workspace: WorkspaceId,
        tour: TourId,
        inputs: &[CutInput],
    ) -> Result<Vec<Cut>, SettlementServiceError> {
        self.ensure_tour_in_workspace(workspace, tour)?;
        let members = self.roster.members(workspace)?;

        let cuts = match CutValidator::validate(tour, &members, inputs) {
            Ok(cuts) => cuts,
            Err(err) => {
                tracing::warn!(
                    %workspace,
                    %tour,
                    input_count = inputs.len(),
                    reason = %err,
                    "Cut save rejected"
                );
                return Err(err.into());
            }
        };

        self.cuts.replace_cuts(tour, cuts.clone())?;
        tracing::info!(%workspace, %tour, cut_count = cuts.len(), "Cuts saved");
        Ok(cuts)
    }

    /// Drops saved cuts so the tour goes back to equal shares.
    pub fn reset_cuts(
        &self,
        workspace: WorkspaceId,
        tour: TourId,
    ) -> Result<(), SettlementServiceError> {
        self.ensure_tour_in_workspace(workspace, tour)?;
        self.cuts.clear_cuts(tour)?;
        tracing::info!(%workspace, %tour, "Cuts reset to equal shares");
        Ok(())
    }

    fn ensure_tour_in_workspace(
        &self,
        workspace: WorkspaceId,
        tour: TourId,
    ) -> Result<(), StoreError> {
        let owner = self.ledger.tour_workspace(tour)?;
        if owner != workspace {
            return Err(StoreError::ForeignTour { workspace, tour });
        }
        Ok(())
    }
}
