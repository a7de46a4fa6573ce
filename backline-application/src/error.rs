use backline_domain::{MemberId, Percent, TourId, WorkspaceId};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// The user-editable value a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SavingsPercent,
    ManagerPercent,
    AgentPercent,
    Cut(MemberId),
    Amount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::SavingsPercent => f.write_str("savings_percent"),
            Field::ManagerPercent => f.write_str("manager_percent"),
            Field::AgentPercent => f.write_str("agent_percent"),
            Field::Cut(member) => write!(f, "cut[{member}]"),
            Field::Amount => f.write_str("amount"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: a value is required")]
    Missing { field: Field },
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: Field, input: String },
    #[error("{field}: '{input}' has more than two decimal places")]
    TooManyDecimals { field: Field, input: String },
    #[error("{field}: {value}% is outside 0 to 100")]
    PercentOutOfRange { field: Field, value: Decimal },
    #[error("{field}: '{input}' is a negative amount")]
    NegativeAmount { field: Field, input: String },
    #[error("{field}: '{input}' is too large")]
    AmountTooLarge { field: Field, input: String },
    #[error("member {0} does not take part in this settlement")]
    UnknownMember(MemberId),
    #[error("member {0} has more than one cut")]
    DuplicateCut(MemberId),
    #[error("member {0} has no cut")]
    MissingCut(MemberId),
    #[error("cuts add up to {total}%, not 100.00%")]
    CutsNotWhole { total: Percent },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("workspace {0} not found")]
    WorkspaceNotFound(WorkspaceId),
    #[error("tour {0} not found")]
    TourNotFound(TourId),
    #[error("tour {tour} does not belong to workspace {workspace}")]
    ForeignTour {
        workspace: WorkspaceId,
        tour: TourId,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
