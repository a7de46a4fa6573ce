#![warn(clippy::uninlined_format_args)]

pub mod cut_validator;
pub mod error;
pub mod input;
pub mod model;
pub mod ports;
pub mod settlement_service;

pub use cut_validator::CutValidator;
pub use error::{Field, SettlementServiceError, StoreError, ValidationError};
pub use input::{FinanceSettingsInput, parse_money, parse_percent};
pub use model::{CutInput, SettlementReport};
pub use ports::{CutStore, LedgerSource, MemberDirectory, MemberRoster, SettingsSource};
pub use settlement_service::SettlementService;
