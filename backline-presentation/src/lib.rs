#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod error_presenter;
pub mod export_sheet;
pub mod settlement_presenter;
pub mod text_table;

pub use currency::CurrencyFormat;
pub use error_presenter::{format_service_error, format_validation_error};
pub use export_sheet::{CellFormat, CellValue, ExportSheet};
pub use settlement_presenter::{SettlementPresenter, SettlementView};
