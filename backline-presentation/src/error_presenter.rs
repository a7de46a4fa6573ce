use backline_application::{SettlementServiceError, StoreError, ValidationError};
use backline_i18n as i18n;

pub fn format_validation_error(error: &ValidationError) -> String {
    match error {
        ValidationError::Missing { field } => format!("{field}: {}", i18n::VALUE_REQUIRED),
        ValidationError::NotANumber { field, input } => i18n::not_a_number(field, input),
        ValidationError::AmountTooLarge { field, input } => i18n::amount_too_large(field, input),
        ValidationError::TooManyDecimals { field, input } => i18n::too_many_decimals(field, input),
        ValidationError::PercentOutOfRange { field, value } => {
            i18n::percent_out_of_range(field, value)
        }
        ValidationError::NegativeAmount { field, input } => i18n::negative_amount(field, input),
        ValidationError::UnknownMember(member) => i18n::unknown_member(member),
        ValidationError::DuplicateCut(member) => i18n::duplicate_cut(member),
        ValidationError::MissingCut(member) => i18n::missing_cut(member),
        ValidationError::CutsNotWhole { total } => i18n::cuts_not_whole(total),
    }
}

pub fn format_service_error(error: &SettlementServiceError) -> String {
    match error {
        SettlementServiceError::Validation(error) => format_validation_error(error),
        SettlementServiceError::Store(StoreError::TourNotFound(tour)) => {
            i18n::tour_not_found(tour)
        }
        SettlementServiceError::Store(error) => i18n::store_failure(error),
    }
}
