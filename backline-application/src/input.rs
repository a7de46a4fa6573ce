//! Parsing of user-typed numbers into validated domain values.

use crate::error::{Field, ValidationError};
use backline_domain::{FinanceSettings, Money, Percent};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::str::FromStr;

const MAX_DECIMAL_PLACES: u32 = 2;

/// Parses a percentage such as `12.5` or `33.33%`, bounded to `0..=100`.
pub fn parse_percent(field: Field, input: &str) -> Result<Percent, ValidationError> {
    let trimmed = input.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let value = parse_decimal(field, input, number)?;

    Percent::bounded(value).map_err(|_| ValidationError::PercentOutOfRange { field, value })
}

/// Parses a currency amount such as `1,234.56` or `$80` into minor units.
pub fn parse_money(field: Field, input: &str) -> Result<Money, ValidationError> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();
    let number = strip_thousands_separators(unsigned).ok_or_else(|| {
        ValidationError::NotANumber {
            field,
            input: input.to_string(),
        }
    })?;
    let value = parse_decimal(field, input, &number)?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount {
            field,
            input: input.to_string(),
        });
    }

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_i64())
        .map(Money::from_i64)
        .ok_or_else(|| ValidationError::AmountTooLarge {
            field,
            input: input.to_string(),
        })
}

/// Removes `,` separators from the integer part. Each separator must be
/// followed by exactly three digits and preceded by one to three leading ones.
fn strip_thousands_separators(number: &str) -> Option<String> {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number, None),
    };
    if !integer.contains(',') {
        return Some(number.to_string());
    }

    let mut groups = integer.split(',');
    let leading = groups.next()?;
    let leading_digits = leading.strip_prefix('-').unwrap_or(leading);
    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    if !(1..=3).contains(&leading_digits.len()) || !is_digits(leading_digits) {
        return None;
    }

    let mut plain = leading.to_string();
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        plain.push_str(group);
    }
    if let Some(fraction) = fraction {
        plain.push('.');
        plain.push_str(fraction);
    }
    Some(plain)
}

fn parse_decimal(field: Field, input: &str, number: &str) -> Result<Decimal, ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let value = Decimal::from_str(number).map_err(|_| ValidationError::NotANumber {
        field,
        input: input.to_string(),
    })?;

    if value.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(ValidationError::TooManyDecimals {
            field,
            input: input.to_string(),
        });
    }

    Ok(value)
}

/// Finance settings form fields. Blank fields mean zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinanceSettingsInput {
    pub savings_percent: String,
    pub manager_percent: String,
    pub agent_percent: String,
}

impl FinanceSettingsInput {
    pub fn parse(&self) -> Result<FinanceSettings, ValidationError> {
        let savings = parse_optional_percent(Field::SavingsPercent, &self.savings_percent)?;
        let manager = parse_optional_percent(Field::ManagerPercent, &self.manager_percent)?;
        let agent = parse_optional_percent(Field::AgentPercent, &self.agent_percent)?;

        FinanceSettings::try_new(savings, manager, agent).map_err(|_| {
            let (field, percent) = [
                (Field::SavingsPercent, savings),
                (Field::ManagerPercent, manager),
                (Field::AgentPercent, agent),
            ]
            .into_iter()
            .find(|(_, percent)| !percent.is_within_bounds())
            .unwrap_or((Field::SavingsPercent, savings));
            ValidationError::PercentOutOfRange {
                field,
                value: percent.as_decimal(),
            }
        })
    }
}

fn parse_optional_percent(field: Field, input: &str) -> Result<Percent, ValidationError> {
    if input.trim().is_empty() {
        return Ok(Percent::ZERO);
    }
    parse_percent(field, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer("10", Percent::from_hundredths(1_000))]
    #[case::decimal("12.5", Percent::from_hundredths(1_250))]
    #[case::suffix("33.33%", Percent::from_hundredths(3_333))]
    #[case::padded("  7 % ", Percent::from_hundredths(700))]
    #[case::zero("0", Percent::ZERO)]
    #[case::hundred("100.00", Percent::HUNDRED)]
    #[case::trailing_zeros("50.000", Percent::from_hundredths(5_000))]
    fn parse_percent_accepts(#[case] input: &str, #[case] expected: Percent) {
        assert_eq!(parse_percent(Field::SavingsPercent, input), Ok(expected));
    }

    #[rstest]
    #[case::blank("  ", ValidationError::Missing { field: Field::AgentPercent })]
    #[case::word("ten", ValidationError::NotANumber {
        field: Field::AgentPercent,
        input: "ten".to_string(),
    })]
    #[case::three_places("1.125", ValidationError::TooManyDecimals {
        field: Field::AgentPercent,
        input: "1.125".to_string(),
    })]
    #[case::over("100.01", ValidationError::PercentOutOfRange {
        field: Field::AgentPercent,
        value: Decimal::new(10_001, 2),
    })]
    #[case::negative("-5", ValidationError::PercentOutOfRange {
        field: Field::AgentPercent,
        value: Decimal::new(-5, 0),
    })]
    fn parse_percent_rejects(#[case] input: &str, #[case] expected: ValidationError) {
        assert_eq!(parse_percent(Field::AgentPercent, input), Err(expected));
    }

    #[rstest]
    #[case::plain("1000", 100_000)]
    #[case::cents("10.05", 1_005)]
    #[case::one_place("10.5", 1_050)]
    #[case::separators("1,234.56", 123_456)]
    #[case::millions("$1,234,567", 123_456_700)]
    #[case::symbol("$ 80", 8_000)]
    #[case::zero("0.00", 0)]
    fn parse_money_accepts(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(
            parse_money(Field::Amount, input),
            Ok(Money::from_i64(expected))
        );
    }

    #[rstest]
    #[case::negative("-3.00")]
    #[case::fraction_of_cent("0.001")]
    #[case::text("lots")]
    #[case::empty("")]
    #[case::too_large("99999999999999999999")]
    #[case::stray_commas(",,5")]
    #[case::bad_grouping("1,2,3")]
    #[case::trailing_comma("12,")]
    #[case::long_leading_group("1234,567")]
    #[case::comma_in_fraction("1.2,5")]
    fn parse_money_rejects(#[case] input: &str) {
        assert!(parse_money(Field::Amount, input).is_err());
    }

    #[rstest]
    #[case::stray_commas(",,5")]
    #[case::bad_grouping("1,2,3")]
    #[case::trailing_comma("12,")]
    fn misplaced_separators_are_not_numbers(#[case] input: &str) {
        assert_eq!(
            parse_money(Field::Amount, input),
            Err(ValidationError::NotANumber {
                field: Field::Amount,
                input: input.to_string(),
            })
        );
    }

    #[test]
    fn blank_settings_default_to_zero() {
        let settings = FinanceSettingsInput::default().parse();
        assert_eq!(settings, Ok(FinanceSettings::default()));
    }

    #[test]
    fn settings_report_the_offending_field() {
        let input = FinanceSettingsInput {
            savings_percent: "10".to_string(),
            manager_percent: "15%".to_string(),
            agent_percent: "abc".to_string(),
        };

        assert_eq!(
            input.parse(),
            Err(ValidationError::NotANumber {
                field: Field::AgentPercent,
                input: "abc".to_string(),
            })
        );
    }

    #[rstest]
    #[case::manager("10", "150", "5", Field::ManagerPercent)]
    #[case::agent("10", "15", "100.5", Field::AgentPercent)]
    fn settings_report_the_field_out_of_range(
        #[case] savings: &str,
        #[case] manager: &str,
        #[case] agent: &str,
        #[case] expected: Field,
    ) {
        let input = FinanceSettingsInput {
            savings_percent: savings.to_string(),
            manager_percent: manager.to_string(),
            agent_percent: agent.to_string(),
        };

        assert!(matches!(
            input.parse(),
            Err(ValidationError::PercentOutOfRange { field, .. }) if field == expected
        ));
    }

    #[test]
    fn settings_parse_all_fields() {
        let input = FinanceSettingsInput {
            savings_percent: "10".to_string(),
            manager_percent: "15%".to_string(),
            agent_percent: "".to_string(),
        };

        let settings = input.parse().expect("valid settings");
        assert_eq!(settings.savings_percent(), Percent::from_hundredths(1_000));
        assert_eq!(settings.manager_percent(), Percent::from_hundredths(1_500));
        assert_eq!(settings.agent_percent(), Percent::ZERO);
    }
}
