use backline_domain::Money;

const MINOR_DIGITS: u32 = 2;

/// Renders minor-unit amounts as `-$1,234.56`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn format(&self, money: Money) -> String {
        let units = i128::from(money.amount());
        let sign = if units < 0 { "-" } else { "" };
        let magnitude = units.unsigned_abs();
        let divisor = 10_u128.pow(MINOR_DIGITS);
        let whole = group_thousands(magnitude / divisor);
        let fraction = magnitude % divisor;
        format!(
            "{sign}{}{whole}.{fraction:0width$}",
            self.symbol,
            width = MINOR_DIGITS as usize
        )
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
