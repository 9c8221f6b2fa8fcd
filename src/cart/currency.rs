//! Currency formatting for display.
//!
//! Formats integer amounts in the smallest currency unit with thousand
//! separators and a currency symbol. Display-only; amounts themselves
//! stay integers everywhere else.

use serde::{Deserialize, Serialize};

/// How amounts are rendered. Configurable through the config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Symbol appended after the amount.
    pub symbol: String,
    /// Decimal places carried by the smallest unit (0 for ₫, 2 for $).
    pub decimals: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₫".to_string(),
            decimals: 0,
        }
    }
}

/// Upper bound on configured decimal places; 10^19 overflows u64.
const MAX_DECIMALS: u8 = 12;

impl CurrencyFormat {
    /// Format an amount in smallest units, e.g. 89000 -> "89,000 ₫".
    /// Configured decimals beyond [`MAX_DECIMALS`] are clamped.
    pub fn format(&self, amount: u64) -> String {
        let decimals = self.decimals.min(MAX_DECIMALS);
        let scale = 10u64.pow(u32::from(decimals));
        let whole = with_separators(amount / scale);

        if decimals == 0 {
            format!("{} {}", whole, self.symbol)
        } else {
            let fraction = amount % scale;
            format!(
                "{}.{:0width$} {}",
                whole,
                fraction,
                self.symbol,
                width = usize::from(decimals)
            )
        }
    }
}

/// Group digits in threes: 1234567 -> "1,234,567".
fn with_separators(value: u64) -> String {
    let digits = value.to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped.chars().rev().collect()
}
