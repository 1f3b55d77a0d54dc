//! Currency metadata and display preferences.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol and minor-unit exponent, if the code is known.
    pub fn info(&self) -> Option<CurrencyInfo> {
        currency_info(self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    /// Number of minor-unit digits (2 for cents, 0 for yen).
    pub exponent: u32,
}

/// Minor-unit exponent assumed for codes missing from the table.
pub const DEFAULT_EXPONENT: u32 = 2;

pub fn currency_info(code: &str) -> Option<CurrencyInfo> {
    let (symbol, exponent) = match code {
        "USD" => ("$", 2),
        "EUR" => ("€", 2),
        "GBP" => ("£", 2),
        "NGN" => ("₦", 2),
        "GHS" => ("GH₵", 2),
        "KES" => ("KSh", 2),
        "ZAR" => ("R", 2),
        "INR" => ("₹", 2),
        "JPY" => ("¥", 0),
        "CAD" => ("CA$", 2),
        "AUD" => ("A$", 2),
        "CHF" => ("CHF", 2),
        "KWD" => ("KWD", 3),
        "BHD" => ("BHD", 3),
        _ => return None,
    };
    Some(CurrencyInfo { symbol, exponent })
}

/// Locale-aware number separators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatOptions {
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default)]
    pub negative_style: NegativeStyle,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
    SymbolAndCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_normalizes_case() {
        assert_eq!(CurrencyCode::new(" ngn ").as_str(), "NGN");
    }

    #[test]
    fn known_codes_carry_exponents() {
        assert_eq!(currency_info("JPY").map(|info| info.exponent), Some(0));
        assert_eq!(currency_info("KWD").map(|info| info.exponent), Some(3));
        assert_eq!(currency_info("XYZ"), None);
    }
}
