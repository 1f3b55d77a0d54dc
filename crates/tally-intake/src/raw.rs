//! Loosely-typed backend values and their exact conversion into domain values.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use tally_domain::{currency_info, DocumentKind, DEFAULT_EXPONENT};

use crate::IntakeError;

/// How numeric amounts in a payload should be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmountUnits {
    /// Integers already in minor units (`1250` is 12.50).
    #[default]
    Minor,
    /// Decimal major units (`"12.50"` or `12.5` is 1250).
    Major,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeOptions {
    pub amount_units: AmountUnits,
    /// Minor-unit digits used when converting major units.
    pub exponent: u32,
    /// Kind assigned to rows that carry none, for single-kind endpoints.
    pub default_kind: Option<DocumentKind>,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            amount_units: AmountUnits::Minor,
            exponent: DEFAULT_EXPONENT,
            default_kind: None,
        }
    }
}

impl IntakeOptions {
    /// Major-unit amounts scaled by the currency's minor-unit exponent.
    pub fn major_units(currency: &str) -> Self {
        let exponent = currency_info(&currency.trim().to_uppercase())
            .map(|info| info.exponent)
            .unwrap_or(DEFAULT_EXPONENT);
        Self {
            amount_units: AmountUnits::Major,
            exponent,
            default_kind: None,
        }
    }

    pub fn with_default_kind(mut self, kind: DocumentKind) -> Self {
        self.default_kind = Some(kind);
        self
    }

    fn scale(&self) -> u32 {
        match self.amount_units {
            AmountUnits::Minor => 0,
            AmountUnits::Major => self.exponent,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawAmount {
    /// Converts to minor units without passing through floating-point arithmetic.
    pub(crate) fn to_minor_units(&self, options: &IntakeOptions) -> Result<i64, String> {
        let scale = options.scale();
        match self {
            RawAmount::Integer(value) => 10i64
                .checked_pow(scale)
                .and_then(|factor| value.checked_mul(factor))
                .ok_or_else(|| format!("{value} is out of range")),
            RawAmount::Float(value) => {
                if !value.is_finite() {
                    return Err(format!("{value} is not a finite number"));
                }
                parse_decimal(&value.to_string(), scale)
            }
            RawAmount::Text(text) => parse_decimal(text, scale),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub(crate) fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text.trim().to_string(),
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Parses `[-]digits[.digits]` into an integer scaled by `10^scale`.
///
/// Grouping commas are ignored. Fractional digits beyond `scale` are rejected
/// unless they are trailing zeros.
pub(crate) fn parse_decimal(text: &str, scale: u32) -> Result<i64, String> {
    let cleaned: String = text.trim().chars().filter(|ch| *ch != ',').collect();
    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
    };
    let (int_part, raw_frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let frac_part = raw_frac.trim_end_matches('0');
    let is_digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    if (int_part.is_empty() && raw_frac.is_empty()) || !is_digits(int_part) || !is_digits(raw_frac)
    {
        return Err(format!("`{text}` is not a decimal number"));
    }
    if frac_part.len() > scale as usize {
        return Err(format!(
            "`{text}` has more than {scale} decimal place{}",
            if scale == 1 { "" } else { "s" }
        ));
    }

    let out_of_range = || format!("`{text}` is out of range");
    let mut value: i128 = 0;
    for ch in int_part.chars().chain(frac_part.chars()) {
        let digit = i128::from(ch as u8 - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(out_of_range)?;
    }
    let padding = scale - frac_part.len() as u32;
    value = 10i128
        .checked_pow(padding)
        .and_then(|factor| value.checked_mul(factor))
        .ok_or_else(out_of_range)?;
    if negative {
        value = -value;
    }
    i64::try_from(value).map_err(|_| out_of_range())
}

/// Accepts `YYYY-MM-DD`, or a timestamp whose first ten characters are one.
pub(crate) fn parse_date(text: &str) -> Result<NaiveDate, String> {
    let trimmed = text.trim();
    let head = match (trimmed.get(..10), trimmed.as_bytes().get(10)) {
        (Some(head), Some(b'T' | b' ')) => head,
        _ => trimmed,
    };
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .map_err(|err| format!("`{text}` is not a calendar date ({err})"))
}

/// Extracts the row list from a bare array or a `{ "data": [...] }` envelope.
pub(crate) fn rows(json: &str) -> Result<Vec<Value>, IntakeError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(IntakeError::Shape),
        },
        _ => Err(IntakeError::Shape),
    }
}
