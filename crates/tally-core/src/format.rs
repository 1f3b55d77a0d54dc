//! Presentation formatting for money and dates.
//!
//! Amounts stay integers in minor units everywhere else; this is the only place
//! they become major-unit strings, and the split uses integer division.

use chrono::NaiveDate;
use tracing::debug;

use tally_domain::{
    CurrencyCode, CurrencyDisplay, FormatOptions, LocaleConfig, NegativeStyle, DEFAULT_EXPONENT,
};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: i64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Locale-driven formatter covering the built-in currency table.
#[derive(Debug, Clone, Default)]
pub struct StandardCurrencyFormatter {
    pub locale: LocaleConfig,
    pub options: FormatOptions,
}

impl StandardCurrencyFormatter {
    pub fn new(locale: LocaleConfig, options: FormatOptions) -> Self {
        Self { locale, options }
    }
}

impl CurrencyFormatter for StandardCurrencyFormatter {
    fn format_amount(&self, amount: i64, currency: &str) -> String {
        let code = CurrencyCode::new(currency);
        let Some(info) = code.info() else {
            debug!(currency = code.as_str(), "unknown currency; formatting without symbol");
            let body = format_minor_units(amount.unsigned_abs(), DEFAULT_EXPONENT, &self.locale);
            return apply_sign(amount < 0, body, self.options.negative_style);
        };

        let body = format_minor_units(amount.unsigned_abs(), info.exponent, &self.locale);
        let symbol = if info.symbol.chars().all(|ch| ch.is_ascii_alphabetic()) {
            format!("{} ", info.symbol)
        } else {
            info.symbol.to_string()
        };
        let decorated = match self.options.currency_display {
            CurrencyDisplay::Symbol => format!("{symbol}{body}"),
            CurrencyDisplay::Code => format!("{} {body}", code.as_str()),
            CurrencyDisplay::SymbolAndCode => format!("{symbol}{body} {}", code.as_str()),
        };
        apply_sign(amount < 0, decorated, self.options.negative_style)
    }
}

/// Formats with the default locale and options.
pub fn format(amount: i64, currency: &str) -> String {
    StandardCurrencyFormatter::default().format_amount(amount, currency)
}

/// ISO 8601 calendar dates (`2024-06-01`).
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Renders an unsigned minor-unit amount as grouped major units with `exponent` decimals.
pub fn format_minor_units(amount: u64, exponent: u32, locale: &LocaleConfig) -> String {
    let factor = 10u64.pow(exponent);
    let major = group_digits(&(amount / factor).to_string(), locale.grouping_separator);
    if exponent == 0 {
        return major;
    }
    format!(
        "{}{}{:0width$}",
        major,
        locale.decimal_separator,
        amount % factor,
        width = exponent as usize
    )
}

fn apply_sign(negative: bool, body: String, style: NegativeStyle) -> String {
    match (negative, style) {
        (false, _) => body,
        (true, NegativeStyle::Sign) => format!("-{body}"),
        (true, NegativeStyle::Parentheses) => format!("({body})"),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_usd_with_grouping() {
        assert_eq!(format(123_456_789, "USD"), "$1,234,567.89");
        assert_eq!(format(5, "usd"), "$0.05");
        assert_eq!(format(0, "USD"), "$0.00");
    }

    #[test]
    fn respects_currency_exponent() {
        assert_eq!(format(1_500, "JPY"), "¥1,500");
        assert_eq!(format(1_234, "KWD"), "KWD 1.234");
        assert_eq!(format(250_000, "NGN"), "₦2,500.00");
    }

    #[test]
    fn unknown_currency_is_symbol_less() {
        assert_eq!(format(-123_456, "XYZ"), "-1,234.56");
        assert_eq!(format(99, ""), "0.99");
    }

    #[test]
    fn negative_styles() {
        assert_eq!(format(-4_000, "USD"), "-$40.00");
        let formatter = StandardCurrencyFormatter::new(
            LocaleConfig {
                language_tag: "fr-FR".into(),
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            FormatOptions {
                currency_display: CurrencyDisplay::SymbolAndCode,
                negative_style: NegativeStyle::Parentheses,
            },
        );
        assert_eq!(formatter.format_amount(-123_450, "EUR"), "(€1 234,50 EUR)");
    }

    #[test]
    fn code_display_and_extremes() {
        let formatter = StandardCurrencyFormatter::new(
            LocaleConfig::default(),
            FormatOptions {
                currency_display: CurrencyDisplay::Code,
                negative_style: NegativeStyle::Sign,
            },
        );
        assert_eq!(formatter.format_amount(100, "GBP"), "GBP 1.00");
        assert_eq!(
            format(i64::MIN, "USD"),
            "-$92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn iso_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(IsoDateFormatter.format_date(date), "2024-06-01");
    }
}
