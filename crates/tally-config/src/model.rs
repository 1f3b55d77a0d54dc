use serde::{Deserialize, Serialize};

use tally_domain::{CurrencyCode, CurrencyDisplay, FormatOptions, LocaleConfig, NegativeStyle};

/// Stores display and logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "Config::default_grouping_separator")]
    pub grouping_separator: char,
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default)]
    pub negative_style: NegativeStyle,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            decimal_separator: Self::default_decimal_separator(),
            grouping_separator: Self::default_grouping_separator(),
            currency_display: CurrencyDisplay::default(),
            negative_style: NegativeStyle::default(),
            log_filter: Self::default_log_filter(),
        }
    }
}

impl Config {
    pub fn default_decimal_separator() -> char {
        '.'
    }

    pub fn default_grouping_separator() -> char {
        ','
    }

    pub fn default_log_filter() -> String {
        "tally=info".into()
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            language_tag: self.locale.clone(),
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            currency_display: self.currency_display,
            negative_style: self.negative_style,
        }
    }
}
