use serde::{Deserialize, Serialize};

/// Number of minor units per major unit; amounts are stored in cents.
const MINOR_UNIT_DIGITS: u32 = 2;

/// Locale-aware number formatting preferences.
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

/// Formats an integer amount of minor units for display.
///
/// Implementations render the magnitude only. Sign and approximation markers
/// are composed by the caller.
pub trait CurrencyFormatter: Send + Sync {
    fn format_minor_units(&self, amount: i64) -> String;
}

/// Default [`CurrencyFormatter`] driven by a [`LocaleConfig`].
#[derive(Debug, Clone, Default)]
pub struct LocaleCurrencyFormatter {
    pub locale: LocaleConfig,
}

impl LocaleCurrencyFormatter {
    pub fn new(locale: LocaleConfig) -> Self {
        Self { locale }
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format_minor_units(&self, amount: i64) -> String {
        integer_to_currency(&self.locale, amount)
    }
}

/// Renders `|amount|` minor units as `1,234.56` using the locale separators.
pub fn integer_to_currency(locale: &LocaleConfig, amount: i64) -> String {
    let magnitude = amount.unsigned_abs();
    let scale = 10u64.pow(MINOR_UNIT_DIGITS);
    let major = magnitude / scale;
    let minor = magnitude % scale;
    let grouped = group_digits(&major.to_string(), locale.grouping_separator);
    format!(
        "{}{}{:0width$}",
        grouped,
        locale.decimal_separator,
        minor,
        width = MINOR_UNIT_DIGITS as usize
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_grouping() {
        let locale = LocaleConfig::default();
        assert_eq!(integer_to_currency(&locale, 123456789), "1,234,567.89");
        assert_eq!(integer_to_currency(&locale, 5), "0.05");
        assert_eq!(integer_to_currency(&locale, 0), "0.00");
    }

    #[test]
    fn drops_sign() {
        let locale = LocaleConfig::default();
        assert_eq!(integer_to_currency(&locale, -50000), "500.00");
    }

    #[test]
    fn honours_locale_separators() {
        let locale = LocaleConfig {
            language_tag: "de-DE".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(integer_to_currency(&locale, 123450), "1.234,50");
    }
}
