use crate::currency::CurrencyFormatter;

use super::model::AmountSpec;

/// Representative signed amount of a schedule plus whether it is an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedAmount {
    pub amount: i64,
    pub is_approx: bool,
}

/// Reduces an amount specification to a single representative value.
pub trait AmountResolver: Send + Sync {
    fn resolve(&self, spec: Option<&AmountSpec>) -> ResolvedAmount;
}

/// Default resolver: ranges resolve to their midpoint rounded half up,
/// a missing amount resolves to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointResolver;

impl AmountResolver for MidpointResolver {
    fn resolve(&self, spec: Option<&AmountSpec>) -> ResolvedAmount {
        match spec {
            None => ResolvedAmount::default(),
            Some(AmountSpec::Fixed(amount)) => ResolvedAmount {
                amount: *amount,
                is_approx: false,
            },
            Some(AmountSpec::Approximately(amount)) => ResolvedAmount {
                amount: *amount,
                is_approx: true,
            },
            Some(AmountSpec::Between { num1, num2 }) => ResolvedAmount {
                amount: midpoint_half_up(*num1, *num2),
                is_approx: true,
            },
        }
    }
}

fn midpoint_half_up(a: i64, b: i64) -> i64 {
    let sum = a as i128 + b as i128;
    // floor((sum + 1) / 2) rounds .5 towards positive infinity
    (sum + 1).div_euclid(2) as i64
}

/// Signed text used when searching: `~` for estimates, `+` for income,
/// never a minus sign.
pub fn search_amount_text(resolved: ResolvedAmount, currency: &dyn CurrencyFormatter) -> String {
    let mut text = String::new();
    if resolved.is_approx {
        text.push('~');
    }
    if resolved.amount > 0 {
        text.push('+');
    }
    text.push_str(&currency.format_minor_units(resolved.amount));
    text
}

/// Rendered amount cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountDisplay {
    pub amount: i64,
    pub text: String,
    /// Hover text, prefixed with `Approximately ` for estimates.
    pub title: String,
    pub is_approx: bool,
    pub highlight_expense: bool,
}

impl AmountDisplay {
    pub fn new(
        amount: i64,
        is_approx: bool,
        highlight_expense: bool,
        currency: &dyn CurrencyFormatter,
    ) -> Self {
        let magnitude = currency.format_minor_units(amount);
        let text = if amount > 0 {
            format!("+{}", magnitude)
        } else if highlight_expense && amount < 0 {
            format!("-{}", magnitude)
        } else {
            magnitude.clone()
        };
        let title = if is_approx {
            format!("Approximately {}", magnitude)
        } else {
            magnitude
        };
        Self {
            amount,
            text,
            title,
            is_approx,
            highlight_expense,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0
    }
}
