//! Display helpers for currency and plain numbers
//!
//! Presentation-only: nothing here feeds back into a computed field. The
//! display style is passed in explicitly, there is no process-wide locale.

/// Number display style
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    /// Prefix for currency amounts
    pub currency_symbol: String,
    /// Separator between groups of three integer digits
    pub grouping_separator: char,
}

impl NumberFormat {
    /// US English style: `$` prefix, comma grouping
    pub fn en_us() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            grouping_separator: ',',
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Whole-unit currency with grouping and no decimals, e.g. `$1,234,568`
///
/// Halves round away from zero. Negative amounts render as `-$1,235`.
/// Amounts that round to zero always render unsigned (`$0`, never `-$0`),
/// and non-finite values render without the currency symbol (`NaN`, `∞`, `-∞`).
pub fn format_currency(value: f64, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        format.currency_symbol,
        group_digits(rounded.abs(), format.grouping_separator)
    )
}

/// Nearest integer with grouping, e.g. `12,346`
///
/// Halves round up towards positive infinity (-2.5 renders as `-2`).
/// Values that round to zero render unsigned (`-0.4` renders as `0`, not `-0`).
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_digits(rounded.abs(), format.grouping_separator))
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Group the digits of a non-negative whole number
fn group_digits(whole: f64, separator: char) -> String {
    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}
