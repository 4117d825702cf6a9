/// Number of fractional digits written before trailing zeros are trimmed.
pub const FRACTION_DIGITS: usize = 16;

/// Returns `true` if `value` is finite and has no fractional part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Renders a number the way the language displays and compares it.
///
/// Integral values are written without a decimal point. Every other finite
/// value is written with [`FRACTION_DIGITS`] fractional digits and cut after
/// the last non-zero one, so binary rounding shows through: `-1.000001`
/// renders as `-1.0000009999999999`. Negative zero renders as `0`, and
/// non-finite values as `inf`, `-inf` or `NaN`.
///
/// ## Example
/// ```
/// use setlang::util::num::render_number;
///
/// assert_eq!(render_number(15.0), "15");
/// assert_eq!(render_number(-2.0), "-2");
/// assert_eq!(render_number(2.5), "2.5");
/// assert_eq!(render_number(1.0 / 3.0), "0.3333333333333333");
/// assert_eq!(render_number(-1.000001), "-1.0000009999999999");
/// assert_eq!(render_number(1.0 / 0.0), "inf");
/// ```
#[must_use]
pub fn render_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if is_integral(value) {
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.prec$}", prec = FRACTION_DIGITS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    // Values smaller than the last written digit trim down to a signed zero.
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}
