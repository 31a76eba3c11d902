//! printf-style `%g` rendering for summary values.
//!
//! Reports are compared against summaries produced by other tooling, so
//! numbers follow C's `%g` exactly: six significant digits, trailing zeros
//! removed, and scientific notation when the decimal exponent is below -4 or
//! at least the precision.

/// Significant digits of `%g` without an explicit precision.
const PRECISION: i32 = 6;

/// Fractional digits of the mantissa in scientific form (`PRECISION - 1`).
const MANTISSA_DECIMALS: usize = 5;

/// Format `value` the way C's `printf("%g", value)` does.
///
/// ```
/// use dump_summary::analysis::format_g;
///
/// assert_eq!(format_g(2.0), "2");
/// assert_eq!(format_g(0.816_496_580_927_726), "0.816497");
/// assert_eq!(format_g(1_234_567.0), "1.23457e+06");
/// assert_eq!(format_g(0.000_012_5), "1.25e-05");
/// ```
#[must_use]
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent must come from the value already rounded to PRECISION digits
    let scientific = format!("{value:.MANTISSA_DECIMALS$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..PRECISION).contains(&exponent) {
        let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or_default();
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

/// Strip trailing fractional zeros and a dangling decimal point.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
