use crate::error::Error;

/// Render a computed value for the display.
///
/// Whole numbers lose their fractional part, everything else keeps the
/// shortest digits that read back to the same `f64`. Very large and very
/// small magnitudes switch to scientific notation.
///
/// # Examples
///
/// ```
/// # use deskcalc::format_result;
/// assert_eq!(format_result(3.0), "3");
/// assert_eq!(format_result(0.25), "0.25");
/// assert_eq!(format_result(1e20), "1.0E20");
/// assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_result(value: f64) -> String {
    // `as` saturates, so anything past the i64 range fails the comparison
    let whole = value as i64;
    if value == whole as f64 {
        return whole.to_string();
    }

    if value.is_nan() {
        return "NaN".into();
    } else if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        value.to_string()
    } else {
        scientific(value)
    }
}

/// `1.5E-5` style, with at least one fractional digit in the mantissa
fn scientific(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => formatted,
    }
}

/// Read the display text back as a number.
///
/// Accepts everything [`format_result`](fn.format_result.html) produces, as
/// well as partially typed operands such as `0.`.
pub fn parse_display(text: &str) -> Result<f64, Error> {
    text.parse::<f64>()
        .map_err(|err| Error::Parse(format!("cannot read '{}' as a number: {}", text, err)))
}
