//! Result formatting

/// Format a value the way it is printed after `Result:`
///
/// With no precision, integral values keep a trailing `.0`, other values use
/// the shortest representation that round-trips, and magnitudes outside
/// `[1e-4, 1e16)` switch to exponent notation with a signed, two-digit
/// exponent (`1e+16`, `1.5e-07`). With a precision, exactly that many
/// fractional digits are printed.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if let Some(precision) = precision {
        return format!("{value:.precision$}");
    }

    // Debug output is shortest round-trip and already uses the same
    // exponent thresholds; only the exponent spelling differs.
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
