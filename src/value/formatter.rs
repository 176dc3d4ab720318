use super::GrinValue;

/// Formats a float the way Grin prints it: always with a fractional part or
/// an exponent, and with a signed two-digit exponent (`1e+16`, `2.5e-07`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }

    // Debug gives the shortest round-trip representation and switches to
    // scientific notation at the same thresholds, only the exponent differs.
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

pub fn format_verbose(value: &GrinValue) -> String {
    match value {
        GrinValue::Integer(v) => format!("Integer({v})"),
        GrinValue::Float(v) => format!("Float({})", format_float(*v)),
        GrinValue::String(v) => format!("String(\"{v}\")"),
    }
}
