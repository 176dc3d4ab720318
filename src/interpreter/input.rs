use crate::value::error::RuntimeErrorKind;
use crate::value::GrinValue;

/// Parses a line typed in response to `INNUM`.
///
/// Accepts an optional leading `-`, at least one digit and at most one `.`
/// followed by more digits. A trailing `.` on its own reads as `.0`.
/// Surrounding whitespace is ignored; anything else is rejected.
pub fn parse_numeric_input(text: &str) -> Result<GrinValue, RuntimeErrorKind> {
    let trimmed = text.trim();
    let invalid = || RuntimeErrorKind::InvalidNumericInput(trimmed.into());
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    if whole.is_empty() || !is_digits(whole) {
        return Err(invalid());
    }

    match fraction {
        None => trimmed
            .parse::<i64>()
            .map(GrinValue::Integer)
            .map_err(|_| invalid()),
        Some(fraction) if is_digits(fraction) => trimmed
            .parse::<f64>()
            .map(GrinValue::Float)
            .map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
