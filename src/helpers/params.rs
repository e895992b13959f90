use std::str::FromStr;

/// Value of the first occurrence of `key` in a decoded query string. Later repeats
/// of the same key are ignored.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Parses an optional query value, falling back to `default` when it is missing,
/// blank or malformed. Query parameters are never rejected.
pub fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Like [`parse_or`] but only accepts finite floats.
pub fn parse_finite_or(value: Option<&str>, default: f64) -> f64 {
    let parsed = parse_or(value, default);
    if parsed.is_finite() {
        parsed
    } else {
        default
    }
}

/// Leading signed integer of a value, ignoring whatever follows the digits
/// (`"1500.7"` -> 1500, `"1e3"` -> 1). `None` when there are no leading digits.
pub fn parse_leading_i64(value: Option<&str>) -> Option<i64> {
    let value = value?.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading unsigned integer of a value, ignoring anything after the digits
/// (`"5+"` -> 5). `None` when the value does not start with a digit.
pub fn parse_leading_u64(value: Option<&str>) -> Option<u64> {
    let value = value?.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Optional filter value: `None` when missing, blank or malformed.
pub fn parse_opt<T: FromStr>(value: Option<&str>) -> Option<T> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}
