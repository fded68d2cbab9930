//! Parsing of the short identifier path segment.

/// Parses a short identifier from a path segment.
///
/// Leading ASCII whitespace is skipped and an optional `+` or `-` sign is
/// accepted. The leading run of decimal digits is the identifier; anything
/// after it is ignored, so `"12abc"` parses as `12`.
///
/// Values beyond the `i64` range saturate to `i64::MAX` or `i64::MIN`, so
/// they look up an identifier that allocation never reaches.
///
/// Returns `None` when there are no digits.
pub fn parse_short_url(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse()
    } else {
        digits.parse()
    };

    // Only overflow can fail past this point.
    Some(parsed.unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}
