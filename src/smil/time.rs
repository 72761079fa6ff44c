//! Clock value parsing for directive `dur` and `begin` attributes.
//!
//! Only plain offsets are understood: `"<number>"`, `"<number>s"` and `"<number>ms"`.
//! Anything else parses to `NaN`, which callers treat as "skip this directive".

/// Parse a duration such as `"2s"`, `"300ms"` or `"1.5"` into seconds.
///
/// A missing suffix means seconds. Malformed input yields `f64::NAN`.
pub fn parse_duration(text: &str) -> f64 {
    let text = text.trim();
    let (number, scale) = if let Some(ms) = text.strip_suffix("ms") {
        (ms, 1000.0)
    } else if let Some(s) = text.strip_suffix('s') {
        (s, 1.0)
    } else {
        (text, 1.0)
    };

    match number.trim_end().parse::<f64>() {
        Ok(v) if v.is_finite() => v / scale,
        _ => f64::NAN,
    }
}

/// Parse a `begin` attribute into a start offset in seconds.
///
/// Absent or empty input means `0`. A semicolon list such as `"0s;3s"` is accepted but only
/// the first entry is honored; later begin instances are not scheduled.
pub fn parse_begin(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };
    match text.split(';').next().map(str::trim) {
        Some(first) if !first.is_empty() => parse_duration(first),
        _ => 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/smil/time.rs"]
mod tests;
