//! Keyframe sampling for `values`-style animations.
//!
//! N keyframes split one cycle of `dur` seconds into N-1 equal segments. Numeric keyframes are
//! interpolated linearly; anything else snaps to the nearer end of its segment.

/// How many cycles a directive runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Run a fixed number of cycles (always >= 1), then freeze on the last keyframe.
    Count(u32),
    /// Cycle forever.
    Indefinite,
}

impl Default for RepeatPolicy {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl RepeatPolicy {
    /// Parse a `repeatCount` attribute.
    ///
    /// `"indefinite"` cycles forever. Otherwise the leading integer is used (`"2.5"` → 2);
    /// absent, zero, negative or unparsable counts fall back to a single cycle.
    pub fn parse(attr: Option<&str>) -> Self {
        let Some(text) = attr.map(str::trim) else {
            return Self::default();
        };
        if text == "indefinite" {
            return Self::Indefinite;
        }

        let text = text.strip_prefix('+').unwrap_or(text);
        let digits_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let digits = &text[..digits_end];
        if digits.is_empty() {
            return Self::default();
        }
        let count = digits.parse::<u32>().unwrap_or(u32::MAX);
        Self::Count(count.max(1))
    }
}

/// Linear interpolation: `a + (b - a) * t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Sample a keyframe list at global time `time`.
///
/// - Before `begin` the first keyframe is reported.
/// - After the last cycle ends the last keyframe is reported (freeze at end).
/// - Non-positive or non-finite durations report the first keyframe.
///
/// An empty keyframe list yields an empty string.
pub fn interpolate<S: AsRef<str>>(
    values: &[S],
    dur: f64,
    begin: f64,
    time: f64,
    repeat: RepeatPolicy,
) -> String {
    let (Some(first), Some(last)) = (values.first(), values.last()) else {
        return String::new();
    };
    let first = first.as_ref();
    let last = last.as_ref();

    let elapsed = time - begin;
    if !(dur.is_finite() && dur > 0.0) || elapsed.is_nan() || elapsed < 0.0 {
        return first.to_owned();
    }

    let effective = match repeat {
        RepeatPolicy::Indefinite => elapsed % dur,
        RepeatPolicy::Count(n) if n > 1 => {
            if elapsed > dur * f64::from(n) {
                return last.to_owned();
            }
            elapsed % dur
        }
        RepeatPolicy::Count(_) => {
            if elapsed > dur {
                return last.to_owned();
            }
            elapsed
        }
    };

    let segment_count = values.len() - 1;
    let segment = (effective / dur) * segment_count as f64;
    let segment_index = segment.floor();
    let segment_progress = segment - segment_index;

    // Also catches progress == 1.0 and float overshoot just below it.
    if segment_index >= segment_count as f64 {
        return last.to_owned();
    }

    let idx = segment_index as usize;
    interpolate_pair(values[idx].as_ref(), values[idx + 1].as_ref(), segment_progress)
}

fn interpolate_pair(from: &str, to: &str, t: f64) -> String {
    if let (Some(a), Some(b)) = (parse_number(from), parse_number(to)) {
        return format_number(lerp(a, b, t));
    }

    if let (Some(a), Some(b)) = (parse_number_list(from), parse_number_list(to))
        && a.len() == b.len()
    {
        let sep = if from.contains(',') { "," } else { " " };
        return a
            .iter()
            .zip(&b)
            .map(|(a, b)| format_number(lerp(*a, *b, t)))
            .collect::<Vec<_>>()
            .join(sep);
    }

    if t < 0.5 { from } else { to }.to_owned()
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_number_list(text: &str) -> Option<Vec<f64>> {
    let items = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(parse_number)
        .collect::<Option<Vec<_>>>()?;
    if items.is_empty() { None } else { Some(items) }
}

/// Shortest round-trip formatting; negative zero prints as `0`.
pub(crate) fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{v}")
}

#[cfg(test)]
#[path = "../../tests/unit/smil/interp.rs"]
mod tests;
