//! Typed animation parameters.
//!
//! Page content carries animation inputs as raw attribute text (`data-count`,
//! `data-width`, `--angle`). They are parsed once when a component mounts;
//! anything missing or malformed comes back as `None` and the effect that
//! needed it is skipped.

/// Target value of a numeric counter.
pub fn parse_count(raw: &str) -> Option<u32> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<u32>() {
        Ok(count) => Some(count),
        Err(_) => {
            tracing::warn!(raw, "ignoring malformed counter target");
            None
        }
    }
}

/// Target fill of a skill bar, in percent. Values above 100 are clamped.
pub fn parse_percent(raw: &str) -> Option<u8> {
    let value = raw.trim().trim_end_matches('%');
    match value.parse::<f64>() {
        Ok(percent) if percent.is_finite() && percent >= 0.0 => Some(percent.min(100.0).round() as u8),
        _ => {
            tracing::warn!(raw, "ignoring malformed skill width");
            None
        }
    }
}

/// Rotation of a radar axis in degrees, accepting a bare number or a `deg`
/// suffix. Unparseable angles fall back to `0`.
pub fn parse_angle(raw: &str) -> f64 {
    let value = raw.trim().trim_end_matches("deg");
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|angle| angle.is_finite())
        .unwrap_or_else(|| {
            tracing::warn!(raw, "ignoring malformed radar angle");
            0.0
        })
}
