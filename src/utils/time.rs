//! Time code parsing and formatting utilities

use crate::error::{FfShortError, FfShortResult};

/// Start of every file
pub const ZERO_TIME_CODE: &str = "00:00:00";

/// Format elapsed seconds as `HH:MM:SS`.
///
/// Fractions are truncated and hours never wrap. Negative and non-finite
/// values format as [`ZERO_TIME_CODE`].
pub fn format_time_code(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return ZERO_TIME_CODE.to_string();
    }

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Parse a time marker the way ffmpeg accepts durations:
/// `SS[.ms]`, `MM:SS[.ms]` or `HH:MM:SS[.ms]`, or a plain number with an
/// `s`, `ms` or `us` unit suffix. Returns seconds.
pub fn parse_time_code(time_str: &str) -> FfShortResult<f64> {
    let trimmed = time_str.trim();
    let invalid = || {
        FfShortError::invalid_parameter(format!(
            "Invalid time '{}'. Expected HH:MM:SS, MM:SS or seconds",
            time_str
        ))
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if !trimmed.contains(':') {
        let (number, divisor) = split_unit_suffix(trimmed);
        return parse_field(number, true)
            .map(|value| value / divisor)
            .ok_or_else(invalid);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }

    // Only the trailing seconds field may carry a fraction
    let (whole, last) = parts.split_at(parts.len() - 1);
    let seconds: f64 = parse_field(last[0], true).ok_or_else(invalid)?;
    if !whole.is_empty() && seconds >= 60.0 {
        return Err(invalid());
    }

    let mut total = seconds;
    let mut scale = 60.0;
    for (position, field) in whole.iter().rev().enumerate() {
        let value = parse_field(field, false).ok_or_else(invalid)?;
        // Minutes are bounded when an hours field is present
        if position == 0 && whole.len() == 2 && value >= 60.0 {
            return Err(invalid());
        }
        total += value * scale;
        scale *= 60.0;
    }

    Ok(total)
}

/// `500ms` -> (`500`, 1000)
fn split_unit_suffix(value: &str) -> (&str, f64) {
    if let Some(number) = value.strip_suffix("ms") {
        (number, 1_000.0)
    } else if let Some(number) = value.strip_suffix("us") {
        (number, 1_000_000.0)
    } else if let Some(number) = value.strip_suffix('s') {
        (number, 1.0)
    } else {
        (value, 1.0)
    }
}

fn parse_field(field: &str, allow_fraction: bool) -> Option<f64> {
    if field.is_empty() {
        return None;
    }
    let valid_chars = field
        .chars()
        .all(|c| c.is_ascii_digit() || (allow_fraction && c == '.'));
    if !valid_chars {
        return None;
    }
    field.parse::<f64>().ok()
}
