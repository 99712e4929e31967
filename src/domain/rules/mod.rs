// Domain rules - Parameter validation applied before anything is probed or run

use crate::domain::commands::stretch_factor;
use crate::domain::model::{Operation, TimeMarkers};
use crate::error::{FfShortError, FfShortResult};
use crate::utils::time::parse_time_code;

/// Largest speed whose stretch factor does not round to zero
pub const MAX_VIDEO_SPEED: f64 = 200.0;

/// Validation for user-supplied operation parameters
pub struct ParameterValidator;

impl ParameterValidator {
    /// Reject parameters the external tool would choke on
    pub fn validate(operation: &Operation<TimeMarkers>) -> FfShortResult<()> {
        match operation {
            Operation::Clip { range, .. }
            | Operation::ExtractAudio { range, .. }
            | Operation::RemoveAudio { range, .. } => Self::validate_markers(range),
            Operation::Loop { loops, .. } => Self::validate_loops(*loops),
            Operation::Scale { width, .. } => Self::validate_dimension("Width", *width),
            Operation::Resize { width, height, .. } => {
                Self::validate_dimension("Width", *width)?;
                Self::validate_dimension("Height", *height)
            }
            Operation::SetFps { fps, .. } => Self::validate_positive("Frames per second", *fps),
            Operation::Speed { speed, .. } | Operation::SpeedVideo { speed, .. } => {
                Self::validate_positive("Speed", *speed)?;
                Self::validate_video_speed(*speed)
            }
            Operation::SpeedAudio { speed, .. } => Self::validate_positive("Speed", *speed),
            _ => Ok(()),
        }
    }

    pub fn validate_loops(loops: i64) -> FfShortResult<()> {
        if loops < 1 {
            return Err(FfShortError::invalid_parameter("Number of loops must be > 0"));
        }
        Ok(())
    }

    fn validate_dimension(name: &str, value: i64) -> FfShortResult<()> {
        if value < 1 {
            return Err(FfShortError::invalid_parameter(format!(
                "{} must be > 0",
                name
            )));
        }
        Ok(())
    }

    fn validate_positive(name: &str, value: f64) -> FfShortResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(FfShortError::invalid_parameter(format!(
                "{} must be a number > 0",
                name
            )));
        }
        Ok(())
    }

    /// `setpts` needs a stretch factor that survives rounding to two decimals
    fn validate_video_speed(speed: f64) -> FfShortResult<()> {
        let factor = stretch_factor(speed);
        if !factor.is_finite() || factor <= 0.0 {
            return Err(FfShortError::invalid_parameter(format!(
                "Speed {} is out of range for video (at most {})",
                speed, MAX_VIDEO_SPEED
            )));
        }
        Ok(())
    }

    /// Markers must look like durations; when both are given `from` must come first
    pub fn validate_markers(markers: &TimeMarkers) -> FfShortResult<()> {
        let from = markers.from.as_deref().map(parse_time_code).transpose()?;
        let to = markers.to.as_deref().map(parse_time_code).transpose()?;

        if let (Some(from), Some(to)) = (from, to) {
            if from >= to {
                return Err(FfShortError::invalid_parameter(format!(
                    "Start time ({}) must be before end time ({})",
                    markers.from.as_deref().unwrap_or_default(),
                    markers.to.as_deref().unwrap_or_default()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
