// Domain models - Core types and data structures

use serde::Deserialize;
use std::fmt;

use crate::utils::time::{format_time_code, ZERO_TIME_CODE};

/// Default output file for video-producing operations
pub const DEFAULT_OUTPUT_VIDEO: &str = "video.mp4";

/// Default output file for audio-producing operations
pub const DEFAULT_OUTPUT_AUDIO: &str = "audio.mp3";

/// Sentinel the prober uses for an unknown duration
pub const DURATION_UNAVAILABLE: &str = "N/A";

/// Kind of file an operation writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Video,
    Audio,
}

impl OutputKind {
    /// Built-in output path used when neither config nor `--output` names one
    pub fn default_path(self) -> &'static str {
        match self {
            OutputKind::Video => DEFAULT_OUTPUT_VIDEO,
            OutputKind::Audio => DEFAULT_OUTPUT_AUDIO,
        }
    }
}

/// Operation descriptor: every subcommand the tool knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Clip,
    ToMp4,
    ExtractAudio,
    RemoveAudio,
    ImageToVideo,
    AudioToVideo,
    Loop,
    Reverse,
    Scale,
    Resize,
    SetFps,
    Speed,
    SpeedVideo,
    SpeedAudio,
    Grayscale,
    Invert,
    Contrast,
}

impl OperationKind {
    pub const ALL: [OperationKind; 17] = [
        OperationKind::Clip,
        OperationKind::ToMp4,
        OperationKind::ExtractAudio,
        OperationKind::RemoveAudio,
        OperationKind::ImageToVideo,
        OperationKind::AudioToVideo,
        OperationKind::Loop,
        OperationKind::Reverse,
        OperationKind::Scale,
        OperationKind::Resize,
        OperationKind::SetFps,
        OperationKind::Speed,
        OperationKind::SpeedVideo,
        OperationKind::SpeedAudio,
        OperationKind::Grayscale,
        OperationKind::Invert,
        OperationKind::Contrast,
    ];

    /// Subcommand name as typed on the command line
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Clip => "clip",
            OperationKind::ToMp4 => "toMp4",
            OperationKind::ExtractAudio => "audio",
            OperationKind::RemoveAudio => "noaudio",
            OperationKind::ImageToVideo => "imgtovideo",
            OperationKind::AudioToVideo => "audiotovideo",
            OperationKind::Loop => "loop",
            OperationKind::Reverse => "reverse",
            OperationKind::Scale => "scale",
            OperationKind::Resize => "resize",
            OperationKind::SetFps => "fps",
            OperationKind::Speed => "speed",
            OperationKind::SpeedVideo => "speedvideo",
            OperationKind::SpeedAudio => "speedaudio",
            OperationKind::Grayscale => "grayscale",
            OperationKind::Invert => "invert",
            OperationKind::Contrast => "contrast",
        }
    }

    pub fn output_kind(self) -> OutputKind {
        match self {
            OperationKind::ExtractAudio | OperationKind::SpeedAudio => OutputKind::Audio,
            _ => OutputKind::Video,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Start/end markers as supplied by the user, before probing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeMarkers {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl TimeMarkers {
    /// Empty strings count as absent markers
    pub fn new(from: Option<String>, to: Option<String>) -> Self {
        Self {
            from: from.filter(|s| !s.trim().is_empty()),
            to: to.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Effective time range handed to the command builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Whole-file bounds derived from a probed duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDuration {
    pub start_time: String,
    pub end_time: String,
}

impl MediaDuration {
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            start_time: ZERO_TIME_CODE.to_string(),
            end_time: format_time_code(seconds),
        }
    }

    /// Fill the missing markers from the whole-file bounds
    pub fn apply(self, markers: &TimeMarkers) -> TimeRange {
        TimeRange {
            from: markers.from.clone().unwrap_or(self.start_time),
            to: markers.to.clone().unwrap_or(self.end_time),
        }
    }
}

/// Subset of the prober's `-show_format -show_streams` JSON that we read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeReport {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
    #[serde(default)]
    pub format: ProbeFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub codec_type: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    #[serde(default)]
    pub format_name: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl ProbeReport {
    /// Duration in seconds: first stream if it carries a usable value,
    /// otherwise the container-level field.
    pub fn duration_seconds(&self) -> Option<f64> {
        self.streams
            .first()
            .and_then(|stream| parse_duration_field(stream.duration.as_deref()))
            .or_else(|| parse_duration_field(self.format.duration.as_deref()))
    }
}

fn parse_duration_field(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.is_empty() || value == DURATION_UNAVAILABLE {
        return None;
    }
    value.parse::<f64>().ok().filter(|secs| secs.is_finite())
}

/// Typed parameters for one invocation.
///
/// Time-range-aware variants carry `R`: [`TimeMarkers`] as parsed from the
/// command line, [`TimeRange`] once resolved. Only `Operation<TimeRange>` can
/// be turned into a command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<R = TimeRange> {
    Clip { input: String, range: R },
    ToMp4 { input: String },
    ExtractAudio { input: String, range: R },
    RemoveAudio { input: String, range: R },
    ImageToVideo { image: String, audio: String },
    AudioToVideo { audio: String, video: String },
    Loop { input: String, loops: i64 },
    Reverse { input: String },
    Scale { input: String, width: i64 },
    Resize { input: String, width: i64, height: i64 },
    SetFps { input: String, fps: f64 },
    Speed { input: String, speed: f64 },
    SpeedVideo { input: String, speed: f64 },
    SpeedAudio { input: String, speed: f64 },
    Grayscale { input: String },
    Invert { input: String },
    Contrast { input: String },
}

impl<R> Operation<R> {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Clip { .. } => OperationKind::Clip,
            Operation::ToMp4 { .. } => OperationKind::ToMp4,
            Operation::ExtractAudio { .. } => OperationKind::ExtractAudio,
            Operation::RemoveAudio { .. } => OperationKind::RemoveAudio,
            Operation::ImageToVideo { .. } => OperationKind::ImageToVideo,
            Operation::AudioToVideo { .. } => OperationKind::AudioToVideo,
            Operation::Loop { .. } => OperationKind::Loop,
            Operation::Reverse { .. } => OperationKind::Reverse,
            Operation::Scale { .. } => OperationKind::Scale,
            Operation::Resize { .. } => OperationKind::Resize,
            Operation::SetFps { .. } => OperationKind::SetFps,
            Operation::Speed { .. } => OperationKind::Speed,
            Operation::SpeedVideo { .. } => OperationKind::SpeedVideo,
            Operation::SpeedAudio { .. } => OperationKind::SpeedAudio,
            Operation::Grayscale { .. } => OperationKind::Grayscale,
            Operation::Invert { .. } => OperationKind::Invert,
            Operation::Contrast { .. } => OperationKind::Contrast,
        }
    }

    /// The file the operation reads first (the image for `imgtovideo`,
    /// the audio for `audiotovideo`)
    pub fn primary_input(&self) -> &str {
        match self {
            Operation::ImageToVideo { image, .. } => image,
            Operation::AudioToVideo { audio, .. } => audio,
            Operation::Clip { input, .. }
            | Operation::ToMp4 { input }
            | Operation::ExtractAudio { input, .. }
            | Operation::RemoveAudio { input, .. }
            | Operation::Loop { input, .. }
            | Operation::Reverse { input }
            | Operation::Scale { input, .. }
            | Operation::Resize { input, .. }
            | Operation::SetFps { input, .. }
            | Operation::Speed { input, .. }
            | Operation::SpeedVideo { input, .. }
            | Operation::SpeedAudio { input, .. }
            | Operation::Grayscale { input }
            | Operation::Invert { input }
            | Operation::Contrast { input } => input,
        }
    }

    pub fn range(&self) -> Option<&R> {
        match self {
            Operation::Clip { range, .. }
            | Operation::ExtractAudio { range, .. }
            | Operation::RemoveAudio { range, .. } => Some(range),
            _ => None,
        }
    }
}
