//! Command-line argument definitions

use clap::Args;
use std::path::PathBuf;

use crate::domain::commands::{DEFAULT_FPS, DEFAULT_LOOPS, DEFAULT_SPEED};

/// Options accepted before or after any subcommand
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Output file path (default: video.mp4 or audio.mp3)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Display the full error message on failure
    #[arg(short, long, global = true)]
    pub error: bool,

    /// Replace the output file if it already exists
    #[arg(long, global = true)]
    pub overwrite: bool,

    /// Print the ffmpeg command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Configuration file (default: ./ffshort.toml when present)
    #[arg(long, global = true, env = "FFSHORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "FFSHORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Path to the ffmpeg binary
    #[arg(long, global = true, env = "FFSHORT_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Path to the ffprobe binary
    #[arg(long, global = true, env = "FFSHORT_FFPROBE")]
    pub ffprobe: Option<String>,

    /// Kill ffmpeg after this many seconds
    #[arg(long, global = true, env = "FFSHORT_TIMEOUT")]
    pub timeout: Option<u64>,
}

/// A single input file
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file path
    pub file: String,
}

/// An input file with an optional time range
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Input video file path
    pub file: String,

    /// Start time (HH:MM:SS, default: start of file)
    pub from: Option<String>,

    /// End time (HH:MM:SS, default: end of file)
    pub to: Option<String>,
}

/// Arguments for the imgtovideo command
#[derive(Args, Debug)]
pub struct ImageAudioArgs {
    /// Still image file path
    pub image: String,

    /// Audio file path
    pub audio: String,
}

/// Arguments for the audiotovideo command
#[derive(Args, Debug)]
pub struct AudioVideoArgs {
    /// Audio file path
    pub audio: String,

    /// Video file path
    pub video: String,
}

/// Arguments for the loop command
#[derive(Args, Debug)]
pub struct LoopArgs {
    /// Input video file path
    pub file: String,

    /// Number of loops (must be > 0)
    #[arg(default_value_t = DEFAULT_LOOPS, allow_negative_numbers = true)]
    pub loops: i64,
}

/// Arguments for the scale command
#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Input video file path
    pub file: String,

    /// Target width in pixels; height follows the aspect ratio
    #[arg(allow_negative_numbers = true)]
    pub width: i64,
}

/// Arguments for the resize command
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Input video file path
    pub file: String,

    /// Width in pixels
    #[arg(allow_negative_numbers = true)]
    pub width: i64,

    /// Height in pixels
    #[arg(allow_negative_numbers = true)]
    pub height: i64,
}

/// Arguments for the fps command
#[derive(Args, Debug)]
pub struct FpsArgs {
    /// Input video file path
    pub file: String,

    /// Frames per second
    #[arg(default_value_t = DEFAULT_FPS, allow_negative_numbers = true)]
    pub fps: f64,
}

/// Arguments for the speed commands
#[derive(Args, Debug)]
pub struct SpeedArgs {
    /// Input file path
    pub file: String,

    /// Speed multiplier (2 = twice as fast)
    #[arg(default_value_t = DEFAULT_SPEED, allow_negative_numbers = true)]
    pub speed: f64,
}
