//! CLI module for ffshort
//!
//! This module handles command-line argument parsing and command execution.

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};

pub mod args;
pub mod commands;

/// ffshort - short commands for common ffmpeg jobs
///
/// Every subcommand is translated into a single ffmpeg invocation. Time ranges
/// default to the whole file, found by probing its duration.
#[derive(Parser, Debug)]
#[command(name = "ffshort")]
#[command(about = "ffshort - Short, memorable commands for common ffmpeg jobs")]
#[command(version, disable_version_flag = true)]
#[command(long_about = None)]
pub struct Cli {
    /// Display the current version
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(flatten)]
    pub globals: args::GlobalArgs,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clip a video
    Clip(args::RangeArgs),
    /// Convert webm to mp4 file
    #[command(name = "toMp4", alias = "tomp4")]
    ToMp4(args::InputArgs),
    /// Get the audio of a video
    Audio(args::RangeArgs),
    /// Remove the audio of a video
    #[command(name = "noaudio")]
    NoAudio(args::RangeArgs),
    /// Create a video with an image and audio file
    #[command(name = "imgtovideo")]
    ImgToVideo(args::ImageAudioArgs),
    /// Add audio to a video file
    #[command(name = "audiotovideo")]
    AudioToVideo(args::AudioVideoArgs),
    /// Loop a video
    Loop(args::LoopArgs),
    /// Reverse the playback of a video
    Reverse(args::InputArgs),
    /// Scale the size to the given width
    Scale(args::ScaleArgs),
    /// Resize to the given width and height
    Resize(args::ResizeArgs),
    /// Set the no of frames per second
    Fps(args::FpsArgs),
    /// Set the video speed
    Speed(args::SpeedArgs),
    /// Set the speed of videos without audio
    #[command(name = "speedvideo")]
    SpeedVideo(args::SpeedArgs),
    /// Set the speed of an audio file
    #[command(name = "speedaudio")]
    SpeedAudio(args::SpeedArgs),
    /// Convert video to black and white
    Grayscale(args::InputArgs),
    /// Invert the colors of the video
    Invert(args::InputArgs),
    /// Increase the contrast of the video
    Contrast(args::InputArgs),
}

/// How a rejected command line is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// `--help` or `--version` output
    Informational,
    /// A known subcommand with a bad or missing value
    InvalidArguments,
    /// Input that matches no known subcommand
    UnknownCommand,
}

impl ParseFailure {
    pub fn classify(err: &clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseFailure::Informational,
            ErrorKind::InvalidValue
            | ErrorKind::ValueValidation
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::TooFewValues
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => ParseFailure::InvalidArguments,
            _ => ParseFailure::UnknownCommand,
        }
    }
}

/// The parser's message on one line, without the `error:` prefix or usage
pub fn parse_error_summary(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let parts: Vec<&str> = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:") && !line.starts_with("For more information"))
        .filter(|line| !line.is_empty())
        .collect();

    parts
        .join(" ")
        .trim_start_matches("error:")
        .trim()
        .to_string()
}
