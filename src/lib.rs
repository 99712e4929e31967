//! ffshort Library
//!
//! Translates short subcommands into ffmpeg invocations, probing the input
//! with ffprobe to fill in missing time ranges.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::commands::{CommandBuilder, CommandLine};
pub use domain::model::{Operation, OperationKind, TimeMarkers, TimeRange};
pub use error::{FfShortError, FfShortResult};
