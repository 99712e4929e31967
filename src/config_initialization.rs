//! Configuration initialization and hierarchy management
//!
//! Precedence: CLI flags > environment (resolved by clap) > config file > defaults.

use std::time::Duration;
use tracing::debug;

use crate::adapters::probe_ffprobe::DEFAULT_FFPROBE;
use crate::adapters::toml_config::{FileConfig, TomlConfigAdapter};
use crate::cli::args::GlobalArgs;
use crate::domain::commands::DEFAULT_FFMPEG;
use crate::domain::model::{OperationKind, OutputKind};
use crate::error::{FfShortError, FfShortResult};
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub video_output: String,
    pub audio_output: String,
    /// `--output`, applies to every operation
    pub output_override: Option<String>,
    pub timeout: Option<Duration>,
    pub overwrite: bool,
    pub dry_run: bool,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: DEFAULT_FFMPEG.to_string(),
            ffprobe_path: DEFAULT_FFPROBE.to_string(),
            video_output: OutputKind::Video.default_path().to_string(),
            audio_output: OutputKind::Audio.default_path().to_string(),
            output_override: None,
            timeout: None,
            overwrite: false,
            dry_run: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Output path for an operation: `--output`, else the configured default
    pub fn output_for(&self, kind: OperationKind) -> String {
        if let Some(output) = &self.output_override {
            return output.clone();
        }
        match kind.output_kind() {
            OutputKind::Video => self.video_output.clone(),
            OutputKind::Audio => self.audio_output.clone(),
        }
    }
}

/// Load the config file named by the globals (or the default one) and layer
/// the command line on top
pub fn initialize_configuration(globals: &GlobalArgs) -> FfShortResult<AppConfig> {
    let file = TomlConfigAdapter::discover(globals.config.as_deref())?;
    resolve_configuration(globals, file)
}

/// Merge already-parsed layers
pub fn resolve_configuration(globals: &GlobalArgs, file: FileConfig) -> FfShortResult<AppConfig> {
    let defaults = AppConfig::default();

    let level = match globals.log_level.as_deref().or(file.log_level.as_deref()) {
        Some(level) => LogLevel::parse(level)?,
        None => defaults.logging.level,
    };
    let format = match file.log_format.as_deref() {
        Some(format) => LogFormat::parse(format)?,
        None => defaults.logging.format,
    };

    let timeout_secs = globals.timeout.or(file.timeout_secs);
    if timeout_secs == Some(0) {
        return Err(FfShortError::Config {
            message: "timeout must be at least 1 second".to_string(),
        });
    }

    let config = AppConfig {
        ffmpeg_path: pick(&globals.ffmpeg, file.ffmpeg_path, defaults.ffmpeg_path),
        ffprobe_path: pick(&globals.ffprobe, file.ffprobe_path, defaults.ffprobe_path),
        video_output: file.video_output.unwrap_or(defaults.video_output),
        audio_output: file.audio_output.unwrap_or(defaults.audio_output),
        output_override: globals.output.clone(),
        timeout: timeout_secs.map(Duration::from_secs),
        overwrite: globals.overwrite || file.overwrite.unwrap_or(defaults.overwrite),
        dry_run: globals.dry_run,
        logging: LoggingConfig { level, format },
    };

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

fn pick(cli: &Option<String>, file: Option<String>, default: String) -> String {
    cli.clone().or(file).unwrap_or(default)
}
