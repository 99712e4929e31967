// TOML config adapter - Read-only configuration from a TOML file

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{FfShortError, FfShortResult};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ffshort.toml";

/// Values a config file may set. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ffmpeg_path: Option<String>,
    pub ffprobe_path: Option<String>,
    pub video_output: Option<String>,
    pub audio_output: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub overwrite: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    #[serde(default)]
    ffshort: FileConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load the `[ffshort]` section from `path`
    pub fn load(path: &Path) -> FfShortResult<FileConfig> {
        info!("Loading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| FfShortError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        Self::parse(&content).map_err(|e| match e {
            FfShortError::Config { message } => FfShortError::Config {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    /// Parse config file content
    pub fn parse(content: &str) -> FfShortResult<FileConfig> {
        let document: ConfigDocument = toml::from_str(content).map_err(|e| FfShortError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        Ok(document.ffshort)
    }

    /// Load an explicitly requested file, or the default file when present.
    ///
    /// A missing default file is not an error; a missing explicit one is.
    pub fn discover(explicit: Option<&Path>) -> FfShortResult<FileConfig> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    debug!("No config file loaded");
                    Ok(FileConfig::default())
                }
            }
        }
    }
}
