//! FFprobe adapter for media file probing
//!
//! Runs the prober as a subprocess and deserializes its JSON report.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::model::ProbeReport;
use crate::error::{FfShortError, FfShortResult};
use crate::ports::ProbePort;

/// Program name used when no path is configured
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: String,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn probe_args(file_path: &str) -> [&str; 8] {
        [
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
            "--",
            file_path,
        ]
    }
}

impl Default for FFprobeAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_FFPROBE)
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe(&self, file_path: &str) -> FfShortResult<ProbeReport> {
        debug!("Probing {} with {}", file_path, self.program);

        let output = Command::new(&self.program)
            .args(Self::probe_args(file_path))
            .stdin(std::process::Stdio::null())
            .output()
            .await
            .map_err(|e| {
                let message = if e.kind() == std::io::ErrorKind::NotFound {
                    format!("{} not found", self.program)
                } else {
                    format!("failed to spawn {}: {}", self.program, e)
                };
                FfShortError::probe(file_path, message)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("prober exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(FfShortError::probe(file_path, message));
        }

        let report: ProbeReport = serde_json::from_slice(&output.stdout)
            .map_err(|e| FfShortError::probe(file_path, format!("unreadable report: {}", e)))?;

        debug!(
            "Probe found {} streams, format {:?}",
            report.streams.len(),
            report.format.format_name
        );
        Ok(report)
    }
}
