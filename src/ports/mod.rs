// Ports - Interface definitions for the external prober and encoder

use async_trait::async_trait;

use crate::domain::commands::CommandLine;
use crate::domain::model::ProbeReport;
use crate::error::FfShortResult;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe a media file and return its stream/format metadata
    async fn probe(&self, file_path: &str) -> FfShortResult<ProbeReport>;
}

/// Output captured from a tool execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output (lossy UTF-8)
    pub stdout: String,
    /// Captured standard error (lossy UTF-8)
    pub stderr: String,
}

/// Port for running the transformation tool
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run the command to completion. A non-zero exit is an error.
    async fn run(&self, command: &CommandLine) -> FfShortResult<ToolOutput>;
}
