//! FFmpeg execution adapter
//!
//! Spawns the transformation tool, waits for it and captures its output.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::domain::commands::CommandLine;
use crate::error::{FfShortError, FfShortResult};
use crate::ports::{ExecutePort, ToolOutput};

/// FFmpeg-based execution adapter
#[derive(Debug, Clone, Default)]
pub struct FFmpegAdapter {
    timeout: Option<Duration>,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter without a timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the tool if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn run(&self, command: &CommandLine) -> FfShortResult<ToolOutput> {
        info!("Running: {}", command);

        let child = Command::new(&command.program)
            .args(command.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FfShortError::ToolNotFound {
                        tool: command.program.clone(),
                    }
                } else {
                    FfShortError::transformation(format!(
                        "failed to spawn {}: {}",
                        command.program, e
                    ))
                }
            })?;

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result,
                Err(_elapsed) => {
                    // Dropping the future drops the child, which kills it
                    warn!("{} timed out after {:?}", command.program, limit);
                    return Err(FfShortError::transformation(format!(
                        "{} timed out after {:?}",
                        command.program, limit
                    )));
                }
            },
            None => child.wait_with_output().await,
        }
        .map_err(|e| {
            FfShortError::transformation(format!("I/O error waiting for {}: {}", command.program, e))
        })?;

        let tool_output = ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            return Err(FfShortError::transformation(format!(
                "{} exited with {}: {}",
                command.program,
                output.status,
                tool_output.stderr.trim()
            )));
        }

        debug!("{} finished successfully", command.program);
        Ok(tool_output)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::commands::Arg;

    fn shell(script: &str) -> CommandLine {
        CommandLine {
            program: "sh".to_string(),
            args: vec![Arg::plain("-c"), Arg::quoted(script)],
        }
    }

    #[tokio::test]
    async fn test_captures_stdout_and_stderr() {
        let output = FFmpegAdapter::new()
            .run(&shell("echo hello; echo warn 1>&2"))
            .await
            .unwrap();

        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.stderr.trim(), "warn");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_transformation_error() {
        let err = FFmpegAdapter::new()
            .run(&shell("echo 'Invalid argument' 1>&2; exit 3"))
            .await
            .unwrap_err();

        match err {
            FfShortError::Transformation { message } => {
                assert!(message.contains("Invalid argument"));
            }
            other => panic!("expected transformation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let command = CommandLine::new("ffmpeg_that_does_not_exist_9f2c");
        let err = FFmpegAdapter::new().run(&command).await.unwrap_err();
        assert!(matches!(err, FfShortError::ToolNotFound { .. }));
    }

    #[tokio::test]
    async fn test_timeout_kills_hung_tool() {
        let err = FFmpegAdapter::new()
            .with_timeout(Some(Duration::from_millis(100)))
            .run(&shell("sleep 5"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("timed out"));
    }
}
