//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::app::container::DefaultAppContainer;
use crate::app::transform_interactor::{TransformReport, TransformRequest};
use crate::cli::{Cli, Commands};
use crate::config_initialization::{initialize_configuration, AppConfig};
use crate::domain::model::{Operation, TimeMarkers};
use crate::output::Console;
use crate::utils::logging::LoggingSystem;

impl Commands {
    /// Typed operation for the parsed subcommand
    pub fn into_operation(self) -> Operation<TimeMarkers> {
        match self {
            Commands::Clip(args) => Operation::Clip {
                input: args.file,
                range: TimeMarkers::new(args.from, args.to),
            },
            Commands::ToMp4(args) => Operation::ToMp4 { input: args.file },
            Commands::Audio(args) => Operation::ExtractAudio {
                input: args.file,
                range: TimeMarkers::new(args.from, args.to),
            },
            Commands::NoAudio(args) => Operation::RemoveAudio {
                input: args.file,
                range: TimeMarkers::new(args.from, args.to),
            },
            Commands::ImgToVideo(args) => Operation::ImageToVideo {
                image: args.image,
                audio: args.audio,
            },
            Commands::AudioToVideo(args) => Operation::AudioToVideo {
                audio: args.audio,
                video: args.video,
            },
            Commands::Loop(args) => Operation::Loop {
                input: args.file,
                loops: args.loops,
            },
            Commands::Reverse(args) => Operation::Reverse { input: args.file },
            Commands::Scale(args) => Operation::Scale {
                input: args.file,
                width: args.width,
            },
            Commands::Resize(args) => Operation::Resize {
                input: args.file,
                width: args.width,
                height: args.height,
            },
            Commands::Fps(args) => Operation::SetFps {
                input: args.file,
                fps: args.fps,
            },
            Commands::Speed(args) => Operation::Speed {
                input: args.file,
                speed: args.speed,
            },
            Commands::SpeedVideo(args) => Operation::SpeedVideo {
                input: args.file,
                speed: args.speed,
            },
            Commands::SpeedAudio(args) => Operation::SpeedAudio {
                input: args.file,
                speed: args.speed,
            },
            Commands::Grayscale(args) => Operation::Grayscale { input: args.file },
            Commands::Invert(args) => Operation::Invert { input: args.file },
            Commands::Contrast(args) => Operation::Contrast { input: args.file },
        }
    }
}

/// Outcome of a successful invocation
#[derive(Debug)]
pub enum Outcome {
    /// ffmpeg ran and wrote the output file
    Completed(TransformReport),
    /// `--dry-run`: the command was printed, not run
    Planned { output_path: String },
}

/// Execute the parsed command line
pub async fn execute(cli: Cli, console: &Console) -> Result<Outcome> {
    let config = initialize_configuration(&cli.globals).context("Failed to load configuration")?;

    let logging = LoggingSystem::new(config.logging.clone());
    logging.initialize();
    logging.log_system_info();

    execute_with_config(cli.command, &config, console).await
}

/// Execute one subcommand against a resolved configuration
pub async fn execute_with_config(
    command: Commands,
    config: &AppConfig,
    console: &Console,
) -> Result<Outcome> {
    let operation = command.into_operation();
    let kind = operation.kind();
    info!("Executing {} command", kind);

    console.announce(&operation);

    let request = TransformRequest::new(operation, config.output_for(kind));
    let interactor = DefaultAppContainer::new(config).transform_interactor();

    let prepared = interactor.prepare(request).await?;
    if let Some(range) = &prepared.range {
        console.time_range(range);
    }

    if config.dry_run {
        console.command(&prepared.command);
        return Ok(Outcome::Planned {
            output_path: prepared.output_path,
        });
    }

    let report = interactor.run(prepared).await?;
    info!("{} command completed successfully", kind);
    Ok(Outcome::Completed(report))
}

impl Outcome {
    pub fn output_path(&self) -> &str {
        match self {
            Outcome::Completed(report) => &report.output_path,
            Outcome::Planned { output_path } => output_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn operation(argv: &[&str]) -> Operation<TimeMarkers> {
        let mut full = vec!["ffshort"];
        full.extend_from_slice(argv);
        Cli::try_parse_from(full).unwrap().command.into_operation()
    }

    #[test]
    fn test_clip_markers_are_optional() {
        assert_eq!(
            operation(&["clip", "in.mp4"]),
            Operation::Clip {
                input: "in.mp4".to_string(),
                range: TimeMarkers::default(),
            }
        );
        assert_eq!(
            operation(&["clip", "in.mp4", "00:00:05", "00:00:10"]),
            Operation::Clip {
                input: "in.mp4".to_string(),
                range: TimeMarkers::new(Some("00:00:05".to_string()), Some("00:00:10".to_string())),
            }
        );
    }

    #[test]
    fn test_numeric_defaults() {
        assert_eq!(
            operation(&["loop", "in.mp4"]),
            Operation::Loop {
                input: "in.mp4".to_string(),
                loops: 1
            }
        );
        assert_eq!(
            operation(&["fps", "in.mp4"]),
            Operation::SetFps {
                input: "in.mp4".to_string(),
                fps: 30.0
            }
        );
        assert_eq!(
            operation(&["speedaudio", "in.mp3"]),
            Operation::SpeedAudio {
                input: "in.mp3".to_string(),
                speed: 2.0
            }
        );
    }

    #[test]
    fn test_negative_loop_count_reaches_validation() {
        assert_eq!(
            operation(&["loop", "in.mp4", "-2"]),
            Operation::Loop {
                input: "in.mp4".to_string(),
                loops: -2
            }
        );
    }

    #[test]
    fn test_two_input_commands_keep_order() {
        assert_eq!(
            operation(&["imgtovideo", "cover.png", "song.mp3"]),
            Operation::ImageToVideo {
                image: "cover.png".to_string(),
                audio: "song.mp3".to_string(),
            }
        );
        assert_eq!(
            operation(&["audiotovideo", "voice.mp3", "in.mp4"]),
            Operation::AudioToVideo {
                audio: "voice.mp3".to_string(),
                video: "in.mp4".to_string(),
            }
        );
    }

    #[test]
    fn test_tomp4_alias() {
        assert_eq!(
            operation(&["tomp4", "in.webm"]),
            Operation::ToMp4 {
                input: "in.webm".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_dry_run_plain_operation() {
        let config = AppConfig {
            dry_run: true,
            output_override: Some("gray.mp4".to_string()),
            ..AppConfig::default()
        };
        let cli = Cli::try_parse_from(["ffshort", "grayscale", "in.mp4"]).unwrap();

        let outcome = execute_with_config(cli.command, &config, &Console::new())
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::Planned { .. }));
        assert_eq!(outcome.output_path(), "gray.mp4");
    }

    #[tokio::test]
    async fn test_invalid_parameter_surfaces_before_running() {
        let cli = Cli::try_parse_from(["ffshort", "loop", "in.mp4", "0"]).unwrap();
        let err = execute_with_config(cli.command, &AppConfig::default(), &Console::new())
            .await
            .unwrap_err();

        let err = err.downcast_ref::<crate::error::FfShortError>().unwrap();
        assert!(err.is_user_facing());
    }
}
