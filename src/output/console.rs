//! Colored console messages shown to the user on stdout

use console::style;

use crate::domain::commands::CommandLine;
use crate::domain::model::{Operation, TimeMarkers, TimeRange};
use crate::error::FfShortError;

const SUCCESS: &str = "✔";
const WARNING: &str = "⚠";
const ERROR: &str = "✖";

/// Console writer
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    fn print(&self, line: String) {
        println!("{}", line);
    }

    fn bullet() -> String {
        style(" +").cyan().bright().to_string()
    }

    /// Banner shown at the start of every run
    pub fn about(&self, name: &str, version: &str) {
        self.print(format!(
            " {} {}",
            style(name.to_uppercase()).white(),
            style(format!("- {}", version)).dim()
        ));
    }

    /// "What is about to happen" line for an operation
    pub fn announce(&self, operation: &Operation<TimeMarkers>) {
        self.print(announcement(operation));
    }

    pub fn time_range(&self, range: &TimeRange) {
        self.print(format!(
            "{} {} {} {}",
            Self::bullet(),
            style("[").white(),
            style(format!("{} -> {}", range.from, range.to)).yellow(),
            style("]").white()
        ));
    }

    /// Rendered command, shown for `--dry-run`
    pub fn command(&self, command: &CommandLine) {
        self.print(format!("{} {}", Self::bullet(), style(command).dim()));
    }

    pub fn output_file(&self, path: &str) {
        self.print(format!(
            " {} {} {}",
            style(SUCCESS).green(),
            style("Output File:").white(),
            style(path).dim()
        ));
    }

    /// A rejected parameter, shown without `--error`
    pub fn invalid_parameter(&self, message: &str) {
        self.print(format!(" {} {}", style(ERROR).red(), style(message).yellow()));
    }

    /// Short failure line; the full diagnostic only when `verbose`
    pub fn failure(&self, error: &anyhow::Error, verbose: bool) {
        if let Some(err) = error.downcast_ref::<FfShortError>() {
            if err.is_user_facing() {
                self.invalid_parameter(&err.to_string());
                return;
            }
        }

        if verbose {
            self.print(format!(
                " {} {}\n {}",
                style(ERROR).red(),
                style("Failed:").yellow(),
                style(format!("{:#}", error)).dim()
            ));
        } else {
            self.print(format!(
                " {} {}\n {} {}",
                style(WARNING).yellow(),
                style("Oh no, something went wrong.").yellow(),
                style(WARNING).yellow(),
                style("Use -e to view the error and try again.").yellow()
            ));
        }
    }

    /// Parser rejected the command line; `detail` shown only when verbose
    pub fn command_not_found(&self, name: &str, detail: Option<&str>) {
        if let Some(detail) = detail {
            self.print(format!(
                " {} {}\n {}",
                style(ERROR).red(),
                style("Failed to recognize command:").yellow(),
                style(detail.trim_end()).dim()
            ));
        }
        self.print(format!(
            " {} {}\n {} {}",
            style(WARNING).yellow(),
            style("Command Not Found").yellow(),
            style(WARNING).yellow(),
            style(format!("Use \"{} -h\" for help", name)).yellow()
        ));
    }

    /// Trailer printed after every command, successful or not
    pub fn done(&self) {
        self.print(format!(" {} {}\n", style(SUCCESS).green(), style("Done").white()));
    }
}

fn path(value: &str) -> String {
    style(format!("[{}]", value)).dim().to_string()
}

fn amount(value: String) -> String {
    format!("{} {} {}", style("[").dim(), style(value).yellow(), style("]").dim())
}

fn announcement(operation: &Operation<TimeMarkers>) -> String {
    let bullet = Console::bullet();
    let text = |label: &str| style(label.to_string()).white().to_string();

    let body = match operation {
        Operation::Clip { input, .. } => format!("{} {}", text("Clipping video:"), style(input).yellow()),
        Operation::ToMp4 { input } => format!("{} {}", text("Converting to MP4:"), style(input).yellow()),
        Operation::ExtractAudio { input, .. } => {
            format!("{} {}", text("Get audio from:"), style(input).yellow())
        }
        Operation::RemoveAudio { input, .. } => {
            format!("{} {}", text("Remove audio of:"), style(input).yellow())
        }
        Operation::ImageToVideo { image, audio } => format!(
            "{} {} {} {}",
            text("Create video with"),
            path(image),
            text("and"),
            path(audio)
        ),
        Operation::AudioToVideo { audio, video } => format!(
            "{} {} {} {}",
            text("Replace audio in"),
            path(video),
            text("with"),
            path(audio)
        ),
        Operation::Loop { input, loops } => format!(
            "{} {} {}",
            text("Loop video"),
            path(input),
            amount(format!("x{}", loops))
        ),
        Operation::Reverse { input } => format!("{} {}", text("Reversing video:"), style(input).dim()),
        Operation::Scale { input, width } => format!(
            "{} {} {} {}",
            text("Scaling video"),
            path(input),
            text("to width"),
            style(width).yellow()
        ),
        Operation::Resize {
            input,
            width,
            height,
        } => format!(
            "{} {} {} {}",
            text("Resizing video"),
            path(input),
            text("to"),
            amount(format!("{}x{}", width, height))
        ),
        Operation::SetFps { input, fps } => format!(
            "{} {} {} {}",
            text("Set to"),
            amount(format!("{}fps", fps)),
            text("of"),
            path(input)
        ),
        Operation::Speed { input, speed } => speed_line(&text, input, *speed, ""),
        Operation::SpeedVideo { input, speed } => speed_line(&text, input, *speed, " (no audio)"),
        Operation::SpeedAudio { input, speed } => speed_line(&text, input, *speed, " (audio)"),
        Operation::Grayscale { input } => {
            format!("{} {}", text("Applying grayscale to:"), style(input).dim())
        }
        Operation::Invert { input } => format!("{} {}", text("Inverting colors in:"), style(input).dim()),
        Operation::Contrast { input } => {
            format!("{} {}", text("Increasing contrast of:"), style(input).dim())
        }
    };

    format!("{} {}", bullet, body)
}

fn speed_line(text: &dyn Fn(&str) -> String, input: &str, speed: f64, suffix: &str) -> String {
    format!(
        "{} {} {} {}",
        text("Set speed to"),
        amount(format!("{}x", speed)),
        text("of"),
        style(format!("[{}]{}", input, suffix)).dim()
    )
}
