//! Command builder: maps a resolved [`Operation`] to the exact ffmpeg
//! argument sequence. Pure; nothing here spawns a process.

use std::fmt;

use crate::domain::model::{Operation, TimeRange};

/// Program name used when no path is configured
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Default `loop` count
pub const DEFAULT_LOOPS: i64 = 1;

/// Default `fps` value
pub const DEFAULT_FPS: f64 = 30.0;

/// Default multiplier for the speed operations
pub const DEFAULT_SPEED: f64 = 2.0;

/// One command-line token.
///
/// Quoted tokens are single argv entries that the shell rendering wraps in
/// double quotes (file paths, filter graphs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub value: String,
    pub quoted: bool,
}

impl Arg {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

/// A complete external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<Arg>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append unquoted tokens
    pub fn flags<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(tokens.into_iter().map(Arg::plain));
        self
    }

    /// Append `flag value` where the value is a single quoted token
    pub fn option_quoted(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(Arg::plain(flag));
        self.args.push(Arg::quoted(value));
        self
    }

    /// Append an input file: `-i "path"`
    pub fn input(self, path: &str) -> Self {
        self.option_quoted("-i", path)
    }

    /// Append the output file as the final quoted token
    pub fn output(mut self, path: &str) -> Self {
        self.args.push(Arg::quoted(path));
        self
    }

    /// Raw tokens for process spawning; no shell quoting applied
    pub fn argv(&self) -> Vec<String> {
        self.args.iter().map(|arg| arg.value.clone()).collect()
    }
}

/// Shell-style rendering: tokens joined with single spaces
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Inverse of `speed` rounded to two decimals, used by `setpts`
pub fn stretch_factor(speed: f64) -> f64 {
    ((1.0 / speed) * 100.0).round() / 100.0
}

/// Shortest decimal form: `2`, `0.5`, `0.33`, `29.97`
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Builds ffmpeg invocations for resolved operations
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: String,
    overwrite: bool,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG)
    }
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            overwrite: false,
        }
    }

    /// `-y` when set, `-n` otherwise so ffmpeg never prompts
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Build the argument sequence for `operation` writing to `output`
    pub fn build(&self, operation: &Operation<TimeRange>, output: &str) -> CommandLine {
        let base = CommandLine::new(self.program.clone())
            .flags([if self.overwrite { "-y" } else { "-n" }]);

        match operation {
            Operation::Clip { input, range } => seek(base, range)
                .input(input)
                .flags(["-acodec", "copy"])
                .output(output),
            Operation::ToMp4 { input } => base
                .input(input)
                .flags(["-c:v", "libx264", "-c:a", "aac"])
                .output(output),
            Operation::ExtractAudio { input, range } => seek(base, range)
                .input(input)
                .flags(["-f", "mp3", "-vn"])
                .output(output),
            Operation::RemoveAudio { input, range } => seek(base, range)
                .input(input)
                .flags(["-c", "copy", "-an"])
                .output(output),
            Operation::ImageToVideo { image, audio } => base
                .flags(["-loop", "1"])
                .input(image)
                .input(audio)
                .flags([
                    "-c:v",
                    "libx264",
                    "-tune",
                    "stillimage",
                    "-c:a",
                    "aac",
                    "-pix_fmt",
                    "yuv420p",
                    "-shortest",
                ])
                .output(output),
            Operation::AudioToVideo { audio, video } => base
                .input(audio)
                .input(video)
                .flags([
                    "-c:v",
                    "copy",
                    "-c:a",
                    "aac",
                    "-strict",
                    "experimental",
                    "-shortest",
                ])
                .output(output),
            Operation::Loop { input, loops } => base
                .flags(["-stream_loop".to_string(), loops.to_string()])
                .input(input)
                .flags(["-c", "copy"])
                .output(output),
            Operation::Reverse { input } => video_filter(base, input, "reverse").output(output),
            Operation::Scale { input, width } => video_filter(
                base,
                input,
                &format!("scale={}:-2,setsar=1:1", width),
            )
            .flags(["-c:v", "libx264", "-c:a", "copy"])
            .output(output),
            Operation::Resize {
                input,
                width,
                height,
            } => base
                .input(input)
                .flags([
                    "-s".to_string(),
                    format!("{}x{}", width, height),
                    "-sws_flags".to_string(),
                    "neighbor".to_string(),
                    "-sws_dither".to_string(),
                    "none".to_string(),
                    "-c:v".to_string(),
                    "libx264".to_string(),
                    "-c:a".to_string(),
                    "copy".to_string(),
                ])
                .output(output),
            Operation::SetFps { input, fps } => base
                .input(input)
                .flags(["-filter:v".to_string(), format!("fps=fps={}", format_number(*fps))])
                .output(output),
            Operation::Speed { input, speed } => {
                let graph = format!(
                    "[0:v]setpts={}*PTS[v];[0:a]atempo={}[a]",
                    format_number(stretch_factor(*speed)),
                    format_number(*speed)
                );
                base.input(input)
                    .option_quoted("-filter_complex", graph)
                    .option_quoted("-map", "[v]")
                    .option_quoted("-map", "[a]")
                    .output(output)
            }
            Operation::SpeedVideo { input, speed } => base
                .input(input)
                .option_quoted(
                    "-filter:v",
                    format!("setpts={}*PTS", format_number(stretch_factor(*speed))),
                )
                .output(output),
            Operation::SpeedAudio { input, speed } => base
                .input(input)
                .option_quoted("-filter:a", format!("atempo={}", format_number(*speed)))
                .output(output),
            Operation::Grayscale { input } => video_filter(base, input, "hue=s=0").output(output),
            Operation::Invert { input } => video_filter(base, input, "negate").output(output),
            Operation::Contrast { input } => {
                video_filter(base, input, "curves=preset=increase_contrast").output(output)
            }
        }
    }
}

fn seek(command: CommandLine, range: &TimeRange) -> CommandLine {
    command.flags([
        "-ss".to_string(),
        range.from.clone(),
        "-to".to_string(),
        range.to.clone(),
    ])
}

fn video_filter(command: CommandLine, input: &str, filter: &str) -> CommandLine {
    command
        .input(input)
        .flags(["-vf".to_string(), filter.to_string()])
}
