use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading `--flag` options of a submission
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Keep the backend's statistics trailer in the output
    pub stats: bool,
    /// Inject the code into the language family's boilerplate
    pub wrapped: bool,
}

impl ExecutionOptions {
    /// Flag names in the order they are recognised
    pub const FLAGS: [&'static str; 2] = ["--stats", "--wrapped"];

    /// Sets the flag named `token`, returning false when the token is not a
    /// flag or the flag was already set.
    pub(crate) fn set(&mut self, token: &str) -> bool {
        let slot = match token {
            "--stats" => &mut self.stats,
            "--wrapped" => &mut self.wrapped,
            _ => return false,
        };
        if *slot {
            return false;
        }
        *slot = true;
        true
    }
}

/// Classification of a single submission body line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Input(String),
    CompilerFlags(Vec<String>),
    CommandLineOptions(Vec<String>),
    Arguments(Vec<String>),
    Code(String),
}

/// A submission split into options, directives and code
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Submission {
    pub options: ExecutionOptions,
    /// Input lines joined with newlines
    pub stdin: String,
    pub compiler_flags: Vec<String>,
    pub command_line_options: Vec<String>,
    pub arguments: Vec<String>,
    /// Every non-directive line, in order
    pub code: String,
}

/// Code execution request handed to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Canonical language id
    pub language: String,
    /// Source code to execute
    pub code: String,
    #[serde(default)]
    pub compiler_flags: Vec<String>,
    #[serde(default)]
    pub command_line_options: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<String>,
    /// Input data for the program
    #[serde(default)]
    pub stdin: String,
}

/// Final form of a backend result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOutput {
    /// Fenced, escaped output small enough to post directly
    Inline(String),
    /// Output moved to the paste service
    Offloaded { link: String },
    /// Output was too large and the paste service gave no link
    OffloadFailed,
}

impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedOutput::Inline(text) => f.write_str(text),
            RenderedOutput::Offloaded { link } => write!(
                f,
                "Output was too long (more than 4000 characters or 100 lines) so I put it here: {}",
                link
            ),
            RenderedOutput::OffloadFailed => f.write_str(
                "Your output was too long, but I couldn't make an online bin out of it.",
            ),
        }
    }
}
