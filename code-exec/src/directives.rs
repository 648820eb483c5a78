//! Splits raw submission text into leading options, directive lines and code.

use crate::types::{Directive, ExecutionOptions, Submission};

const INPUT_PREFIX: &str = "input ";
const COMPILER_FLAGS_PREFIX: &str = "compiler-flags ";
const COMMAND_LINE_OPTIONS_PREFIX: &str = "command-line-options ";
const ARGUMENTS_PREFIX: &str = "arguments ";

/// Consumes up to `ExecutionOptions::FLAGS.len()` leading flag tokens.
///
/// Each recognised token also consumes a single whitespace character after
/// it. Scanning stops at the first token that is not an unset flag, so flags
/// placed after code are left in the code.
pub fn parse_options(text: &str) -> (ExecutionOptions, &str) {
    let mut options = ExecutionOptions::default();
    let mut rest = text;

    for _ in 0..ExecutionOptions::FLAGS.len() {
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if !options.set(&rest[..token_end]) {
            break;
        }
        rest = &rest[token_end..];
        if let Some(separator) = rest.chars().next() {
            rest = &rest[separator.len_utf8()..];
        }
    }

    (options, rest)
}

/// Classifies one body line by its reserved prefix.
pub fn classify_line(line: &str) -> Directive {
    if let Some(rest) = line.strip_prefix(INPUT_PREFIX) {
        Directive::Input(rest.trim_matches('`').to_string())
    } else if let Some(rest) = line.strip_prefix(COMPILER_FLAGS_PREFIX) {
        Directive::CompilerFlags(split_values(rest))
    } else if let Some(rest) = line.strip_prefix(COMMAND_LINE_OPTIONS_PREFIX) {
        Directive::CommandLineOptions(split_values(rest))
    } else if let Some(rest) = line.strip_prefix(ARGUMENTS_PREFIX) {
        Directive::Arguments(split_values(rest))
    } else {
        Directive::Code(line.to_string())
    }
}

fn split_values(rest: &str) -> Vec<String> {
    rest.trim_matches('`')
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Tokenizes a whole submission. Never fails: text without directives is
/// all code.
pub fn extract(text: &str) -> Submission {
    let (options, body) = parse_options(text);

    let mut inputs = Vec::new();
    let mut code_lines = Vec::new();
    let mut submission = Submission {
        options,
        ..Default::default()
    };

    for line in body.split('\n') {
        match classify_line(line) {
            Directive::Input(value) => inputs.push(value),
            Directive::CompilerFlags(values) => submission.compiler_flags.extend(values),
            Directive::CommandLineOptions(values) => {
                submission.command_line_options.extend(values)
            }
            Directive::Arguments(values) => submission.arguments.extend(values),
            Directive::Code(line) => code_lines.push(line),
        }
    }

    submission.stdin = inputs.join("\n");
    submission.code = code_lines.join("\n");
    submission
}
