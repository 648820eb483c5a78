use crate::types::{ExecutionRequest, Submission};

/// Assembles an `ExecutionRequest` from already validated parts.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    language: String,
    code: String,
    compiler_flags: Vec<String>,
    command_line_options: Vec<String>,
    arguments: Vec<String>,
    stdin: String,
}

impl RequestBuilder {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_compiler_flags(mut self, flags: Vec<String>) -> Self {
        self.compiler_flags = flags;
        self
    }

    pub fn with_command_line_options(mut self, options: Vec<String>) -> Self {
        self.command_line_options = options;
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<String>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = stdin.into();
        self
    }

    /// Takes the directive collections of a submission. The submission's own
    /// code is not used; callers pass the resolved (and possibly wrapped)
    /// code through `with_code`.
    pub fn with_directives(self, submission: Submission) -> Self {
        self.with_compiler_flags(submission.compiler_flags)
            .with_command_line_options(submission.command_line_options)
            .with_arguments(submission.arguments)
            .with_stdin(submission.stdin)
    }

    pub fn build(self) -> ExecutionRequest {
        ExecutionRequest {
            language: self.language,
            code: self.code,
            compiler_flags: self.compiler_flags,
            command_line_options: self.command_line_options,
            arguments: self.arguments,
            stdin: self.stdin,
        }
    }
}
