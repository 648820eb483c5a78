use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Language not available: {language}")]
    UnknownLanguage {
        language: String,
        suggestions: Vec<String>,
    },

    #[error("Language cannot be wrapped: {0}")]
    WrapRejected(String),

    #[error("Execution backend error: {0}")]
    Backend(String),

    #[error("Paste service error: {0}")]
    Offload(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("System error: {0}")]
    System(String),
}

impl Error {
    /// The text shown to the person who sent the submission.
    pub fn user_message(&self) -> String {
        match self {
            Error::UnknownLanguage {
                language,
                suggestions,
            } => {
                let message = format!("`{}` not available.", language);
                if suggestions.is_empty() {
                    message
                } else {
                    format!("{} Did you mean:\n{}", message, suggestions.join("\n"))
                }
            }
            Error::WrapRejected(language) => format!("`{}` cannot be wrapped.", language),
            Error::Backend(reason) => {
                format!("An error occurred while running your code ({}). Retry later.", reason)
            }
            Error::Offload(_) => {
                "Your output was too long, but I couldn't make an online bin out of it."
                    .to_string()
            }
            Error::Configuration(_) | Error::System(_) => {
                "An internal error occurred. Retry later.".to_string()
            }
        }
    }
}
