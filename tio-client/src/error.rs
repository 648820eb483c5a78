use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("Payload encoding error: {0}")]
    Encoding(#[from] std::io::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    UnauthorizedLink(String),
}

impl Error {
    /// Short description suitable for showing to the submitter
    pub fn summary(&self) -> String {
        match self {
            Error::HttpClient(e) if e.is_timeout() => "timed out".to_string(),
            Error::HttpClient(_) => "connection failed".to_string(),
            Error::Api { status_code, .. } => format!("status code: {}", status_code),
            Error::Encoding(_) => "could not encode request".to_string(),
            Error::InvalidResponse(_) => "invalid response".to_string(),
            Error::UnauthorizedLink(message) => message.clone(),
        }
    }
}
