//! # Code Execution Requests
//!
//! Compiles free-form chat submissions into execution requests for a remote
//! code execution backend, and renders the backend's raw output back into a
//! message that fits a length-limited chat surface.
//!
//! A submission is a language token plus a body:
//!
//! ```text
//! --stats --wrapped
//! input first line of stdin
//! compiler-flags -O2 -Wall
//! command-line-options -v
//! arguments one two
//! <code>
//! ```
//!
//! The backend and the paste service are collaborators behind the
//! [`ExecutionBackend`] and [`PasteService`] traits.

pub mod directives;
mod error;
mod executor;
pub mod languages;
pub mod postprocess;
mod request;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use executor::{ExecutionBackend, PasteService};
pub use languages::{LanguageCatalog, WrapTemplates};
pub use postprocess::ResultPostProcessor;
pub use request::RequestBuilder;
pub use service::CodeExecutionService;
pub use types::{Directive, ExecutionOptions, ExecutionRequest, RenderedOutput, Submission};

/// Result type for code execution operations
pub type Result<T> = std::result::Result<T, Error>;
