//! # TIO Client
//!
//! Network collaborators for the `code-exec` pipeline:
//!
//! - [`TioClient`] runs [`code_exec::ExecutionRequest`]s on the tio.run
//!   run API and implements [`code_exec::ExecutionBackend`].
//! - [`MystbinClient`] uploads oversized output to mystb.in and implements
//!   [`code_exec::PasteService`]. It can also fetch the raw text behind
//!   hastebin and gist links.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use code_exec::{CodeExecutionService, LanguageCatalog, WrapTemplates};
//! use tio_client::{MystbinClient, PasteConfig, TioClient, TioConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = LanguageCatalog::new(
//!         ["python3"],
//!         LanguageCatalog::default_aliases(),
//!         [("python".to_string(), "python3".to_string())].into_iter().collect(),
//!     )?;
//!
//!     let service = CodeExecutionService::new(
//!         catalog,
//!         WrapTemplates::default(),
//!         Arc::new(TioClient::new(TioConfig::new())?),
//!         Arc::new(MystbinClient::new(PasteConfig::new())?),
//!         10,
//!     );
//!
//!     println!("{}", service.run("py", "print('hi')").await);
//!     Ok(())
//! }
//! ```
//!
//! Neither client retries. Timeouts come from the configured deadline.

mod client;
mod config;
mod error;
pub mod payload;
mod paste;

pub use client::TioClient;
pub use config::{PasteConfig, TioConfig};
pub use error::Error;
pub use paste::{raw_url, MystbinClient};

/// Result type for backend and paste client operations
pub type Result<T> = std::result::Result<T, Error>;
