use async_trait::async_trait;

use crate::{error::Error, types::ExecutionRequest};

/// Remote service that runs an `ExecutionRequest` and returns its raw
/// textual result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Run the request. Failures and timeouts are reported as
    /// `Error::Backend`; no retry happens at this layer.
    async fn execute(&self, request: &ExecutionRequest) -> Result<String, Error>;
}

/// External store for output too large to post inline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasteService: Send + Sync {
    /// Upload `content` and return a link to it. An error means no link
    /// could be produced.
    async fn post(&self, content: &str) -> Result<String, Error>;
}
