use async_trait::async_trait;
use code_exec::{ExecutionBackend, ExecutionRequest};
use reqwest::Client;
use tracing::debug;

use crate::{config::TioConfig, error::Error, payload};

/// Client for the tio.run run API
pub struct TioClient {
    client: Client,
    config: TioConfig,
}

impl TioClient {
    /// Create a new TioClient with the given configuration
    pub fn new(config: TioConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client, config })
    }

    /// Run a request and return the program output followed by the
    /// backend's debug trailer.
    pub async fn run(&self, request: &ExecutionRequest) -> Result<String, Error> {
        let body = payload::encode_request(request)?;
        debug!(
            "Sending {} byte request for `{}` to {}",
            body.len(),
            request.language,
            self.config.api_url
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status_code: response.status().as_u16(),
                message: response.text().await?,
            });
        }

        let text = response.text().await?;
        payload::decode_response(&text)
    }
}

#[async_trait]
impl ExecutionBackend for TioClient {
    async fn execute(&self, request: &ExecutionRequest) -> code_exec::Result<String> {
        self.run(request)
            .await
            .map_err(|e| code_exec::Error::Backend(e.summary()))
    }
}
