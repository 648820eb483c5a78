use async_trait::async_trait;
use code_exec::PasteService;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::{config::PasteConfig, error::Error};

const AUTHORIZED_HOSTS: [&str; 3] = [
    "https://hastebin.com",
    "https://gist.github.com",
    "https://gist.githubusercontent.com",
];

#[derive(Debug, Serialize)]
struct PasteFile<'a> {
    filename: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct PasteResponse {
    id: String,
}

/// Client for the mystb.in paste service
pub struct MystbinClient {
    client: Client,
    config: PasteConfig,
}

impl MystbinClient {
    pub fn new(config: PasteConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client, config })
    }

    /// Upload `content` as a single file paste and return its URL.
    pub async fn create_paste(&self, content: &str) -> Result<String, Error> {
        let response = self
            .client
            .post(format!("{}/paste", self.config.api_url))
            .json(&json!({
                "files": [PasteFile {
                    filename: &self.config.filename,
                    content,
                }],
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status_code: response.status().as_u16(),
                message: response.text().await?,
            });
        }

        let paste: PasteResponse = response.json().await?;
        debug!("Created paste {}", paste.id);
        Ok(format!(
            "{}/{}",
            self.config.site_url.trim_end_matches('/'),
            paste.id
        ))
    }

    /// Download the raw text behind a hastebin or gist link.
    pub async fn fetch_raw(&self, link: &str) -> Result<String, Error> {
        let url = raw_url(link)?;
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status_code: response.status().as_u16(),
                message: format!("could not fetch {}", url),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PasteService for MystbinClient {
    async fn post(&self, content: &str) -> code_exec::Result<String> {
        self.create_paste(content)
            .await
            .map_err(|e| code_exec::Error::Offload(e.to_string()))
    }
}

/// Rewrites a hastebin or gist link to the URL of its raw contents.
///
/// Angle brackets (used to suppress link previews) and trailing slashes
/// are ignored. Links to other hosts are refused.
pub fn raw_url(link: &str) -> Result<String, Error> {
    let link = link.trim_matches(|c: char| c == '<' || c == '>' || c == '/');

    if !AUTHORIZED_HOSTS.iter().any(|host| link.starts_with(host)) {
        return Err(Error::UnauthorizedLink(format!(
            "Only links from {} are accepted (starting with 'http').",
            AUTHORIZED_HOSTS.join(", ")
        )));
    }

    let domain = link.split('/').nth(2).unwrap_or_default();
    if domain == "hastebin.com" {
        if link.contains("/raw/") {
            return Ok(link.to_string());
        }
        let token = link.rsplit('/').next().unwrap_or_default();
        // drop a file extension such as `.py`
        let token = token.rsplit_once('.').map_or(token, |(stem, _)| stem);
        return Ok(format!("https://hastebin.com/raw/{}", token));
    }

    // gist redirects raw links to gist.githubusercontent.com on its own
    if link.contains("/raw") {
        Ok(link.to_string())
    } else {
        Ok(format!("{}/raw", link))
    }
}
