use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::fixtures::catalog::{DEFAULTS, LANGUAGES};
use crate::{
    CodeExecutionService, Error, ExecutionBackend, ExecutionRequest, LanguageCatalog,
    PasteService, Result, WrapTemplates,
};

pub fn test_catalog() -> LanguageCatalog {
    let defaults: HashMap<String, String> = DEFAULTS
        .iter()
        .map(|(name, id)| (name.to_string(), id.to_string()))
        .collect();

    LanguageCatalog::new(LANGUAGES, LanguageCatalog::default_aliases(), defaults)
        .expect("fixture catalog is consistent")
}

/// Backend that records every request and answers with a fixed output
pub struct RecordingBackend {
    output: String,
    pub requests: Mutex<Vec<ExecutionRequest>>,
}

impl RecordingBackend {
    pub fn new(output: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            output: output.into(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn last_request(&self) -> Option<ExecutionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ExecutionBackend for RecordingBackend {
    async fn execute(&self, request: &ExecutionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.output.clone())
    }
}

/// Paste service that either hands out a fixed link or always fails
pub struct StaticPaste {
    link: Option<String>,
    pub uploads: Mutex<Vec<String>>,
}

impl StaticPaste {
    pub fn with_link(link: &str) -> Arc<Self> {
        Arc::new(Self {
            link: Some(link.to_string()),
            uploads: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            link: None,
            uploads: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PasteService for StaticPaste {
    async fn post(&self, content: &str) -> Result<String> {
        self.uploads.lock().unwrap().push(content.to_string());
        self.link
            .clone()
            .ok_or_else(|| Error::Offload("no link returned".to_string()))
    }
}

pub fn test_service(
    backend: Arc<RecordingBackend>,
    paste: Arc<StaticPaste>,
) -> CodeExecutionService {
    CodeExecutionService::new(test_catalog(), WrapTemplates::default(), backend, paste, 4)
}
