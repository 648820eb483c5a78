use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct TioConfig {
    /// Endpoint of the run API
    pub api_url: String,

    /// Deadline for a single run, including network time
    pub timeout: Duration,
}

impl TioConfig {
    pub fn new() -> Self {
        Self {
            api_url: "https://tio.run/cgi-bin/run/api/".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TioConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct PasteConfig {
    /// Base URL of the paste API
    pub api_url: String,

    /// Base URL that pastes are viewed under
    pub site_url: String,

    /// File name given to uploaded output
    pub filename: String,

    pub timeout: Duration,
}

impl PasteConfig {
    pub fn new() -> Self {
        Self {
            api_url: "https://mystb.in/api".to_string(),
            site_url: "https://mystb.in".to_string(),
            filename: "output.txt".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn with_site_url(mut self, site_url: String) -> Self {
        self.site_url = site_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self::new()
    }
}
