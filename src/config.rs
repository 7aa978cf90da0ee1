use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the remote scoring service
    #[serde(default = "default_scoring_api_url")]
    pub scoring_api_url: String,

    /// Number of movies requested for the main feed
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,

    /// Number of movies requested for a "more like this" lookup
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,

    /// Per-request timeout in seconds; expiry counts as a transport failure
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_scoring_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_feed_limit() -> usize {
    100
}

fn default_similar_limit() -> usize {
    10
}

fn default_request_timeout_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring_api_url: default_scoring_api_url(),
            feed_limit: default_feed_limit(),
            similar_limit: default_similar_limit(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
