/// Scoring service transport
///
/// The session core talks to the remote scorer through the `ScoringProvider`
/// trait so the state machine can be exercised without a network. The
/// production implementation is a thin reqwest client against the two
/// JSON-over-HTTP endpoints.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Movie, RateRequest, RecommendRequest},
};

/// Trait for scoring service backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ScoringProvider: Send + Sync {
    /// Fetch a scored, ordered movie list
    ///
    /// Covers both the main feed and the focus-movie ("more like this")
    /// variant; the request carries the distinction.
    async fn recommend(&self, request: &RecommendRequest) -> AppResult<Vec<Movie>>;

    /// Submit one rating event
    ///
    /// The response body is irrelevant; only success or failure matters to
    /// the caller.
    async fn rate(&self, request: &RateRequest) -> AppResult<()>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Reqwest-backed scoring provider
pub struct HttpScoringClient {
    http_client: HttpClient,
    api_url: String,
}

impl HttpScoringClient {
    /// Creates a provider with an explicit request timeout.
    ///
    /// A hung scorer would otherwise pin the feed in a loading state forever;
    /// timeout expiry surfaces as a transport failure like any other.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.scoring_api_url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ScoringProvider for HttpScoringClient {
    async fn recommend(&self, request: &RecommendRequest) -> AppResult<Vec<Movie>> {
        let url = format!("{}/recommend", self.api_url);

        let response = self.http_client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Scoring API request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "scoring API returned status {}: {}",
                status, body
            )));
        }

        let movies: Vec<Movie> = response.json().await?;

        tracing::debug!(
            results = movies.len(),
            focus_movie_id = ?request.focus_movie_id,
            "Recommendations fetched"
        );

        Ok(movies)
    }

    async fn rate(&self, request: &RateRequest) -> AppResult<()> {
        let url = format!("{}/rate", self.api_url);

        let response = self.http_client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "rating endpoint returned status {}: {}",
                status, body
            )));
        }

        tracing::debug!(
            movie_id = request.movie_id,
            rating = request.rating,
            "Rating submitted"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
