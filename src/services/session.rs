/// Session state machine
///
/// Owns everything the renderer displays: the visible recommendation list,
/// the loading flag, the Online/Offline mode, the weight sliders and the
/// activity log. The renderer calls in with user intents and reads back
/// snapshots; it never holds mutable state of its own.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::AppResult,
    models::{
        ActivityLog, ConnectivityMode, InteractionKind, InteractionRecord, Movie, RateRequest,
        RecommendRequest, SessionId, WeightDimension, WeightVector,
    },
    services::{
        offline,
        scoring::{HttpScoringClient, ScoringProvider},
    },
};

/// Movies synthesized for the detail view while offline
const SIMILAR_FALLBACK_COUNT: usize = 4;

/// Monotonic generation counter guarding the visible feed.
///
/// Every feed fetch takes a fresh generation before going to the network;
/// a response is applied only while its generation is still the latest.
/// "Last request wins", whatever order the responses come back in.
#[derive(Debug, Default)]
pub struct RequestCoordinator {
    current: AtomicU64,
}

impl RequestCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new fetch and returns its generation id
    pub fn start_fetch(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while no newer fetch has started since `generation`
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}

/// Mutable session state behind the client's lock
struct SessionState {
    recommendations: Vec<Movie>,
    loading: bool,
    mode: ConnectivityMode,
    weights: WeightVector,
    activity: ActivityLog,
}

/// Read-only copy of the visible state, handed to the renderer
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub recommendations: Vec<Movie>,
    pub loading: bool,
    pub mode: ConnectivityMode,
    pub weights: WeightVector,
    pub activity: Vec<InteractionRecord>,
}

/// Client-side orchestrator for one recommendation session.
///
/// Create it once at startup, call [`SessionClient::refresh_feed`] to load
/// the initial feed, route UI actions through
/// [`SessionClient::handle_interaction`], and render from
/// [`SessionClient::snapshot`]. Scoring-service outages degrade to a
/// deterministic synthetic feed; they are never surfaced as errors.
pub struct SessionClient {
    session_id: SessionId,
    provider: Arc<dyn ScoringProvider>,
    state: Arc<RwLock<SessionState>>,
    coordinator: RequestCoordinator,
    feed_limit: usize,
    similar_limit: usize,
}

impl SessionClient {
    /// Creates a session over the given scoring backend
    pub fn new(provider: Arc<dyn ScoringProvider>, config: &Config) -> Self {
        let session_id = SessionId::create();

        tracing::info!(
            session_id = %session_id,
            provider = provider.name(),
            feed_limit = config.feed_limit,
            "Session started"
        );

        Self {
            session_id,
            provider,
            state: Arc::new(RwLock::new(SessionState {
                recommendations: Vec::new(),
                loading: false,
                // Provisional until the first fetch settles
                mode: ConnectivityMode::Online,
                weights: WeightVector::default(),
                activity: ActivityLog::new(),
            })),
            coordinator: RequestCoordinator::new(),
            feed_limit: config.feed_limit,
            similar_limit: config.similar_limit,
        }
    }

    /// Creates a session backed by the HTTP scoring client
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = Arc::new(HttpScoringClient::new(config)?);
        Ok(Self::new(provider, config))
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Fetches a fresh feed and applies it to the visible state.
    ///
    /// Always goes to the network, even when currently offline; mode follows
    /// the outcome. A call superseded by a newer fetch leaves the state alone
    /// and returns the fresher list the newer fetch applied. Returns the list
    /// visible once this call settles.
    pub async fn refresh_feed(&self) -> Vec<Movie> {
        let generation = self.coordinator.start_fetch();

        let request = {
            let mut state = self.state.write().await;
            state.loading = true;
            RecommendRequest {
                user_id: self.session_id.to_string(),
                weights: state.weights,
                limit: self.feed_limit,
                focus_movie_id: None,
            }
        };

        let outcome = self.provider.recommend(&request).await;

        let mut state = self.state.write().await;
        if !self.coordinator.is_current(generation) {
            // Superseded: a newer fetch owns the visible state and the
            // loading flag. Discard without logging.
            return state.recommendations.clone();
        }

        state.loading = false;
        match outcome {
            Ok(movies) => {
                tracing::info!(results = movies.len(), "Feed updated from scoring service");
                state.mode = ConnectivityMode::Online;
                state.recommendations = movies;
            }
            Err(error) => {
                tracing::warn!(error = %error, "Scoring service unreachable, switching to offline feed");
                state.mode = ConnectivityMode::Offline;
                state.recommendations = offline::demo_feed(self.feed_limit);
            }
        }

        state.recommendations.clone()
    }

    /// Fetches the "more like this" list for a focus movie.
    ///
    /// Returned directly to the caller; the visible feed, loading flag and
    /// request coordinator are not involved. When already offline the network
    /// is skipped outright and a small synthetic list is returned.
    pub async fn similar_movies(&self, focus_movie_id: i64) -> Vec<Movie> {
        let request = {
            let state = self.state.read().await;
            if state.mode == ConnectivityMode::Offline {
                return offline::demo_feed(SIMILAR_FALLBACK_COUNT);
            }
            RecommendRequest {
                user_id: self.session_id.to_string(),
                weights: state.weights,
                limit: self.similar_limit,
                focus_movie_id: Some(focus_movie_id),
            }
        };

        match self.provider.recommend(&request).await {
            Ok(movies) => {
                self.state.write().await.mode = ConnectivityMode::Online;
                movies
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    focus_movie_id,
                    "Similar-movies fetch failed, using offline list"
                );
                self.state.write().await.mode = ConnectivityMode::Offline;
                offline::demo_feed(SIMILAR_FALLBACK_COUNT)
            }
        }
    }

    /// Handles one UI interaction: maps it to a rating, records it in the
    /// activity log, submits it best-effort and auto-refreshes the feed.
    ///
    /// While offline nothing is sent upstream. A failed submission is logged
    /// and swallowed; the refresh runs after the submission attempt either
    /// way, so every accepted rating eventually moves the visible list.
    /// Errors only on an invalid (kind, value) pair, which is a caller bug.
    pub async fn handle_interaction(
        &self,
        movie: &Movie,
        kind: InteractionKind,
        explicit: Option<f64>,
    ) -> AppResult<()> {
        let rating = kind.to_rating(explicit)?;

        tracing::info!(
            movie_id = movie.id,
            title = %movie.title,
            kind = ?kind,
            rating,
            "Interaction recorded"
        );

        {
            let mut state = self.state.write().await;
            state
                .activity
                .record(InteractionRecord::new(movie, kind, rating));

            if state.mode == ConnectivityMode::Offline {
                return Ok(());
            }
        }

        let request = RateRequest {
            user_id: self.session_id.to_string(),
            movie_id: movie.id,
            rating,
        };

        if let Err(error) = self.provider.rate(&request).await {
            tracing::warn!(
                error = %error,
                movie_id = movie.id,
                "Rating submission failed, continuing"
            );
        }

        // Auto-refresh only after the submission attempt has completed
        self.refresh_feed().await;

        Ok(())
    }

    /// Replaces one scoring weight, clamped into [0, 1]
    pub async fn set_weight(&self, dimension: WeightDimension, value: f64) {
        let mut state = self.state.write().await;
        state.weights.set(dimension, value);
        tracing::debug!(?dimension, value = state.weights.get(dimension), "Weight updated");
    }

    pub async fn weights(&self) -> WeightVector {
        self.state.read().await.weights
    }

    pub async fn mode(&self) -> ConnectivityMode {
        self.state.read().await.mode
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Read-only copy of everything the renderer displays
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            recommendations: state.recommendations.clone(),
            loading: state.loading,
            mode: state.mode,
            weights: state.weights,
            activity: state.activity.entries().to_vec(),
        }
    }
}
