//! Client-side session core for a hybrid movie recommender.
//!
//! Owns the ephemeral session identity, the tunable scoring weights, the
//! interaction-to-rating mapping, the session activity log, and the
//! Online/Offline state machine that keeps the visible recommendation list
//! consistent with a remote scoring service. Rendering is someone else's
//! job: a UI drives [`SessionClient`] with user intents and reads back
//! [`SessionSnapshot`]s.
//!
//! ```no_run
//! use movielens_session::{Config, InteractionKind, SessionClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let session = SessionClient::from_config(&config)?;
//!
//! let feed = session.refresh_feed().await;
//! session
//!     .handle_interaction(&feed[0], InteractionKind::Like, None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    ActivityLog, ConnectivityMode, InteractionKind, InteractionRecord, Movie, RateRequest,
    RecommendRequest, ScoreBreakdown, SessionId, WeightDimension, WeightVector,
};
pub use services::{
    HttpScoringClient, RequestCoordinator, ScoringProvider, SessionClient, SessionSnapshot,
};

use tracing_subscriber::EnvFilter;

/// Installs a fmt tracing subscriber for binary embedders.
///
/// Library code only emits events; call this once from the host application
/// if nothing else installs a subscriber. `RUST_LOG` controls the filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
