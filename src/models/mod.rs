use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

mod interaction;
mod weights;

pub use interaction::{ActivityLog, InteractionKind, InteractionRecord};
pub use weights::{WeightDimension, WeightVector};

/// Opaque session token identifying this user for the scoring service.
///
/// Created once per session, never persisted. The scoring service keys
/// rating history by this value, so a fresh token means a cold start.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new random session token
    pub fn create() -> Self {
        Self(format!("session_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the most recent scoring request reached the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityMode {
    Online,
    Offline,
}

impl Display for ConnectivityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectivityMode::Online => write!(f, "online"),
            ConnectivityMode::Offline => write!(f, "offline"),
        }
    }
}

/// A scored movie as returned by the scoring service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    /// Genre order is display order; the core never reorders it
    pub genres: Vec<String>,
    /// Opaque theme tag consumed by the renderer only
    pub poster: String,
    /// Blended relevance in [0, 1], owned by the remote scorer
    #[serde(rename = "finalScore")]
    pub final_score: f64,
    pub scores: ScoreBreakdown,
}

/// Per-signal scores supplied by the scorer; forwarded for display, never
/// recomputed or validated here
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub als: f64,
    pub semantic: f64,
    pub lda: f64,
}

// ============================================================================
// Scoring API wire types
// ============================================================================

/// Request body for POST /recommend
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest {
    pub user_id: String,
    pub weights: WeightVector,
    pub limit: usize,
    /// Present for "more like this" lookups, absent for the main feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_movie_id: Option<i64>,
}

/// Request body for POST /rate
#[derive(Debug, Clone, Serialize)]
pub struct RateRequest {
    pub user_id: String,
    pub movie_id: i64,
    pub rating: f64,
}
