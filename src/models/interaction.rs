use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Movie;
use crate::error::{AppError, AppResult};

/// A UI action that carries rating intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Watch,
    Like,
    Dislike,
    Rate,
}

impl InteractionKind {
    /// Maps an interaction to the implicit rating submitted to the scorer.
    ///
    /// `Rate` requires an explicit star value in [1, 5]; the implicit kinds
    /// reject one. A violated precondition is a renderer bug surfaced as
    /// `InvalidInput` rather than coerced into a bogus rating.
    pub fn to_rating(self, explicit: Option<f64>) -> AppResult<f64> {
        match (self, explicit) {
            (InteractionKind::Watch, None) => Ok(5.0),
            (InteractionKind::Like, None) => Ok(4.0),
            (InteractionKind::Dislike, None) => Ok(1.0),
            (InteractionKind::Rate, Some(value)) if (1.0..=5.0).contains(&value) => Ok(value),
            (InteractionKind::Rate, Some(value)) => Err(AppError::InvalidInput(format!(
                "explicit rating {} outside [1, 5]",
                value
            ))),
            (InteractionKind::Rate, None) => Err(AppError::InvalidInput(
                "rate interaction requires an explicit value".to_string(),
            )),
            (kind, Some(value)) => Err(AppError::InvalidInput(format!(
                "{:?} interaction does not take an explicit value (got {})",
                kind, value
            ))),
        }
    }
}

/// One rating event in the session, kept for display and replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub movie_id: i64,
    /// Kept so the renderer can label the entry without a movie lookup
    pub title: String,
    pub kind: InteractionKind,
    pub rating: f64,
    pub recorded_at: DateTime<Utc>,
}

impl InteractionRecord {
    pub fn new(movie: &Movie, kind: InteractionKind, rating: f64) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            kind,
            rating,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered record of the session's rating events, most recent first.
///
/// Holds at most one record per movie id: re-rating a movie replaces the
/// earlier record instead of appending, so display counters reflect distinct
/// movies and the latest feedback wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<InteractionRecord>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an interaction, superseding any prior record for the same
    /// movie. Applied as one step; relative order of other entries is kept.
    pub fn record(&mut self, record: InteractionRecord) {
        self.entries.retain(|entry| entry.movie_id != record.movie_id);
        self.entries.insert(0, record);
    }

    pub fn entries(&self) -> &[InteractionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
