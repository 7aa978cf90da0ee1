use crate::models::{Movie, ScoreBreakdown};

/// Poster theme tags cycled through by index
const POSTER_PALETTE: [&str; 6] = ["blue", "red", "green", "amber", "slate", "purple"];

/// The fallback feed never exceeds this many entries
const MAX_FALLBACK: usize = 20;

/// Synthetic movie ids start here to stay clear of real catalog ids
const DEMO_ID_BASE: i64 = 1000;

/// Generates the deterministic synthetic feed shown while offline.
///
/// Entry `i` is fully determined by its index: same count in, same list out,
/// every time. Scores descend from 0.95 in steps of 0.03 so the list still
/// reads as ranked.
pub fn demo_feed(count: usize) -> Vec<Movie> {
    (0..count.min(MAX_FALLBACK)).map(demo_movie).collect()
}

fn demo_movie(index: usize) -> Movie {
    Movie {
        id: DEMO_ID_BASE + index as i64,
        title: format!("Demo Movie {}", index + 1),
        year: 2024,
        genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
        poster: POSTER_PALETTE[index % POSTER_PALETTE.len()].to_string(),
        final_score: (0.95 - 0.03 * index as f64).max(0.0),
        scores: ScoreBreakdown {
            als: 0.5,
            semantic: 0.5,
            lda: 0.5,
        },
    }
}
