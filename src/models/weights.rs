use serde::{Deserialize, Serialize};

/// One of the three hybrid scoring signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightDimension {
    Collaborative,
    Semantic,
    Topic,
}

/// Tunable blend of the three scoring signals sent to the remote scorer.
///
/// Each weight lives in [0, 1] independently; nothing forces the sum to 1,
/// the scorer interprets them as-is. Serializes to the wire names the scorer
/// expects (`als`, `semantic`, `lda`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    #[serde(rename = "als")]
    pub collaborative: f64,
    pub semantic: f64,
    #[serde(rename = "lda")]
    pub topic: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            collaborative: 0.5,
            semantic: 0.3,
            topic: 0.2,
        }
    }
}

impl WeightVector {
    /// Replaces one weight, clamping the value into [0, 1].
    ///
    /// Out-of-range input is clamped rather than rejected; the other two
    /// dimensions are never touched. NaN clamps to 0.0.
    pub fn set(&mut self, dimension: WeightDimension, value: f64) {
        let clamped = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        match dimension {
            WeightDimension::Collaborative => self.collaborative = clamped,
            WeightDimension::Semantic => self.semantic = clamped,
            WeightDimension::Topic => self.topic = clamped,
        }
    }

    pub fn get(&self, dimension: WeightDimension) -> f64 {
        match dimension {
            WeightDimension::Collaborative => self.collaborative,
            WeightDimension::Semantic => self.semantic,
            WeightDimension::Topic => self.topic,
        }
    }
}
