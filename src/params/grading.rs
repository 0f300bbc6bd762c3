//! Grading tolerances and feedback thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeismoError};

/// Looser per-field thresholds that drive feedback hints (not correctness)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HintThresholds {
    /// P pick error above which the P hint fires (seconds)
    pub p_pick_s: f64,

    /// S pick error above which the S hint fires (seconds)
    pub s_pick_s: f64,

    /// Distance error above which the distance hint fires (kilometres)
    pub distance_km: f64,
}

impl Default for HintThresholds {
    fn default() -> Self {
        Self {
            p_pick_s: 1.0,
            s_pick_s: 1.0,
            distance_km: 25.0,
        }
    }
}

/// Tolerances in force for the current difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Maximum combined |P error| + |S error| (seconds, exclusive)
    /// classroom value: 2.0
    pub time_tolerance_s: f64,

    /// Maximum distance error (kilometres, exclusive)
    pub distance_tolerance_km: f64,

    #[serde(default)]
    pub hints: HintThresholds,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            time_tolerance_s: 2.0,
            distance_tolerance_km: 50.0,
            hints: HintThresholds::default(),
        }
    }
}

impl Tolerances {
    pub fn new(time_tolerance_s: f64, distance_tolerance_km: f64) -> Self {
        Self {
            time_tolerance_s,
            distance_tolerance_km,
            hints: HintThresholds::default(),
        }
    }

    /// Negative or NaN tolerances are rejected
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("time_tolerance_s", self.time_tolerance_s),
            ("distance_tolerance_km", self.distance_tolerance_km),
            ("hints.p_pick_s", self.hints.p_pick_s),
            ("hints.s_pick_s", self.hints.s_pick_s),
            ("hints.distance_km", self.hints.distance_km),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(SeismoError::InvalidTolerance(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
