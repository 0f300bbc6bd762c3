//! Grading of learner picks against the trace's ground truth.
//!
//! Comparison convention: an error passes when it is strictly below its
//! tolerance, and a hint fires when an error is strictly above its threshold.
//! A non-finite pick or guess fails and raises the matching hint.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::Result;
use crate::params::Tolerances;
use crate::trace::SeismicTrace;

/// Learner's answer for one trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub p_pick_s: f64,
    pub s_pick_s: f64,
    pub distance_guess_km: Option<f64>,
}

impl Submission {
    pub fn picks(p_pick_s: f64, s_pick_s: f64) -> Self {
        Self {
            p_pick_s,
            s_pick_s,
            distance_guess_km: None,
        }
    }

    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_guess_km = Some(distance_km);
        self
    }

    /// Picked S-P interval (seconds)
    pub fn ps_interval_s(&self) -> f64 {
        self.s_pick_s - self.p_pick_s
    }
}

/// Qualitative feedback flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hint {
    PPickOff,
    SPickOff,
    DistanceOff,
}

impl Hint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PPickOff => "p-pick-off",
            Self::SPickOff => "s-pick-off",
            Self::DistanceOff => "distance-off",
        }
    }

    /// Feedback line shown to the learner
    pub fn message(&self) -> &'static str {
        match self {
            Self::PPickOff => "Look again at where the P wave starts.",
            Self::SPickOff => "Look again at where the S wave starts.",
            Self::DistanceOff => "Recheck the distance from your S-P interval.",
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct GradeResult {
    /// |P error| + |S error| (seconds)
    pub time_error: f64,
    pub p_error: f64,
    pub s_error: f64,
    /// Present only when a distance guess was submitted (kilometres)
    pub distance_error: Option<f64>,
    /// Distance the learner's own S-P interval implies (kilometres)
    pub implied_distance_km: f64,
    pub passed: bool,
    pub hints: BTreeSet<Hint>,
}

/// Epicentral distance from an S-P interval under a two-velocity model
///
/// d = vp * vs / (vp - vs) * (ts - tp)
pub fn epicentral_distance_km(p_velocity_km_s: f64, s_velocity_km_s: f64, ps_interval_s: f64) -> f64 {
    p_velocity_km_s * s_velocity_km_s / (p_velocity_km_s - s_velocity_km_s) * ps_interval_s
}

/// NaN errors come from non-finite picks and always count as off
fn past_threshold(error: f64, threshold: f64) -> bool {
    error.is_nan() || error > threshold
}

/// Grade `submission` against `trace`. Pure; retains nothing between calls.
pub fn grade(
    trace: &SeismicTrace,
    submission: &Submission,
    tolerances: &Tolerances,
) -> Result<GradeResult> {
    tolerances.validate()?;
    let truth = trace.ground_truth();

    let p_error = (submission.p_pick_s - truth.p_onset_s).abs();
    let s_error = (submission.s_pick_s - truth.s_onset_s).abs();
    let time_error = p_error + s_error;

    let distance_error = submission
        .distance_guess_km
        .map(|guess| (guess - truth.distance_km).abs());

    let passed = time_error < tolerances.time_tolerance_s
        && distance_error.map_or(true, |err| err < tolerances.distance_tolerance_km);

    let mut hints = BTreeSet::new();
    if past_threshold(p_error, tolerances.hints.p_pick_s) {
        hints.insert(Hint::PPickOff);
    }
    if past_threshold(s_error, tolerances.hints.s_pick_s) {
        hints.insert(Hint::SPickOff);
    }
    if distance_error.is_some_and(|err| past_threshold(err, tolerances.hints.distance_km)) {
        hints.insert(Hint::DistanceOff);
    }

    Ok(GradeResult {
        time_error,
        p_error,
        s_error,
        distance_error,
        implied_distance_km: epicentral_distance_km(
            truth.p_velocity_km_s,
            truth.s_velocity_km_s,
            submission.ps_interval_s(),
        ),
        passed,
        hints,
    })
}
