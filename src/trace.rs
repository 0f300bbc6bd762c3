//! Synthetic seismogram record and its hidden ground truth.

/// How much of a phase pulse made it onto the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseCoverage {
    /// Whole pulse embedded
    Full,
    /// Pulse clipped at the end of the record (samples written)
    Truncated { samples: usize },
    /// Onset fell past the end of the record; nothing embedded
    Absent,
}

/// Values the trace was synthesized from. Only the grading path reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTruth {
    pub p_onset_s: f64,
    pub s_onset_s: f64,
    pub distance_km: f64,
    pub p_velocity_km_s: f64,
    pub s_velocity_km_s: f64,
    pub p_coverage: PulseCoverage,
    pub s_coverage: PulseCoverage,
}

impl GroundTruth {
    /// True S-P interval (seconds)
    pub fn ps_interval_s(&self) -> f64 {
        self.s_onset_s - self.p_onset_s
    }
}

/// Immutable synthetic seismogram
#[derive(Debug, Clone)]
pub struct SeismicTrace {
    time_axis: Vec<f64>,
    amplitude: Vec<f64>,
    truth: GroundTruth,
}

/// Render-safe view of a trace: samples only, no ground truth
#[derive(Debug, Clone, Copy)]
pub struct TraceView<'a> {
    pub time_axis: &'a [f64],
    pub amplitude: &'a [f64],
}

impl SeismicTrace {
    pub(crate) fn new(time_axis: Vec<f64>, amplitude: Vec<f64>, truth: GroundTruth) -> Self {
        debug_assert_eq!(time_axis.len(), amplitude.len());
        Self {
            time_axis,
            amplitude,
            truth,
        }
    }

    /// Samples for plotting or playback
    pub fn view(&self) -> TraceView<'_> {
        TraceView {
            time_axis: &self.time_axis,
            amplitude: &self.amplitude,
        }
    }

    pub fn ground_truth(&self) -> &GroundTruth {
        &self.truth
    }

    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }
}

impl TraceView<'_> {
    /// Record length (seconds)
    pub fn duration_s(&self) -> f64 {
        self.time_axis.last().copied().unwrap_or(0.0)
    }

    /// Sampling rate (Hz)
    pub fn sample_rate_hz(&self) -> f64 {
        match self.time_axis {
            [first, second, ..] => 1.0 / (second - first),
            _ => 0.0,
        }
    }

    /// Largest absolute sample
    pub fn peak(&self) -> f64 {
        self.amplitude.iter().fold(0.0_f64, |acc, a| acc.max(a.abs()))
    }
}
