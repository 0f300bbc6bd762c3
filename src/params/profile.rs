//! Seismogram generation parameters and difficulty presets.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeismoError};

/// Inclusive range the source distance is drawn from (kilometres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min_km: f64,
    pub max_km: f64,
}

impl DistanceRange {
    /// Single fixed distance (min == max)
    pub fn fixed(km: f64) -> Self {
        Self {
            min_km: km,
            max_km: km,
        }
    }

    pub fn new(min_km: f64, max_km: f64) -> Self {
        Self { min_km, max_km }
    }

    pub fn is_fixed(&self) -> bool {
        self.min_km == self.max_km
    }
}

/// Synthetic seismogram generation profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationProfile {
    /// Source distance range (kilometres, inclusive)
    /// classroom value: fixed 200 km
    pub distance_range: DistanceRange,

    /// P-wave velocity (km/s)
    /// classroom value: 6.0
    pub p_velocity_km_s: f64,

    /// S-wave velocity (km/s), must be slower than P
    /// classroom value: 3.5
    pub s_velocity_km_s: f64,

    /// Standard deviation of background Gaussian noise
    /// Level 1: 0.3, Level 2: 0.8
    pub noise_amplitude: f64,

    /// Peak amplitude of the P pulse
    pub p_wave_amplitude: f64,

    /// Peak amplitude of the S pulse (typically 2-3x P)
    pub s_wave_amplitude: f64,

    /// Detection lag added to travel time (seconds)
    pub onset_offset_s: f64,

    /// RNG seed. `Some` reproduces the same trace on every call.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Record length (seconds)
    pub duration_s: f64,

    /// Number of samples across the record (endpoints inclusive)
    pub sample_count: usize,

    /// P pulse length (seconds)
    pub p_pulse_duration_s: f64,

    /// S pulse length (seconds)
    pub s_pulse_duration_s: f64,

    /// Sine cycles in each pulse
    pub pulse_cycles: f64,

    /// Amplitude of slow microseism drift (0 disables it)
    #[serde(default)]
    pub microseism_amplitude: f64,

    /// Microseism drift frequency (Hz)
    #[serde(default = "default_microseism_frequency")]
    pub microseism_frequency_hz: f64,
}

fn default_microseism_frequency() -> f64 {
    0.05
}

impl Default for GenerationProfile {
    fn default() -> Self {
        Self {
            distance_range: DistanceRange::fixed(200.0),
            p_velocity_km_s: 6.0,
            s_velocity_km_s: 3.5,
            noise_amplitude: 0.3,
            p_wave_amplitude: 2.0,
            s_wave_amplitude: 6.0,
            onset_offset_s: 5.0,
            random_seed: Some(42),
            duration_s: 80.0,
            sample_count: 800, // 10 samples per second
            p_pulse_duration_s: 15.0,
            s_pulse_duration_s: 20.0,
            pulse_cycles: 5.0,
            microseism_amplitude: 0.0,
            microseism_frequency_hz: default_microseism_frequency(),
        }
    }
}

impl GenerationProfile {
    /// Spacing between consecutive samples (seconds)
    pub fn sample_interval_s(&self) -> f64 {
        self.duration_s / (self.sample_count - 1) as f64
    }

    /// Sampling rate (Hz)
    pub fn sample_rate_hz(&self) -> f64 {
        1.0 / self.sample_interval_s()
    }

    /// P and S onset times for a source at `distance_km`
    pub fn onsets_for(&self, distance_km: f64) -> (f64, f64) {
        (
            distance_km / self.p_velocity_km_s + self.onset_offset_s,
            distance_km / self.s_velocity_km_s + self.onset_offset_s,
        )
    }

    /// Record length needed to hold the full S pulse at the farthest distance
    pub fn required_duration_s(&self) -> f64 {
        let (_, ts_max) = self.onsets_for(self.distance_range.max_km);
        ts_max + self.s_pulse_duration_s
    }

    /// Reject profiles the synthesizer cannot honour
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(SeismoError::InvalidProfile(msg)) };

        let vp = self.p_velocity_km_s;
        let vs = self.s_velocity_km_s;
        if !(vp.is_finite() && vs.is_finite()) || vp <= 0.0 || vs <= 0.0 {
            return invalid(format!(
                "velocities must be positive, got vp={} vs={}",
                vp, vs
            ));
        }
        if vp <= vs {
            return invalid(format!(
                "P velocity must exceed S velocity, got vp={} vs={}",
                vp, vs
            ));
        }

        let range = self.distance_range;
        if !(range.min_km.is_finite() && range.max_km.is_finite()) || range.min_km > range.max_km
        {
            return invalid(format!(
                "empty distance range [{}, {}]",
                range.min_km, range.max_km
            ));
        }
        if range.min_km <= 0.0 {
            return invalid(format!(
                "distance must be positive, got min {}",
                range.min_km
            ));
        }
        // Too close a source rounds the S-P interval away
        let (tp, ts) = self.onsets_for(range.min_km);
        if !(tp > 0.0 && ts > tp) {
            return invalid(format!(
                "P and S onsets not separable at {} km (tp={} ts={})",
                range.min_km, tp, ts
            ));
        }

        for (name, value) in [
            ("noise_amplitude", self.noise_amplitude),
            ("p_wave_amplitude", self.p_wave_amplitude),
            ("s_wave_amplitude", self.s_wave_amplitude),
            ("onset_offset_s", self.onset_offset_s),
            ("p_pulse_duration_s", self.p_pulse_duration_s),
            ("s_pulse_duration_s", self.s_pulse_duration_s),
            ("pulse_cycles", self.pulse_cycles),
            ("microseism_amplitude", self.microseism_amplitude),
            ("microseism_frequency_hz", self.microseism_frequency_hz),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return invalid(format!("{} must be non-negative, got {}", name, value));
            }
        }

        if self.sample_count < 2 {
            return invalid(format!(
                "need at least 2 samples, got {}",
                self.sample_count
            ));
        }
        if !(self.duration_s > 0.0 && self.duration_s.is_finite()) {
            return invalid(format!("duration must be positive, got {}", self.duration_s));
        }

        Ok(())
    }
}

/// Difficulty tiers offered to the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Fixed 200 km source, quiet background
    #[default]
    Level1,
    /// Fixed 200 km source, noisy background
    Level2,
    /// Random 100-400 km source on a longer record
    Level3,
}

impl Difficulty {
    /// Parse a level number (1, 2, 3)
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Level1),
            2 => Some(Self::Level2),
            3 => Some(Self::Level3),
            _ => None,
        }
    }

    pub fn profile(&self) -> GenerationProfile {
        match self {
            Self::Level1 => GenerationProfile::default(),
            Self::Level2 => GenerationProfile {
                noise_amplitude: 0.8,
                ..GenerationProfile::default()
            },
            Self::Level3 => GenerationProfile {
                distance_range: DistanceRange::new(100.0, 400.0),
                noise_amplitude: 0.8,
                microseism_amplitude: 0.4,
                random_seed: None,
                duration_s: 140.0, // 400 km S onset (~119 s) plus a full S pulse
                sample_count: 1400,
                ..GenerationProfile::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = GenerationProfile::default();
        assert!(profile.validate().is_ok());
        assert!((profile.sample_interval_s() - 80.0 / 799.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_slow_p_wave() {
        let profile = GenerationProfile {
            p_velocity_km_s: 3.0,
            s_velocity_km_s: 3.5,
            ..GenerationProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(SeismoError::InvalidProfile(_))
        ));

        let equal = GenerationProfile {
            p_velocity_km_s: 3.5,
            ..GenerationProfile::default()
        };
        assert!(equal.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_velocity() {
        let profile = GenerationProfile {
            s_velocity_km_s: 0.0,
            ..GenerationProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_distance_range() {
        let profile = GenerationProfile {
            distance_range: DistanceRange::new(300.0, 100.0),
            ..GenerationProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(SeismoError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_rejects_inseparable_distance() {
        // 1e-15 km adds nothing to a 5 s offset, so tp == ts
        let profile = GenerationProfile {
            distance_range: DistanceRange::fixed(1e-15),
            ..GenerationProfile::default()
        };
        let (tp, ts) = profile.onsets_for(1e-15);
        assert_eq!(tp, ts);
        assert!(matches!(
            profile.validate(),
            Err(SeismoError::InvalidProfile(_))
        ));

        let near = GenerationProfile {
            distance_range: DistanceRange::fixed(1.0),
            ..GenerationProfile::default()
        };
        assert!(near.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_noise() {
        let profile = GenerationProfile {
            noise_amplitude: -0.1,
            ..GenerationProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_level_presets() {
        assert_eq!(Difficulty::from_level(2), Some(Difficulty::Level2));
        assert_eq!(Difficulty::from_level(9), None);

        let hard = Difficulty::Level2.profile();
        assert!(hard.noise_amplitude > Difficulty::Level1.profile().noise_amplitude);

        // Level 3 record is long enough for the farthest S pulse
        let random = Difficulty::Level3.profile();
        assert!(random.validate().is_ok());
        assert!(random.duration_s >= random.required_duration_s());
    }

    #[test]
    fn test_default_record_truncates_s_pulse() {
        // The classroom page's 80 s record is shorter than 200 km needs
        let profile = GenerationProfile::default();
        assert!(profile.required_duration_s() > profile.duration_s);
    }
}
