//! Background ground motion: Gaussian instrument noise plus optional microseism drift.
//!
//! The drift uses OpenSimplex noise so it wanders smoothly instead of
//! flickering sample to sample like the Gaussian term.

use noise::{NoiseFn, OpenSimplex};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, SeismoError};
use crate::params::GenerationProfile;

/// Noise generator for one trace
pub struct BackgroundNoise {
    gaussian: Normal<f64>,
    simplex: OpenSimplex,
    microseism_amplitude: f64,
    microseism_frequency_hz: f64,
}

impl BackgroundNoise {
    /// Create a generator; the simplex seed is drawn from `rng` so seeded
    /// profiles stay reproducible
    pub fn new(profile: &GenerationProfile, rng: &mut impl Rng) -> Result<Self> {
        let gaussian = Normal::new(0.0, profile.noise_amplitude).map_err(|e| {
            SeismoError::InvalidProfile(format!("noise_amplitude {}: {}", profile.noise_amplitude, e))
        })?;

        Ok(Self {
            gaussian,
            simplex: OpenSimplex::new(rng.gen()),
            microseism_amplitude: profile.microseism_amplitude,
            microseism_frequency_hz: profile.microseism_frequency_hz,
        })
    }

    /// Sample microseism drift at time `t_s`
    ///
    /// Returns roughly [-amplitude, amplitude]
    pub fn drift(&self, t_s: f64) -> f64 {
        if self.microseism_amplitude == 0.0 {
            return 0.0;
        }
        self.simplex.get([t_s * self.microseism_frequency_hz, 0.0]) * self.microseism_amplitude
    }

    /// One noise sample per time-axis entry
    pub fn render(&self, time_axis: &[f64], rng: &mut impl Rng) -> Vec<f64> {
        time_axis
            .iter()
            .map(|&t| self.gaussian.sample(rng) + self.drift(t))
            .collect()
    }
}
