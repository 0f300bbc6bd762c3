//! Synthetic seismogram generator.
//!
//! Draws a source distance, converts it to P and S onset times under a
//! two-velocity model, and superimposes a windowed sine pulse for each phase
//! onto background noise.

mod background;
mod pulse;

// Re-export public types
pub use background::BackgroundNoise;
pub use pulse::Pulse;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::error::Result;
use crate::params::{DistanceRange, GenerationProfile};
use crate::trace::{GroundTruth, PulseCoverage, SeismicTrace};

/// Generate one trace from `profile`
///
/// Never fails on a valid profile: onsets past the end of the record yield a
/// truncated or absent pulse rather than an error.
pub fn generate(profile: &GenerationProfile) -> Result<SeismicTrace> {
    profile.validate()?;

    let mut rng = match profile.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let distance_km = draw_distance(&profile.distance_range, &mut rng);
    let (p_onset_s, s_onset_s) = profile.onsets_for(distance_km);

    let dt_s = profile.sample_interval_s();
    let time_axis: Vec<f64> = (0..profile.sample_count)
        .map(|i| i as f64 * dt_s)
        .collect();

    let background = BackgroundNoise::new(profile, &mut rng)?;
    let mut amplitude = background.render(&time_axis, &mut rng);

    let p_coverage = Pulse::at(
        p_onset_s,
        profile.p_pulse_duration_s,
        profile.pulse_cycles,
        profile.p_wave_amplitude,
        dt_s,
    )
    .superimpose(&mut amplitude);
    let s_coverage = Pulse::at(
        s_onset_s,
        profile.s_pulse_duration_s,
        profile.pulse_cycles,
        profile.s_wave_amplitude,
        dt_s,
    )
    .superimpose(&mut amplitude);

    for (phase, coverage) in [("P", p_coverage), ("S", s_coverage)] {
        if coverage != PulseCoverage::Full {
            warn!(
                phase,
                ?coverage,
                duration_s = profile.duration_s,
                required_s = profile.required_duration_s(),
                "pulse does not fit on the record"
            );
        }
    }

    debug!(
        distance_km,
        p_onset_s,
        s_onset_s,
        samples = profile.sample_count,
        "generated trace"
    );

    Ok(SeismicTrace::new(
        time_axis,
        amplitude,
        GroundTruth {
            p_onset_s,
            s_onset_s,
            distance_km,
            p_velocity_km_s: profile.p_velocity_km_s,
            s_velocity_km_s: profile.s_velocity_km_s,
            p_coverage,
            s_coverage,
        },
    ))
}

fn draw_distance(range: &DistanceRange, rng: &mut impl Rng) -> f64 {
    if range.is_fixed() {
        range.min_km
    } else {
        rng.gen_range(range.min_km..=range.max_km)
    }
}
