//! Configuration file (TOML) layered over the parameter defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::params::{Difficulty, GenerationProfile, PlotConfig, Tolerances, WavConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Replaces the difficulty preset when present
    #[serde(default)]
    pub profile: Option<GenerationProfile>,
    #[serde(default)]
    pub tolerances: Tolerances,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub wav: WavConfig,
}

impl Config {
    /// Generation profile for `difficulty`, unless the file pins one
    pub fn profile_for(&self, difficulty: Difficulty) -> GenerationProfile {
        self.profile
            .clone()
            .unwrap_or_else(|| difficulty.profile())
    }
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config = parse(&content)?;
    info!(path = %path.as_ref().display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeismoError;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse("").unwrap();
        assert!(config.profile.is_none());
        assert_eq!(config.tolerances, Tolerances::default());
        assert_eq!(config.plot, PlotConfig::default());
        assert_eq!(
            config.profile_for(Difficulty::Level2),
            Difficulty::Level2.profile()
        );
    }

    #[test]
    fn test_partial_sections() {
        let config = parse(
            r#"
            [tolerances]
            time_tolerance_s = 1.5
            distance_tolerance_km = 30.0

            [tolerances.hints]
            p_pick_s = 0.5
            s_pick_s = 0.5
            distance_km = 10.0

            [plot]
            width_px = 640
            height_px = 240
            margin_px = 10
            grid_interval_s = 5.0
            headroom = 0.2
            "#,
        )
        .unwrap();

        assert_eq!(config.tolerances.time_tolerance_s, 1.5);
        assert_eq!(config.tolerances.hints.distance_km, 10.0);
        assert_eq!(config.plot.width_px, 640);
        assert_eq!(config.wav, WavConfig::default());
    }

    #[test]
    fn test_profile_override() {
        let config = parse(
            r#"
            [profile]
            distance_range = { min_km = 150.0, max_km = 250.0 }
            p_velocity_km_s = 8.0
            s_velocity_km_s = 4.0
            noise_amplitude = 0.5
            p_wave_amplitude = 2.0
            s_wave_amplitude = 5.0
            onset_offset_s = 0.0
            random_seed = 7
            duration_s = 100.0
            sample_count = 1000
            p_pulse_duration_s = 10.0
            s_pulse_duration_s = 15.0
            pulse_cycles = 4.0
            "#,
        )
        .unwrap();

        let profile = config.profile_for(Difficulty::Level1);
        assert_eq!(profile.p_velocity_km_s, 8.0);
        assert_eq!(profile.random_seed, Some(7));
        assert_eq!(profile.microseism_amplitude, 0.0);
        assert_eq!(profile.microseism_frequency_hz, 0.05);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            parse("[tolerances]\ntime_tolerance_s = \"fast\""),
            Err(SeismoError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seismopick.toml");
        std::fs::write(&path, "[wav]\nspeedup = 100.0\npeak_level = 0.5\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.wav.speedup, 100.0);
        assert!(matches!(
            load(dir.path().join("missing.toml")),
            Err(SeismoError::Io(_))
        ));
    }
}
