//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use crate::config::Config;
use crate::grade::Submission;
use crate::params::{Difficulty, DistanceRange, GenerationProfile};
use crate::render::PickOverlay;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "seismopick")]
#[command(about = "Pick P and S arrivals on a synthetic seismogram", long_about = None)]
pub struct Args {
    /// Difficulty level: 1 (quiet), 2 (noisy), 3 (random distance)
    #[arg(long, value_name = "LEVEL", default_value_t = 1)]
    pub level: u8,

    /// RNG seed (overrides the level's seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed source distance (kilometres)
    #[arg(long, value_name = "KM")]
    pub distance: Option<f64>,

    /// TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output seismogram plot
    #[arg(long, value_name = "PATH", default_value = "seismogram.png")]
    pub plot: PathBuf,

    /// Also write the trace as audio
    #[arg(long, value_name = "PATH")]
    pub wav: Option<PathBuf>,

    /// P arrival pick (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub p_pick: Option<f64>,

    /// S arrival pick (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub s_pick: Option<f64>,

    /// Epicentral distance estimate (kilometres)
    #[arg(long, value_name = "KM")]
    pub distance_guess: Option<f64>,

    /// Learner name for the attempt log
    #[arg(long, default_value = "student")]
    pub learner: String,

    /// Append graded attempts to this JSON-lines file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Print the true onsets and distance once the picks pass
    #[arg(long)]
    pub reveal: bool,
}

impl Args {
    /// Parse difficulty level from command-line arguments
    pub fn parse_difficulty(&self) -> Difficulty {
        Difficulty::from_level(self.level).unwrap_or_else(|| {
            warn!(requested = self.level, "unknown level, using level 1");
            Difficulty::Level1
        })
    }

    /// Generation profile after config and flag overrides
    pub fn build_profile(&self, config: &Config) -> GenerationProfile {
        let mut profile = config.profile_for(self.parse_difficulty());
        if let Some(seed) = self.seed {
            profile.random_seed = Some(seed);
        }
        if let Some(km) = self.distance {
            profile.distance_range = DistanceRange::fixed(km);
        }
        profile
    }

    /// Submission when both picks were given
    pub fn submission(&self) -> Option<Submission> {
        let (p, s) = (self.p_pick?, self.s_pick?);
        Some(Submission {
            p_pick_s: p,
            s_pick_s: s,
            distance_guess_km: self.distance_guess,
        })
    }

    pub fn overlay(&self) -> PickOverlay {
        PickOverlay {
            p_pick_s: self.p_pick,
            s_pick_s: self.s_pick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["seismopick"]).unwrap();
        assert_eq!(args.parse_difficulty(), Difficulty::Level1);
        assert_eq!(args.plot, PathBuf::from("seismogram.png"));
        assert!(args.submission().is_none());
        assert_eq!(
            args.build_profile(&Config::default()),
            GenerationProfile::default()
        );
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "seismopick",
            "--level",
            "3",
            "--seed",
            "9",
            "--distance",
            "120",
        ])
        .unwrap();
        let profile = args.build_profile(&Config::default());
        assert_eq!(profile.random_seed, Some(9));
        assert_eq!(profile.distance_range, DistanceRange::fixed(120.0));
        assert_eq!(profile.noise_amplitude, 0.8);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let args = Args::try_parse_from(["seismopick", "--level", "7"]).unwrap();
        assert_eq!(args.parse_difficulty(), Difficulty::Level1);
    }

    #[test]
    fn test_submission_needs_both_picks() {
        let args = Args::try_parse_from(["seismopick", "--p-pick", "38.3"]).unwrap();
        assert!(args.submission().is_none());
        assert_eq!(args.overlay().p_pick_s, Some(38.3));

        let args = Args::try_parse_from([
            "seismopick",
            "--p-pick",
            "38.3",
            "--s-pick",
            "62.1",
            "--distance-guess",
            "200",
        ])
        .unwrap();
        let submission = args.submission().unwrap();
        assert_eq!(submission.s_pick_s, 62.1);
        assert_eq!(submission.distance_guess_km, Some(200.0));
    }
}
