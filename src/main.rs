//! Seismopick - find the P and S arrivals, work out the distance.
//!
//! Generates one synthetic seismogram, plots it with the learner's picks,
//! and grades the picks when both are given.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seismopick::cli::Args;
use seismopick::config::{self, Config};
use seismopick::lesson::{AttemptStore, JsonLinesStore, LessonState, Stage};
use seismopick::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };

    let mut lesson = LessonState::start(args.learner.as_str(), args.build_profile(&config))?;

    render::save_png(lesson.view(), &args.overlay(), &config.plot, &args.plot)?;
    println!("Seismogram: {}", args.plot.display());

    if let Some(path) = &args.wav {
        render::write_wav(lesson.view(), &config.wav, path)?;
        println!("Audio: {}", path.display());
    }

    match args.submission() {
        Some(submission) => {
            let result = lesson.submit(&submission, &config.tolerances)?;

            println!();
            if result.passed {
                println!("Correct! Well picked.");
                println!("Estimated distance: {:.1} km", result.implied_distance_km);
            } else {
                println!(
                    "Error too large ({:.2} s). Try again!",
                    result.time_error
                );
            }
            if let Some(err) = result.distance_error {
                println!("Distance error: {:.1} km", err);
            }
            for hint in &result.hints {
                println!("Hint: {}", hint.message());
            }

            if let Some(path) = &args.log {
                JsonLinesStore::new(path).append(&lesson.record(&result))?;
            }
        }
        None => println!("Pass --p-pick and --s-pick to grade your picks."),
    }

    if lesson.stage() == Stage::Quiz {
        println!("Analysis complete: on to the quiz.");
    }

    if let Some(truth) = lesson.answer().filter(|_| args.reveal) {
        println!();
        println!("P onset: {:.2} s", truth.p_onset_s);
        println!("S onset: {:.2} s", truth.s_onset_s);
        println!("Distance: {:.1} km", truth.distance_km);
    }

    Ok(())
}
