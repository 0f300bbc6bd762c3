//! Seismopick library - synthetic seismograms and arrival-pick grading

pub mod cli;
pub mod config;
pub mod error;
pub mod grade;
pub mod lesson;
pub mod params;
pub mod render;
pub mod synth;
pub mod trace;

pub use error::{Result, SeismoError};
