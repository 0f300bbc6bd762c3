//! Parameter definitions with physical units and documented semantics.
//!
//! All classroom constants are extracted here with:
//! - Physical units (kilometres, seconds, km/s, Hz)
//! - Documented ranges and meanings
//! - Validation where a bad value would break generation or grading

mod grading;
mod profile;
mod render;

// Re-export all types
pub use grading::{HintThresholds, Tolerances};
pub use profile::{Difficulty, DistanceRange, GenerationProfile};
pub use render::{PlotConfig, WavConfig};
