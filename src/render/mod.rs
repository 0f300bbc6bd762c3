//! Output surfaces for a trace: PNG plot and WAV sonification.
//!
//! Both take a `TraceView`, so nothing here can see the ground truth.

mod plot;
mod wav;

// Re-export public types
pub use plot::{render_png, save_png, PickOverlay};
pub use wav::write_wav;
