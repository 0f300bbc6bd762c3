//! Plot and sonification configuration.

use serde::{Deserialize, Serialize};

/// Seismogram plot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Image width (pixels)
    pub width_px: u32,

    /// Image height (pixels)
    pub height_px: u32,

    /// Blank border around the plot area (pixels)
    pub margin_px: u32,

    /// Spacing of vertical grid lines (seconds, 0 disables the grid)
    pub grid_interval_s: f64,

    /// Headroom above the largest sample (fraction of peak amplitude)
    /// 0.1 = 10% padding above and below
    pub headroom: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width_px: 1000,
            height_px: 400,
            margin_px: 20,
            grid_interval_s: 10.0,
            headroom: 0.1,
        }
    }
}

impl PlotConfig {
    /// Drawable width inside the margins
    pub fn inner_width(&self) -> u32 {
        self.width_px.saturating_sub(2 * self.margin_px).max(1)
    }

    /// Drawable height inside the margins
    pub fn inner_height(&self) -> u32 {
        self.height_px.saturating_sub(2 * self.margin_px).max(1)
    }
}

/// WAV sonification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavConfig {
    /// Playback speed-up over real time
    /// 200x turns an 80 s record at 10 Hz into 0.4 s at 2 kHz
    pub speedup: f64,

    /// Peak level after normalisation (0..1)
    pub peak_level: f32,
}

impl Default for WavConfig {
    fn default() -> Self {
        Self {
            speedup: 200.0,
            peak_level: 0.8,
        }
    }
}

impl WavConfig {
    /// Output sample rate for a trace sampled at `trace_rate_hz`
    pub fn output_rate_hz(&self, trace_rate_hz: f64) -> u32 {
        (trace_rate_hz * self.speedup).round().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_inner_area() {
        let config = PlotConfig::default();
        assert_eq!(config.inner_width(), 960);
        assert_eq!(config.inner_height(), 360);

        let tiny = PlotConfig {
            width_px: 10,
            margin_px: 20,
            ..PlotConfig::default()
        };
        assert_eq!(tiny.inner_width(), 1);
    }

    #[test]
    fn test_wav_output_rate() {
        let config = WavConfig::default();
        assert_eq!(config.output_rate_hz(10.0), 2000);
        assert_eq!(config.output_rate_hz(0.0), 1);
    }
}
