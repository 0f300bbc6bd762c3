//! PNG seismogram plot with the learner's pick markers.

use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::debug;

use crate::error::Result;
use crate::params::PlotConfig;
use crate::trace::TraceView;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const TRACE: Rgb<u8> = Rgb([40, 40, 40]);
const P_PICK: Rgb<u8> = Rgb([0, 0, 255]);
const S_PICK: Rgb<u8> = Rgb([255, 0, 0]);
/// Yellow at 20% over white
const PS_SPAN: Rgb<u8> = Rgb([255, 255, 204]);

/// Dash length for pick markers (pixels)
const DASH_PX: u32 = 6;

/// Pick markers drawn over the trace
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PickOverlay {
    pub p_pick_s: Option<f64>,
    pub s_pick_s: Option<f64>,
}

/// Maps trace coordinates onto the plot area
struct Frame {
    margin: u32,
    width: u32,
    height: u32,
    duration_s: f64,
    y_limit: f64,
}

impl Frame {
    fn new(view: &TraceView<'_>, config: &PlotConfig) -> Self {
        let peak = view.peak();
        Self {
            margin: config.margin_px,
            width: config.inner_width(),
            height: config.inner_height(),
            duration_s: view.duration_s(),
            y_limit: if peak > 0.0 {
                peak * (1.0 + config.headroom)
            } else {
                1.0
            },
        }
    }

    fn x(&self, t_s: f64) -> i64 {
        if self.duration_s <= 0.0 {
            return self.margin as i64;
        }
        self.margin as i64 + (t_s / self.duration_s * (self.width - 1) as f64).round() as i64
    }

    fn y(&self, amplitude: f64) -> i64 {
        let half = (self.height - 1) as f64 / 2.0;
        self.margin as i64 + (half * (1.0 - amplitude / self.y_limit)).round() as i64
    }

    fn contains_x(&self, x: i64) -> bool {
        x >= self.margin as i64 && x < (self.margin + self.width) as i64
    }

    /// First and last pixel column of the plot area
    fn columns(&self) -> (i64, i64) {
        let left = self.margin as i64;
        (left, left + self.width as i64 - 1)
    }

    fn rows(&self) -> std::ops::Range<u32> {
        self.margin..self.margin + self.height
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn line(img: &mut RgbImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
    for i in 0..=steps {
        let x = x0 + (x1 - x0) * i / steps;
        let y = y0 + (y1 - y0) * i / steps;
        put(img, x, y, color);
    }
}

fn vertical(img: &mut RgbImage, frame: &Frame, x: i64, color: Rgb<u8>, dashed: bool) {
    if !frame.contains_x(x) {
        return;
    }
    for y in frame.rows() {
        if !dashed || ((y - frame.margin) / DASH_PX) % 2 == 0 {
            put(img, x, y as i64, color);
        }
    }
}

/// Draw the seismogram with optional pick markers
pub fn render_png(view: TraceView<'_>, overlay: &PickOverlay, config: &PlotConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.width_px, config.height_px, BACKGROUND);
    let frame = Frame::new(&view, config);

    // Shade the S-P interval
    if let (Some(p), Some(s)) = (overlay.p_pick_s, overlay.s_pick_s) {
        if s > p {
            let (left, right) = frame.columns();
            for x in frame.x(p).max(left)..=frame.x(s).min(right) {
                vertical(&mut img, &frame, x, PS_SPAN, false);
            }
        }
    }

    // Skip a grid denser than one line per column
    let interval = config.grid_interval_s;
    let lines = (frame.duration_s / interval).floor();
    if interval > 0.0 && lines <= frame.width as f64 {
        for k in 1..=lines as u32 {
            let t = k as f64 * interval;
            if t < frame.duration_s {
                vertical(&mut img, &frame, frame.x(t), GRID, false);
            }
        }
    }

    let points: Vec<(i64, i64)> = view
        .time_axis
        .iter()
        .zip(view.amplitude)
        .map(|(&t, &a)| (frame.x(t), frame.y(a)))
        .collect();
    for pair in points.windows(2) {
        line(&mut img, pair[0], pair[1], TRACE);
    }

    if let Some(p) = overlay.p_pick_s {
        vertical(&mut img, &frame, frame.x(p), P_PICK, true);
    }
    if let Some(s) = overlay.s_pick_s {
        vertical(&mut img, &frame, frame.x(s), S_PICK, true);
    }

    img
}

/// Render and write a PNG
pub fn save_png(
    view: TraceView<'_>,
    overlay: &PickOverlay,
    config: &PlotConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let img = render_png(view, overlay, config);
    img.save(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "saved seismogram plot");
    Ok(())
}
