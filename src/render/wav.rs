//! Trace sonification: write the seismogram as a sped-up mono WAV.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::params::WavConfig;
use crate::trace::TraceView;

/// Write `view` as 32-bit float mono, normalised to `config.peak_level`
pub fn write_wav(view: TraceView<'_>, config: &WavConfig, path: impl AsRef<Path>) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: config.output_rate_hz(view.sample_rate_hz()),
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;

    let peak = view.peak();
    let gain = if peak > 0.0 {
        config.peak_level as f64 / peak
    } else {
        0.0
    };

    for &sample in view.amplitude {
        writer.write_sample((sample * gain) as f32)?;
    }
    writer.finalize()?;

    debug!(
        path = %path.as_ref().display(),
        sample_rate = spec.sample_rate,
        samples = view.amplitude.len(),
        "saved trace audio"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_wav_normalises() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.wav");

        let time_axis = [0.0, 0.5, 1.0, 1.5];
        let amplitude = [0.5, -4.0, 2.0, 0.0];
        let view = TraceView {
            time_axis: &time_axis,
            amplitude: &amplitude,
        };
        let config = WavConfig {
            speedup: 200.0,
            peak_level: 0.8,
        };
        write_wav(view, &config, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, 400);

        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 4);
        assert!((samples[1] + 0.8).abs() < 1e-6);
        assert!((samples[2] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_silent_trace_writes_zeros() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("silent.wav");

        let time_axis = [0.0, 0.1];
        let amplitude = [0.0, 0.0];
        let view = TraceView {
            time_axis: &time_axis,
            amplitude: &amplitude,
        };
        write_wav(view, &WavConfig::default(), &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert!(reader.samples::<f32>().all(|s| s.unwrap() == 0.0));
    }
}
