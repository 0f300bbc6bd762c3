//! Windowed sine pulses marking the P and S arrivals.

use std::f64::consts::PI;

use crate::trace::PulseCoverage;

/// A finite oscillatory pulse placed on the sample grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// First sample of the pulse
    pub onset_index: usize,
    /// Pulse length (samples)
    pub length: usize,
    /// Sine cycles across the pulse
    pub cycles: f64,
    /// Peak amplitude
    pub amplitude: f64,
}

impl Pulse {
    /// Place a pulse starting at `onset_s` lasting `duration_s` on a grid of spacing `dt_s`
    pub fn at(onset_s: f64, duration_s: f64, cycles: f64, amplitude: f64, dt_s: f64) -> Self {
        Self {
            onset_index: (onset_s / dt_s).floor() as usize,
            length: (duration_s / dt_s).round() as usize,
            cycles,
            amplitude,
        }
    }

    /// Pulse value at offset `i` within the pulse
    fn sample(&self, i: usize) -> f64 {
        if self.length < 2 {
            return 0.0;
        }
        let phase = 2.0 * PI * self.cycles * i as f64 / (self.length - 1) as f64;
        phase.sin() * self.amplitude
    }

    /// Add the pulse onto `samples`, clipping at the end of the record
    pub fn superimpose(&self, samples: &mut [f64]) -> PulseCoverage {
        if self.onset_index >= samples.len() {
            return PulseCoverage::Absent;
        }

        let end = self.onset_index.saturating_add(self.length).min(samples.len());
        for (i, sample) in samples[self.onset_index..end].iter_mut().enumerate() {
            *sample += self.sample(i);
        }

        let written = end - self.onset_index;
        if written < self.length {
            PulseCoverage::Truncated { samples: written }
        } else {
            PulseCoverage::Full
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_placement() {
        let pulse = Pulse::at(38.3, 15.0, 5.0, 2.0, 0.25);
        assert_eq!(pulse.onset_index, 153);
        assert_eq!(pulse.length, 60);
    }

    #[test]
    fn test_full_pulse() {
        let mut samples = vec![0.0; 100];
        let pulse = Pulse {
            onset_index: 10,
            length: 21,
            cycles: 1.0,
            amplitude: 3.0,
        };
        assert_eq!(pulse.superimpose(&mut samples), PulseCoverage::Full);

        assert_eq!(samples[9], 0.0);
        assert!(samples[10].abs() < 1e-12); // sin(0)
        assert!((samples[15] - 3.0).abs() < 1e-12); // quarter cycle peak
        assert_eq!(samples[31], 0.0);
    }

    #[test]
    fn test_truncated_pulse() {
        let mut samples = vec![0.0; 50];
        let pulse = Pulse {
            onset_index: 40,
            length: 20,
            cycles: 5.0,
            amplitude: 6.0,
        };
        assert_eq!(
            pulse.superimpose(&mut samples),
            PulseCoverage::Truncated { samples: 10 }
        );
    }

    #[test]
    fn test_absent_pulse() {
        let mut samples = vec![0.0; 50];
        let pulse = Pulse {
            onset_index: 50,
            length: 20,
            cycles: 5.0,
            amplitude: 6.0,
        };
        assert_eq!(pulse.superimpose(&mut samples), PulseCoverage::Absent);
        assert!(samples.iter().all(|&s| s == 0.0));
    }
}
