//! Fourier amplitude spectrum of ground-motion records

use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{SolverError, SolverResult};

/// One-sided Fourier amplitude spectrum
///
/// Rows are ordered by ascending frequency, so `periods` runs from the
/// record duration down to twice the sample spacing. The zero-frequency
/// bin is excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourierSpectrum {
    /// Periods in s, descending
    pub periods: Vec<f64>,
    /// Fourier amplitude at each period
    pub amplitudes: Vec<f64>,
}

impl FourierSpectrum {
    /// Number of frequency bins in the spectrum
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Period of the largest-amplitude bin
    pub fn dominant_period(&self) -> Option<f64> {
        self.amplitudes
            .iter()
            .copied()
            .zip(self.periods.iter().copied())
            .max_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, period)| period)
    }

    /// Serialize the spectrum to a JSON string
    pub fn to_json(&self) -> SolverResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Fourier amplitude spectrum of an acceleration record
///
/// With N samples spanning td = (N-1)·dt, bin i carries circular
/// frequency i·2π/td and amplitude |FFT(record)[i]|·td/N, for
/// i = 1 … N/2. The zero-frequency bin is dropped.
///
/// # Arguments
/// * `record` - Acceleration samples at uniform spacing
/// * `dt` - Sample spacing in s
pub fn fourier_amplitude_spectrum(record: &[f64], dt: f64) -> SolverResult<FourierSpectrum> {
    if dt <= 0.0 {
        return Err(SolverError::InvalidParameter(format!(
            "time step must be positive, got {dt}"
        )));
    }
    if record.len() < 2 {
        return Err(SolverError::InvalidInput(format!(
            "record must hold at least two samples, got {}",
            record.len()
        )));
    }

    let n = record.len();
    let duration = (n - 1) as f64 * dt;
    let delta_omega = 2.0 * PI / duration;
    let bins = n / 2 + 1;

    let mut buffer: Vec<Complex<f64>> = record.iter().map(|&a| Complex::new(a, 0.0)).collect();
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let scale = duration / n as f64;
    let mut periods = Vec::with_capacity(bins - 1);
    let mut amplitudes = Vec::with_capacity(bins - 1);
    for (i, value) in buffer.iter().enumerate().take(bins).skip(1) {
        let omega = i as f64 * delta_omega;
        periods.push(2.0 * PI / omega);
        amplitudes.push(value.norm() * scale);
    }

    Ok(FourierSpectrum {
        periods,
        amplitudes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sinusoid_peaks_at_its_own_period() {
        // 2 Hz sinusoid over 20 s lands exactly on bin 40
        let dt = 0.01;
        let record: Vec<f64> = (0..2000)
            .map(|i| (2.0 * PI * 2.0 * i as f64 * dt).sin())
            .collect();

        let spectrum = fourier_amplitude_spectrum(&record, dt).unwrap();
        let dominant = spectrum.dominant_period().unwrap();
        assert_relative_eq!(dominant, 0.5, epsilon = 1e-2);
    }

    #[test]
    fn test_sinusoid_amplitude_scaling() {
        // A whole number of cycles concentrates |FFT| = N·A/2 in one bin,
        // so the reported amplitude is A·td/2
        let dt = 0.01;
        let n = 2000;
        let amplitude = 0.7;
        let record: Vec<f64> = (0..n)
            .map(|i| amplitude * (2.0 * PI * 2.0 * i as f64 * dt).sin())
            .collect();

        let spectrum = fourier_amplitude_spectrum(&record, dt).unwrap();
        let duration = (n - 1) as f64 * dt;
        let peak = spectrum.amplitudes.iter().fold(0.0_f64, |acc, &a| acc.max(a));
        assert_relative_eq!(peak, amplitude * duration / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bin_count_and_period_ordering() {
        let record = vec![0.1; 100];
        let spectrum = fourier_amplitude_spectrum(&record, 0.02).unwrap();

        // N/2 + 1 one-sided bins minus the dropped zero-frequency bin
        assert_eq!(spectrum.len(), 50);
        // First bin sits at the record duration
        assert_relative_eq!(spectrum.periods[0], 99.0 * 0.02, epsilon = 1e-12);
        assert!(spectrum.periods.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_zero_record_has_zero_amplitudes() {
        let record = vec![0.0; 64];
        let spectrum = fourier_amplitude_spectrum(&record, 0.01).unwrap();
        assert!(spectrum.amplitudes.iter().all(|&a| a.abs() < 1e-12));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            fourier_amplitude_spectrum(&[0.1, 0.2], 0.0),
            Err(SolverError::InvalidParameter(_))
        ));
        assert!(matches!(
            fourier_amplitude_spectrum(&[0.1], 0.01),
            Err(SolverError::InvalidInput(_))
        ));
    }
}
