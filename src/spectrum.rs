//! Elastic response spectra built from repeated Newmark integration

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{SolverError, SolverResult};
use crate::math::{geometric_mean, interp, linspace};
use crate::newmark::{NewmarkSolver, PeakResponse};
use crate::oscillator::Oscillator;

/// Linearly spaced period grid for a spectrum sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodGrid {
    /// Shortest period in s
    pub min: f64,
    /// Longest period in s
    pub max: f64,
    /// Number of periods
    pub points: usize,
}

impl PeriodGrid {
    /// Create a grid over `[min, max]` with `points` periods
    pub fn new(min: f64, max: f64, points: usize) -> SolverResult<Self> {
        if min <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "shortest period must be positive, got {min}"
            )));
        }
        if max < min {
            return Err(SolverError::InvalidParameter(format!(
                "longest period {max} is shorter than the shortest period {min}"
            )));
        }
        if points == 0 {
            return Err(SolverError::InvalidParameter(
                "period grid needs at least one point".to_string(),
            ));
        }

        Ok(Self { min, max, points })
    }

    /// Materialize the grid as ascending period values
    pub fn periods(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.points)
    }
}

impl Default for PeriodGrid {
    /// 400 periods over [0.02, 3.0] s
    fn default() -> Self {
        Self {
            min: 0.02,
            max: 3.0,
            points: 400,
        }
    }
}

/// Elastic response spectrum, one row per period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpectrum {
    /// Oscillator periods in s, ascending
    pub periods: Vec<f64>,
    /// Pseudo-spectral acceleration Sa = U·ω²
    pub pseudo_acceleration: Vec<f64>,
    /// Peak absolute relative displacement per period
    pub peak_displacement: Vec<f64>,
    /// Peak absolute relative velocity per period
    pub peak_velocity: Vec<f64>,
    /// Peak absolute acceleration per period
    pub peak_absolute_acceleration: Vec<f64>,
}

impl ResponseSpectrum {
    /// Number of periods in the spectrum
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the spectrum holds no periods
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Pseudo-spectral acceleration at an arbitrary period
    ///
    /// Linear interpolation over the spectrum's own grid, clamped at the
    /// ends. The grid is ascending as produced by [`response_spectrum`].
    pub fn sa_at(&self, period: f64) -> f64 {
        interp(period, &self.periods, &self.pseudo_acceleration)
    }

    /// Serialize the spectrum to a JSON string
    pub fn to_json(&self) -> SolverResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Sweep the Newmark integrator over a period grid
///
/// One summary-mode integration per period, all with the same record,
/// time step and damping ratio. The sweep is embarrassingly parallel and
/// runs on the rayon pool; rows are collected by period index.
///
/// # Arguments
/// * `record` - Ground acceleration samples at uniform spacing
/// * `dt` - Sample spacing in s
/// * `damping` - Fraction of critical damping shared by every oscillator
/// * `grid` - Periods to sweep
pub fn response_spectrum(
    record: &[f64],
    dt: f64,
    damping: f64,
    grid: &PeriodGrid,
) -> SolverResult<ResponseSpectrum> {
    if dt <= 0.0 {
        return Err(SolverError::InvalidParameter(format!(
            "time step must be positive, got {dt}"
        )));
    }
    if damping < 0.0 {
        return Err(SolverError::InvalidParameter(format!(
            "damping ratio must be non-negative, got {damping}"
        )));
    }
    if record.is_empty() {
        return Err(SolverError::InvalidInput(
            "ground-motion record is empty".to_string(),
        ));
    }

    let periods = grid.periods();
    let peaks = periods
        .par_iter()
        .map(|&period| {
            let oscillator = Oscillator::new(period, damping)?;
            NewmarkSolver::new(oscillator).solve_peaks(record, dt)
        })
        .collect::<SolverResult<Vec<PeakResponse>>>()?;

    let pseudo_acceleration = periods
        .iter()
        .zip(peaks.iter())
        .map(|(&period, p)| {
            let omega = 2.0 * PI / period;
            p.displacement * omega * omega
        })
        .collect();

    Ok(ResponseSpectrum {
        pseudo_acceleration,
        peak_displacement: peaks.iter().map(|p| p.displacement).collect(),
        peak_velocity: peaks.iter().map(|p| p.velocity).collect(),
        peak_absolute_acceleration: peaks.iter().map(|p| p.absolute_acceleration).collect(),
        periods,
    })
}

/// Average spectral acceleration over the band [0.2·T, 2.5·T]
///
/// For each target period the spectrum's Sa is interpolated at roughly
/// 0.01 s spacing across the band and reduced with the geometric mean.
/// Returns one value per target period.
pub fn average_spectral_acceleration(
    spectrum: &ResponseSpectrum,
    target_periods: &[f64],
) -> SolverResult<Vec<f64>> {
    if spectrum.is_empty() {
        return Err(SolverError::InvalidInput(
            "response spectrum is empty".to_string(),
        ));
    }
    if !spectrum.periods.windows(2).all(|w| w[0] < w[1]) {
        return Err(SolverError::InvalidInput(
            "spectrum periods must be strictly ascending".to_string(),
        ));
    }

    target_periods
        .iter()
        .map(|&period| {
            if period <= 0.0 {
                return Err(SolverError::InvalidParameter(format!(
                    "target period must be positive, got {period}"
                )));
            }

            let lo = 0.2 * period;
            let hi = 2.5 * period;
            let n = ((hi - lo) / 0.01).ceil() as usize;
            let band = linspace(lo, hi, n);

            let sa: Vec<f64> = band
                .iter()
                .map(|&t| interp(t, &spectrum.periods, &spectrum.pseudo_acceleration))
                .collect();
            Ok(geometric_mean(&sa))
        })
        .collect()
}
