//! Seismic Solver - native Rust earthquake engineering utilities
//!
//! This library provides single-degree-of-freedom seismic response
//! analysis built around the Newmark-beta method, supporting:
//! - Direct time integration of ground-motion records (linear
//!   acceleration, average acceleration, Fox-Goodwin)
//! - Elastic response spectra with a parallel period sweep
//! - Average spectral acceleration over the 0.2T-2.5T band
//! - Fourier amplitude spectra of records
//! - Goodness-of-fit metrics (Nash-Sutcliffe, Kling-Gupta)
//! - Residual drift extraction and the NSR-10 design spectrum
//! - Bar-buckling and concrete-regularization material utilities
//!
//! ## Example
//! ```rust
//! use seismic_solver::prelude::*;
//!
//! // A 1 s oscillator at 5% damping
//! let oscillator = Oscillator::new(1.0, 0.05).unwrap();
//!
//! // Short synthetic pulse
//! let record: Vec<f64> = (0..500).map(|i| 0.3 * (i as f64 * 0.05).sin()).collect();
//!
//! // Full response histories
//! let history = NewmarkSolver::new(oscillator).solve(&record, 0.01).unwrap();
//! assert_eq!(history.len(), record.len());
//!
//! // Summary mode keeps only the peaks
//! let peaks = NewmarkSolver::new(oscillator).solve_peaks(&record, 0.01).unwrap();
//! assert!(peaks.displacement > 0.0);
//!
//! // Elastic response spectrum over the default period grid
//! let spectrum = response_spectrum(&record, 0.01, 0.05, &PeriodGrid::default()).unwrap();
//! assert_eq!(spectrum.len(), 400);
//! ```

pub mod design;
pub mod error;
pub mod fourier;
pub mod materials;
pub mod math;
pub mod metrics;
pub mod newmark;
pub mod oscillator;
pub mod signal;
pub mod spectrum;

// Re-export common types
pub mod prelude {
    pub use crate::design::Nsr10Spectrum;
    pub use crate::error::{SolverError, SolverResult};
    pub use crate::fourier::{fourier_amplitude_spectrum, FourierSpectrum};
    pub use crate::materials::{BucklingEnvelope, Concrete, ReinforcingSteel};
    pub use crate::metrics::{kge, nse};
    pub use crate::newmark::{
        InitialConditions, NewmarkParams, NewmarkSolver, PeakResponse, ResponseHistory,
    };
    pub use crate::oscillator::Oscillator;
    pub use crate::signal::{local_maxima, local_minima, residual_drift};
    pub use crate::spectrum::{
        average_spectral_acceleration, response_spectrum, PeriodGrid, ResponseSpectrum,
    };
}
