//! Single-degree-of-freedom oscillator properties

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{SolverError, SolverResult};

/// Unit-mass SDOF oscillator defined by its period and damping ratio
///
/// All derived properties (stiffness, damping coefficient) are normalized
/// to unit mass, so spectral ordinates come out in record units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Natural period in s
    pub period: f64,
    /// Fraction of critical damping (0.05 = 5%)
    pub damping: f64,
}

impl Oscillator {
    /// Mass of the normalized oscillator
    pub const MASS: f64 = 1.0;

    /// Create an oscillator with the given period (s) and damping ratio
    pub fn new(period: f64, damping: f64) -> SolverResult<Self> {
        if period <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "period must be positive, got {period}"
            )));
        }
        if damping < 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "damping ratio must be non-negative, got {damping}"
            )));
        }

        Ok(Self { period, damping })
    }

    /// Circular frequency ω = 2π/T in rad/s
    pub fn omega(&self) -> f64 {
        2.0 * PI / self.period
    }

    /// Natural frequency in Hz
    pub fn frequency(&self) -> f64 {
        1.0 / self.period
    }

    /// Stiffness k = m·ω²
    pub fn stiffness(&self) -> f64 {
        Self::MASS * self.omega() * self.omega()
    }

    /// Viscous damping coefficient c = 2·ζ·m·ω
    pub fn damping_coefficient(&self) -> f64 {
        2.0 * self.damping * Self::MASS * self.omega()
    }
}

impl Default for Oscillator {
    /// A 1.0 s oscillator at 5% damping
    fn default() -> Self {
        Self {
            period: 1.0,
            damping: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_properties() {
        let osc = Oscillator::new(1.0, 0.05).unwrap();
        assert_relative_eq!(osc.omega(), 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(osc.stiffness(), 4.0 * PI * PI, epsilon = 1e-12);
        assert_relative_eq!(osc.damping_coefficient(), 0.2 * PI, epsilon = 1e-12);
        assert_relative_eq!(osc.frequency(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_omega_halves_when_period_doubles() {
        let t1 = Oscillator::new(0.5, 0.0).unwrap();
        let t2 = Oscillator::new(1.0, 0.0).unwrap();
        assert_relative_eq!(t1.omega(), 2.0 * t2.omega(), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_period() {
        assert!(matches!(
            Oscillator::new(0.0, 0.05),
            Err(SolverError::InvalidParameter(_))
        ));
        assert!(matches!(
            Oscillator::new(-1.0, 0.05),
            Err(SolverError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_negative_damping() {
        assert!(matches!(
            Oscillator::new(1.0, -0.01),
            Err(SolverError::InvalidParameter(_))
        ));
    }
}
