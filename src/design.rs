//! NSR-10 elastic design spectrum

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};
use crate::math::linspace;

/// Site parameters of the NSR-10 elastic design spectrum
///
/// Spectral ordinates come out as a fraction of g. The spectrum is
/// piecewise in period: a ramp up to `t0`, a plateau to `tc`, a 1/T
/// branch to `tl` and a 1/T² branch beyond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nsr10Spectrum {
    /// Effective peak acceleration coefficient Aa
    pub aa: f64,
    /// Effective peak velocity coefficient Av
    pub av: f64,
    /// Short-period site coefficient Fa
    pub fa: f64,
    /// Intermediate-period site coefficient Fv
    pub fv: f64,
    /// Importance factor I
    pub importance: f64,
}

impl Nsr10Spectrum {
    /// Create a design spectrum from site coefficients
    pub fn new(aa: f64, av: f64, fa: f64, fv: f64, importance: f64) -> SolverResult<Self> {
        for (name, value) in [
            ("Aa", aa),
            ("Av", av),
            ("Fa", fa),
            ("Fv", fv),
            ("importance factor", importance),
        ] {
            if value <= 0.0 {
                return Err(SolverError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        Ok(Self {
            aa,
            av,
            fa,
            fv,
            importance,
        })
    }

    /// Corner period T0 = 0.1·Av·Fv/(Aa·Fa) in s
    pub fn t0(&self) -> f64 {
        0.1 * self.av * self.fv / (self.aa * self.fa)
    }

    /// Corner period Tc = 0.48·Av·Fv/(Aa·Fa) in s
    pub fn tc(&self) -> f64 {
        0.48 * self.av * self.fv / (self.aa * self.fa)
    }

    /// Long-period corner TL = 2.4·Fv in s
    pub fn tl(&self) -> f64 {
        2.4 * self.fv
    }

    /// Design pseudo-acceleration at one period, as a fraction of g
    ///
    /// `period` is taken as non-negative; [`Self::evaluate`] validates.
    pub fn sa_at(&self, period: f64) -> f64 {
        let plateau = 2.5 * self.aa * self.fa * self.importance;

        if period <= self.t0() {
            plateau * (0.4 + 0.6 * period / self.t0())
        } else if period <= self.tc() {
            plateau
        } else if period <= self.tl() {
            1.2 * self.av * self.fv * self.importance / period
        } else {
            1.2 * self.av * self.fv * self.importance * self.tl() / (period * period)
        }
    }

    /// Evaluate the spectrum over a period grid
    pub fn evaluate(&self, periods: &[f64]) -> SolverResult<Vec<f64>> {
        periods
            .iter()
            .map(|&period| {
                if period < 0.0 {
                    return Err(SolverError::InvalidParameter(format!(
                        "period must be non-negative, got {period}"
                    )));
                }
                Ok(self.sa_at(period))
            })
            .collect()
    }

    /// The conventional evaluation grid, 500 periods over [0, 4] s
    pub fn standard_periods() -> Vec<f64> {
        linspace(0.0, 4.0, 500)
    }
}
