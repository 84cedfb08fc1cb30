//! Newmark-beta direct time integration for SDOF oscillators

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};
use crate::math::peak_abs;
use crate::oscillator::Oscillator;

/// Newmark-beta integration parameters
///
/// `beta` controls the assumed acceleration variation over the step,
/// `gamma` the velocity weighting. The scheme is unconditionally stable
/// for 2·beta >= gamma >= 1/2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewmarkParams {
    /// Newmark beta parameter
    pub beta: f64,
    /// Newmark gamma parameter
    pub gamma: f64,
}

impl NewmarkParams {
    /// Create parameters with explicit beta and gamma
    pub fn new(beta: f64, gamma: f64) -> Self {
        Self { beta, gamma }
    }

    /// Linear acceleration method (beta = 1/6, gamma = 1/2)
    pub fn linear_acceleration() -> Self {
        Self {
            beta: 1.0 / 6.0,
            gamma: 0.5,
        }
    }

    /// Average acceleration method (beta = 1/4, gamma = 1/2)
    pub fn average_acceleration() -> Self {
        Self {
            beta: 0.25,
            gamma: 0.5,
        }
    }

    /// Fox-Goodwin method (beta = 1/12, gamma = 1/2)
    pub fn fox_goodwin() -> Self {
        Self {
            beta: 1.0 / 12.0,
            gamma: 0.5,
        }
    }
}

impl Default for NewmarkParams {
    /// Linear acceleration parameters
    fn default() -> Self {
        Self::linear_acceleration()
    }
}

/// State of the oscillator at the first sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Initial displacement
    pub displacement: f64,
    /// Initial velocity
    pub velocity: f64,
    /// External force acting at the first sample
    pub force: f64,
}

impl InitialConditions {
    /// Create initial conditions from displacement, velocity and force
    pub fn new(displacement: f64, velocity: f64, force: f64) -> Self {
        Self {
            displacement,
            velocity,
            force,
        }
    }

    /// Oscillator starting at rest with no external force
    pub fn at_rest() -> Self {
        Self::default()
    }
}

/// Full response history of one integration run
///
/// All sequences have the same length as the input record. Sample 0
/// holds the prescribed initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseHistory {
    /// Sample instants in s
    pub time: Vec<f64>,
    /// Relative displacement
    pub displacement: Vec<f64>,
    /// Relative velocity
    pub velocity: Vec<f64>,
    /// Relative acceleration
    pub acceleration: Vec<f64>,
    /// Absolute acceleration (relative + ground)
    pub absolute_acceleration: Vec<f64>,
}

impl ResponseHistory {
    /// Number of samples in the history
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the history holds no samples
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Reduce the history to its peak absolute values
    pub fn peaks(&self) -> PeakResponse {
        PeakResponse {
            duration: self.time.last().copied().unwrap_or(0.0),
            displacement: peak_abs(&self.displacement),
            velocity: peak_abs(&self.velocity),
            absolute_acceleration: peak_abs(&self.absolute_acceleration),
        }
    }

    /// Serialize the history to a JSON string
    pub fn to_json(&self) -> SolverResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Peak absolute response values (summary mode)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakResponse {
    /// Record duration in s
    pub duration: f64,
    /// Peak absolute relative displacement
    pub displacement: f64,
    /// Peak absolute relative velocity
    pub velocity: f64,
    /// Peak absolute acceleration
    pub absolute_acceleration: f64,
}

/// Newmark-beta solver for a single oscillator
///
/// # Example
/// ```rust
/// use seismic_solver::prelude::*;
///
/// let oscillator = Oscillator::new(1.0, 0.05).unwrap();
/// let record = vec![0.0, 0.3, -0.2, 0.1, 0.0];
///
/// let history = NewmarkSolver::new(oscillator)
///     .solve(&record, 0.01)
///     .unwrap();
///
/// assert_eq!(history.len(), record.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NewmarkSolver {
    oscillator: Oscillator,
    params: NewmarkParams,
    initial: InitialConditions,
}

impl NewmarkSolver {
    /// Create a solver for the given oscillator with linear-acceleration
    /// parameters and at-rest initial conditions
    pub fn new(oscillator: Oscillator) -> Self {
        Self {
            oscillator,
            params: NewmarkParams::default(),
            initial: InitialConditions::default(),
        }
    }

    /// Override the integration parameters
    pub fn with_params(mut self, params: NewmarkParams) -> Self {
        self.params = params;
        self
    }

    /// Override the initial conditions
    pub fn with_initial_conditions(mut self, initial: InitialConditions) -> Self {
        self.initial = initial;
        self
    }

    /// Integrate the response to a ground-acceleration record
    ///
    /// # Arguments
    /// * `record` - Ground acceleration samples at uniform spacing
    /// * `dt` - Sample spacing in s
    ///
    /// # Returns
    /// Response histories with one sample per record sample. Sample 0 is
    /// the prescribed initial state; sample i+1 follows from sample i and
    /// the ground acceleration at sample i.
    pub fn solve(&self, record: &[f64], dt: f64) -> SolverResult<ResponseHistory> {
        self.validate(record, dt)?;

        let m = Oscillator::MASS;
        let k = self.oscillator.stiffness();
        let c = self.oscillator.damping_coefficient();
        let beta = self.params.beta;
        let gamma = self.params.gamma;

        // Integration constants
        let a1 = m / (beta * dt * dt) + gamma * c / (beta * dt);
        let a2 = m / (beta * dt) + (gamma / beta - 1.0) * c;
        let a3 = (1.0 / (2.0 * beta) - 1.0) * m + dt * (gamma / (2.0 * beta) - 1.0) * c;
        let k_eff = k + a1;

        let n = record.len();
        let mut displacement = vec![0.0; n];
        let mut velocity = vec![0.0; n];
        let mut acceleration = vec![0.0; n];

        displacement[0] = self.initial.displacement;
        velocity[0] = self.initial.velocity;
        acceleration[0] =
            (self.initial.force - c * self.initial.velocity - k * self.initial.displacement) / m;

        for i in 0..n - 1 {
            let p_eff = m * record[i]
                + a1 * displacement[i]
                + a2 * velocity[i]
                + a3 * acceleration[i];

            displacement[i + 1] = p_eff / k_eff;
            velocity[i + 1] = gamma / (beta * dt) * (displacement[i + 1] - displacement[i])
                + (1.0 - gamma / beta) * velocity[i]
                + dt * (1.0 - gamma / (2.0 * beta)) * acceleration[i];
            acceleration[i + 1] = (displacement[i + 1] - displacement[i]) / (beta * dt * dt)
                - velocity[i] / (beta * dt)
                - (1.0 / (2.0 * beta) - 1.0) * acceleration[i];
        }

        let time = (0..n).map(|i| i as f64 * dt).collect();
        let absolute_acceleration = acceleration
            .iter()
            .zip(record.iter())
            .map(|(a, g)| a + g)
            .collect();

        Ok(ResponseHistory {
            time,
            displacement,
            velocity,
            acceleration,
            absolute_acceleration,
        })
    }

    /// Integrate and reduce to peak absolute values (summary mode)
    ///
    /// Equals `solve(record, dt)?.peaks()` exactly.
    pub fn solve_peaks(&self, record: &[f64], dt: f64) -> SolverResult<PeakResponse> {
        Ok(self.solve(record, dt)?.peaks())
    }

    fn validate(&self, record: &[f64], dt: f64) -> SolverResult<()> {
        if self.oscillator.period <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "period must be positive, got {}",
                self.oscillator.period
            )));
        }
        if self.oscillator.damping < 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "damping ratio must be non-negative, got {}",
                self.oscillator.damping
            )));
        }
        if dt <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "time step must be positive, got {dt}"
            )));
        }
        if self.params.beta <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "beta must be positive, got {}",
                self.params.beta
            )));
        }
        if record.is_empty() {
            return Err(SolverError::InvalidInput(
                "ground-motion record is empty".to_string(),
            ));
        }
        Ok(())
    }
}
