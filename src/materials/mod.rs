//! Material models for fiber-section calibration

mod concrete;
mod steel;

pub use concrete::Concrete;
pub use steel::{BucklingEnvelope, ReinforcingSteel};
