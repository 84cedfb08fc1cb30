//! Concrete crushing regularization for fiber-section elements

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Concrete fiber properties in N and mm units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    /// Compressive strength in MPa
    pub fc: f64,
    /// Elastic modulus in MPa
    pub elastic_modulus: f64,
    /// Strain at peak compressive stress
    pub strain_at_peak: f64,
    /// Crushing energy in N/mm
    pub fracture_energy: f64,
}

impl Concrete {
    /// Create a concrete material, validating every property is positive
    pub fn new(
        fc: f64,
        elastic_modulus: f64,
        strain_at_peak: f64,
        fracture_energy: f64,
    ) -> SolverResult<Self> {
        for (name, value) in [
            ("compressive strength", fc),
            ("elastic modulus", elastic_modulus),
            ("strain at peak stress", strain_at_peak),
            ("fracture energy", fracture_energy),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(SolverError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        Ok(Self {
            fc,
            elastic_modulus,
            strain_at_peak,
            fracture_energy,
        })
    }

    /// Unconfined concrete of the given strength
    ///
    /// The modulus is estimated with the ACI expression 4700·sqrt(fc),
    /// peak strain 0.002, and a representative 25 N/mm crushing energy.
    pub fn unconfined(fc: f64) -> SolverResult<Self> {
        Self::new(fc, 4700.0 * fc.abs().sqrt(), 0.002, 25.0)
    }

    /// Crushing strain regularized to the integration point length
    ///
    /// For a force-based element with a Gauss-Lobatto rule, the strain at
    /// 20% residual strength is adjusted so the crushing energy released
    /// over the end integration point stays mesh-independent:
    /// e20 = Gfc/(0.6·fc·Lip) - 0.8·fc/E + e0, with Lip the end-point
    /// tributary length. Counts outside 3-6 fall back to 0.1 of the
    /// element length with a warning.
    ///
    /// # Arguments
    /// * `element_length` - Element length in mm
    /// * `integration_points` - Gauss-Lobatto point count of the element
    pub fn regularized_crushing_strain(
        &self,
        element_length: f64,
        integration_points: usize,
    ) -> SolverResult<f64> {
        if element_length <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "element length must be positive, got {element_length}"
            )));
        }

        // End-point tributary length: Lel/2 times the end weight of the rule
        let lip = match integration_points {
            3 => element_length / 2.0 / 3.0,
            4 => element_length / 2.0 / 6.0,
            5 => element_length / 2.0 / 10.0,
            6 => element_length / 2.0 / 15.0,
            n => {
                log::warn!(
                    "no Gauss-Lobatto end weight for {n} integration points, \
                     using 0.1 of the element length"
                );
                0.1 * element_length
            }
        };

        Ok(self.fracture_energy / (0.6 * self.fc * lip)
            - 0.8 * self.fc / self.elastic_modulus
            + self.strain_at_peak)
    }
}
