//! Reinforcing steel with bar buckling per Dhakal-Maekawa

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};
use crate::math::interp;

/// Strain at which the bare bar fractures in tension
const FRACTURE_STRAIN: f64 = 0.05;
/// Strain at which cover spalling exposes the bar
const SPALLING_STRAIN: f64 = 0.004;
/// Strength retention factor of the buckled plateau
const ALPHA: f64 = 0.75;
/// Residual stress of the buckled bar as a fraction of fy
const RESIDUAL_STRESS_RATIO: f64 = 0.2;

/// Reinforcing steel bar properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcingSteel {
    /// Yield stress in MPa
    pub fy: f64,
    /// Ultimate stress in MPa
    pub fu: f64,
    /// Yield strain
    pub ey: f64,
    /// Strain at the onset of hardening
    pub eh: f64,
    /// Ultimate strain
    pub eu: f64,
}

impl ReinforcingSteel {
    /// Create a bar material, validating stress and strain ordering
    pub fn new(fy: f64, fu: f64, ey: f64, eh: f64, eu: f64) -> SolverResult<Self> {
        if fy <= 0.0 || ey <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "yield stress and strain must be positive, got fy = {fy}, ey = {ey}"
            )));
        }
        if fu < fy {
            return Err(SolverError::InvalidParameter(format!(
                "ultimate stress {fu} is below the yield stress {fy}"
            )));
        }
        if eh <= ey || eu <= eh {
            return Err(SolverError::InvalidParameter(format!(
                "strains must satisfy ey < eh < eu, got {ey}, {eh}, {eu}"
            )));
        }

        Ok(Self { fy, fu, ey, eh, eu })
    }

    /// Grade 420 rebar (fy = 420 MPa, Es = 200 GPa)
    pub fn grade_420() -> Self {
        Self {
            fy: 420.0,
            fu: 630.0,
            ey: 0.0021,
            eh: 0.008,
            eu: 0.12,
        }
    }

    /// Elastic modulus fy/ey in MPa
    pub fn elastic_modulus(&self) -> f64 {
        self.fy / self.ey
    }

    /// Stress-strain envelope of the bar buckling between hoops
    ///
    /// The compression branch degrades with the slenderness of the
    /// unsupported length: the buckling strain and plateau stress both
    /// drop as L/D·sqrt(fy/100) grows, down to a residual of 0.2·fy.
    /// The tension branch follows the bare-steel envelope through
    /// fracture and ends at the same 0.2·fy residual.
    ///
    /// # Arguments
    /// * `hoop_spacing` - Unsupported length between hoops in mm
    /// * `bar_diameter` - Bar diameter in mm
    pub fn buckling_envelope(
        &self,
        hoop_spacing: f64,
        bar_diameter: f64,
    ) -> SolverResult<BucklingEnvelope> {
        if hoop_spacing <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "hoop spacing must be positive, got {hoop_spacing}"
            )));
        }
        if bar_diameter <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "bar diameter must be positive, got {bar_diameter}"
            )));
        }

        // The nudge keeps the yield-to-hardening segment strictly increasing
        let fh = self.fy + 0.01;
        let hardening_strain = [self.eh, self.eu];
        let hardening_stress = [fh, self.fu];

        let slenderness = (self.fy / 100.0).sqrt() * hoop_spacing / bar_diameter;
        let softening_slope = -0.02 * self.elastic_modulus();
        let residual = RESIDUAL_STRESS_RATIO * self.fy;

        // Buckling onset, floored at 7 times the yield strain
        let buckling_strain = ((55.0 - 2.3 * slenderness) * self.ey).max(7.0 * self.ey);
        let bare_stress = interp(buckling_strain, &hardening_strain, &hardening_stress);
        let buckling_stress = (ALPHA * (1.1 - 0.016 * slenderness) * bare_stress).max(residual);

        // Softening from the buckling plateau down to the residual stress
        let crushing_strain = (residual - buckling_stress) / softening_slope + buckling_strain;

        let fracture_stress = interp(FRACTURE_STRAIN, &hardening_strain, &hardening_stress);
        let spalling_stress = interp(SPALLING_STRAIN, &hardening_strain, &hardening_stress);

        Ok(BucklingEnvelope {
            strain: [
                -crushing_strain,
                -buckling_strain,
                -SPALLING_STRAIN,
                -self.ey,
                0.0,
                self.ey,
                self.eh,
                FRACTURE_STRAIN,
                self.eu,
            ],
            stress: [
                -residual,
                -buckling_stress,
                -spalling_stress,
                -self.fy,
                0.0,
                self.fy,
                fh,
                fracture_stress,
                residual,
            ],
        })
    }
}

impl Default for ReinforcingSteel {
    fn default() -> Self {
        Self::grade_420()
    }
}

/// Buckling-aware stress-strain envelope in hysteretic control points
///
/// Control points run from the most compressive strain to the most
/// tensile. Strains assume the bar yields below the 0.004 spalling
/// strain and fractures beyond 0.05.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucklingEnvelope {
    /// Strain control points, most compressive first
    pub strain: [f64; 9],
    /// Stress at each control point in MPa
    pub stress: [f64; 9],
}

impl BucklingEnvelope {
    /// Tension control points ordered outward from zero strain
    pub fn tension_branch(&self) -> [(f64, f64); 4] {
        [
            (self.strain[5], self.stress[5]),
            (self.strain[6], self.stress[6]),
            (self.strain[7], self.stress[7]),
            (self.strain[8], self.stress[8]),
        ]
    }

    /// Compression control points ordered outward from zero strain
    pub fn compression_branch(&self) -> [(f64, f64); 4] {
        [
            (self.strain[3], self.stress[3]),
            (self.strain[2], self.stress[2]),
            (self.strain[1], self.stress[1]),
            (self.strain[0], self.stress[0]),
        ]
    }

    /// Envelope stress at an arbitrary strain, clamped at the ends
    pub fn stress_at(&self, strain: f64) -> f64 {
        interp(strain, &self.strain, &self.stress)
    }
}
