//! Pairwise Newtonian gravity for the n-body engine
//!
//! Unlike a softened N-body kernel, this is the bare inverse-square law with
//! distances converted from world units to meters. Coincident bodies are
//! skipped instead of softened.

use crate::simulation::params::{DEFAULT_G, WORLD_TO_METERS};
use crate::simulation::states::NVec3;

/// Direct (n^2) Newtonian gravity
#[derive(Debug, Clone, Copy)]
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G: DEFAULT_G }
    }
}

impl NewtonianGravity {
    /// Acceleration on body i (at `xi`, mass `mi`) due to body j.
    ///
    /// `F = G mi mj / d_m^2` with `d_m = |xj - xi| * 1000`, `a = F / mi`
    /// along the unit vector from i to j. Returns `None` when the bodies
    /// coincide or the result is not finite, so the caller skips the pair.
    pub fn pair_acceleration(&self, xi: &NVec3, mi: f64, xj: &NVec3, mj: f64) -> Option<NVec3> {
        // r points from i to j, i is pulled along +r
        let r = xj - xi;
        let distance = r.norm();
        if !(distance.is_finite() && distance > 0.0) {
            return None;
        }

        let direction = r / distance;
        let distance_m = distance * WORLD_TO_METERS;

        let force = self.G * mi * mj / (distance_m * distance_m);
        let accel = force / mi;
        if !accel.is_finite() {
            return None;
        }

        Some(direction * accel)
    }

    /// Magnitude of the acceleration on a body from a mass `mj` at `distance` world units
    pub fn acceleration_magnitude(&self, mj: f64, distance: f64) -> f64 {
        let distance_m = distance * WORLD_TO_METERS;
        self.G * mj / (distance_m * distance_m)
    }
}
