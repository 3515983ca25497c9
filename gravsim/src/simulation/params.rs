//! Physical and calibration parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and speed of light (`G`, `c`),
//! - defaults for bodies spawned by the user,
//! - sculpting growth rate and nudge step
//!
//! The fixed calibration constants below tie the km-scale world to the
//! per-frame integration. They are not a physical timestep.

/// Position update divisor: `x += v / POSITION_DIVISOR` per tick
pub const POSITION_DIVISOR: f64 = 94.0;

/// Impulse divisor: `v += dv / IMPULSE_DIVISOR`
pub const IMPULSE_DIVISOR: f64 = 96.0;

/// World unit to meters, used in force and grid distance terms
pub const WORLD_TO_METERS: f64 = 1000.0;

/// Radius scale from meters to world units
pub const RADIUS_SCALE: f64 = 1.0e5;

/// Velocity factor applied when two bodies overlap
pub const COLLISION_FACTOR: f64 = -0.2;

/// Density used when none is given (kg / m^3)
pub const DEFAULT_DENSITY: f64 = 3344.0;

pub const DEFAULT_G: f64 = 6.6743e-11; // m^3 kg^-1 s^-2
pub const DEFAULT_C: f64 = 299_792_458.0; // m / s

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light, grid heuristic only
    pub spawn_mass: f64, // mass of a freshly spawned body
    pub spawn_density: f64, // density of a freshly spawned body
    pub spawn_color: [f32; 4], // RGBA of a freshly spawned body
    pub growth_rate: f64, // fractional mass growth per second while held
    pub nudge_step: f64, // world units per nudge event
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: DEFAULT_G,
            c: DEFAULT_C,
            spawn_mass: 5.0e20 / 5.0,
            spawn_density: DEFAULT_DENSITY,
            spawn_color: [1.0, 0.0, 0.0, 1.0],
            growth_rate: 1.0,
            nudge_step: 0.5,
        }
    }
}
