//! Curvature grid: a line mesh on a horizontal plane, pushed up or down per
//! vertex by a Schwarzschild-radius heuristic summed over all bodies.
//!
//! This is a visual effect only. Nothing here feeds back into the physics.

use crate::error::{SimError, SimResult};
use crate::simulation::params::WORLD_TO_METERS;
use crate::simulation::states::{Body, NVec3};

/// Row of the plane above the grid's lower edge, in steps
const PLANE_ROW: f64 = 3.0;
/// Fraction of the half size the plane is lowered by before `PLANE_ROW` steps
const PLANE_DROP: f64 = 0.3;

const HEIGHT_GAIN: f64 = 100.0;
const HEIGHT_DIVISOR: f64 = 15.0;
const HEIGHT_OFFSET: f64 = 3000.0;

/// Schwarzschild radius `2 G m / c^2`, in meters
#[allow(non_snake_case)]
pub fn schwarzschild_radius(G: f64, c: f64, mass: f64) -> f64 {
    2.0 * G * mass / (c * c)
}

/// `2 sqrt(rs (d_m - rs)) * 100`. Inside rs the sqrt argument would be
/// negative; that term is clamped to 0.
pub fn displacement_term(rs: f64, distance_m: f64) -> f64 {
    let arg = rs * (distance_m - rs);
    if arg.is_nan() || arg <= 0.0 {
        return 0.0;
    }
    2.0 * arg.sqrt() * HEIGHT_GAIN
}

#[derive(Debug, Clone)]
pub struct GridField {
    pub size: f64, // edge length of the square plane
    pub divisions: usize, // segments per line
    vertices: Vec<[f32; 3]>, // line list, two vertices per segment
}

impl GridField {
    pub fn new(size: f64, divisions: usize) -> SimResult<Self> {
        if !(size.is_finite() && size > 0.0) || divisions == 0 {
            return Err(SimError::InvalidGrid { size, divisions });
        }
        Ok(Self {
            size,
            divisions,
            vertices: Vec::new(),
        })
    }

    pub fn step(&self) -> f64 {
        self.size / self.divisions as f64
    }

    /// Height of the plane before any displacement
    pub fn plane_height(&self) -> f64 {
        -self.size / 2.0 * PLANE_DROP + PLANE_ROW * self.step()
    }

    /// Vertical coordinate of an undisturbed vertex after the final rescale
    pub fn baseline(&self) -> f64 {
        rescale(self.plane_height())
    }

    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Undisplaced segments: lines along x (one per z row), then lines along z
    pub fn flat_segments(&self) -> Vec<NVec3> {
        let n = self.divisions;
        let step = self.step();
        let half = self.size / 2.0;
        let y = self.plane_height();

        let mut points = Vec::with_capacity(4 * n * (n + 1));

        // x lines
        for z_step in 0..=n {
            let z = -half + z_step as f64 * step;
            for x_step in 0..n {
                let x_start = -half + x_step as f64 * step;
                points.push(NVec3::new(x_start, y, z));
                points.push(NVec3::new(x_start + step, y, z));
            }
        }

        // z lines
        for x_step in 0..=n {
            let x = -half + x_step as f64 * step;
            for z_step in 0..n {
                let z_start = -half + z_step as f64 * step;
                points.push(NVec3::new(x, y, z_start));
                points.push(NVec3::new(x, y, z_start + step));
            }
        }

        points
    }

    /// Rebuild the line mesh against the current bodies
    #[allow(non_snake_case)]
    pub fn regenerate(&mut self, bodies: &[Body], G: f64, c: f64) -> &[[f32; 3]] {
        let sources: Vec<(NVec3, f64)> = bodies
            .iter()
            .map(|b| (b.x, schwarzschild_radius(G, c, b.mass())))
            .collect();

        self.vertices = self
            .flat_segments()
            .into_iter()
            .map(|p| {
                let lift: f64 = sources
                    .iter()
                    .map(|(x, rs)| displacement_term(*rs, (x - p).norm() * WORLD_TO_METERS))
                    .sum();
                [p.x as f32, rescale(p.y + lift) as f32, p.z as f32]
            })
            .collect();

        &self.vertices
    }
}

fn rescale(y: f64) -> f64 {
    y / HEIGHT_DIVISOR - HEIGHT_OFFSET
}
