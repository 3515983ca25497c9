//! Core state types for the N-body simulation.
//!
//! - `Body` holds the physical state of one sphere plus its cached mesh
//! - `Phase` tracks whether a body is still being sculpted by the user
//! - `PhysicsWorld` owns the ordered list of bodies and the elapsed time `t`

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};
use crate::simulation::mesh::{sphere_vertices, DEFAULT_SECTORS, DEFAULT_STACKS};
use crate::simulation::params::{COLLISION_FACTOR, IMPULSE_DIVISOR, POSITION_DIVISOR, RADIUS_SCALE};

pub type NVec3 = Vector3<f64>;

/// Lifecycle phase of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Newly spawned: position and mass are edited live, excluded from gravity and collision
    Sculpting,
    /// Moves under gravity
    Free,
}

/// `cbrt((3 m / rho) / (4 pi)) / 1e5`, the radius in world units
pub fn derived_radius(mass: f64, density: f64) -> f64 {
    ((3.0 * mass / density) / (4.0 * PI)).cbrt() / RADIUS_SCALE
}

/// Velocity multiplier for a pair of spheres: overlap flips and damps.
/// Touching exactly (`distance == ri + rj`) is not a collision.
pub fn collision_factor(xi: &NVec3, ri: f64, xj: &NVec3, rj: f64) -> f64 {
    let distance = (xj - xi).norm();
    if distance < ri + rj {
        COLLISION_FACTOR
    } else {
        1.0
    }
}

fn check_mass(mass: f64) -> SimResult<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidMass(mass))
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: Option<String>,
    pub x: NVec3, // position, world units
    pub v: NVec3, // velocity
    pub color: [f32; 4], // RGBA
    m: f64, // mass, kg
    density: f64, // kg / m^3, fixed after creation
    radius: f64, // derived from m and density
    phase: Phase,
    launched: bool, // true once released by the spawner
    mesh: Vec<[f32; 3]>,
    mesh_dirty: bool,
}

impl Body {
    /// Build a Free body; fails on non-positive mass or density
    pub fn new(x: NVec3, v: NVec3, m: f64, density: f64) -> SimResult<Self> {
        check_mass(m)?;
        if !(density.is_finite() && density > 0.0) {
            return Err(SimError::InvalidDensity(density));
        }

        let radius = derived_radius(m, density);
        let mut body = Self {
            name: None,
            x,
            v,
            color: [1.0, 0.0, 0.0, 1.0],
            m,
            density,
            radius,
            phase: Phase::Free,
            launched: false,
            mesh: Vec::new(),
            mesh_dirty: false,
        };
        body.mesh = body.generate_mesh(DEFAULT_STACKS, DEFAULT_SECTORS);
        Ok(body)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Put a fresh body into the sculpting phase
    pub fn sculpting(mut self) -> Self {
        self.phase = Phase::Sculpting;
        self.launched = false;
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_sculpting(&self) -> bool {
        self.phase == Phase::Sculpting
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Leave the sculpting phase; no-op for bodies already Free
    pub fn launch(&mut self) {
        if self.phase == Phase::Sculpting {
            self.phase = Phase::Free;
            self.launched = true;
        }
    }

    pub fn derived_radius(&self) -> f64 {
        derived_radius(self.m, self.density)
    }

    /// Recompute the radius, flagging the mesh when it actually changed
    pub fn refresh_radius(&mut self) {
        let r = self.derived_radius();
        if r != self.radius {
            self.radius = r;
            self.mesh_dirty = true;
        }
    }

    /// Change the mass (sculpting growth). Rejected values leave the body untouched.
    pub fn set_mass(&mut self, m: f64) -> SimResult<()> {
        check_mass(m)?;
        self.m = m;
        self.refresh_radius();
        Ok(())
    }

    pub fn generate_mesh(&self, stacks: usize, sectors: usize) -> Vec<[f32; 3]> {
        sphere_vertices(self.radius, stacks, sectors)
    }

    /// Current mesh, regenerated on read if the radius moved since the last one
    pub fn mesh(&mut self) -> &[[f32; 3]] {
        if self.mesh_dirty {
            self.mesh = self.generate_mesh(DEFAULT_STACKS, DEFAULT_SECTORS);
            self.mesh_dirty = false;
        }
        &self.mesh
    }

    pub fn mesh_dirty(&self) -> bool {
        self.mesh_dirty
    }

    /// Regenerated mesh if the radius changed, for re-upload by the renderer
    pub fn take_dirty_mesh(&mut self) -> Option<&[[f32; 3]]> {
        if self.mesh_dirty {
            Some(self.mesh())
        } else {
            None
        }
    }

    /// Drift: `x += v / 94`, then refresh the radius
    pub fn integrate(&mut self) {
        self.x += self.v / POSITION_DIVISOR;
        self.refresh_radius();
    }

    /// Kick: `v += dv / 96`
    pub fn apply_impulse(&mut self, dv: NVec3) {
        self.v += dv / IMPULSE_DIVISOR;
    }

    pub fn collision_factor(&self, other: &Body) -> f64 {
        collision_factor(&self.x, self.radius, &other.x, other.radius)
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("body")
    }
}

/// Ordered set of bodies (creation order) and elapsed time
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    pub bodies: Vec<Body>, // never shrinks during a run
    pub t: f64, // seconds of unpaused frame time
}

impl PhysicsWorld {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Append a body, returning its index
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn sculpting_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_sculpting()).count()
    }
}
