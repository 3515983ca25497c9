//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WorldConfig`]  – physical constants and spawner settings
//! - [`GridConfig`]   – size and resolution of the curvature grid
//! - [`CameraConfig`] – initial camera pose and control speeds
//! - [`BodyConfig`]   – initial state for each seed body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies` may be omitted and falls back to defaults.
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   G: 6.6743e-11           # gravitational constant
//!   c: 299792458.0          # speed of light, grid heuristic only
//!   spawn_mass: 1.0e20      # mass of a body spawned with the mouse
//!   spawn_density: 3344.0
//!   growth_rate: 1.0        # fractional mass growth per second of holding
//!   nudge_step: 0.5         # world units per arrow-key nudge
//!
//! grid:
//!   size: 10000.0
//!   divisions: 50
//!
//! camera:
//!   position: [0.0, 1000.0, 5000.0]
//!   yaw: -90.0
//!   pitch: 0.0
//!
//! bodies:
//!   - name: earth
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 5.97219e24
//!     density: 5515.0
//!   - name: moon
//!     x: [3844.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 228.0]
//!     m: 7.34767309e22
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimResult;
use crate::interaction::camera::FlyCamera;
use crate::simulation::params::{Parameters, DEFAULT_DENSITY};

/// Physical constants and spawner settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
#[allow(non_snake_case)]
pub struct WorldConfig {
    pub G: f64,
    pub c: f64,
    pub spawn_mass: f64,
    pub spawn_density: f64,
    pub spawn_color: [f32; 4],
    pub growth_rate: f64,
    pub nudge_step: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            c: p.c,
            spawn_mass: p.spawn_mass,
            spawn_density: p.spawn_density,
            spawn_color: p.spawn_color,
            growth_rate: p.growth_rate,
            nudge_step: p.nudge_step,
        }
    }
}

/// Curvature grid extent and resolution
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GridConfig {
    pub size: f64,
    pub divisions: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 10000.0,
            divisions: 50,
        }
    }
}

/// Initial camera pose and control speeds
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    pub move_speed: f32,
    pub scroll_speed: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let cam = FlyCamera::default();
        Self {
            position: cam.position.into(),
            yaw: cam.yaw,
            pitch: cam.pitch,
            sensitivity: cam.sensitivity,
            move_speed: cam.move_speed,
            scroll_speed: cam.scroll_speed,
            fov_y: cam.fov_y,
            near: cam.near,
            far: cam.far,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // used in log output
    pub x: [f64; 3], // initial position, world units
    #[serde(default)]
    pub v: [f64; 3], // initial velocity
    pub m: f64, // mass, kg
    #[serde(default = "default_density")]
    pub density: f64, // kg / m^3
    #[serde(default)]
    pub color: Option<[f32; 4]>, // RGBA, spawn color when absent
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> SimResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
