//! Build a fully-initialized simulation from configuration and drive it
//! one frame at a time.
//!
//! `Simulation` is the runtime bundle: physics world, parameters, gravity
//! law, spawner, camera, curvature grid and the pause/stop flags. It is
//! inserted into Bevy as a `Resource` and advanced by the viewer, but
//! [`Simulation::advance`] needs nothing but an [`InputFrame`], so it runs
//! headless just as well.

use bevy::log::{info, warn};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, CameraConfig, ScenarioConfig, WorldConfig};
use crate::error::{SimError, SimResult};
use crate::interaction::camera::{CVec3, FlyCamera};
use crate::interaction::input::{Action, InputFrame};
use crate::interaction::spawner::Spawner;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::grid::GridField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, PhysicsWorld};

/// Outcome of one call to [`Simulation::advance`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub spawned: Vec<usize>, // indices of bodies created this frame
    pub stopped: bool, // quit was requested
}

#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    pub parameters: Parameters,
    pub world: PhysicsWorld,
    pub gravity: NewtonianGravity,
    pub spawner: Spawner,
    pub camera: FlyCamera,
    pub grid: GridField,
    pub paused: bool,
    pub running: bool,
}

fn positive(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

fn build_parameters(cfg: &WorldConfig) -> SimResult<Parameters> {
    Ok(Parameters {
        G: positive("G", cfg.G)?,
        c: positive("c", cfg.c)?,
        spawn_mass: positive("spawn_mass", cfg.spawn_mass)?,
        spawn_density: positive("spawn_density", cfg.spawn_density)?,
        spawn_color: cfg.spawn_color,
        growth_rate: cfg.growth_rate,
        nudge_step: cfg.nudge_step,
    })
}

fn build_camera(cfg: &CameraConfig) -> SimResult<FlyCamera> {
    positive("camera.near", cfg.near as f64)?;
    if cfg.far <= cfg.near {
        return Err(SimError::InvalidParameter {
            name: "camera.far",
            value: cfg.far as f64,
        });
    }

    let mut camera = FlyCamera {
        position: CVec3::from(cfg.position),
        sensitivity: cfg.sensitivity,
        move_speed: cfg.move_speed,
        scroll_speed: cfg.scroll_speed,
        fov_y: cfg.fov_y,
        near: cfg.near,
        far: cfg.far,
        ..FlyCamera::default()
    };
    camera.set_orientation(cfg.yaw, cfg.pitch);
    Ok(camera)
}

fn build_body(bc: &BodyConfig, params: &Parameters) -> SimResult<Body> {
    let mut body = Body::new(NVec3::from(bc.x), NVec3::from(bc.v), bc.m, bc.density)?
        .with_color(bc.color.unwrap_or(params.spawn_color));
    if let Some(name) = &bc.name {
        body = body.with_name(name.clone());
    }
    Ok(body)
}

impl Simulation {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        let parameters = build_parameters(&cfg.world)?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, &parameters))
            .collect::<SimResult<Vec<_>>>()?;

        for b in &bodies {
            info!("{}: mass {:.4e} kg, radius {:.3}", b.label(), b.mass(), b.radius());
        }
        if bodies.is_empty() {
            warn!("scenario has no seed bodies");
        }

        let mut grid = GridField::new(cfg.grid.size, cfg.grid.divisions)?;
        grid.regenerate(&bodies, parameters.G, parameters.c);

        Ok(Self {
            gravity: NewtonianGravity { G: parameters.G },
            camera: build_camera(&cfg.camera)?,
            world: PhysicsWorld::new(bodies),
            spawner: Spawner::default(),
            grid,
            parameters,
            paused: false,
            running: true,
        })
    }

    /// Run one frame: camera, pause flag, spawner, physics tick, grid.
    pub fn advance(&mut self, input: &InputFrame) -> FrameReport {
        let dt = input.dt();
        let mut report = FrameReport::default();
        if !self.running {
            report.stopped = true;
            return report;
        }

        if input.is_held(Action::Quit) {
            info!("quit requested at t = {:.2} s", self.world.t);
            self.running = false;
            report.stopped = true;
            return report;
        }

        self.camera.update(input, dt as f32);
        self.paused = input.is_held(Action::PauseHold);

        match self.spawner.update(&mut self.world, &input.spawn, &self.parameters) {
            Ok(spawned) => report.spawned = spawned,
            Err(e) => warn!("spawner: {e}"),
        }

        self.world.tick(&self.gravity, self.paused, dt);
        self.grid.regenerate(&self.world.bodies, self.parameters.G, self.parameters.c);

        report
    }
}
