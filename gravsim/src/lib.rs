pub mod error;
pub mod simulation;
pub mod interaction;
pub mod configuration;
pub mod visualization;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, Phase, PhysicsWorld, NVec3, derived_radius, collision_factor};
pub use simulation::params::Parameters;
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::tick;
pub use simulation::grid::GridField;
pub use simulation::scenario::{Simulation, FrameReport};

pub use interaction::input::{Action, HeldActions, InputFrame, Nudge, NudgeEvent, SpawnInput};
pub use interaction::spawner::{BodyMutation, Spawner, SpawnerState};
pub use interaction::camera::FlyCamera;

pub use configuration::config::{WorldConfig, GridConfig, CameraConfig, BodyConfig, ScenarioConfig};

pub use visualization::viewer::run_3d;
