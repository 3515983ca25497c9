//! Interactive body creation.
//!
//! Press the spawn button to drop a new body at the origin in the sculpting
//! phase, hold the grow button to pump its mass, nudge it with the arrow keys,
//! release the spawn button to launch it.
//!
//! [`transition`] is a pure function from the current state and the frame's
//! spawn input to the next state plus a list of [`BodyMutation`]s;
//! [`apply`] carries the mutations out on the world. Within one frame the
//! events are taken in the order press, nudges, growth, release.

use bevy::log::{info, warn};

use super::input::{Nudge, NudgeEvent, SpawnInput};
use crate::error::SimResult;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, PhysicsWorld};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpawnerState {
    #[default]
    Idle,
    /// `body` indexes the world's body list
    Sculpting { body: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyMutation {
    /// Append a sculpting body; it lands at this index
    Spawn(usize),
    /// Move a sculpting body
    Nudge(usize, NVec3),
    /// Multiply a sculpting body's mass
    Grow(usize, f64),
    /// Sculpting -> Free
    Launch(usize),
}

/// World-space offset for one nudge event
pub fn nudge_offset(event: NudgeEvent, step: f64) -> NVec3 {
    let vertical = if event.shift { 0.0 } else { step };
    match event.direction {
        Nudge::Right => NVec3::new(step, 0.0, 0.0),
        Nudge::Left => NVec3::new(-step, 0.0, 0.0),
        Nudge::Up => NVec3::new(0.0, vertical, step),
        Nudge::Down => NVec3::new(0.0, -vertical, -step),
    }
}

/// Next spawner state for one frame of input.
///
/// `next_index` is the index a newly spawned body would get
/// (the world's current length).
pub fn transition(
    state: SpawnerState,
    input: &SpawnInput,
    next_index: usize,
    params: &Parameters,
) -> (SpawnerState, Vec<BodyMutation>) {
    let mut state = state;
    let mut mutations = Vec::new();

    if input.pressed {
        // Launch the previous body so only one is ever sculpting
        if let SpawnerState::Sculpting { body } = state {
            mutations.push(BodyMutation::Launch(body));
        }
        mutations.push(BodyMutation::Spawn(next_index));
        state = SpawnerState::Sculpting { body: next_index };
    }

    if let SpawnerState::Sculpting { body } = state {
        for event in &input.nudges {
            mutations.push(BodyMutation::Nudge(body, nudge_offset(*event, params.nudge_step)));
        }

        if input.grow_held {
            mutations.push(BodyMutation::Grow(body, 1.0 + params.growth_rate * input.dt));
        }

        if input.released {
            mutations.push(BodyMutation::Launch(body));
            state = SpawnerState::Idle;
        }
    }

    (state, mutations)
}

/// Carry out mutations on the world
pub fn apply(world: &mut PhysicsWorld, mutations: &[BodyMutation], params: &Parameters) -> SimResult<Vec<usize>> {
    let mut spawned = Vec::new();

    for mutation in mutations {
        match *mutation {
            BodyMutation::Spawn(_) => {
                let body = Body::new(NVec3::zeros(), NVec3::zeros(), params.spawn_mass, params.spawn_density)?
                    .with_color(params.spawn_color)
                    .sculpting();
                let index = world.push(body);
                info!("spawned body {index} (mass {:.3e} kg)", params.spawn_mass);
                spawned.push(index);
            }
            BodyMutation::Nudge(i, offset) => {
                if let Some(b) = world.bodies.get_mut(i).filter(|b| b.is_sculpting()) {
                    b.x += offset;
                }
            }
            BodyMutation::Grow(i, factor) => {
                if let Some(b) = world.bodies.get_mut(i).filter(|b| b.is_sculpting()) {
                    let m = b.mass() * factor;
                    if let Err(e) = b.set_mass(m) {
                        warn!("ignoring growth of body {i}: {e}");
                    }
                }
            }
            BodyMutation::Launch(i) => {
                if let Some(b) = world.bodies.get_mut(i).filter(|b| b.is_sculpting()) {
                    b.launch();
                    info!("launched body {i} (mass {:.3e} kg, radius {:.3})", b.mass(), b.radius());
                }
            }
        }
    }

    Ok(spawned)
}

/// Spawner bound to a world
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    pub state: SpawnerState,
}

impl Spawner {
    /// Index of the body being sculpted, if any
    pub fn sculpting(&self) -> Option<usize> {
        match self.state {
            SpawnerState::Sculpting { body } => Some(body),
            SpawnerState::Idle => None,
        }
    }

    /// Run one frame: transition, then apply. Returns the indices of spawned bodies.
    pub fn update(&mut self, world: &mut PhysicsWorld, input: &SpawnInput, params: &Parameters) -> SimResult<Vec<usize>> {
        if input.pressed && self.sculpting().is_some() {
            warn!("spawn pressed while a body is still sculpting; launching it first");
        }

        let (next, mutations) = transition(self.state, input, world.len(), params);
        let spawned = apply(world, &mutations, params)?;
        self.state = next;
        Ok(spawned)
    }
}
