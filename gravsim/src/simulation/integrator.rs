//! Fixed-step semi-implicit Euler tick for the N-body world
//!
//! Velocities are kicked first (gravity plus collision damping), then every
//! body drifts with its new velocity. Forces are evaluated against a
//! snapshot of the positions taken at the start of the tick.

use bevy::log::debug;

use super::forces::NewtonianGravity;
use super::states::{collision_factor, NVec3, PhysicsWorld};

/// What the kick pass needs from every body, captured before any update
struct Snapshot {
    x: NVec3,
    m: f64,
    radius: f64,
    sculpting: bool,
}

/// Advance the world by one frame.
///
/// For every ordered pair (i, j), i != j, with neither body sculpting:
/// kick i by the acceleration toward j (unless `paused`), then scale i's
/// velocity by the collision factor of the pair. Damping compounds once per
/// overlapping neighbour. Sculpting bodies only refresh their radius.
/// When not paused every body drifts and `world.t` advances by `dt`.
pub fn tick(world: &mut PhysicsWorld, gravity: &NewtonianGravity, paused: bool, dt: f64) {
    let n = world.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let snapshot: Vec<Snapshot> = world
        .bodies
        .iter()
        .map(|b| Snapshot {
            x: b.x,
            m: b.mass(),
            radius: b.radius(),
            sculpting: b.is_sculpting(),
        })
        .collect();

    // Kick
    for (i, body) in world.bodies.iter_mut().enumerate() {
        if snapshot[i].sculpting {
            body.refresh_radius();
            continue;
        }

        let si = &snapshot[i];
        for (j, sj) in snapshot.iter().enumerate() {
            if j == i || sj.sculpting {
                continue;
            }

            let Some(accel) = gravity.pair_acceleration(&si.x, si.m, &sj.x, sj.m) else {
                debug!("skipping degenerate pair ({i}, {j})");
                continue;
            };

            if !paused {
                body.apply_impulse(accel);
            }

            body.v *= collision_factor(&si.x, si.radius, &sj.x, sj.radius);
        }
    }

    if paused {
        return;
    }

    // Drift, every phase
    for body in world.bodies.iter_mut() {
        body.integrate();
    }

    world.t += dt;
}

impl PhysicsWorld {
    pub fn tick(&mut self, gravity: &NewtonianGravity, paused: bool, dt: f64) {
        tick(self, gravity, paused, dt);
    }
}
