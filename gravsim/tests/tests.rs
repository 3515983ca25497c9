use gravsim::simulation::mesh::sphere_vertices;
use gravsim::simulation::params::{COLLISION_FACTOR, IMPULSE_DIVISOR, POSITION_DIVISOR};
use gravsim::interaction::spawner::{nudge_offset, transition};
use gravsim::{
    collision_factor, derived_radius, Action, Body, BodyMutation, FlyCamera, GridField, HeldActions, InputFrame,
    NVec3, NewtonianGravity, Nudge, NudgeEvent, Parameters, Phase, PhysicsWorld, ScenarioConfig, SimError,
    Simulation, SpawnInput, Spawner, SpawnerState,
};

const G: f64 = 6.6743e-11;
const EARTH_MASS: f64 = 5.972e24;
const MOON_MASS: f64 = 7.347e22;

/// Free body at `x` with zero velocity
pub fn body_at(x: [f64; 3], m: f64) -> Body {
    Body::new(NVec3::from(x), NVec3::zeros(), m, 3344.0).unwrap()
}

/// Earth at the origin, Moon `dist` world units out along x
pub fn earth_moon(dist: f64) -> PhysicsWorld {
    PhysicsWorld::new(vec![body_at([0.0, 0.0, 0.0], EARTH_MASS), body_at([dist, 0.0, 0.0], MOON_MASS)])
}

pub fn gravity() -> NewtonianGravity {
    NewtonianGravity { G }
}

fn rel_err(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}

fn spawn_input(pressed: bool, released: bool, grow_held: bool, dt: f64) -> SpawnInput {
    SpawnInput {
        pressed,
        released,
        grow_held,
        nudges: Vec::new(),
        dt,
    }
}

// ==================================================================================
// Body tests
// ==================================================================================

#[test]
fn radius_matches_closed_form() {
    let (m, rho) = (5.97219e24, 5515.0);
    let expected = ((3.0 * m / rho) / (4.0 * std::f64::consts::PI)).cbrt() / 1e5;
    let b = Body::new(NVec3::zeros(), NVec3::zeros(), m, rho).unwrap();

    assert!(rel_err(b.radius(), expected) < 1e-12);
    assert!(rel_err(derived_radius(m, rho), expected) < 1e-12);
    // roughly the Earth: 6371 km / 100
    assert!((b.radius() - 63.7).abs() < 0.5, "radius {}", b.radius());
}

#[test]
fn radius_grows_with_mass() {
    let mut last = 0.0;
    for k in 1..50 {
        let r = derived_radius(1.0e18 * k as f64, 3344.0);
        assert!(r > last, "radius not increasing at step {k}");
        last = r;
    }
}

#[test]
fn rejects_non_positive_mass_and_density() {
    assert!(matches!(
        Body::new(NVec3::zeros(), NVec3::zeros(), 0.0, 3344.0),
        Err(SimError::InvalidMass(_))
    ));
    assert!(matches!(
        Body::new(NVec3::zeros(), NVec3::zeros(), -1.0, 3344.0),
        Err(SimError::InvalidMass(_))
    ));
    assert!(matches!(
        Body::new(NVec3::zeros(), NVec3::zeros(), 1.0, 0.0),
        Err(SimError::InvalidDensity(_))
    ));
    assert!(matches!(
        Body::new(NVec3::zeros(), NVec3::zeros(), f64::NAN, 3344.0),
        Err(SimError::InvalidMass(_))
    ));
}

#[test]
fn sphere_mesh_has_two_triangles_per_patch_on_the_radius() {
    let mut b = body_at([0.0, 0.0, 0.0], 1.0e22);
    let r = b.radius() as f32;
    let mesh = b.mesh();

    assert_eq!(mesh.len(), 10 * 10 * 6);
    for v in mesh {
        let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((len - r).abs() < 1e-4 * r.max(1.0), "vertex off the sphere: {len} vs {r}");
    }

    // first patch touches the north pole
    assert!((mesh[0][1] - r).abs() < 1e-6);
    assert_eq!(sphere_vertices(1.0, 3, 4).len(), 3 * 4 * 6);
}

#[test]
fn integrate_and_impulse_use_calibration_divisors() {
    let mut b = Body::new(NVec3::zeros(), NVec3::new(94.0, -188.0, 0.0), 1.0e20, 3344.0).unwrap();
    b.integrate();
    assert!((b.x - NVec3::new(1.0, -2.0, 0.0)).norm() < 1e-12);
    assert_eq!(POSITION_DIVISOR, 94.0);

    b.apply_impulse(NVec3::new(96.0, 0.0, 0.0));
    assert!((b.v - NVec3::new(95.0, -188.0, 0.0)).norm() < 1e-12);
    assert_eq!(IMPULSE_DIVISOR, 96.0);
}

#[test]
fn mass_change_marks_mesh_dirty_once() {
    let mut b = body_at([0.0, 0.0, 0.0], 1.0e20);
    assert!(!b.mesh_dirty());

    // same radius, nothing to upload
    b.integrate();
    assert!(b.take_dirty_mesh().is_none());

    let r0 = b.radius();
    b.set_mass(2.0e20).unwrap();
    assert!(b.radius() > r0);
    assert!(b.mesh_dirty());
    assert!(b.take_dirty_mesh().is_some());
    assert!(b.take_dirty_mesh().is_none());

    assert!(b.set_mass(0.0).is_err());
    assert_eq!(b.mass(), 2.0e20);
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn collision_factor_inside_and_outside() {
    let a = NVec3::zeros();
    assert_eq!(collision_factor(&a, 1.0, &NVec3::new(2.5, 0.0, 0.0), 2.0), -0.2);
    assert_eq!(collision_factor(&a, 1.0, &NVec3::new(3.5, 0.0, 0.0), 2.0), 1.0);
}

#[test]
fn collision_factor_at_contact_is_not_a_collision() {
    let a = NVec3::zeros();
    assert_eq!(collision_factor(&a, 1.0, &NVec3::new(3.0, 0.0, 0.0), 2.0), 1.0);
    assert_eq!(collision_factor(&a, 1.0, &NVec3::new(0.0, 0.0, -3.0), 2.0), 1.0);
}

#[test]
fn body_collision_factor_uses_both_radii() {
    let earth = body_at([0.0, 0.0, 0.0], EARTH_MASS);
    let near = body_at([earth.radius() * 0.5, 0.0, 0.0], MOON_MASS);
    let far = body_at([1000.0, 0.0, 0.0], MOON_MASS);

    assert_eq!(earth.collision_factor(&near), COLLISION_FACTOR);
    assert_eq!(near.collision_factor(&earth), COLLISION_FACTOR);
    assert_eq!(earth.collision_factor(&far), 1.0);
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_matches_inverse_square_in_meters() {
    let g = gravity();
    let d = 2500.0;
    let a = g
        .pair_acceleration(&NVec3::zeros(), 3.0e20, &NVec3::new(0.0, d, 0.0), 4.0e23)
        .unwrap();

    let expected = G * 4.0e23 / (d * 1000.0 * d * 1000.0);
    assert!(rel_err(a.norm(), expected) < 1e-12, "{} vs {}", a.norm(), expected);
    assert!(rel_err(g.acceleration_magnitude(4.0e23, d), expected) < 1e-12);
}

#[test]
fn gravity_points_toward_other_body() {
    let xi = NVec3::new(1.0, 2.0, 3.0);
    let xj = NVec3::new(-4.0, 6.0, 3.0);
    let a = gravity().pair_acceleration(&xi, 1.0e22, &xj, 1.0e22).unwrap();

    assert!(a.dot(&(xj - xi)) > 0.0, "acceleration is not toward second body");
    assert!(a.normalize().cross(&(xj - xi).normalize()).norm() < 1e-12);
}

#[test]
fn gravity_inverse_square_law() {
    let g = gravity();
    let a_r = g.pair_acceleration(&NVec3::zeros(), 1.0, &NVec3::new(100.0, 0.0, 0.0), 1.0e24).unwrap();
    let a_2r = g.pair_acceleration(&NVec3::zeros(), 1.0, &NVec3::new(200.0, 0.0, 0.0), 1.0e24).unwrap();

    let ratio = a_r.norm() / a_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);
}

#[test]
fn coincident_bodies_are_skipped() {
    let x = NVec3::new(5.0, 5.0, 5.0);
    assert!(gravity().pair_acceleration(&x, 1.0e20, &x, 1.0e20).is_none());

    let mut world = PhysicsWorld::new(vec![body_at([5.0, 5.0, 5.0], 1.0e20), body_at([5.0, 5.0, 5.0], 1.0e20)]);
    world.bodies[0].v = NVec3::new(1.0, 0.0, 0.0);
    world.tick(&gravity(), false, 0.016);

    for b in &world.bodies {
        assert!(b.x.iter().all(|c| c.is_finite()));
        assert!(b.v.iter().all(|c| c.is_finite()));
    }
    // no force and no collision damping for a coincident pair
    assert_eq!(world.bodies[0].v, NVec3::new(1.0, 0.0, 0.0));
    assert_eq!(world.bodies[1].v, NVec3::zeros());
}

// ==================================================================================
// Tick tests
// ==================================================================================

#[test]
fn earth_moon_first_tick_acceleration() {
    let mut world = earth_moon(3844.0);
    world.tick(&gravity(), false, 1.0 / 60.0);

    // one kick of a / 96, velocity started at zero
    let accel = world.bodies[1].v.norm() * IMPULSE_DIVISOR;
    let distance_m = 3844.0 * 1000.0;
    let expected = G * EARTH_MASS / (distance_m * distance_m);
    assert!(rel_err(accel, expected) < 1e-6, "{accel} vs {expected}");

    // pulled toward the Earth, and moved by v / 94 afterwards
    assert!(world.bodies[1].v.x < 0.0);
    let moved = 3844.0 - world.bodies[1].x.x;
    assert!(rel_err(moved, world.bodies[1].v.norm() / POSITION_DIVISOR) < 1e-9);
}

#[test]
fn tick_is_independent_of_body_order() {
    let bodies = vec![
        body_at([0.0, 0.0, 0.0], EARTH_MASS),
        body_at([3844.0, 0.0, 0.0], MOON_MASS),
        body_at([-2000.0, 500.0, 1500.0], 1.0e23),
    ];
    let mut forward = PhysicsWorld::new(bodies.clone());
    let mut reversed = PhysicsWorld::new(bodies.into_iter().rev().collect());
    forward.bodies[1].v = NVec3::new(0.0, 0.0, 228.0);
    reversed.bodies[1].v = NVec3::new(0.0, 0.0, 228.0);

    for _ in 0..20 {
        forward.tick(&gravity(), false, 0.016);
        reversed.tick(&gravity(), false, 0.016);
    }

    for (i, b) in forward.bodies.iter().enumerate() {
        let r = &reversed.bodies[2 - i];
        assert!((b.x - r.x).norm() <= 1e-9 * b.x.norm().max(1.0), "position differs for body {i}");
        assert!((b.v - r.v).norm() <= 1e-9 * b.v.norm().max(1e-12), "velocity differs for body {i}");
    }
}

#[test]
fn sculpting_body_ignores_gravity_and_collision() {
    let earth = body_at([0.0, 0.0, 0.0], EARTH_MASS);
    // inside the Earth: would collide and be pulled hard if it were Free
    let sculpt = body_at([10.0, 0.0, 0.0], 1.0e20).sculpting();
    let mut world = PhysicsWorld::new(vec![earth, sculpt]);

    world.tick(&gravity(), false, 0.016);

    assert_eq!(world.bodies[1].phase(), Phase::Sculpting);
    assert_eq!(world.bodies[1].v, NVec3::zeros());
    assert_eq!(world.bodies[1].x, NVec3::new(10.0, 0.0, 0.0));
    // and the Earth does not feel it either
    assert_eq!(world.bodies[0].v, NVec3::zeros());
}

#[test]
fn paused_tick_freezes_positions_and_time() {
    let mut world = earth_moon(3844.0);
    world.bodies[1].v = NVec3::new(0.0, 0.0, 228.0);

    world.tick(&gravity(), true, 0.5);

    assert_eq!(world.bodies[1].x, NVec3::new(3844.0, 0.0, 0.0));
    assert_eq!(world.bodies[1].v, NVec3::new(0.0, 0.0, 228.0));
    assert_eq!(world.t, 0.0);

    world.tick(&gravity(), false, 0.5);
    assert_eq!(world.t, 0.5);
}

// Overlap damping is applied once per overlapping neighbour, so two neighbours
// give (-0.2)^2. This looks like a double count but is the current behaviour.
#[test]
fn collision_damping_compounds_per_neighbour() {
    let mut world = PhysicsWorld::new(vec![
        body_at([0.0, 0.0, 0.0], 1.0e22),
        body_at([0.5, 0.0, 0.0], 1.0e22),
        body_at([-0.5, 0.0, 0.0], 1.0e22),
    ]);
    world.bodies[0].v = NVec3::new(0.0, 10.0, 0.0);

    // paused: no gravity kick, damping still applies
    world.tick(&gravity(), true, 0.016);

    let expected = 10.0 * COLLISION_FACTOR * COLLISION_FACTOR;
    assert!((world.bodies[0].v.y - expected).abs() < 1e-12, "got {}", world.bodies[0].v.y);
}

// ==================================================================================
// Grid tests
// ==================================================================================

#[test]
fn empty_grid_is_flat_at_baseline() {
    let mut grid = GridField::new(10000.0, 50).unwrap();
    let baseline = grid.baseline() as f32;
    let vertices = grid.regenerate(&[], G, 299_792_458.0);

    assert_eq!(vertices.len(), 4 * 50 * 51);
    assert!(vertices.iter().all(|v| v[1] == baseline));

    // (-size/2 * 0.3 + 3 * step) / 15 - 3000
    let expected = (-5000.0 * 0.3 + 3.0 * 200.0) / 15.0 - 3000.0;
    assert!((grid.baseline() - expected).abs() < 1e-9);
}

#[test]
fn grid_segments_cover_the_plane() {
    let mut grid = GridField::new(100.0, 4).unwrap();
    let vertices = grid.regenerate(&[], G, 299_792_458.0).to_vec();

    let (xs, zs): (Vec<f32>, Vec<f32>) = vertices.iter().map(|v| (v[0], v[2])).unzip();
    let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_z = zs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(min_x, -50.0);
    assert_eq!(max_z, 50.0);

    // every segment is one step long
    for pair in vertices.chunks(2) {
        let dx = pair[1][0] - pair[0][0];
        let dz = pair[1][2] - pair[0][2];
        assert!(((dx * dx + dz * dz).sqrt() - 25.0).abs() < 1e-4);
    }
}

#[test]
fn grid_rises_near_mass_and_stays_finite_inside_rs() {
    // 1e30 kg: rs is about 1.5 km. The body sits exactly on a grid vertex,
    // so that vertex is inside rs
    let heavy = body_at([0.0, -900.0, 0.0], 1.0e30);
    let mut grid = GridField::new(10000.0, 50).unwrap();
    let baseline = grid.baseline() as f32;

    let vertices = grid.regenerate(&[heavy], G, 299_792_458.0);
    assert!(vertices.iter().all(|v| v[1].is_finite()));
    assert!(vertices.iter().all(|v| v[1] >= baseline));
    assert!(vertices.iter().any(|v| v[1] > baseline));
}

#[test]
fn grid_clamps_negative_sqrt_argument() {
    use gravsim::simulation::grid::{displacement_term, schwarzschild_radius};

    let rs = schwarzschild_radius(G, 299_792_458.0, 1.0e30);
    assert!(rs > 1000.0 && rs < 2000.0);
    assert_eq!(displacement_term(rs, 0.0), 0.0);
    assert_eq!(displacement_term(rs, rs * 0.5), 0.0);
    assert!((displacement_term(rs, 2.0 * rs) - 2.0 * rs * 100.0).abs() < 1e-6);
}

#[test]
fn grid_rejects_zero_divisions() {
    assert!(GridField::new(100.0, 0).is_err());
    assert!(GridField::new(-1.0, 10).is_err());
}

// ==================================================================================
// Spawner tests
// ==================================================================================

#[test]
fn press_then_release_launches_one_default_body() {
    let params = Parameters::default();
    let mut world = PhysicsWorld::default();
    let mut spawner = Spawner::default();

    let spawned = spawner.update(&mut world, &spawn_input(true, false, false, 0.016), &params).unwrap();
    assert_eq!(spawned, vec![0]);
    assert_eq!(spawner.state, SpawnerState::Sculpting { body: 0 });
    assert!(world.bodies[0].is_sculpting());

    spawner.update(&mut world, &spawn_input(false, true, false, 0.016), &params).unwrap();
    assert_eq!(spawner.state, SpawnerState::Idle);
    assert_eq!(world.len(), 1);

    let b = &world.bodies[0];
    assert_eq!(b.phase(), Phase::Free);
    assert!(b.is_launched());
    assert_eq!(b.mass(), params.spawn_mass);
    assert_eq!(b.x, NVec3::zeros());
}

#[test]
fn press_and_release_in_one_frame() {
    let params = Parameters::default();
    let (state, mutations) = transition(SpawnerState::Idle, &spawn_input(true, true, false, 0.016), 3, &params);

    assert_eq!(state, SpawnerState::Idle);
    assert_eq!(mutations, vec![BodyMutation::Spawn(3), BodyMutation::Launch(3)]);
}

#[test]
fn holding_grow_multiplies_mass_each_frame() {
    let params = Parameters::default();
    let mut world = PhysicsWorld::default();
    let mut spawner = Spawner::default();

    spawner.update(&mut world, &spawn_input(true, false, false, 0.1), &params).unwrap();
    let r0 = world.bodies[0].radius();
    for _ in 0..3 {
        spawner.update(&mut world, &spawn_input(false, false, true, 0.1), &params).unwrap();
    }

    let expected = params.spawn_mass * 1.1_f64.powi(3);
    assert!(rel_err(world.bodies[0].mass(), expected) < 1e-12);
    assert!(world.bodies[0].radius() > r0);
    assert!(world.bodies[0].mesh_dirty());
}

#[test]
fn release_and_grow_without_sculpting_are_no_ops() {
    let params = Parameters::default();
    let input = SpawnInput {
        released: true,
        grow_held: true,
        nudges: vec![NudgeEvent::new(Nudge::Left)],
        dt: 0.016,
        ..Default::default()
    };
    let (state, mutations) = transition(SpawnerState::Idle, &input, 0, &params);

    assert_eq!(state, SpawnerState::Idle);
    assert!(mutations.is_empty());
}

#[test]
fn nudges_move_only_the_sculpting_body() {
    let params = Parameters::default();
    let mut world = PhysicsWorld::new(vec![body_at([100.0, 0.0, 0.0], 1.0e22)]);
    let mut spawner = Spawner::default();
    spawner.update(&mut world, &spawn_input(true, false, false, 0.016), &params).unwrap();

    let input = SpawnInput {
        nudges: vec![
            NudgeEvent::new(Nudge::Right),
            NudgeEvent::new(Nudge::Right),
            NudgeEvent::new(Nudge::Up),
            NudgeEvent::shifted(Nudge::Down),
        ],
        dt: 0.016,
        ..Default::default()
    };
    spawner.update(&mut world, &input, &params).unwrap();

    // right twice: +1 x; up: +0.5 y +0.5 z; shifted down: -0.5 z only
    assert_eq!(world.bodies[1].x, NVec3::new(1.0, 0.5, 0.0));
    assert_eq!(world.bodies[0].x, NVec3::new(100.0, 0.0, 0.0));
}

#[test]
fn nudge_offsets() {
    assert_eq!(nudge_offset(NudgeEvent::new(Nudge::Left), 0.5), NVec3::new(-0.5, 0.0, 0.0));
    assert_eq!(nudge_offset(NudgeEvent::new(Nudge::Down), 0.5), NVec3::new(0.0, -0.5, -0.5));
    assert_eq!(nudge_offset(NudgeEvent::shifted(Nudge::Up), 0.5), NVec3::new(0.0, 0.0, 0.5));
    assert_eq!(nudge_offset(NudgeEvent::shifted(Nudge::Right), 0.5), NVec3::new(0.5, 0.0, 0.0));
}

#[test]
fn second_press_launches_the_previous_body() {
    let params = Parameters::default();
    let mut world = PhysicsWorld::default();
    let mut spawner = Spawner::default();

    spawner.update(&mut world, &spawn_input(true, false, false, 0.016), &params).unwrap();
    spawner.update(&mut world, &spawn_input(true, false, false, 0.016), &params).unwrap();

    assert_eq!(world.len(), 2);
    assert_eq!(world.sculpting_count(), 1);
    assert!(world.bodies[0].is_launched());
    assert_eq!(spawner.sculpting(), Some(1));
}

// ==================================================================================
// Camera tests
// ==================================================================================

#[test]
fn camera_starts_looking_down_negative_z() {
    let cam = FlyCamera::default();
    assert!((cam.front.z + 1.0).abs() < 1e-6);
    assert!(cam.front.x.abs() < 1e-6 && cam.front.y.abs() < 1e-6);
}

#[test]
fn camera_pitch_is_clamped() {
    let mut cam = FlyCamera::default();
    cam.look(0.0, -100000.0);
    assert_eq!(cam.pitch, 89.0);
    cam.look(0.0, 100000.0);
    assert_eq!(cam.pitch, -89.0);
    assert!((cam.front.norm() - 1.0).abs() < 1e-6);
}

#[test]
fn camera_moves_along_held_actions() {
    let mut cam = FlyCamera::default();
    let start = cam.position;
    let frame = InputFrame {
        held: HeldActions::default().with(Action::Forward).with(Action::Up),
        ..InputFrame::idle(0.5)
    };
    cam.fly(&frame, 0.5);

    // 500 units forward (-z) and 500 up
    assert!((cam.position.z - (start.z - 500.0)).abs() < 1e-2);
    assert!((cam.position.y - (start.y + 500.0)).abs() < 1e-2);

    let before = cam.position;
    cam.dolly(-3.0, 0.01);
    assert!((cam.position.z - (before.z + 500.0)).abs() < 1e-2);
}

#[test]
fn camera_projection_uses_45_degree_fov() {
    let cam = FlyCamera::default();
    let p = cam.projection_matrix();
    let f = 1.0 / (22.5_f32.to_radians()).tan();
    assert!((p[(1, 1)] - f).abs() < 1e-5);
    assert!((p[(0, 0)] - f / (4.0 / 3.0)).abs() < 1e-5);

    // the eye maps to the origin in view space
    let v = cam.view_matrix();
    let eye = v.transform_point(&nalgebra::Point3::from(cam.position));
    assert!(eye.coords.norm() < 1e-2);
}

// ==================================================================================
// Configuration and frame tests
// ==================================================================================

#[test]
fn scenario_yaml_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(
        "bodies:\n  - x: [1.0, 2.0, 3.0]\n    m: 1.0e22\n",
    )
    .unwrap();

    assert_eq!(cfg.world.G, G);
    assert_eq!(cfg.grid.divisions, 50);
    assert_eq!(cfg.bodies[0].density, 3344.0);
    assert_eq!(cfg.bodies[0].v, [0.0, 0.0, 0.0]);
    assert_eq!(cfg.camera.position, [0.0, 1000.0, 5000.0]);
}

#[test]
fn shipped_scenario_builds() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("earth_moon.yaml");
    let cfg = ScenarioConfig::from_path(&path).unwrap();
    let sim = Simulation::build_scenario(&cfg).unwrap();

    assert_eq!(sim.world.len(), 2);
    assert_eq!(sim.world.bodies[0].name.as_deref(), Some("moon"));
    assert_eq!(sim.world.bodies[1].density(), 5515.0);
    assert_eq!(sim.grid.vertices().len(), 4 * 50 * 51);
}

#[test]
fn invalid_body_in_scenario_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("bodies:\n  - x: [0.0, 0.0, 0.0]\n    m: 0.0\n").unwrap();
    assert!(matches!(Simulation::build_scenario(&cfg), Err(SimError::InvalidMass(_))));

    let cfg = ScenarioConfig::from_yaml_str("world:\n  G: -1.0\n").unwrap();
    assert!(matches!(
        Simulation::build_scenario(&cfg),
        Err(SimError::InvalidParameter { name: "G", .. })
    ));
}

#[test]
fn frame_driver_spawns_pauses_and_quits() {
    let mut sim = Simulation::build_scenario(&ScenarioConfig::default()).unwrap();

    let mut frame = InputFrame::idle(0.016);
    frame.spawn.pressed = true;
    let report = sim.advance(&frame);
    assert_eq!(report.spawned, vec![0]);

    let t0 = sim.world.t;
    let mut frame = InputFrame::idle(0.016);
    frame.spawn.released = true;
    frame.held = HeldActions::default().with(Action::PauseHold);
    sim.advance(&frame);
    assert!(sim.paused);
    assert_eq!(sim.world.t, t0);
    assert!(sim.world.bodies[0].is_launched());

    let report = sim.advance(&InputFrame::idle(0.016));
    assert!(!sim.paused);
    assert!(!report.stopped);
    assert!((sim.world.t - (t0 + 0.016)).abs() < 1e-12);

    let frame = InputFrame {
        held: HeldActions::default().with(Action::Quit),
        ..InputFrame::idle(0.016)
    };
    assert!(sim.advance(&frame).stopped);
    assert!(!sim.running);
}
