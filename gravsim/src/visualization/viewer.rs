use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::window::{CursorGrabMode, PrimaryWindow, WindowResolution};

use crate::interaction::camera::{CVec3, FlyCamera};
use crate::interaction::input::{Action, HeldActions, InputFrame, Nudge, NudgeEvent, SpawnInput};
use crate::simulation::scenario::Simulation;

/// Component tagging each sphere with its body index into Simulation.world.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Tags the curvature grid entity
#[derive(Component)]
struct GridLines;

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;

const GRID_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.25];

/// Held keys for the camera and frame-loop actions
const KEY_BINDINGS: [(Action, KeyCode); 8] = [
    (Action::Forward, KeyCode::KeyW),
    (Action::Back, KeyCode::KeyS),
    (Action::StrafeLeft, KeyCode::KeyA),
    (Action::StrafeRight, KeyCode::KeyD),
    (Action::Up, KeyCode::Space),
    (Action::Down, KeyCode::ShiftLeft),
    (Action::PauseHold, KeyCode::KeyK),
    (Action::Quit, KeyCode::KeyQ),
];

const SPAWN_BUTTON: MouseButton = MouseButton::Left;
const GROW_BUTTON: MouseButton = MouseButton::Right;

/// Open the window and run the simulation until quit
pub fn run_3d(simulation: Simulation) {
    println!("run_3d: starting Bevy 3D viewer with {} bodies", simulation.world.len());

    App::new()
        .insert_resource(simulation)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "gravsim".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, (setup_3d, grab_cursor))
        .add_systems(
            Update,
            (simulation_step, spawn_body_entities, sync_bodies, sync_grid, sync_camera).chain(),
        )
        .run();
}

fn to_vec3(v: &CVec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn color_from(rgba: [f32; 4]) -> Color {
    Color::srgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Flat triangle list; normals point away from the sphere center
fn sphere_mesh(vertices: &[[f32; 3]]) -> Mesh {
    let normals: Vec<[f32; 3]> = vertices
        .iter()
        .map(|v| Vec3::from_array(*v).normalize_or_zero().to_array())
        .collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vertices.to_vec())
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

fn line_mesh(vertices: &[[f32; 3]]) -> Mesh {
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vertices.to_vec())
}

fn camera_transform(camera: &FlyCamera) -> Transform {
    Transform::from_translation(to_vec3(&camera.position)).looking_to(to_vec3(&camera.front), to_vec3(&camera.up))
}

/// Startup system: spawn camera and grid. Bodies are picked up by `spawn_body_entities`.
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    simulation: Res<Simulation>,
) {
    let cam = &simulation.camera;
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        projection: Projection::Perspective(PerspectiveProjection {
            fov: cam.fov_y.to_radians(),
            aspect_ratio: cam.aspect,
            near: cam.near,
            far: cam.far,
        }),
        transform: camera_transform(cam),
        ..Default::default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(line_mesh(simulation.grid.vertices())),
            material: materials.add(StandardMaterial {
                base_color: color_from(GRID_COLOR),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..Default::default()
            }),
            ..Default::default()
        },
        GridLines,
    ));
}

fn grab_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor.grab_mode = CursorGrabMode::Locked;
        window.cursor.visible = false;
    }
}

fn nudge_for(key: KeyCode) -> Option<Nudge> {
    match key {
        KeyCode::ArrowUp => Some(Nudge::Up),
        KeyCode::ArrowDown => Some(Nudge::Down),
        KeyCode::ArrowLeft => Some(Nudge::Left),
        KeyCode::ArrowRight => Some(Nudge::Right),
        _ => None,
    }
}

/// Poll this frame's window input into an `InputFrame`
fn collect_input(
    dt: f64,
    keys: &ButtonInput<KeyCode>,
    mouse: &ButtonInput<MouseButton>,
    key_events: &mut EventReader<KeyboardInput>,
    motion: &mut EventReader<MouseMotion>,
    wheel: &mut EventReader<MouseWheel>,
) -> InputFrame {
    let mut held = HeldActions::default();
    for (action, key) in KEY_BINDINGS {
        if keys.pressed(key) {
            held.press(action);
        }
    }

    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    // Presses and key repeats both arrive as Pressed events
    let nudges = key_events
        .read()
        .filter(|ev| ev.state == ButtonState::Pressed)
        .filter_map(|ev| nudge_for(ev.key_code))
        .map(|direction| NudgeEvent { direction, shift })
        .collect();

    let pointer = motion.read().fold(Vec2::ZERO, |acc, ev| acc + ev.delta);
    let scroll = wheel.read().map(|ev| ev.y).sum();

    InputFrame {
        held,
        pointer_delta: (pointer.x, pointer.y),
        scroll,
        spawn: SpawnInput {
            pressed: mouse.just_pressed(SPAWN_BUTTON),
            released: mouse.just_released(SPAWN_BUTTON),
            grow_held: mouse.pressed(GROW_BUTTON),
            nudges,
            dt,
        },
    }
}

/// Per-frame input, physics and grid update
#[allow(clippy::too_many_arguments)]
fn simulation_step(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut key_events: EventReader<KeyboardInput>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut simulation: ResMut<Simulation>,
    mut exit: EventWriter<AppExit>,
) {
    let input = collect_input(
        time.delta_seconds_f64(),
        &keys,
        &mouse,
        &mut key_events,
        &mut motion,
        &mut wheel,
    );

    let report = simulation.advance(&input);
    if report.stopped {
        exit.send(AppExit::Success);
    }
}

/// Spawn one sphere entity per body not yet on screen
fn spawn_body_entities(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut simulation: ResMut<Simulation>,
    mut on_screen: Local<usize>,
) {
    let bodies = &mut simulation.world.bodies;
    for (i, body) in bodies.iter_mut().enumerate().skip(*on_screen) {
        let color = color_from(body.color);
        let mesh = sphere_mesh(body.mesh());

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(mesh),
                material: materials.add(StandardMaterial {
                    base_color: color,
                    unlit: true,
                    cull_mode: None,
                    double_sided: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(body.x.x as f32, body.x.y as f32, body.x.z as f32),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
    *on_screen = bodies.len();
}

/// Move spheres and re-upload meshes whose radius changed
fn sync_bodies(
    mut simulation: ResMut<Simulation>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut query: Query<(&BodyIndex, &mut Transform, &Handle<Mesh>)>,
) {
    let bodies = &mut simulation.world.bodies;
    for (BodyIndex(i), mut transform, mesh_handle) in &mut query {
        let Some(b) = bodies.get_mut(*i) else {
            continue;
        };

        transform.translation = Vec3::new(b.x.x as f32, b.x.y as f32, b.x.z as f32);

        if let Some(vertices) = b.take_dirty_mesh() {
            if let Some(mesh) = meshes.get_mut(mesh_handle) {
                *mesh = sphere_mesh(vertices);
            }
        }
    }
}

fn sync_grid(
    simulation: Res<Simulation>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Handle<Mesh>, With<GridLines>>,
) {
    for handle in &query {
        if let Some(mesh) = meshes.get_mut(handle) {
            mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, simulation.grid.vertices().to_vec());
        }
    }
}

fn sync_camera(simulation: Res<Simulation>, mut query: Query<&mut Transform, With<Camera3d>>) {
    for mut transform in &mut query {
        *transform = camera_transform(&simulation.camera);
    }
}
