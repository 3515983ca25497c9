pub mod input;
pub mod spawner;
pub mod camera;
