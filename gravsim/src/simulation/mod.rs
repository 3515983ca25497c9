pub mod states;
pub mod params;
pub mod mesh;
pub mod forces;
pub mod integrator;
pub mod grid;
pub mod scenario;
