//! Error types for building and running a simulation

use thiserror::Error;

/// Errors raised while constructing bodies or loading a scenario.
///
/// The frame loop itself never returns these: degenerate geometry during a
/// tick is skipped, not reported.
#[derive(Error, Debug)]
pub enum SimError {
    /// Mass must be finite and strictly positive (radius is undefined otherwise)
    #[error("invalid mass: {0} (must be finite and > 0)")]
    InvalidMass(f64),

    /// Density must be finite and strictly positive
    #[error("invalid density: {0} (must be finite and > 0)")]
    InvalidDensity(f64),

    /// Grid plane size or division count cannot produce a mesh
    #[error("invalid grid: size {size}, divisions {divisions}")]
    InvalidGrid { size: f64, divisions: usize },

    /// A world or camera parameter is out of range
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Scenario file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for simulation construction
pub type SimResult<T> = Result<T, SimError>;
