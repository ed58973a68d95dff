//! Typed error kinds for simulation setup and stepping
//!
//! Every variant is fatal to the current run; none are retried. Variants
//! carry the body indices and values involved so a bad scenario can be
//! diagnosed from the message alone.

use thiserror::Error;

/// Errors produced while building or advancing a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be strictly positive; a zero mass divides the velocity update.
    #[error("body {index} has non-positive mass {mass}")]
    InvalidMass { index: usize, mass: f64 },

    /// Fixed step size must be strictly positive.
    #[error("time step must be positive, got {dt}")]
    InvalidTimeStep { dt: f64 },

    /// Two bodies at the same position; the force direction is undefined.
    #[error("bodies {i} and {j} coincide at ({x:.6}, {y:.6}, {z:.6}); gravitational force is undefined")]
    DegenerateConfiguration {
        i: usize,
        j: usize,
        x: f64,
        y: f64,
        z: f64,
    },

    /// The circular-orbit initializer cannot produce a velocity for this geometry.
    #[error("circular orbit is undefined: {0}")]
    DegenerateOrbit(String),

    /// Primary-gravity mode and velocity derivation need exactly one primary body.
    #[error("expected exactly one body marked primary, found {count}")]
    PrimarySelection { count: usize },
}
