//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (force accumulation mode)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # Units
//! The simulation is unit-free: `G` defaults to 1.0 and masses, distances
//! and times are interpreted in whatever consistent unit system the
//! scenario author chooses.
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   force_mode: "primary"   # or "pairwise"
//!
//! parameters:
//!   t_end: 5.0              # total simulation time
//!   h0: 1.0e-4              # fixed step size
//!   G: 1.0                  # gravitational constant (optional, default 1)
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     m: 900.0
//!     radius: 0.1
//!     primary: true         # the designated dominant mass, at rest
//!   - x: [ 0.0, 2.0, 0.0 ]
//!     v: [ -22.0, 0.0, 0.0 ]
//!     m: 1.0
//!     radius: 0.1
//! ```
//!
//! Omitting a body's `v` derives the velocity for a circular orbit about
//! the primary. The engine maps this configuration into its internal
//! runtime scenario representation via `Scenario::build_scenario`, which
//! validates it fail-fast.

use serde::Deserialize;

/// Which force accumulation mode the engine uses
/// `force_mode: "primary"` or `force_mode: "pairwise"`
#[derive(Deserialize, Debug, Clone)]
pub enum ForceModeConfig {
    #[serde(rename = "primary")] // Only the designated primary attracts; the primary stays fixed
    Primary,

    #[serde(rename = "pairwise")] // Direct O(N²) sum over every unordered pair of bodies
    Pairwise,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub force_mode: ForceModeConfig, // primary-only or full pairwise gravity
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulation time
    pub h0: f64,    // fixed step size
    #[serde(default = "default_g")]
    pub G: f64,     // gravitational constant (normalized units)
}

fn default_g() -> f64 {
    1.0
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 3],         // Initial position vector in simulation units
    pub v: Option<[f64; 3]>, // Initial velocity; omit to derive a circular orbit about the primary
    pub m: f64,              // Mass of the body
    #[serde(default)]
    pub radius: f64,         // Radius hint for external renderers; not used by the force law
    #[serde(default)]
    pub primary: bool,       // Marks the designated dominant mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration (force mode)
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
