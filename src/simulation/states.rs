//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec3`
//! - `System` holding the list of bodies, the designated primary, and the
//!   current simulation time `t`

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub radius: f64, // radius (initialization / renderer hint)
}

impl Body {
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub primary: Option<usize>, // index of the dominant mass, if one is designated
    pub t: f64, // time
}

impl System {
    /// Total linear momentum of the system
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |acc, b| acc + b.momentum())
    }
}
