//! Fixed-step explicit Euler integrator for the N-body system
//!
//! One force evaluation per step, driven by `AccelSet` and `Parameters`.
//! Forward Euler is first order and not symplectic: energy is not conserved
//! exactly, and orbits visibly precess and drift over long runs or large
//! steps relative to the orbital period. That drift is a documented
//! characteristic of the method, not a failure mode; only a degenerate
//! configuration reached during the step is an error.

use crate::error::SimError;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance the system by one step using explicit (forward) Euler
/// Accelerations are evaluated at the current positions, then positions
/// and velocities update in-place with fixed step `dt = params.h0`:
/// - x_n+1 = x_n + dt * v_n
/// - v_n+1 = v_n + dt * a_n
pub fn euler_integrator(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
) -> Result<(), SimError> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let dt = params.h0; // time step dt

    // a_n from x_n at time t_n
    let mut a = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a)?;

    // Drift with the *current* velocities: x_n+1 = x_n + dt * v_n
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Kick with the accelerations from x_n: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        b.v += dt * *a;
    }

    // Increment the system time by one full step
    sys.t += dt;

    Ok(())
}
