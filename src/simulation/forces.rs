//! Force / acceleration contributors for the n-body engine
//!
//! Defines the pairwise Newtonian gravity force, the acceleration trait,
//! and the two accumulation modes: full pairwise summation and the
//! simplified primary-only (dominant mass) variant.
//!
//! There is no softening here. Coincident bodies make the force direction
//! undefined and surface as a [`SimError::DegenerateConfiguration`] instead
//! of being smoothed over.

use crate::error::SimError;
use crate::simulation::states::{NVec3, System};

/// Gravitational force exerted on body `i` by body `j`:
///
/// `F = -G * m_i * m_j * (x_i - x_j) / |x_i - x_j|^3`
///
/// The separation appears as a divisor, so a zero distance is a
/// computational error rather than a physical one and fails with
/// [`SimError::DegenerateConfiguration`].
pub fn gravity_force(sys: &System, i: usize, j: usize, g: f64) -> Result<NVec3, SimError> {
    let bi = &sys.bodies[i];
    let bj = &sys.bodies[j];

    // r is the displacement vector from j to i.
    // The force on i points along -r (toward j).
    let r = bi.x - bj.x;

    // Squared separation distance |r|^2
    let r2 = r.dot(&r);

    if r2 == 0.0 {
        return Err(SimError::DegenerateConfiguration {
            i,
            j,
            x: bi.x.x,
            y: bi.x.y,
            z: bi.x.z,
        });
    }

    // 1 / |r|
    let inv_r = r2.sqrt().recip();

    // 1 / |r|^3
    // (this is what appears in the Newtonian force formula:
    //   F = -G m_i m_j r / |r|^3
    //   => F = -G m_i m_j r * (1 / |r|^3) )
    let inv_r3 = inv_r * inv_r * inv_r;

    Ok(-g * bi.m * bj.m * inv_r3 * r)
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]) -> Result<(), SimError>;
}

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(
        &self,
        t: f64,
        sys: &System,
        out: &mut [NVec3],
    ) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out)?;
        }
        Ok(())
    }
}

/// Full pairwise Newtonian gravity (direct O(N²) sum)
///
/// Net force on a body is the vector sum of the pairwise force from every
/// other body. No tree approximation; the systems exercised here are small.
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) -> Result<(), SimError> {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                // Force on i from j; Newton's third law gives j the
                // equal and opposite pull
                let f = gravity_force(sys, i, j, self.G)?;

                out[i] += f / sys.bodies[i].m;
                out[j] -= f / sys.bodies[j].m;
            }
        }
        Ok(())
    }
}

/// Dominant-mass gravity: every non-primary body feels only the primary's
/// pull, and the primary itself feels no acceleration
///
/// This is the classic star-and-planets simplification where the central
/// mass overwhelms everything orbiting it.
pub struct PrimaryGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for PrimaryGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) -> Result<(), SimError> {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return Ok(());
        }

        let p = sys
            .primary
            .ok_or(SimError::PrimarySelection { count: 0 })?;

        for i in 0..n {
            if i == p {
                continue; // no self-pull; the primary feels no acceleration
            }
            let f = gravity_force(sys, i, p, self.G)?;
            out[i] += f / sys.bodies[i].m;
        }
        Ok(())
    }
}
