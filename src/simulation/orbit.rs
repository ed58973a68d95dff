//! Circular-orbit initialization helper
//!
//! Derives the velocity that balances gravitational pull with centripetal
//! acceleration for a closed circular path about a central mass. This is a
//! setup convenience, not part of the per-step hot path.

use crate::error::SimError;
use super::states::NVec3;

/// Velocity for a circular orbit of `position` about a central mass
/// `m_central` located at `center`:
///
/// - speed: `sqrt(G * M / r)`
/// - direction: perpendicular to the radius vector, counter-clockwise in
///   the plane normal to the z-axis
///
/// The central body's own velocity is not included; callers orbiting a
/// moving primary add it on top.
pub fn circular_orbit_velocity(
    position: NVec3,
    center: NVec3,
    g: f64,
    m_central: f64,
) -> Result<NVec3, SimError> {
    if !(m_central > 0.0) {
        return Err(SimError::DegenerateOrbit(
            "central mass must be positive".into(),
        ));
    }

    let r = position - center;
    let dist = r.norm();

    if dist == 0.0 {
        return Err(SimError::DegenerateOrbit(
            "zero separation from the central mass".into(),
        ));
    }

    // v = sqrt(G * M / r)
    let speed = (g * m_central / dist).sqrt();

    // Perpendicular direction in the orbital plane: z × r
    let tangent = NVec3::z().cross(&r);
    if tangent.norm() == 0.0 {
        return Err(SimError::DegenerateOrbit(
            "radius vector is parallel to the z-axis orbit normal".into(),
        ));
    }

    Ok(speed * tangent.normalize())
}
