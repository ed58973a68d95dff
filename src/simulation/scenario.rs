//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! Validation is fail-fast: positive masses, a positive step size,
//! pairwise-distinct positions, and a single designated primary where one
//! is required are all checked here, before a run can start.

use crate::configuration::config::{BodyConfig, ForceModeConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity, PrimaryGravity};
use crate::simulation::orbit::circular_orbit_velocity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// A fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, and
/// the set of active force laws (accelerations). It is consumed by
/// [`crate::simulation::driver::Simulation`].
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            G: p_cfg.G,
        };

        if !(parameters.h0 > 0.0) {
            return Err(SimError::InvalidTimeStep { dt: parameters.h0 });
        }

        // Masses must be strictly positive before anything divides by them
        for (i, bc) in cfg.bodies.iter().enumerate() {
            if !(bc.m > 0.0) {
                return Err(SimError::InvalidMass {
                    index: i,
                    mass: bc.m,
                });
            }
        }

        // Primary designation: at most one body may be flagged
        let flagged: Vec<usize> = cfg
            .bodies
            .iter()
            .enumerate()
            .filter(|(_, bc)| bc.primary)
            .map(|(i, _)| i)
            .collect();
        let primary = match flagged.len() {
            0 => None,
            1 => Some(flagged[0]),
            n => return Err(SimError::PrimarySelection { count: n }),
        };

        // Primary-only gravity cannot run without a designated primary
        if primary.is_none() && matches!(cfg.engine.force_mode, ForceModeConfig::Primary) {
            return Err(SimError::PrimarySelection { count: 0 });
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors.
        // A missing velocity is derived as the circular orbit about the
        // primary; the primary itself starts at rest when its velocity is
        // omitted.
        let mut bodies: Vec<Body> = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let x = NVec3::new(bc.x[0], bc.x[1], bc.x[2]);

            let v = match (&bc.v, primary) {
                (Some(v), _) => NVec3::new(v[0], v[1], v[2]),
                (None, _) if Some(i) == primary => NVec3::zeros(),
                (None, Some(p)) => {
                    let pc: &BodyConfig = &cfg.bodies[p];
                    let center = NVec3::new(pc.x[0], pc.x[1], pc.x[2]);
                    let v_primary = pc
                        .v
                        .map(|v| NVec3::new(v[0], v[1], v[2]))
                        .unwrap_or_else(NVec3::zeros);

                    v_primary + circular_orbit_velocity(x, center, parameters.G, pc.m)?
                }
                (None, None) => return Err(SimError::PrimarySelection { count: 0 }),
            };

            bodies.push(Body {
                x,
                v,
                m: bc.m,
                radius: bc.radius,
            });
        }

        // Positions must be pairwise distinct: the separation is a divisor
        // in the force law
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if bodies[i].x == bodies[j].x {
                    return Err(SimError::DegenerateConfiguration {
                        i,
                        j,
                        x: bodies[i].x.x,
                        y: bodies[i].x.y,
                        z: bodies[i].x.z,
                    });
                }
            }
        }

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            primary,
            t: 0.0,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            force_mode: cfg.engine.force_mode.clone(),
        };

        // Forces: construct an AccelSet and register the configured
        // gravity mode
        let forces = match cfg.engine.force_mode {
            ForceModeConfig::Primary => AccelSet::new().with(PrimaryGravity { G: parameters.G }),
            ForceModeConfig::Pairwise => {
                AccelSet::new().with(NewtonianGravity { G: parameters.G })
            }
        };

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}
