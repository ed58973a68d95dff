pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::forces::{gravity_force, Acceleration, AccelSet, NewtonianGravity, PrimaryGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::clock::SimulationClock;
pub use simulation::orbit::circular_orbit_velocity;
pub use simulation::driver::{Control, RunOutcome, RunState, Simulation};
pub use simulation::scenario::Scenario;
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;

pub use configuration::config::{BodyConfig, EngineConfig, ForceModeConfig, ParametersConfig, ScenarioConfig};

pub use error::SimError;

pub use benchmark::benchmark::{bench_euler, bench_gravity};
