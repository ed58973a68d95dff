//! Simulation driver: owns the system for the duration of a run
//!
//! Repeatedly applies the Euler integrator, advances the clock, and hands
//! the updated state to a per-tick observer (the seam where an external
//! renderer would consume positions). The run lifecycle is
//! `Initialized → Running → Completed`; a single run is one pass from start
//! to `max_time`, with no pausing or resuming. Cancellation stops the loop
//! before the next tick begins, with no side effects beyond the last
//! applied step.

use log::{debug, info};

use crate::error::SimError;
use super::clock::SimulationClock;
use super::integrator::euler_integrator;
use super::scenario::Scenario;
use super::states::System;

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Initialized,
    Running,
    Completed,
}

/// Observer verdict after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep stepping
    Continue,
    /// Cancel the run before the next tick begins
    Stop,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub ticks: u64, // ticks actually executed
    pub t: f64, // elapsed simulation time at the end
    pub cancelled: bool, // true when the observer stopped the run early
}

/// A single simulation run built from a [`Scenario`]
///
/// The body list is owned exclusively by the driver while a run is in
/// progress; observers get read-only snapshots between ticks, never
/// concurrent with a step.
pub struct Simulation {
    scenario: Scenario,
    clock: SimulationClock,
    state: RunState,
}

impl Simulation {
    /// Wrap a validated scenario; the clock re-checks the step size
    pub fn new(scenario: Scenario) -> Result<Self, SimError> {
        let clock = SimulationClock::new(scenario.parameters.h0, scenario.parameters.t_end)?;
        Ok(Self {
            scenario,
            clock,
            state: RunState::Initialized,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Read-only snapshot of the current system state
    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Advance by exactly one tick
    ///
    /// For callers driving their own loop; [`Simulation::run`] is the
    /// usual entrypoint.
    pub fn step(&mut self) -> Result<(), SimError> {
        let Scenario {
            system,
            forces,
            parameters,
            ..
        } = &mut self.scenario;

        euler_integrator(system, forces, parameters)?;
        self.clock.tick();
        Ok(())
    }

    /// Run to `t_end`, invoking `on_tick` with the tick index and updated
    /// state once per tick
    ///
    /// Returning [`Control::Stop`] from the observer cancels the run early.
    /// The run executes exactly `ceil(t_end / dt)` ticks unless cancelled.
    pub fn run<F>(&mut self, mut on_tick: F) -> Result<RunOutcome, SimError>
    where
        F: FnMut(u64, &System) -> Control,
    {
        info!(
            "run: {} bodies, {:?} gravity, dt = {}, {} ticks to t_end = {}",
            self.scenario.system.bodies.len(),
            self.scenario.engine.force_mode,
            self.clock.dt(),
            self.clock.total_ticks(),
            self.scenario.parameters.t_end,
        );

        self.state = RunState::Running;
        let mut cancelled = false;

        while !self.clock.finished() {
            self.step()?;

            if on_tick(self.clock.ticks(), &self.scenario.system) == Control::Stop {
                cancelled = true;
                break;
            }
        }

        self.state = RunState::Completed;
        debug!(
            "run done: {} ticks, t = {}, cancelled = {}",
            self.clock.ticks(),
            self.clock.t(),
            cancelled,
        );

        Ok(RunOutcome {
            ticks: self.clock.ticks(),
            t: self.clock.t(),
            cancelled,
        })
    }
}
