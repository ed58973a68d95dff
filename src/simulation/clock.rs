//! Fixed-step simulation clock
//!
//! Tracks elapsed time and the fixed step `dt`. The clock is terminal once
//! `ceil(max_time / dt)` ticks have run. Termination is tick-count based:
//! comparing accumulated float time against `max_time` can add or drop a
//! step to rounding, the precomputed count cannot.

use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct SimulationClock {
    t: f64, // elapsed time
    dt: f64, // fixed step size
    ticks: u64, // ticks completed so far
    total_ticks: u64, // ceil(max_time / dt)
}

impl SimulationClock {
    /// Create a clock running to `max_time` in steps of `dt`
    /// Fails with [`SimError::InvalidTimeStep`] unless `dt > 0`
    pub fn new(dt: f64, max_time: f64) -> Result<Self, SimError> {
        if !(dt > 0.0) {
            return Err(SimError::InvalidTimeStep { dt });
        }

        let total_ticks = if max_time > 0.0 {
            (max_time / dt).ceil() as u64
        } else {
            0
        };

        Ok(Self {
            t: 0.0,
            dt,
            ticks: 0,
            total_ticks,
        })
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Advance elapsed time by one full step
    pub fn tick(&mut self) {
        self.t += self.dt;
        self.ticks += 1;
    }

    /// True once the configured number of ticks has run
    pub fn finished(&self) -> bool {
        self.ticks >= self.total_ticks
    }
}
