//! Micro-benchmarks for the force accumulators and the Euler integrator
//!
//! Invoked from the binary with `--bench`; output goes to stdout so it can
//! be pasted straight into a spreadsheet.

use std::time::Instant;

use crate::error::SimError;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity, PrimaryGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(Body {
            x,
            v: NVec3::zeros(),
            m: 1.0,
            radius: 0.01,
        });
    }

    System {
        bodies,
        primary: Some(0),
        t: 0.0,
    }
}

/// Helper to build benchmark parameters
fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        G: 0.1,
    }
}

/// Compare a single force evaluation of the pairwise O(N²) sum against the
/// primary-only O(N) mode for a range of system sizes
pub fn bench_gravity() -> Result<(), SimError> {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();

        let mut out = vec![NVec3::zeros(); n];

        // Set up gravity models
        let pairwise = NewtonianGravity { G: params.G };
        let primary = PrimaryGravity { G: params.G };

        // Warm up
        pairwise.acceleration(0.0, &sys, &mut out)?;
        primary.acceleration(0.0, &sys, &mut out)?;

        // Time pairwise
        let t0 = Instant::now();
        pairwise.acceleration(0.0, &sys, &mut out)?;
        let dt_pairwise = t0.elapsed().as_secs_f64();

        // Time primary-only
        let t1 = Instant::now();
        primary.acceleration(0.0, &sys, &mut out)?;
        let dt_primary = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, pairwise = {:8.6} s, primary = {:8.6} s",
            dt_pairwise, dt_primary
        );
    }

    Ok(())
}

/// Time the full Euler step (pairwise gravity) for a range of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_euler() -> Result<(), SimError> {
    println!("N,step_ms");

    // Steps of 200 to give a smoother curve
    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to keep the runtime down
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n);
        let params = make_params();
        let forces = AccelSet::new().with(NewtonianGravity { G: params.G });

        // Warm-up one step
        euler_integrator(&mut sys, &forces, &params)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &forces, &params)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
