//! Execution helper that runs a particle swarm over an [`Objective`] and
//! returns a crate-friendly [`SwarmOutcome`].
use crate::optimization::{
    errors::{OptError, OptResult},
    swarm::{
        options::PsoOptions,
        particle::{Particle, Swarm},
        traits::Objective,
        types::{Position, Score},
    },
};
use rand::{SeedableRng, rngs::StdRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// Canonical result returned by [`minimize`].
///
/// - `best_position`: global best position at termination.
/// - `best_score`: objective value at `best_position`.
/// - `iterations`: number of evaluate/update rounds performed.
/// - `evaluations`: number of objective calls (`swarm_size × iterations`).
/// - `history`: global best score after each round's evaluation pass;
///   non-increasing by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmOutcome {
    pub best_position: Position,
    pub best_score: Score,
    pub iterations: usize,
    pub evaluations: usize,
    pub history: Vec<Score>,
}

/// Minimize `objective` over `data` with a particle swarm.
///
/// Each of the `opts.iterations` rounds consists of:
/// 1. an evaluation pass scoring every particle at its current position
///    (spread across threads with the `parallel` feature), followed by
///    in-order best bookkeeping;
/// 2. an update pass moving every particle against the global best
///    snapshot taken after step 1.
///
/// The generator is `StdRng::seed_from_u64(seed)` when `opts.seed` is set,
/// otherwise it is seeded from OS entropy. Because scores are collected in
/// particle order before bookkeeping, sequential and parallel evaluation
/// produce identical results for the same seed.
///
/// # Errors
/// - Any configuration error from [`PsoOptions::validate`].
/// - [`OptError::DimensionMismatch`] if `objective.dim()` differs from the
///   bounds dimension.
/// - Propagates the first error returned by [`Objective::value`].
/// - [`OptError::NoFiniteScore`] if no evaluation ever produced a
///   comparable score.
pub fn minimize<O: Objective>(
    objective: &O, data: &O::Data, opts: &PsoOptions,
) -> OptResult<SwarmOutcome> {
    opts.validate()?;
    if objective.dim() != opts.bounds.dim() {
        return Err(OptError::DimensionMismatch {
            expected: objective.dim(),
            found: opts.bounds.dim(),
        });
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(
        swarm_size = opts.swarm_size,
        iterations = opts.iterations,
        seed = ?opts.seed,
        "starting particle swarm"
    );

    let mut swarm = Swarm::init(opts.swarm_size, &opts.bounds, &mut rng);
    let mut history = Vec::with_capacity(opts.iterations);
    for iter in 0..opts.iterations {
        let scores = evaluate_all(objective, data, swarm.particles())?;
        swarm.record(&scores);
        history.push(swarm.global_best_score());
        trace!(iter, global_best = swarm.global_best_score(), "swarm iteration");
        swarm.advance(&opts.coefficients, &mut rng);
    }

    let best_position = swarm.global_best_position().cloned().ok_or(OptError::NoFiniteScore)?;
    let best_score = swarm.global_best_score();
    debug!(best_score, best_position = ?best_position.to_vec(), "particle swarm finished");

    Ok(SwarmOutcome {
        best_position,
        best_score,
        iterations: opts.iterations,
        evaluations: opts.iterations * opts.swarm_size,
        history,
    })
}

// ---- Helper Methods ----

#[cfg(not(feature = "parallel"))]
fn evaluate_all<O: Objective>(
    objective: &O, data: &O::Data, particles: &[Particle],
) -> OptResult<Vec<Score>> {
    evaluate_sequential(objective, data, particles)
}

#[cfg(feature = "parallel")]
fn evaluate_all<O: Objective>(
    objective: &O, data: &O::Data, particles: &[Particle],
) -> OptResult<Vec<Score>> {
    evaluate_parallel(objective, data, particles)
}

#[cfg(any(not(feature = "parallel"), test))]
fn evaluate_sequential<O: Objective>(
    objective: &O, data: &O::Data, particles: &[Particle],
) -> OptResult<Vec<Score>> {
    particles.iter().map(|p| objective.value(&p.position, data)).collect()
}

/// Scores come back in particle order, as in the sequential pass.
#[cfg(feature = "parallel")]
fn evaluate_parallel<O: Objective>(
    objective: &O, data: &O::Data, particles: &[Particle],
) -> OptResult<Vec<Score>> {
    particles.par_iter().map(|p| objective.value(&p.position, data)).collect()
}
