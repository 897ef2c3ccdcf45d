//! swarm::particle — particle state and the two-pass swarm update.
//!
//! Purpose
//! -------
//! Hold the mutable state of a particle swarm (positions, velocities,
//! personal bests, global best) and implement the bookkeeping and motion
//! rules of one PSO iteration.
//!
//! Key behaviors
//! -------------
//! - [`Swarm::init`] samples every starting position uniformly from the
//!   initialization box, particle by particle and dimension by dimension.
//! - [`Swarm::record`] applies one evaluation pass: personal and global
//!   bests move only on a **strictly** smaller score, in particle order.
//! - [`Swarm::advance`] applies one update pass against a snapshot of the
//!   global best taken *after* `record`, so every particle in an iteration
//!   sees the same attractor.
//!
//! Invariants & assumptions
//! ------------------------
//! - `Particle::best_score` never increases.
//! - `Swarm::global_best_score` never increases and is always `<=` every
//!   particle's `best_score`.
//! - A NaN score never satisfies `<`, so it never becomes a best.
//! - Positions are unbounded after initialization.
//!
//! Conventions
//! -----------
//! - For each particle the update pass draws `r1` then `r2` from `[0, 1)`;
//!   the same pair scales every dimension of that particle.
//! - Until some evaluation yields a comparable score there is no global best
//!   and the social term of the velocity update is zero.
use crate::optimization::swarm::{
    options::{InitBounds, SwarmCoefficients},
    types::{Position, Score, Velocity},
};
use ndarray::Array1;
use rand::Rng;

/// Particle — one candidate solution with memory of its best position.
///
/// Fields
/// ------
/// - `position`: current location; moves every iteration.
/// - `velocity`: current velocity; starts at zero.
/// - `best_position`: location of `best_score`; starts at the initial
///   position.
/// - `best_score`: best score seen by this particle; starts at `+∞`.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Position,
    pub velocity: Velocity,
    pub best_position: Position,
    pub best_score: Score,
}

impl Particle {
    /// Build a particle at rest at `position`.
    pub fn new(position: Position) -> Self {
        let velocity = Array1::zeros(position.len());
        let best_position = position.clone();
        Self { position, velocity, best_position, best_score: f64::INFINITY }
    }

    /// Record the score of the current position.
    ///
    /// Returns `true` when the score is strictly better than the personal
    /// best, in which case the personal best moves to the current position.
    pub fn observe(&mut self, score: Score) -> bool {
        if score < self.best_score {
            self.best_score = score;
            self.best_position.assign(&self.position);
            true
        } else {
            false
        }
    }

    /// Apply the velocity and position update.
    ///
    /// `v ← w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)`, then `x ← x + v`.
    pub fn step(
        &mut self, coefficients: &SwarmCoefficients, global_best: &Position, r1: f64, r2: f64,
    ) {
        let cognitive = (&self.best_position - &self.position) * (coefficients.cognitive * r1);
        let social = (global_best - &self.position) * (coefficients.social * r2);
        self.velocity = &self.velocity * coefficients.inertia + cognitive + social;
        self.position += &self.velocity;
    }
}

/// Swarm — all particles plus the shared global best.
#[derive(Debug, Clone, PartialEq)]
pub struct Swarm {
    particles: Vec<Particle>,
    global_best_position: Option<Position>,
    global_best_score: Score,
}

impl Swarm {
    /// Sample `size` particles uniformly from `bounds`.
    ///
    /// Each coordinate is drawn as `lower + u · (upper − lower)` with
    /// `u ∈ [0, 1)`, so draws consume the generator in particle-major,
    /// dimension-minor order.
    pub fn init<R: Rng>(size: usize, bounds: &InitBounds, rng: &mut R) -> Self {
        let particles = (0..size)
            .map(|_| {
                let position = Array1::from_iter(
                    bounds
                        .lower()
                        .iter()
                        .zip(bounds.upper().iter())
                        .map(|(&lo, &hi)| lo + rng.random::<f64>() * (hi - lo)),
                );
                Particle::new(position)
            })
            .collect();
        Self { particles, global_best_position: None, global_best_score: f64::INFINITY }
    }

    /// Build a swarm from explicit particles (no global best yet).
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles, global_best_position: None, global_best_score: f64::INFINITY }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Best score observed so far; `+∞` before any comparable score.
    pub fn global_best_score(&self) -> Score {
        self.global_best_score
    }

    /// Best position observed so far, if any.
    pub fn global_best_position(&self) -> Option<&Position> {
        self.global_best_position.as_ref()
    }

    /// Evaluation-pass bookkeeping.
    ///
    /// `scores[i]` is the score of particle `i` at its current position.
    /// Personal and global bests are updated in particle order on strictly
    /// smaller scores.
    ///
    /// # Panics
    /// Panics if `scores.len() != self.len()`; the runner always supplies
    /// one score per particle.
    pub fn record(&mut self, scores: &[Score]) {
        assert_eq!(scores.len(), self.particles.len(), "one score per particle");
        for (particle, &score) in self.particles.iter_mut().zip(scores) {
            particle.observe(score);
            if score < self.global_best_score {
                self.global_best_score = score;
                self.global_best_position = Some(particle.position.clone());
            }
        }
    }

    /// Update pass: move every particle against a snapshot of the global
    /// best.
    pub fn advance<R: Rng>(&mut self, coefficients: &SwarmCoefficients, rng: &mut R) {
        let snapshot = self.global_best_position.clone();
        for particle in self.particles.iter_mut() {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            match &snapshot {
                Some(best) => particle.step(coefficients, best, r1, r2),
                None => {
                    let here = particle.position.clone();
                    particle.step(coefficients, &here, r1, r2);
                }
            }
        }
    }
}
