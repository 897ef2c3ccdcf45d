//! swarm::types — shared numeric aliases and default swarm constants.
//!
//! Purpose
//! -------
//! Centralize the vector types and default tuning constants used by the
//! particle swarm optimizer so the remaining swarm modules stay agnostic to
//! `ndarray` details.
//!
//! Conventions
//! -----------
//! - Positions and velocities are `ndarray::Array1<f64>` of length equal to
//!   the search-space dimension.
//! - `Score` is the scalar objective being **minimized**; lower is better.
//! - Defaults reproduce the classic effort-calibration setup: 30 particles,
//!   100 iterations, inertia 0.5 and acceleration constants 1.5 / 1.5.
use ndarray::Array1;

/// Particle position in the search space.
pub type Position = Array1<f64>;

/// Particle velocity; same shape as [`Position`].
pub type Velocity = Array1<f64>;

/// Scalar objective value (minimized).
pub type Score = f64;

/// Default number of particles.
pub const DEFAULT_SWARM_SIZE: usize = 30;

/// Default number of iterations.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Default inertia weight `w`.
pub const DEFAULT_INERTIA: f64 = 0.5;

/// Default cognitive (personal-best) acceleration `c1`.
pub const DEFAULT_COGNITIVE: f64 = 1.5;

/// Default social (global-best) acceleration `c2`.
pub const DEFAULT_SOCIAL: f64 = 1.5;
