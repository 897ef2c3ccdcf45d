//! swarm — particle swarm minimization over a user objective.
//!
//! Purpose
//! -------
//! Provide a small, deterministic-when-seeded particle swarm optimizer.
//! Callers implement [`Objective`], pick [`PsoOptions`], and obtain a
//! [`SwarmOutcome`] with the best position, its score, and the per-iteration
//! global-best history.
//!
//! Key behaviors
//! -------------
//! - Initialize a fresh swarm on every call from a bounded prior box.
//! - Run exactly `iterations` rounds of *evaluate-all* then *update-all*;
//!   the update pass reads an immutable snapshot of the global best.
//! - Thread an explicit `StdRng` through initialization and every update
//!   draw so that a fixed seed reproduces the run bit for bit.
//!
//! Invariants & assumptions
//! ------------------------
//! - Personal and global best scores never increase; NaN scores never win.
//! - No velocity clamping and no position bounding: particles may leave the
//!   prior box and may diverge.
//! - The optimizer is a heuristic; it does not guarantee a global optimum.
//!
//! Conventions
//! -----------
//! - Positions are `ndarray::Array1<f64>`; see [`types`].
//! - All fallible entry points return [`OptResult`](crate::optimization::errors::OptResult).
//!
//! Downstream usage
//! ----------------
//! - `estimation::models::power_law` implements [`Objective`] for the MMRE
//!   of `a · kloc^b · EAF` and calls [`minimize`].
//!
//! Testing notes
//! -------------
//! - `particle`: sampling, strict-improvement bookkeeping, update formula.
//! - `run`: convergence on toy bowls, history monotonicity, seed
//!   reproducibility, error surfacing.
//! - `options` / `validation`: every configuration error branch.

pub mod options;
pub mod particle;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

pub use self::options::{InitBounds, PsoOptions, SwarmCoefficients};
pub use self::particle::{Particle, Swarm};
pub use self::run::{SwarmOutcome, minimize};
pub use self::traits::Objective;
pub use self::types::{Position, Score, Velocity};

pub mod prelude {
    pub use super::options::{InitBounds, PsoOptions, SwarmCoefficients};
    pub use super::run::{SwarmOutcome, minimize};
    pub use super::traits::Objective;
}
