//! optimization — particle swarm stack and its error surface.
//!
//! Purpose
//! -------
//! Provide the stochastic search layer used for model calibration: a
//! particle swarm minimizer over a user-supplied objective, validated run
//! configuration, and a single error/result surface.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing** an objective `f(x)`
//!   (`swarm`), including swarm size, iteration budget, velocity
//!   coefficients, initialization box, and RNG seed.
//! - Normalize configuration issues and objective failures into a single
//!   enum (`errors::OptError`) with a common result alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are pure; the same position always yields the same score.
//! - Non-comparable (NaN) scores are tolerated and simply never selected.
//!
//! Conventions
//! -----------
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   model code converts these into its own error type via `From`.
//! - Progress is reported through `tracing` events at `debug`/`trace`
//!   level; installing a subscriber is left to the application.
//!
//! Downstream usage
//! ----------------
//! - Model code implements `Objective` for its calibration target and calls
//!   `swarm::minimize`, or imports the curated surface via
//!   `optimization::prelude::*`.

pub mod errors;
pub mod swarm;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use effort_estimation::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::swarm::prelude::*;
}
