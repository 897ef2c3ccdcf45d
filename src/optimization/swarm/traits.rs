//! Public API surface for swarm minimization.
//!
//! - [`Objective`]: trait users implement for the function being minimized.
//!
//! Convention: the swarm *minimizes* `f(x)`. A score that does not compare
//! with `<` (NaN) is accepted from [`Objective::value`] but can never become
//! a personal or global best; only hard failures should be returned as
//! errors.
use crate::optimization::{
    errors::OptResult,
    swarm::types::{Position, Score},
};

/// User-implemented objective interface.
///
/// - `type Data`: per-problem data carried into `value`. Both the objective
///   and its data must be `Sync` so that the evaluation pass can be spread
///   across threads when the `parallel` feature is enabled.
///
/// Required:
/// - `dim() -> usize`: dimension of the search space; must match the
///   initialization bounds passed to the optimizer.
/// - `value(&Position, &Data) -> OptResult<Score>`: evaluate `f(x)`.
///   Must be pure: the same inputs always yield the same score.
pub trait Objective: Sync {
    type Data: Sync + ?Sized;

    fn dim(&self) -> usize;
    fn value(&self, position: &Position, data: &Self::Data) -> OptResult<Score>;
}
