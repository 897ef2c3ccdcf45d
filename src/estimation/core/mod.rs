//! estimation::core — data containers, fitness function, and model seam.
//!
//! Purpose
//! -------
//! Collect the building blocks shared by every effort model:
//! - [`data`]: validated [`Record`] / [`Dataset`] containers,
//! - [`fitness`]: the MMRE metric used for calibration and comparison,
//! - [`model`]: the [`EffortModel`] trait and the immutable [`FittedModel`]
//!   value returned by every fit.
//!
//! Invariants & assumptions
//! ------------------------
//! - Records hold finite, strictly positive values; models may rely on this
//!   and never re-validate individual fields.
//! - Nothing in this subtree holds mutable shared state; all functions are
//!   safe to call concurrently on a read-only dataset.

pub mod data;
pub mod fitness;
pub mod model;

pub use self::data::{Dataset, Record};
pub use self::fitness::{mmre, relative_errors};
pub use self::model::{EffortModel, FittedModel, NORMALIZATION, effort_adjustment};
