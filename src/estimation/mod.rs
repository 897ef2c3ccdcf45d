//! estimation — software effort estimation from project size.
//!
//! Purpose
//! -------
//! Estimate development effort from KLOC with three competing models and
//! compare them by Mean Magnitude of Relative Error (MMRE):
//! - a fixed COCOMO-style power law (`2.94 · kloc^1.1 · EAF`),
//! - an ordinary least-squares line on KLOC,
//! - a power law `a · kloc^b · EAF` calibrated by particle swarm.
//!
//! Module map
//! ----------
//! - [`core`]: validated records/datasets, MMRE, and the model seam.
//! - [`models`]: the three effort models.
//! - [`report`]: fit-all comparison and point predictions.
//! - [`errors`]: [`EstimationError`](errors::EstimationError) and its
//!   result alias.
//!
//! Conventions
//! -----------
//! - `EAF = adjustment_input / 30`; point predictions use `EAF = 1`.
//! - Every fit returns an immutable
//!   [`FittedModel`](core::FittedModel); predictions never refit.

pub mod core;
pub mod errors;
pub mod models;
pub mod report;

pub mod prelude {
    pub use super::core::{Dataset, EffortModel, FittedModel, Record, mmre};
    pub use super::errors::{EstimationError, EstimationResult};
    pub use super::models::{FixedFormulaModel, LinearModel, PowerLawModel, PowerLawOutcome};
    pub use super::report::{
        ComparisonReport, ModelKind, PointPrediction, ReferencedPrediction, compare_all,
        predict_single, predict_single_with_reference, reference_hint,
    };
}
