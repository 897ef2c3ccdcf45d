//! estimation::models::regression — closed-form least-squares effort line.
//!
//! Purpose
//! -------
//! Fit `effort = slope · kloc + intercept` by ordinary least squares on the
//! `(kloc, actual_effort)` pairs of a dataset and score the fitted line with
//! MMRE.
//!
//! Key behaviors
//! -------------
//! - Accumulate `Σx`, `Σy`, `Σxy`, `Σx²` in one pass and solve
//!   `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`,
//!   `intercept = (Σy − slope·Σx) / n`.
//! - Reject a vanishing denominator with `DegenerateFit` instead of
//!   returning NaN/Inf parameters.
//!
//! Invariants & assumptions
//! ------------------------
//! - The adjustment input does not enter the regression; predictions ignore
//!   it.
//! - The denominator is treated as zero when
//!   `|n·Σx² − (Σx)²| <= ε · n · Σx²` (`ε = f64::EPSILON`), which covers
//!   identical KLOC values whose cancellation leaves rounding residue.
//!
//! Testing notes
//! -------------
//! - Exact recovery of `y = 2x + 3`, degenerate KLOC columns (exactly equal
//!   and equal up to rounding), empty dataset, and the MMRE of an imperfect
//!   fit.
use crate::estimation::{
    core::{
        data::Dataset,
        model::{EffortModel, FittedModel},
    },
    errors::{EstimationError, EstimationResult},
};
use tracing::debug;

/// `LinearModel` — `effort = slope · kloc + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    slope: f64,
    intercept: f64,
}

impl LinearModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Fit by ordinary least squares and score over the same dataset.
    ///
    /// Returns
    /// -------
    /// `EstimationResult<FittedModel<LinearModel>>` holding `(slope,
    /// intercept)` and the MMRE of the fitted line.
    ///
    /// Errors
    /// ------
    /// - `EstimationError::EmptyDataset` if `dataset` is empty.
    /// - `EstimationError::DegenerateFit { denominator }` if every KLOC value
    ///   is the same.
    pub fn fit(dataset: &Dataset) -> EstimationResult<FittedModel<Self>> {
        dataset.ensure_non_empty()?;
        let n = dataset.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
        for r in dataset {
            let (x, y) = (r.kloc(), r.actual_effort());
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() <= f64::EPSILON * n * sum_x2 {
            return Err(EstimationError::DegenerateFit { denominator });
        }
        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        let fitted = FittedModel::evaluate(Self { slope, intercept }, dataset)?;
        debug!(slope, intercept, mmre = fitted.mmre(), "least-squares model fitted");
        Ok(fitted)
    }
}

impl EffortModel for LinearModel {
    fn predict(&self, kloc: f64, _adjustment_input: f64) -> f64 {
        self.slope * kloc + self.intercept
    }
}
