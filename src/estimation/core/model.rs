//! estimation::core::model — the effort-model seam and fitted-model values.
//!
//! Purpose
//! -------
//! Define what every effort model can do once its parameters are known
//! (predict, score against a dataset) and the immutable [`FittedModel`]
//! value returned by each fitting routine.
//!
//! Key behaviors
//! -------------
//! - [`EffortModel::predict`] maps `(kloc, adjustment_input)` to effort.
//! - [`EffortModel::predict_point`] predicts from KLOC alone using the
//!   neutral adjustment (`adjustment_input == NORMALIZATION`, factor 1.0).
//! - [`EffortModel::predictions`] and [`EffortModel::score`] evaluate the
//!   model over a dataset using each record's own adjustment input.
//! - [`FittedModel`] pairs fitted parameters with their MMRE so callers can
//!   reuse them for any number of point predictions without refitting.
//!
//! Conventions
//! -----------
//! - The effort adjustment factor is `adjustment_input / NORMALIZATION`
//!   with `NORMALIZATION = 30.0`.
use crate::estimation::{
    core::{
        data::{Dataset, Record},
        fitness::mmre,
    },
    errors::EstimationResult,
};
use ndarray::Array1;

/// Divisor turning an adjustment input into an effort adjustment factor.
pub const NORMALIZATION: f64 = 30.0;

/// Effort adjustment factor `adjustment_input / NORMALIZATION`.
#[inline]
pub fn effort_adjustment(adjustment_input: f64) -> f64 {
    adjustment_input / NORMALIZATION
}

/// An effort model with known parameters.
pub trait EffortModel {
    /// Predicted effort for one project.
    fn predict(&self, kloc: f64, adjustment_input: f64) -> f64;

    /// Predicted effort from KLOC alone (neutral adjustment factor 1.0).
    fn predict_point(&self, kloc: f64) -> f64 {
        self.predict(kloc, NORMALIZATION)
    }

    /// Predicted effort for every record, in dataset order.
    fn predictions(&self, dataset: &Dataset) -> Array1<f64> {
        dataset.iter().map(|r| self.predict(r.kloc(), r.adjustment_input())).collect()
    }

    /// MMRE of this model over `dataset`.
    ///
    /// # Errors
    /// - `EstimationError::EmptyDataset` if the dataset is empty.
    fn score(&self, dataset: &Dataset) -> EstimationResult<f64> {
        dataset.ensure_non_empty()?;
        let actual: Vec<f64> = dataset.iter().map(Record::actual_effort).collect();
        let predicted: Vec<f64> =
            dataset.iter().map(|r| self.predict(r.kloc(), r.adjustment_input())).collect();
        mmre(&actual, &predicted)
    }
}

/// `FittedModel` — model parameters plus their MMRE on the fitting data.
///
/// Created once per fit call, owned by the caller, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedModel<M> {
    model: M,
    mmre: f64,
}

impl<M: EffortModel> FittedModel<M> {
    pub fn new(model: M, mmre: f64) -> Self {
        Self { model, mmre }
    }

    /// Score `model` over `dataset` and wrap the result.
    ///
    /// # Errors
    /// Propagates [`EffortModel::score`] errors.
    pub fn evaluate(model: M, dataset: &Dataset) -> EstimationResult<Self> {
        let mmre = model.score(dataset)?;
        Ok(Self { model, mmre })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn mmre(&self) -> f64 {
        self.mmre
    }

    pub fn predict(&self, kloc: f64, adjustment_input: f64) -> f64 {
        self.model.predict(kloc, adjustment_input)
    }

    pub fn predict_point(&self, kloc: f64) -> f64 {
        self.model.predict_point(kloc)
    }
}
