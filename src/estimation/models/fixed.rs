//! Fixed-parameter power-law (COCOMO-style) effort model.
//!
//! `effort = A · kloc^B · (adjustment_input / NORMALIZATION)` with the
//! published constants `A = 2.94`, `B = 1.1`. There is nothing to fit:
//! "fitting" evaluates the formula over the dataset and scores it.
use crate::estimation::{
    core::{
        data::Dataset,
        model::{EffortModel, FittedModel, effort_adjustment},
    },
    errors::EstimationResult,
};
use tracing::debug;

/// Default multiplicative coefficient `A`.
pub const FIXED_A: f64 = 2.94;

/// Default size exponent `B`.
pub const FIXED_B: f64 = 1.1;

/// `FixedFormulaModel` — power law with hard-coded constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFormulaModel {
    a: f64,
    b: f64,
}

impl FixedFormulaModel {
    pub fn new() -> Self {
        Self { a: FIXED_A, b: FIXED_B }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Evaluate the formula on every record and score it with MMRE.
    ///
    /// # Errors
    /// - `EstimationError::EmptyDataset` if `dataset` is empty.
    pub fn fit_and_score(dataset: &Dataset) -> EstimationResult<FittedModel<Self>> {
        let fitted = FittedModel::evaluate(Self::new(), dataset)?;
        debug!(mmre = fitted.mmre(), records = dataset.len(), "fixed-formula model scored");
        Ok(fitted)
    }
}

impl Default for FixedFormulaModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EffortModel for FixedFormulaModel {
    fn predict(&self, kloc: f64, adjustment_input: f64) -> f64 {
        self.a * kloc.powf(self.b) * effort_adjustment(adjustment_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::{core::data::Record, errors::EstimationError};
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The reference prediction at kloc = 10 with a neutral adjustment.
    // - Per-record adjustment during scoring.
    // - Empty-dataset rejection.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the reference value.
    //
    // Given
    // -----
    // - kloc = 10, adjustment_input = 30 (factor 1.0).
    //
    // Expect
    // ------
    // - 2.94 · 10^1.1 ≈ 37.012; the point prediction agrees.
    fn predict_matches_reference_formula() {
        let model = FixedFormulaModel::new();
        let expected = 2.94 * 10f64.powf(1.1);

        assert_relative_eq!(model.predict(10.0, 30.0), expected, epsilon = 1e-12);
        assert_relative_eq!(model.predict_point(10.0), expected, epsilon = 1e-12);
        assert_relative_eq!(model.predict(10.0, 30.0), 37.0124, epsilon = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // Scoring uses each record's own adjustment input.
    //
    // Given
    // -----
    // - Two records whose actual effort equals the formula's prediction
    //   with adjustment inputs 15 and 60.
    //
    // Expect
    // ------
    // - MMRE = 0 and the stored parameters are the published constants.
    fn fit_and_score_uses_record_adjustment() {
        let m = FixedFormulaModel::new();
        let records = vec![
            Record::new(4.0, 15.0, m.predict(4.0, 15.0)).unwrap(),
            Record::new(20.0, 60.0, m.predict(20.0, 60.0)).unwrap(),
        ];
        let ds = Dataset::new(records);

        let fitted = FixedFormulaModel::fit_and_score(&ds).unwrap();

        assert_relative_eq!(fitted.mmre(), 0.0, epsilon = 1e-12);
        assert_eq!(fitted.model().a(), FIXED_A);
        assert_eq!(fitted.model().b(), FIXED_B);
    }

    #[test]
    // Purpose
    // -------
    // An empty dataset is rejected.
    fn fit_and_score_rejects_empty_dataset() {
        assert_eq!(
            FixedFormulaModel::fit_and_score(&Dataset::default()),
            Err(EstimationError::EmptyDataset)
        );
    }
}
