//! estimation::report — side-by-side comparison of the three effort models.
//!
//! Purpose
//! -------
//! Fit the fixed-formula, least-squares and PSO power-law models on one
//! dataset, keep the fitted parameters, and answer point-prediction queries
//! from them.
//!
//! Key behaviors
//! -------------
//! - [`compare_all`] fits every model in sequence (fixed, regression, PSO)
//!   and returns a [`ComparisonReport`]. PSO is rerun on every call; with
//!   `seed: None` repeated calls may differ.
//! - [`ComparisonReport::predict_single`] and
//!   [`ComparisonReport::predict_single_with_reference`] reuse the stored
//!   fitted models; nothing is refitted per query.
//! - [`ComparisonReport::ranking`] orders the models by ascending MMRE;
//!   ties keep the order fixed, regression, PSO.
//! - The free functions [`predict_single`] and
//!   [`predict_single_with_reference`] fit and predict in one call.
//!
//! Conventions
//! -----------
//! - Point predictions use the neutral adjustment factor (1.0).
//! - [`reference_hint`] (`kloc × 2.5`) is a caller-side helper for when no
//!   real actual effort is known; it is never applied implicitly.
//!
//! Downstream usage
//! ----------------
//! - The Python `EffortComparison` class wraps a [`ComparisonReport`].
use crate::{
    estimation::{
        core::{
            data::{Dataset, verify_field},
            fitness::mmre,
            model::{EffortModel, FittedModel},
        },
        errors::EstimationResult,
        models::{fixed::FixedFormulaModel, power_law::PowerLawModel, regression::LinearModel},
    },
    optimization::swarm::PsoOptions,
};
use ndarray::Array1;
use tracing::debug;

/// Effort per KLOC used by [`reference_hint`].
pub const REFERENCE_EFFORT_PER_KLOC: f64 = 2.5;

/// Rough reference effort `kloc × 2.5` for a project with no known actual.
pub fn reference_hint(kloc: f64) -> f64 {
    kloc * REFERENCE_EFFORT_PER_KLOC
}

/// Identifies one of the compared models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Fixed,
    Regression,
    Pso,
}

impl ModelKind {
    /// Report order.
    pub const ALL: [ModelKind; 3] = [ModelKind::Fixed, ModelKind::Regression, ModelKind::Pso];

    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Fixed => "fixed",
            ModelKind::Regression => "regression",
            ModelKind::Pso => "pso",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Point predictions of every model for one KLOC value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPrediction {
    pub kloc: f64,
    pub fixed_effort: f64,
    pub regression_effort: f64,
    pub pso_effort: f64,
}

impl PointPrediction {
    pub fn effort(&self, kind: ModelKind) -> f64 {
        match kind {
            ModelKind::Fixed => self.fixed_effort,
            ModelKind::Regression => self.regression_effort,
            ModelKind::Pso => self.pso_effort,
        }
    }
}

/// Point predictions plus each model's MMRE against a reference effort.
///
/// With a single reference value the MMRE reduces to
/// `|hint − predicted| / hint`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencedPrediction {
    pub prediction: PointPrediction,
    pub actual_effort_hint: f64,
    pub fixed_mmre: f64,
    pub regression_mmre: f64,
    pub pso_mmre: f64,
}

impl ReferencedPrediction {
    pub fn mmre(&self, kind: ModelKind) -> f64 {
        match kind {
            ModelKind::Fixed => self.fixed_mmre,
            ModelKind::Regression => self.regression_mmre,
            ModelKind::Pso => self.pso_mmre,
        }
    }
}

/// Per-record predicted efforts of every model, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPredictions {
    pub fixed: Array1<f64>,
    pub regression: Array1<f64>,
    pub pso: Array1<f64>,
}

/// `ComparisonReport` — the three fitted models of one comparison run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonReport {
    pub fixed: FittedModel<FixedFormulaModel>,
    pub regression: FittedModel<LinearModel>,
    pub pso: FittedModel<PowerLawModel>,
}

/// Fit all three models on `dataset`.
///
/// Errors
/// ------
/// - `EstimationError::EmptyDataset` if `dataset` is empty.
/// - `EstimationError::DegenerateFit` if every KLOC value is identical.
/// - Any PSO configuration or runtime error from
///   [`PowerLawModel::fit`].
pub fn compare_all(dataset: &Dataset, opts: &PsoOptions) -> EstimationResult<ComparisonReport> {
    let fixed = FixedFormulaModel::fit_and_score(dataset)?;
    let regression = LinearModel::fit(dataset)?;
    let pso = PowerLawModel::fit(dataset, opts)?;

    let report = ComparisonReport { fixed, regression, pso };
    let (best, best_mmre) = report.best();
    debug!(
        fixed_mmre = fixed.mmre(),
        regression_mmre = regression.mmre(),
        pso_mmre = pso.mmre(),
        best = best.name(),
        best_mmre,
        "model comparison finished"
    );
    Ok(report)
}

impl ComparisonReport {
    /// MMRE of `kind` on the fitting dataset.
    pub fn mmre(&self, kind: ModelKind) -> f64 {
        match kind {
            ModelKind::Fixed => self.fixed.mmre(),
            ModelKind::Regression => self.regression.mmre(),
            ModelKind::Pso => self.pso.mmre(),
        }
    }

    /// Models ordered by ascending MMRE. Ties keep report order.
    pub fn ranking(&self) -> [(ModelKind, f64); 3] {
        let mut ranked = ModelKind::ALL.map(|kind| (kind, self.mmre(kind)));
        ranked.sort_by(|x, y| x.1.total_cmp(&y.1));
        ranked
    }

    /// Model with the lowest MMRE.
    pub fn best(&self) -> (ModelKind, f64) {
        self.ranking()[0]
    }

    /// Effort predicted by each model for `kloc` at the neutral adjustment.
    pub fn predict_single(&self, kloc: f64) -> PointPrediction {
        PointPrediction {
            kloc,
            fixed_effort: self.fixed.predict_point(kloc),
            regression_effort: self.regression.predict_point(kloc),
            pso_effort: self.pso.predict_point(kloc),
        }
    }

    /// Point predictions plus per-model MMRE against `actual_effort_hint`.
    ///
    /// Errors
    /// ------
    /// - `EstimationError::InvalidRecord { index: None, field:
    ///   "actual_effort_hint", .. }` if the hint is not finite and strictly
    ///   positive.
    pub fn predict_single_with_reference(
        &self, kloc: f64, actual_effort_hint: f64,
    ) -> EstimationResult<ReferencedPrediction> {
        verify_field(None, "actual_effort_hint", actual_effort_hint)?;
        let prediction = self.predict_single(kloc);
        let against = |predicted: f64| mmre(&[actual_effort_hint], &[predicted]);
        Ok(ReferencedPrediction {
            prediction,
            actual_effort_hint,
            fixed_mmre: against(prediction.fixed_effort)?,
            regression_mmre: against(prediction.regression_effort)?,
            pso_mmre: against(prediction.pso_effort)?,
        })
    }

    /// Predicted effort of every model for every record of `dataset`,
    /// using each record's own adjustment input.
    pub fn predictions(&self, dataset: &Dataset) -> ModelPredictions {
        ModelPredictions {
            fixed: self.fixed.model().predictions(dataset),
            regression: self.regression.model().predictions(dataset),
            pso: self.pso.model().predictions(dataset),
        }
    }
}

/// Fit all models on `dataset` and predict effort for `kloc`.
///
/// Errors
/// ------
/// Same as [`compare_all`].
pub fn predict_single(
    dataset: &Dataset, kloc: f64, opts: &PsoOptions,
) -> EstimationResult<PointPrediction> {
    Ok(compare_all(dataset, opts)?.predict_single(kloc))
}

/// Fit all models on `dataset`, predict effort for `kloc`, and score each
/// prediction against `actual_effort_hint`.
///
/// Errors
/// ------
/// Same as [`compare_all`] and
/// [`ComparisonReport::predict_single_with_reference`].
pub fn predict_single_with_reference(
    dataset: &Dataset, kloc: f64, actual_effort_hint: f64, opts: &PsoOptions,
) -> EstimationResult<ReferencedPrediction> {
    compare_all(dataset, opts)?.predict_single_with_reference(kloc, actual_effort_hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::errors::EstimationError;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Ranking order, including ties.
    // - Point predictions served from stored fitted models.
    // - Reference scoring and the zero-hint guard.
    // - Error propagation from `compare_all`.
    //
    // They intentionally DO NOT cover:
    // - Fitting quality of individual models; see `estimation::models`.
    // -------------------------------------------------------------------------

    fn report(fixed_mmre: f64, regression_mmre: f64, pso_mmre: f64) -> ComparisonReport {
        ComparisonReport {
            fixed: FittedModel::new(FixedFormulaModel::new(), fixed_mmre),
            regression: FittedModel::new(LinearModel::new(2.0, 3.0), regression_mmre),
            pso: FittedModel::new(PowerLawModel::new(3.0, 1.0), pso_mmre),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_columns(
            array![2.0, 8.0, 15.0, 40.0, 90.0],
            array![30.0, 27.0, 33.0, 30.0, 36.0],
            array![6.5, 25.0, 48.0, 110.0, 300.0],
        )
        .unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Ranking sorts by ascending MMRE and keeps report order on ties.
    //
    // Given
    // -----
    // - MMREs (fixed, regression, pso) = (0.4, 0.1, 0.2) and (0.3, 0.3, 0.1).
    //
    // Expect
    // ------
    // - [regression, pso, fixed] and [pso, fixed, regression].
    fn ranking_orders_by_mmre_with_stable_ties() {
        let r1 = report(0.4, 0.1, 0.2);
        let r2 = report(0.3, 0.3, 0.1);

        let order1: Vec<_> = r1.ranking().iter().map(|(k, _)| *k).collect();
        let order2: Vec<_> = r2.ranking().iter().map(|(k, _)| *k).collect();

        assert_eq!(order1, vec![ModelKind::Regression, ModelKind::Pso, ModelKind::Fixed]);
        assert_eq!(order2, vec![ModelKind::Pso, ModelKind::Fixed, ModelKind::Regression]);
        assert_eq!(r1.best(), (ModelKind::Regression, 0.1));
    }

    #[test]
    // Purpose
    // -------
    // Point predictions come from the stored parameters.
    //
    // Given
    // -----
    // - regression 2x + 3, power law 3 · x, fixed 2.94 · x^1.1; kloc = 10.
    //
    // Expect
    // ------
    // - 23, 30 and 2.94 · 10^1.1.
    fn predict_single_uses_stored_models() {
        let r = report(0.0, 0.0, 0.0);

        let p = r.predict_single(10.0);

        assert_eq!(p.kloc, 10.0);
        assert_relative_eq!(p.regression_effort, 23.0, epsilon = 1e-12);
        assert_relative_eq!(p.pso_effort, 30.0, epsilon = 1e-12);
        assert_relative_eq!(p.fixed_effort, 2.94 * 10f64.powf(1.1), epsilon = 1e-12);
        assert_eq!(p.effort(ModelKind::Pso), p.pso_effort);
    }

    #[test]
    // Purpose
    // -------
    // Reference scoring is the single-pair MMRE; non-positive and
    // non-finite hints are rejected, so every reference MMRE is ≥ 0.
    //
    // Given
    // -----
    // - kloc = 10 with hint `reference_hint(10) = 25`.
    //
    // Expect
    // ------
    // - regression MMRE = |25 − 23| / 25 = 0.08, pso = |25 − 30| / 25 = 0.2.
    // - hints 0, −25 and NaN → `InvalidRecord` naming `actual_effort_hint`.
    fn predict_single_with_reference_scores_each_model() {
        let r = report(0.0, 0.0, 0.0);
        let hint = reference_hint(10.0);

        let scored = r.predict_single_with_reference(10.0, hint).unwrap();

        assert_eq!(hint, 25.0);
        assert_relative_eq!(scored.regression_mmre, 0.08, epsilon = 1e-12);
        assert_relative_eq!(scored.pso_mmre, 0.2, epsilon = 1e-12);
        assert_relative_eq!(
            scored.mmre(ModelKind::Fixed),
            (25.0 - 2.94 * 10f64.powf(1.1)).abs() / 25.0,
            epsilon = 1e-12
        );
        for bad in [0.0, -25.0, f64::NAN] {
            assert!(matches!(
                r.predict_single_with_reference(10.0, bad),
                Err(EstimationError::InvalidRecord {
                    index: None,
                    field: "actual_effort_hint",
                    ..
                })
            ));
        }
    }

    #[test]
    // Purpose
    // -------
    // `compare_all` fits every model and the report agrees with them.
    //
    // Given
    // -----
    // - Five records, 15 particles, 40 iterations, seed = 11.
    //
    // Expect
    // ------
    // - Each stored MMRE equals the model's score on the dataset.
    // - The free `predict_single` matches the report built with the same
    //   seed.
    // - Per-record predictions have one entry per record.
    fn compare_all_is_consistent_with_fitted_models() {
        let ds = dataset();
        let opts = PsoOptions::new(15, 40, Some(11)).unwrap();

        let r = compare_all(&ds, &opts).unwrap();
        let p = predict_single(&ds, 20.0, &opts).unwrap();
        let preds = r.predictions(&ds);

        assert_eq!(r.fixed.model().score(&ds).unwrap(), r.fixed.mmre());
        assert_eq!(r.regression.model().score(&ds).unwrap(), r.regression.mmre());
        assert_eq!(r.pso.model().score(&ds).unwrap(), r.pso.mmre());
        assert_eq!(p, r.predict_single(20.0));
        assert_eq!(preds.fixed.len(), ds.len());
        assert_eq!(preds.regression.len(), ds.len());
        assert_eq!(preds.pso.len(), ds.len());
    }

    #[test]
    // Purpose
    // -------
    // Fitting errors surface from every entry point.
    //
    // Given
    // -----
    // - An empty dataset.
    // - A dataset whose KLOC values are all equal.
    //
    // Expect
    // ------
    // - `EmptyDataset` and `DegenerateFit`.
    fn entry_points_propagate_fit_errors() {
        let opts = PsoOptions::new(5, 5, Some(0)).unwrap();
        let flat = Dataset::from_columns(
            array![4.0, 4.0],
            array![30.0, 30.0],
            array![10.0, 12.0],
        )
        .unwrap();

        assert_eq!(compare_all(&Dataset::default(), &opts), Err(EstimationError::EmptyDataset));
        assert_eq!(
            predict_single_with_reference(&Dataset::default(), 10.0, 25.0, &opts),
            Err(EstimationError::EmptyDataset)
        );
        assert!(matches!(
            predict_single(&flat, 10.0, &opts),
            Err(EstimationError::DegenerateFit { .. })
        ));
    }
}
