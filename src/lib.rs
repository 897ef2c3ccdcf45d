//! effort_estimation — KLOC-based software effort estimation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the effort-model comparison to Python via the `_effort_estimation` extension
//! module when the `python-bindings` feature is enabled.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`estimation` and `optimization`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers (`EffortComparison`, `PointEstimate`), the
//!   `mmre` function, and the `#[pymodule]` initializer for the
//!   `_effort_estimation` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue and error mapping.
//! - Python inputs are converted into a validated
//!   [`Dataset`](estimation::core::Dataset) before any model runs; on success
//!   the invariants documented in `estimation::core` hold.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are rich error types internally and surface as
//!   `ValueError` in Python.
//! - Point predictions use the neutral adjustment factor (`EAF = 1`).
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `estimation::report` and
//!   `estimation::models` directly and can ignore the PyO3 items.
//! - Loading project data from files and rendering results (tables, charts,
//!   exports) are left to the caller.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_estimation_pipeline.rs`.
//! - The PyO3 wrappers are exercised from Python.

pub mod estimation;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    estimation::{
        core::fitness,
        report::{ComparisonReport, PointPrediction, ReferencedPrediction, compare_all, reference_hint},
    },
    utils::{extract_dataset, extract_f64_array, extract_pso_options},
};

/// EffortComparison — Python-facing wrapper for the three-model comparison.
///
/// Purpose
/// -------
/// Fit the fixed-formula, least-squares and PSO power-law models on one
/// dataset from Python and serve point predictions from the stored fits.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `EffortComparison(kloc, adjustment_input, actual_effort, swarm_size=30,
/// iterations=100, seed=None)`:
/// - `kloc`, `adjustment_input`, `actual_effort`: array-likes of equal length
///   holding finite, strictly positive values.
/// - `swarm_size`, `iterations`: positive PSO settings.
/// - `seed`: optional RNG seed for a reproducible PSO fit.
///
/// Fields
/// ------
/// - `inner`: [`ComparisonReport`]
///   The fitted models and their MMREs.
///
/// Notes
/// -----
/// - Native Rust code should call [`compare_all`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "effort_estimation")]
pub struct EffortComparison {
    /// Underlying Rust ComparisonReport.
    inner: ComparisonReport,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl EffortComparison {
    #[new]
    #[pyo3(
        text_signature = "(kloc, adjustment_input, actual_effort, /, swarm_size=30, \
                          iterations=100, seed=None)",
        signature = (kloc, adjustment_input, actual_effort, swarm_size = 30, iterations = 100, seed = None)
    )]
    pub fn new<'py>(
        py: Python<'py>, kloc: &Bound<'py, PyAny>, adjustment_input: &Bound<'py, PyAny>,
        actual_effort: &Bound<'py, PyAny>, swarm_size: usize, iterations: usize,
        seed: Option<u64>,
    ) -> PyResult<EffortComparison> {
        let dataset = extract_dataset(py, kloc, adjustment_input, actual_effort)?;
        let opts = extract_pso_options(swarm_size, iterations, seed)?;
        let inner = py.allow_threads(|| compare_all(&dataset, &opts))?;
        Ok(EffortComparison { inner })
    }

    /// `(a, b)` of the fixed formula.
    #[getter]
    pub fn fixed_params(&self) -> (f64, f64) {
        let m = self.inner.fixed.model();
        (m.a(), m.b())
    }

    #[getter]
    pub fn fixed_mmre(&self) -> f64 {
        self.inner.fixed.mmre()
    }

    /// `(slope, intercept)` of the least-squares line.
    #[getter]
    pub fn regression_params(&self) -> (f64, f64) {
        let m = self.inner.regression.model();
        (m.slope(), m.intercept())
    }

    #[getter]
    pub fn regression_mmre(&self) -> f64 {
        self.inner.regression.mmre()
    }

    /// `(a, b)` found by the particle swarm.
    #[getter]
    pub fn pso_params(&self) -> (f64, f64) {
        let m = self.inner.pso.model();
        (m.a(), m.b())
    }

    #[getter]
    pub fn pso_mmre(&self) -> f64 {
        self.inner.pso.mmre()
    }

    /// `[(name, mmre), ...]` ordered by ascending MMRE.
    #[getter]
    pub fn ranking(&self) -> Vec<(&'static str, f64)> {
        self.inner.ranking().iter().map(|(kind, mmre)| (kind.name(), *mmre)).collect()
    }

    /// Effort predicted by each model for `kloc`.
    #[pyo3(text_signature = "(self, kloc, /)")]
    pub fn predict(&self, kloc: f64) -> PointEstimate {
        PointEstimate { prediction: self.inner.predict_single(kloc), reference: None }
    }

    /// Effort predicted by each model for `kloc`, scored against `hint`.
    ///
    /// When `hint` is `None` the reference is `kloc * 2.5`. The hint must be
    /// finite and strictly positive.
    #[pyo3(signature = (kloc, hint = None), text_signature = "(self, kloc, /, hint=None)")]
    pub fn predict_with_reference(&self, kloc: f64, hint: Option<f64>) -> PyResult<PointEstimate> {
        let hint = hint.unwrap_or_else(|| reference_hint(kloc));
        let referenced = self.inner.predict_single_with_reference(kloc, hint)?;
        Ok(PointEstimate { prediction: referenced.prediction, reference: Some(referenced) })
    }
}

/// PointEstimate — per-model efforts for one KLOC value.
///
/// Returned by `EffortComparison.predict` and
/// `EffortComparison.predict_with_reference`; the `*_mmre` and
/// `actual_effort_hint` getters are `None` for plain predictions.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "effort_estimation")]
pub struct PointEstimate {
    prediction: PointPrediction,
    reference: Option<ReferencedPrediction>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PointEstimate {
    #[getter]
    pub fn kloc(&self) -> f64 {
        self.prediction.kloc
    }

    #[getter]
    pub fn fixed_effort(&self) -> f64 {
        self.prediction.fixed_effort
    }

    #[getter]
    pub fn regression_effort(&self) -> f64 {
        self.prediction.regression_effort
    }

    #[getter]
    pub fn pso_effort(&self) -> f64 {
        self.prediction.pso_effort
    }

    #[getter]
    pub fn actual_effort_hint(&self) -> Option<f64> {
        self.reference.map(|r| r.actual_effort_hint)
    }

    #[getter]
    pub fn fixed_mmre(&self) -> Option<f64> {
        self.reference.map(|r| r.fixed_mmre)
    }

    #[getter]
    pub fn regression_mmre(&self) -> Option<f64> {
        self.reference.map(|r| r.regression_mmre)
    }

    #[getter]
    pub fn pso_mmre(&self) -> Option<f64> {
        self.reference.map(|r| r.pso_mmre)
    }
}

/// Mean Magnitude of Relative Error of `predicted` against `actual`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(actual, predicted, /)")]
pub fn mmre<'py>(
    py: Python<'py>, actual: &Bound<'py, PyAny>, predicted: &Bound<'py, PyAny>,
) -> PyResult<f64> {
    let actual = extract_f64_array(py, actual, "actual")?;
    let predicted = extract_f64_array(py, predicted, "predicted")?;
    Ok(fitness::mmre(actual.as_slice()?, predicted.as_slice()?)?)
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _effort_estimation<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<EffortComparison>()?;
    m.add_class::<PointEstimate>()?;
    m.add_function(wrap_pyfunction!(mmre, m)?)?;
    Ok(())
}
