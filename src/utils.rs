//! utils — Python input extraction for the PyO3 bridge.
//!
//! Every helper here is compiled only with the `python-bindings` feature.
//! Inputs accept a 1-D `numpy.ndarray`, a `pandas.Series`, or any sequence
//! of floats; anything else raises `TypeError`.

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use crate::{
    estimation::{core::data::Dataset, errors::EstimationError},
    optimization::swarm::PsoOptions,
};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

/// Borrow `raw` as a contiguous float64 array without copying when it
/// already is one (ndarray, or a Series via `to_numpy`); otherwise copy a
/// float sequence.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, name: &str,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    let contiguous = |obj: &Bound<'py, PyAny>| {
        obj.extract::<PyReadonlyArray1<f64>>().ok().filter(|arr| arr.as_slice().is_ok())
    };
    if let Some(arr) = contiguous(raw) {
        return Ok(arr);
    }
    if let Some(arr) = raw.call_method1("to_numpy", (false,)).ok().as_ref().and_then(contiguous) {
        return Ok(arr);
    }

    let values: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 1-D numpy.ndarray, pandas.Series, or sequence of floats"
        ))
    })?;
    Ok(values.into_pyarray(py).readonly())
}

/// Copy one Python column into an owned `Array1<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_column<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw, name)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(Array1::from(slice.to_vec()))
}

/// Build a validated [`Dataset`] from three Python columns.
#[cfg(feature = "python-bindings")]
pub fn extract_dataset<'py>(
    py: Python<'py>, kloc: &Bound<'py, PyAny>, adjustment_input: &Bound<'py, PyAny>,
    actual_effort: &Bound<'py, PyAny>,
) -> PyResult<Dataset> {
    let kloc = extract_column(py, kloc, "kloc")?;
    let adjustment_input = extract_column(py, adjustment_input, "adjustment_input")?;
    let actual_effort = extract_column(py, actual_effort, "actual_effort")?;
    Ok(Dataset::from_columns(kloc, adjustment_input, actual_effort)?)
}

/// Validated swarm settings from Python keyword arguments.
#[cfg(feature = "python-bindings")]
pub fn extract_pso_options(
    swarm_size: usize, iterations: usize, seed: Option<u64>,
) -> PyResult<PsoOptions> {
    // PsoOptions::new -> OptResult<PsoOptions> -> EstimationError -> PyErr
    let opts = PsoOptions::new(swarm_size, iterations, seed).map_err(EstimationError::from)?;
    Ok(opts)
}
