//! estimation::errors — error surface for dataset handling and model fitting.
//!
//! Purpose
//! -------
//! Provide the single error enum and result alias used by the estimation
//! subtree (dataset construction, MMRE scoring, fixed/regression/PSO fits,
//! and the comparison report), together with a Python bridge when the
//! `python-bindings` feature is enabled.
//!
//! Key behaviors
//! -------------
//! - Define [`EstimationResult`] and [`EstimationError`] as the canonical
//!   result and error types for every public estimation entry point.
//! - Attach human-readable `Display` messages that embed the offending
//!   payload (index, value, denominator) so diagnostics are self-contained.
//! - Map optimizer configuration and runtime failures ([`OptError`]) into
//!   estimation errors, so callers of the model APIs never match on
//!   optimizer-internal variants.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are raised at the point of detection and propagated unchanged;
//!   the estimation layer never substitutes default parameters or retries.
//! - Variants are small and cheap to clone so they can be compared directly
//!   in tests.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding in `Display` messages and the
//!   `OptError` → `EstimationError` conversion for configuration failures.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::optimization::errors::OptError;

/// Crate-wide result alias for estimation operations.
pub type EstimationResult<T> = Result<T, EstimationError>;

/// EstimationError — failures raised while building data or fitting models.
///
/// Variants
/// --------
/// - `EmptyDataset`
///   An operation that needs at least one record received none.
/// - `DegenerateFit { denominator }`
///   The least-squares denominator `n·Σx² − (Σx)²` vanished (all KLOC
///   values identical up to rounding).
/// - `DivisionByZero { index }`
///   `actual[index] == 0` inside MMRE; the relative error is undefined.
/// - `InvalidConfiguration { name, value, reason }`
///   A PSO setting (swarm size, iterations, coefficients, init bounds) was
///   rejected.
/// - `LengthMismatch { expected, found }`
///   Paired sequences (actual/predicted, dataset columns) differ in length.
/// - `InvalidRecord { index, field, value, reason }`
///   A record field is non-finite or not strictly positive. `index` is
///   `None` when a single record is built outside a dataset.
/// - `NoFiniteScore`
///   Every PSO evaluation produced a non-comparable (NaN) score, so no best
///   position exists.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimationError {
    // ---- Data ----
    EmptyDataset,
    LengthMismatch { expected: usize, found: usize },
    InvalidRecord { index: Option<usize>, field: &'static str, value: f64, reason: &'static str },

    // ---- Fitting ----
    DegenerateFit { denominator: f64 },
    DivisionByZero { index: usize },
    NoFiniteScore,

    // ---- Configuration ----
    InvalidConfiguration { name: &'static str, value: f64, reason: &'static str },
}

impl std::error::Error for EstimationError {}

impl std::fmt::Display for EstimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Data ----
            EstimationError::EmptyDataset => {
                write!(f, "Dataset is empty: at least one record is required")
            }
            EstimationError::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {expected}, found {found}")
            }
            EstimationError::InvalidRecord { index: Some(index), field, value, reason } => {
                write!(f, "Invalid record at index {index}: {field} = {value}: {reason}")
            }
            EstimationError::InvalidRecord { index: None, field, value, reason } => {
                write!(f, "Invalid record: {field} = {value}: {reason}")
            }

            // ---- Fitting ----
            EstimationError::DegenerateFit { denominator } => {
                write!(
                    f,
                    "Degenerate least-squares fit: denominator {denominator} is zero \
                     (all KLOC values identical)"
                )
            }
            EstimationError::DivisionByZero { index } => {
                write!(f, "Division by zero in MMRE: actual effort at index {index} is 0")
            }
            EstimationError::NoFiniteScore => {
                write!(f, "No particle produced a comparable MMRE score")
            }

            // ---- Configuration ----
            EstimationError::InvalidConfiguration { name, value, reason } => {
                write!(f, "Invalid configuration for {name} = {value}: {reason}")
            }
        }
    }
}

impl From<OptError> for EstimationError {
    fn from(err: OptError) -> Self {
        match err {
            OptError::InvalidSwarmSize { size, reason } => {
                EstimationError::InvalidConfiguration {
                    name: "swarm_size",
                    value: size as f64,
                    reason,
                }
            }
            OptError::InvalidIterations { iterations, reason } => {
                EstimationError::InvalidConfiguration {
                    name: "iterations",
                    value: iterations as f64,
                    reason,
                }
            }
            OptError::InvalidCoefficient { name, value, reason } => {
                EstimationError::InvalidConfiguration { name, value, reason }
            }
            OptError::InvalidInitRange { lower, reason, .. } => {
                EstimationError::InvalidConfiguration { name: "init_bounds", value: lower, reason }
            }
            OptError::DimensionMismatch { expected, found } => {
                EstimationError::LengthMismatch { expected, found }
            }
            OptError::NoFiniteScore => EstimationError::NoFiniteScore,
            OptError::Objective(inner) => *inner,
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<EstimationError> for PyErr {
    fn from(err: EstimationError) -> PyErr {
        PyValueError::new_err(format!("EstimationError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Payload embedding in `Display` messages.
    // - Mapping of optimizer configuration errors into estimation errors.
    //
    // They intentionally DO NOT cover:
    // - The `From<EstimationError> for PyErr` conversion, which needs the
    //   Python C API and is exercised from Python.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `DivisionByZero` reports the offending index.
    //
    // Given
    // -----
    // - `EstimationError::DivisionByZero { index: 4 }`.
    //
    // Expect
    // ------
    // - The display string contains "4".
    fn division_by_zero_includes_index_in_display() {
        // Arrange
        let err = EstimationError::DivisionByZero { index: 4 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('4'), "Display should include the index.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidRecord` names the field and, when present, the
    // record index.
    //
    // Given
    // -----
    // - One error with an index and one without.
    //
    // Expect
    // ------
    // - Both messages contain the field name; only the first mentions
    //   "index".
    fn invalid_record_display_names_field_and_optional_index() {
        // Arrange
        let with_index = EstimationError::InvalidRecord {
            index: Some(2),
            field: "kloc",
            value: -1.0,
            reason: "must be strictly positive",
        };
        let without_index = EstimationError::InvalidRecord {
            index: None,
            field: "actual_effort",
            value: 0.0,
            reason: "must be strictly positive",
        };

        // Act
        let a = with_index.to_string();
        let b = without_index.to_string();

        // Assert
        assert!(a.contains("kloc") && a.contains("index 2"), "Got: {a}");
        assert!(b.contains("actual_effort") && !b.contains("index"), "Got: {b}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure optimizer configuration errors surface as
    // `InvalidConfiguration` with the matching setting name.
    //
    // Given
    // -----
    // - `OptError::InvalidSwarmSize { size: 0, .. }`.
    // - `OptError::InvalidIterations { iterations: 0, .. }`.
    //
    // Expect
    // ------
    // - `InvalidConfiguration` named "swarm_size" and "iterations".
    fn opt_config_errors_map_to_invalid_configuration() {
        // Arrange
        let swarm = OptError::InvalidSwarmSize { size: 0, reason: "must be > 0" };
        let iters = OptError::InvalidIterations { iterations: 0, reason: "must be > 0" };

        // Act
        let swarm_err: EstimationError = swarm.into();
        let iters_err: EstimationError = iters.into();

        // Assert
        match swarm_err {
            EstimationError::InvalidConfiguration { name, value, .. } => {
                assert_eq!(name, "swarm_size");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
        match iters_err {
            EstimationError::InvalidConfiguration { name, .. } => assert_eq!(name, "iterations"),
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure an objective failure wrapped by the optimizer unwraps back to
    // the original estimation error.
    //
    // Given
    // -----
    // - `OptError::Objective(Box::new(EstimationError::EmptyDataset))`.
    //
    // Expect
    // ------
    // - Conversion yields `EstimationError::EmptyDataset`.
    fn objective_error_round_trips_to_original_variant() {
        // Arrange
        let err = OptError::Objective(Box::new(EstimationError::EmptyDataset));

        // Act
        let mapped: EstimationError = err.into();

        // Assert
        assert_eq!(mapped, EstimationError::EmptyDataset);
    }
}
