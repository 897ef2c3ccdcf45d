//! estimation::core::fitness — Mean Magnitude of Relative Error (MMRE).
//!
//! Purpose
//! -------
//! Provide the single fitness function shared by every effort model, both
//! for calibration (the PSO objective) and for comparison (the report).
//!
//! Key behaviors
//! -------------
//! - [`relative_errors`] returns the per-observation magnitude of relative
//!   error `MREᵢ = |actualᵢ − predictedᵢ| / actualᵢ`.
//! - [`mmre`] returns the arithmetic mean of those values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both sequences must be non-empty and of equal length.
//! - A zero actual value is a domain error (`DivisionByZero`), never a
//!   skipped term: masking it would silently bias the metric.
//! - Predicted values are not validated; a NaN prediction propagates into a
//!   NaN MMRE, which the swarm treats as "never better".
//!
//! Testing notes
//! -------------
//! - Unit tests pin the reference values (perfect fit → 0, single 50 %
//!   overestimate → 0.5) and every error branch.
use crate::estimation::errors::{EstimationError, EstimationResult};
use ndarray::Array1;

/// Per-observation magnitude of relative error.
///
/// # Errors
/// - `EstimationError::EmptyDataset` if `actual` is empty.
/// - `EstimationError::LengthMismatch` if lengths differ.
/// - `EstimationError::DivisionByZero { index }` for the first zero actual.
pub fn relative_errors(actual: &[f64], predicted: &[f64]) -> EstimationResult<Array1<f64>> {
    if actual.is_empty() {
        return Err(EstimationError::EmptyDataset);
    }
    if actual.len() != predicted.len() {
        return Err(EstimationError::LengthMismatch {
            expected: actual.len(),
            found: predicted.len(),
        });
    }
    if let Some(index) = actual.iter().position(|&a| a == 0.0) {
        return Err(EstimationError::DivisionByZero { index });
    }
    Ok(actual.iter().zip(predicted).map(|(&a, &p)| (a - p).abs() / a).collect())
}

/// Mean Magnitude of Relative Error.
///
/// `MMRE = (1/n) Σᵢ |actualᵢ − predictedᵢ| / actualᵢ`
///
/// # Errors
/// Same as [`relative_errors`].
///
/// # Examples
/// ```rust
/// # use effort_estimation::estimation::core::fitness::mmre;
/// assert_eq!(mmre(&[100.0, 200.0], &[100.0, 200.0]).unwrap(), 0.0);
/// assert_eq!(mmre(&[100.0], &[150.0]).unwrap(), 0.5);
/// ```
pub fn mmre(actual: &[f64], predicted: &[f64]) -> EstimationResult<f64> {
    let mre = relative_errors(actual, predicted)?;
    Ok(mre.sum() / mre.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Reference MMRE values.
    // - Per-observation MRE vector.
    // - Empty input, length mismatch, and zero-actual guards.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the reference values.
    //
    // Given
    // -----
    // - actual = predicted = [100, 200].
    // - actual = [100], predicted = [150].
    //
    // Expect
    // ------
    // - MMRE = 0 and MMRE = 0.5.
    fn mmre_matches_reference_values() {
        assert_eq!(mmre(&[100.0, 200.0], &[100.0, 200.0]).unwrap(), 0.0);
        assert_relative_eq!(mmre(&[100.0], &[150.0]).unwrap(), 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Over- and under-estimates contribute symmetrically in magnitude.
    //
    // Given
    // -----
    // - actual = [10, 20, 40], predicted = [12, 15, 40].
    //
    // Expect
    // ------
    // - MRE = [0.2, 0.25, 0.0], MMRE = 0.15.
    fn relative_errors_are_magnitudes() {
        let mre = relative_errors(&[10.0, 20.0, 40.0], &[12.0, 15.0, 40.0]).unwrap();

        assert_relative_eq!(mre[0], 0.2, epsilon = 1e-12);
        assert_relative_eq!(mre[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(mre[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            mmre(&[10.0, 20.0, 40.0], &[12.0, 15.0, 40.0]).unwrap(),
            0.15,
            epsilon = 1e-12
        );
    }

    #[test]
    // Purpose
    // -------
    // Preconditions surface as errors instead of NaN/Inf.
    //
    // Given
    // -----
    // - empty inputs, mismatched lengths, and actual = [0] vs predicted = [5].
    //
    // Expect
    // ------
    // - `EmptyDataset`, `LengthMismatch`, `DivisionByZero { index: 0 }`.
    fn mmre_rejects_invalid_inputs() {
        assert_eq!(mmre(&[], &[]), Err(EstimationError::EmptyDataset));
        assert_eq!(
            mmre(&[1.0, 2.0], &[1.0]),
            Err(EstimationError::LengthMismatch { expected: 2, found: 1 })
        );
        assert_eq!(mmre(&[0.0], &[5.0]), Err(EstimationError::DivisionByZero { index: 0 }));
        assert_eq!(
            mmre(&[3.0, 0.0], &[3.0, 1.0]),
            Err(EstimationError::DivisionByZero { index: 1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // A NaN prediction propagates instead of being masked.
    fn nan_prediction_propagates() {
        let value = mmre(&[10.0, 20.0], &[f64::NAN, 20.0]).unwrap();
        assert!(value.is_nan());
    }
}
