//! Validation helpers for swarm optimization.
//!
//! This module centralizes the consistency checks used by the swarm
//! configuration types and the runner:
//!
//! - **Size checks**: [`verify_swarm_size`], [`verify_iterations`] reject
//!   zero-sized runs.
//! - **Coefficient checks**: [`verify_coefficient`] requires finite,
//!   non-negative inertia and acceleration constants.
//! - **Bounds checks**: [`verify_bounds`] requires equal-length, finite,
//!   non-empty `[lower, upper)` ranges.
//!
//! Each helper returns a domain-specific [`OptError`] variant so higher
//! layers can map them uniformly.
use crate::optimization::errors::{OptError, OptResult};
use ndarray::Array1;

/// Validate the number of particles.
///
/// # Errors
/// Returns [`OptError::InvalidSwarmSize`] if `size == 0`.
pub fn verify_swarm_size(size: usize) -> OptResult<()> {
    if size == 0 {
        return Err(OptError::InvalidSwarmSize {
            size,
            reason: "Swarm must contain at least one particle.",
        });
    }
    Ok(())
}

/// Validate the number of iterations.
///
/// # Errors
/// Returns [`OptError::InvalidIterations`] if `iterations == 0`.
pub fn verify_iterations(iterations: usize) -> OptResult<()> {
    if iterations == 0 {
        return Err(OptError::InvalidIterations {
            iterations,
            reason: "Iteration count must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate an inertia or acceleration coefficient.
///
/// # Errors
/// Returns [`OptError::InvalidCoefficient`] if the value is non-finite or
/// negative.
pub fn verify_coefficient(name: &'static str, value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidCoefficient {
            name,
            value,
            reason: "Coefficient must be finite.",
        });
    }
    if value < 0.0 {
        return Err(OptError::InvalidCoefficient {
            name,
            value,
            reason: "Coefficient must be non-negative.",
        });
    }
    Ok(())
}

/// Validate per-dimension initialization ranges `[lower[i], upper[i])`.
///
/// Checks:
/// - `lower.len() == upper.len()` and both are non-empty,
/// - every bound is finite,
/// - `lower[i] < upper[i]` for every dimension.
///
/// # Errors
/// - [`OptError::DimensionMismatch`] on length disagreement or zero length.
/// - [`OptError::InvalidInitRange`] for the first offending dimension.
pub fn verify_bounds(lower: &Array1<f64>, upper: &Array1<f64>) -> OptResult<()> {
    if lower.len() != upper.len() || lower.is_empty() {
        return Err(OptError::DimensionMismatch { expected: lower.len(), found: upper.len() });
    }
    for (dim, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(OptError::InvalidInitRange {
                dim,
                lower: lo,
                upper: hi,
                reason: "Bounds must be finite.",
            });
        }
        if lo >= hi {
            return Err(OptError::InvalidInitRange {
                dim,
                lower: lo,
                upper: hi,
                reason: "Lower bound must be strictly below upper bound.",
            });
        }
    }
    Ok(())
}
