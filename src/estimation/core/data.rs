//! Historical project data containers for effort models.
//!
//! Purpose
//! -------
//! Provide small, validated containers for historical project records used by
//! every effort model. This module centralizes input validation for raw
//! records so that fitting code can assume clean, strictly positive values.
//!
//! Key behaviors
//! -------------
//! - [`Record`] enforces finite, strictly positive `kloc`,
//!   `adjustment_input`, and `actual_effort` at construction.
//! - [`Dataset`] keeps records in caller order and exposes column views as
//!   `ndarray::Array1<f64>` for vectorized prediction and scoring.
//!
//! Invariants & assumptions
//! ------------------------
//! - Records are immutable once built.
//! - A `Dataset` may be empty; every fit operation rejects an empty dataset
//!   with `EstimationError::EmptyDataset` via [`Dataset::ensure_non_empty`].
//! - Order is preserved for reproducible output but does not affect any
//!   aggregate computed by the models.
//!
//! Downstream usage
//! ----------------
//! - Loaders (spreadsheet, CSV, Python arrays) build a `Dataset` at the
//!   boundary; models borrow it read-only.
//!
//! Testing notes
//! -------------
//! - Unit tests cover record validation (non-finite and non-positive
//!   fields), column construction (length mismatch, indexed errors), and
//!   column views.
use crate::estimation::errors::{EstimationError, EstimationResult};
use ndarray::Array1;

/// `Record` — one historical project observation.
///
/// Fields
/// ------
/// - `kloc`: size in thousands of lines of code (`> 0`).
/// - `adjustment_input`: effort adjustment input; divided by the
///   normalization constant to obtain the adjustment factor (`> 0`).
/// - `actual_effort`: observed effort (`> 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    kloc: f64,
    adjustment_input: f64,
    actual_effort: f64,
}

impl Record {
    /// Construct a validated record.
    ///
    /// # Errors
    /// - `EstimationError::InvalidRecord { index: None, .. }` naming the first
    ///   field that is non-finite or not strictly positive.
    pub fn new(kloc: f64, adjustment_input: f64, actual_effort: f64) -> EstimationResult<Self> {
        Self::validated(None, kloc, adjustment_input, actual_effort)
    }

    pub fn kloc(&self) -> f64 {
        self.kloc
    }

    pub fn adjustment_input(&self) -> f64 {
        self.adjustment_input
    }

    pub fn actual_effort(&self) -> f64 {
        self.actual_effort
    }

    fn validated(
        index: Option<usize>, kloc: f64, adjustment_input: f64, actual_effort: f64,
    ) -> EstimationResult<Self> {
        verify_field(index, "kloc", kloc)?;
        verify_field(index, "adjustment_input", adjustment_input)?;
        verify_field(index, "actual_effort", actual_effort)?;
        Ok(Self { kloc, adjustment_input, actual_effort })
    }
}

/// `Dataset` — ordered collection of historical records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap already-validated records, preserving their order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build a dataset from three parallel columns.
    ///
    /// # Errors
    /// - `EstimationError::LengthMismatch` if the columns differ in length
    ///   (`expected` is the KLOC column length).
    /// - `EstimationError::InvalidRecord { index: Some(i), .. }` for the first
    ///   row with a non-finite or non-positive field.
    ///
    /// # Examples
    /// ```rust
    /// # use ndarray::array;
    /// # use effort_estimation::estimation::core::data::Dataset;
    /// let ds = Dataset::from_columns(
    ///     array![10.0, 20.0],
    ///     array![30.0, 25.0],
    ///     array![40.0, 75.0],
    /// ).unwrap();
    /// assert_eq!(ds.len(), 2);
    /// ```
    pub fn from_columns(
        kloc: Array1<f64>, adjustment_input: Array1<f64>, actual_effort: Array1<f64>,
    ) -> EstimationResult<Self> {
        let n = kloc.len();
        for found in [adjustment_input.len(), actual_effort.len()] {
            if found != n {
                return Err(EstimationError::LengthMismatch { expected: n, found });
            }
        }
        let records = (0..n)
            .map(|i| Record::validated(Some(i), kloc[i], adjustment_input[i], actual_effort[i]))
            .collect::<EstimationResult<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Reject empty datasets.
    ///
    /// # Errors
    /// `EstimationError::EmptyDataset` if there are no records.
    pub fn ensure_non_empty(&self) -> EstimationResult<()> {
        if self.records.is_empty() {
            return Err(EstimationError::EmptyDataset);
        }
        Ok(())
    }

    pub fn klocs(&self) -> Array1<f64> {
        self.records.iter().map(Record::kloc).collect()
    }

    pub fn adjustment_inputs(&self) -> Array1<f64> {
        self.records.iter().map(Record::adjustment_input).collect()
    }

    pub fn actual_efforts(&self) -> Array1<f64> {
        self.records.iter().map(Record::actual_effort).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Finite and strictly positive, or `InvalidRecord` naming `field`.
pub(crate) fn verify_field(
    index: Option<usize>, field: &'static str, value: f64,
) -> EstimationResult<()> {
    if !value.is_finite() {
        return Err(EstimationError::InvalidRecord {
            index,
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(EstimationError::InvalidRecord {
            index,
            field,
            value,
            reason: "must be strictly positive",
        });
    }
    Ok(())
}
