use crate::estimation::errors::EstimationError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- PsoOptions ----
    /// Swarm must contain at least one particle.
    InvalidSwarmSize {
        size: usize,
        reason: &'static str,
    },
    /// Iteration count must be positive.
    InvalidIterations {
        iterations: usize,
        reason: &'static str,
    },
    /// Inertia / acceleration coefficients must be finite and non-negative.
    InvalidCoefficient {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Initialization range for one dimension is empty or non-finite.
    InvalidInitRange {
        dim: usize,
        lower: f64,
        upper: f64,
        reason: &'static str,
    },
    /// Bounds or positions disagree on the search-space dimension.
    DimensionMismatch {
        expected: usize,
        found: usize,
    },

    // ---- Run outcome ----
    /// No evaluation produced a score comparable with `<` (all NaN).
    NoFiniteScore,

    // ---- Objective ----
    /// Failure reported by the objective function itself.
    Objective(Box<EstimationError>),
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- PsoOptions ----
            OptError::InvalidSwarmSize { size, reason } => {
                write!(f, "Invalid swarm size {size}: {reason}")
            }
            OptError::InvalidIterations { iterations, reason } => {
                write!(f, "Invalid iteration count {iterations}: {reason}")
            }
            OptError::InvalidCoefficient { name, value, reason } => {
                write!(f, "Invalid coefficient {name} = {value}: {reason}")
            }
            OptError::InvalidInitRange { dim, lower, upper, reason } => {
                write!(f, "Invalid init range [{lower}, {upper}) in dimension {dim}: {reason}")
            }
            OptError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}")
            }

            // ---- Run outcome ----
            OptError::NoFiniteScore => {
                write!(f, "No evaluation produced a comparable objective value")
            }

            // ---- Objective ----
            OptError::Objective(inner) => {
                write!(f, "Objective evaluation failed: {inner}")
            }
        }
    }
}

impl From<EstimationError> for OptError {
    fn from(err: EstimationError) -> Self {
        OptError::Objective(Box::new(err))
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptError> for pyo3::PyErr {
    fn from(err: OptError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(format!("OptError: {err}"))
    }
}
