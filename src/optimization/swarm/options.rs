//! swarm::options — validated configuration for particle swarm runs.
//!
//! Purpose
//! -------
//! Describe everything a swarm run needs besides the objective: population
//! size, iteration budget, velocity coefficients, the prior box particles
//! are sampled from, and an optional RNG seed.
//!
//! Key behaviors
//! -------------
//! - [`PsoOptions::new`], [`SwarmCoefficients::new`] and [`InitBounds::new`]
//!   validate their inputs and return [`OptResult`].
//! - `Default` implementations reproduce the classic effort-calibration
//!   setup (30 particles, 100 iterations, `w = 0.5`, `c1 = c2 = 1.5`,
//!   `a ∈ [1, 11)`, `b ∈ [0.5, 1.5)`, unseeded).
//!
//! Invariants & assumptions
//! ------------------------
//! - Fields of [`PsoOptions`] are public for ergonomic construction; the
//!   runner re-validates sizes and coefficients before starting, so a
//!   hand-built value cannot bypass the checks.
//! - `seed: None` draws the generator from OS entropy; results are then not
//!   reproducible across calls.
use crate::optimization::{
    errors::OptResult,
    swarm::{
        types::{
            DEFAULT_COGNITIVE, DEFAULT_INERTIA, DEFAULT_ITERATIONS, DEFAULT_SOCIAL,
            DEFAULT_SWARM_SIZE,
        },
        validation::{verify_bounds, verify_coefficient, verify_iterations, verify_swarm_size},
    },
};
use ndarray::{Array1, array};

/// Velocity update coefficients.
///
/// - `inertia` (`w`): fraction of the previous velocity kept.
/// - `cognitive` (`c1`): pull toward the particle's own best position.
/// - `social` (`c2`): pull toward the swarm's global best position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmCoefficients {
    pub inertia: f64,
    pub cognitive: f64,
    pub social: f64,
}

impl SwarmCoefficients {
    /// Construct validated coefficients.
    ///
    /// # Errors
    /// - [`OptError::InvalidCoefficient`](crate::optimization::errors::OptError::InvalidCoefficient)
    ///   if any value is non-finite or negative.
    pub fn new(inertia: f64, cognitive: f64, social: f64) -> OptResult<Self> {
        verify_coefficient("inertia", inertia)?;
        verify_coefficient("cognitive", cognitive)?;
        verify_coefficient("social", social)?;
        Ok(Self { inertia, cognitive, social })
    }
}

impl Default for SwarmCoefficients {
    fn default() -> Self {
        Self { inertia: DEFAULT_INERTIA, cognitive: DEFAULT_COGNITIVE, social: DEFAULT_SOCIAL }
    }
}

/// Per-dimension initialization box `[lower[i], upper[i])`.
///
/// Only the *initial* positions are sampled from this box. Particles are
/// free to leave it during the run; no clamping is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct InitBounds {
    lower: Array1<f64>,
    upper: Array1<f64>,
}

impl InitBounds {
    /// Construct validated bounds.
    ///
    /// # Errors
    /// - `OptError::DimensionMismatch` if the lengths differ or are zero.
    /// - `OptError::InvalidInitRange` if any range is non-finite or empty.
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> OptResult<Self> {
        verify_bounds(&lower, &upper)?;
        Ok(Self { lower, upper })
    }

    /// Prior box for the power-law `(a, b)` pair: `a ∈ [1, 11)`,
    /// `b ∈ [0.5, 1.5)`.
    pub fn power_law() -> Self {
        Self { lower: array![1.0, 0.5], upper: array![11.0, 1.5] }
    }

    /// Search-space dimension.
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }
}

impl Default for InitBounds {
    fn default() -> Self {
        Self::power_law()
    }
}

/// Swarm-level configuration.
///
/// Fields:
/// - `swarm_size` — number of particles (`> 0`).
/// - `iterations` — exact number of evaluate/update rounds (`> 0`).
/// - `coefficients` — velocity update constants.
/// - `bounds` — initialization box; its dimension must match the objective.
/// - `seed` — optional RNG seed for reproducible runs.
///
/// Default:
/// - `swarm_size = 30`, `iterations = 100`
/// - `coefficients = (0.5, 1.5, 1.5)`
/// - `bounds = InitBounds::power_law()`
/// - `seed = None`
#[derive(Debug, Clone, PartialEq)]
pub struct PsoOptions {
    pub swarm_size: usize,
    pub iterations: usize,
    pub coefficients: SwarmCoefficients,
    pub bounds: InitBounds,
    pub seed: Option<u64>,
}

impl PsoOptions {
    /// Create options with default coefficients and power-law bounds.
    ///
    /// # Errors
    /// - `OptError::InvalidSwarmSize` if `swarm_size == 0`.
    /// - `OptError::InvalidIterations` if `iterations == 0`.
    pub fn new(swarm_size: usize, iterations: usize, seed: Option<u64>) -> OptResult<Self> {
        verify_swarm_size(swarm_size)?;
        verify_iterations(iterations)?;
        Ok(Self {
            swarm_size,
            iterations,
            coefficients: SwarmCoefficients::default(),
            bounds: InitBounds::default(),
            seed,
        })
    }

    pub fn with_coefficients(mut self, coefficients: SwarmCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn with_bounds(mut self, bounds: InitBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Re-run every check; used by the runner on possibly hand-built values.
    pub fn validate(&self) -> OptResult<()> {
        verify_swarm_size(self.swarm_size)?;
        verify_iterations(self.iterations)?;
        verify_coefficient("inertia", self.coefficients.inertia)?;
        verify_coefficient("cognitive", self.coefficients.cognitive)?;
        verify_coefficient("social", self.coefficients.social)?;
        verify_bounds(&self.bounds.lower, &self.bounds.upper)
    }
}

impl Default for PsoOptions {
    fn default() -> Self {
        Self {
            swarm_size: DEFAULT_SWARM_SIZE,
            iterations: DEFAULT_ITERATIONS,
            coefficients: SwarmCoefficients::default(),
            bounds: InitBounds::default(),
            seed: None,
        }
    }
}
