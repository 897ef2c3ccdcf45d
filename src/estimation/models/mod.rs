//! estimation::models — the three competing effort models.
//!
//! - [`fixed`]: COCOMO-style power law with published constants
//!   (`A = 2.94`, `B = 1.1`); nothing is fitted.
//! - [`regression`]: closed-form ordinary least squares on KLOC.
//! - [`power_law`]: `a · kloc^b` with `(a, b)` calibrated by particle swarm
//!   against MMRE.
//!
//! Every fitting routine returns a [`FittedModel`](crate::estimation::core::FittedModel)
//! so that parameters are computed once and reused for point predictions.

pub mod fixed;
pub mod power_law;
pub mod regression;

pub use self::fixed::{FIXED_A, FIXED_B, FixedFormulaModel};
pub use self::power_law::{PowerLawModel, PowerLawOutcome};
pub use self::regression::LinearModel;
