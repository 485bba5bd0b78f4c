//! # Tenor Math
//!
//! Numerical routines for the Tenor fixed income valuation engine:
//!
//! - **Interpolation**: linear interpolation with optional extrapolation,
//!   used for zero curves in (year-fraction, rate) space
//! - **Solvers**: Newton-Raphson root finding, used to invert price to
//!   spread and price to yield
//!
//! ## Example
//!
//! ```rust
//! use tenor_math::solvers::{newton_raphson_numerical, SolverConfig};
//!
//! let f = |x: f64| x * x - 9.0;
//! let root = newton_raphson_numerical(f, 2.0, &SolverConfig::default())
//!     .unwrap()
//!     .root;
//! assert!((root - 3.0).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};
