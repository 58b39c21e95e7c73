//! # Binary VLE
//!
//! Vapor-liquid equilibrium models for binary mixtures.
//!
//! ## Crate layout
//!
//! - [`models`]: The two computational engines, each exposed as a
//!   [`twine_core::Model`]:
//!   - [`models::distillation`]: McCabe-Thiele stage counting for a binary
//!     distillation column.
//!   - [`models::flash`]: Phase classification and lever-rule split of a binary
//!     mixture at a fixed temperature or pressure.
//! - [`support`]: Supporting utilities used by the models (equilibrium
//!   relations, root finding, numeric constraints, memoization, geometry).
//!
//! ## Recoverable conditions
//!
//! Invalid inputs are reported as errors. Numerical trouble that has a
//! documented fallback (a root find that does not converge, a degenerate line
//! construction, a negative minimum reflux) is not an error: the fallback value
//! is used, a [`support::fallback::Warning`] is attached to the result, and the
//! substitution is logged through the [`log`] facade.

pub mod models;
pub mod support;
