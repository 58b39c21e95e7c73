//! Supporting utilities shared by the models.
//!
//! These modules are public because they're useful on their own, but their APIs
//! are not stable.

pub mod constraint;
pub mod equilibrium;
pub mod fallback;
pub mod geometry;
pub mod input_range;
pub mod memo;
pub mod root;
