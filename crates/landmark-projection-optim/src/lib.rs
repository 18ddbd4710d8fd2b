//! Optimizer-facing building blocks for landmark projection.
//!
//! This crate does not solve anything by itself. It packages the projection
//! model from `landmark-projection-core` into the pieces a non-linear least
//! squares solver consumes:
//!
//! - [`params`] - flat `DVector` parameter blocks in the fixed slot order,
//! - [`factors`] - reprojection residuals generic over `RealField`,
//! - [`backend`] - `tiny-solver` factor adapters,
//! - [`jacobian_ad`] - per-observation Jacobians via `num-dual`.

pub mod backend;
pub mod factors;
pub mod jacobian_ad;
pub mod params;

pub use crate::backend::{LandmarkReprojFactor, WorldReprojFactor};
pub use crate::factors::{LandmarkObservation, WorldObservation};
pub use crate::jacobian_ad::{landmark_reproj_jacobian, ReprojLayout, REPROJ_LOCAL_DIM};
