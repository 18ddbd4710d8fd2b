//! Core geometry for relating planar landmarks to a camera image.
//!
//! This crate contains:
//! - point aliases and the axis-angle rotation primitive (`math`),
//! - the fixed-slot pose and intrinsics records plus landmarks (`models`),
//! - the chained coordinate transforms (`transform`),
//! - a JSON configuration layer (`config`).
//!
//! Transform chain:
//! `image = project(K, R(-r_cam) · (R(r_lm) · [x, y, 0] + t_lm - t_cam))`
//!
//! Every transform is generic over [`nalgebra::RealField`], so the same code
//! evaluates plain `f64` values and dual numbers for automatic differentiation.

/// JSON configuration for intrinsics and landmark maps.
pub mod config;
/// Point aliases and rotation helpers.
pub mod math;
/// Pose, intrinsics and landmark models.
pub mod models;
/// Shared helpers for tests across the workspace.
pub mod test_utils;
/// Landmark → world → image transforms.
pub mod transform;

pub use config::*;
pub use math::*;
pub use models::*;
pub use transform::*;
