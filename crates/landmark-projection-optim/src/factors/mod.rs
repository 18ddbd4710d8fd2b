//! Residual factor implementations with automatic differentiation support.
//!
//! Factors compute the difference between the projected position of a known
//! point and where it was observed in the image. All factor implementations
//! are generic over [`nalgebra::RealField`] to support both f64 evaluation and
//! automatic differentiation via dual numbers.
//!
//! ## Key Guidelines
//!
//! - Use `.clone()` liberally on `T: RealField` values
//! - Lift measurements into `T` with `nalgebra::convert`
//! - Include `debug_assert!` for parameter dimension checks
//!
//! # Available Factors
//!
//! - [`reprojection_model`] - landmark-plane and world-point reprojection

pub mod reprojection_model;

pub use reprojection_model::*;

use serde::{Deserialize, Serialize};

/// A landmark-plane point observed in the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkObservation {
    /// Point in the landmark frame.
    pub point_lm: [f64; 2],
    /// Observed normalized image coordinates.
    pub uv: [f64; 2],
    /// Residual weight; the residual is scaled by `sqrt(w)`.
    pub w: f64,
}

impl LandmarkObservation {
    pub fn new(point_lm: [f64; 2], uv: [f64; 2]) -> Self {
        Self { point_lm, uv, w: 1.0 }
    }

    pub fn with_weight(self, w: f64) -> Self {
        Self { w, ..self }
    }
}

/// A known world point observed in the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldObservation {
    pub pw: [f64; 3],
    pub uv: [f64; 2],
    pub w: f64,
}

impl WorldObservation {
    pub fn new(pw: [f64; 3], uv: [f64; 2]) -> Self {
        Self { pw, uv, w: 1.0 }
    }

    pub fn with_weight(self, w: f64) -> Self {
        Self { w, ..self }
    }
}
