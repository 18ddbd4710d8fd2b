//! Parameter block definitions for landmark projection.
//!
//! Parameter blocks are the variables a solver perturbs. Each block type
//! provides:
//!
//! - **Dimension constant** - `POSE_DIM` / `INTRINSICS_DIM` from the core crate
//! - **Conversion to/from DVector** - for optimization backends
//! - **Generic view decoding** - for residuals evaluated on dual numbers
//!
//! # Available Parameters
//!
//! - [`pose::pose_to_dvec`] / [`pose::pose_from_dvec`] - `[X, Y, Z, Rx, Ry, Rz]`
//! - [`intrinsics::intrinsics_to_dvec`] / [`intrinsics::intrinsics_from_dvec`] -
//!   `[f, u0, v0, alpha, beta, theta]`

pub mod intrinsics;
pub mod pose;

pub use intrinsics::*;
pub use pose::*;
