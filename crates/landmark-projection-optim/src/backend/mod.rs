//! Solver adapters.
//!
//! The residual models are exposed to `tiny-solver` as [`Factor`] implementations
//! for every `T: RealField`, so the solver can evaluate them on `f64` and on its
//! own dual-number type. Building and running the problem is left to the caller.
//!
//! [`Factor`]: tiny_solver::factors::Factor

mod tiny_solver_factors;

pub use tiny_solver_factors::{LandmarkReprojFactor, WorldReprojFactor};
