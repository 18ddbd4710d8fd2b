//! Intrinsics parameter blocks.

use anyhow::{ensure, Result};
use landmark_projection_core::{Intrinsics, IntrinsicsSlot, INTRINSICS_DIM};
use nalgebra::{DVector, DVectorView, RealField};

/// Convert intrinsics to a dense parameter vector `[f, u0, v0, alpha, beta, theta]`.
pub fn intrinsics_to_dvec(k: &Intrinsics<f64>) -> DVector<f64> {
    DVector::from_row_slice(&k.to_array())
}

/// Build intrinsics from a dense parameter vector `[f, u0, v0, alpha, beta, theta]`.
pub fn intrinsics_from_dvec(v: DVectorView<'_, f64>) -> Result<Intrinsics<f64>> {
    ensure!(
        v.len() == INTRINSICS_DIM,
        "expected intrinsics vector of length {}, got {}",
        INTRINSICS_DIM,
        v.len()
    );
    Ok(intrinsics_from_view(v))
}

pub(crate) fn intrinsics_from_view<T: RealField>(v: DVectorView<'_, T>) -> Intrinsics<T> {
    debug_assert_eq!(v.len(), INTRINSICS_DIM, "intrinsics must have 6 params");
    Intrinsics {
        f: v[IntrinsicsSlot::F.index()].clone(),
        u0: v[IntrinsicsSlot::U0.index()].clone(),
        v0: v[IntrinsicsSlot::V0.index()].clone(),
        alpha: v[IntrinsicsSlot::Alpha.index()].clone(),
        beta: v[IntrinsicsSlot::Beta.index()].clone(),
        theta: v[IntrinsicsSlot::Theta.index()].clone(),
    }
}
