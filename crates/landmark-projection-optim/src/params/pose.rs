//! Pose parameter conversions for solver backends.
//!
//! The storage order is `[X, Y, Z, Rx, Ry, Rz]` (translation, then axis-angle).

use anyhow::{ensure, Result};
use landmark_projection_core::{Pose, PoseSlot, POSE_DIM};
use nalgebra::{DVector, DVectorView, RealField, Vector3};

/// Convert a pose into a 6D parameter vector.
pub fn pose_to_dvec(pose: &Pose<f64>) -> DVector<f64> {
    DVector::from_row_slice(&pose.to_array())
}

/// Convert a 6D parameter vector into a pose.
pub fn pose_from_dvec(v: DVectorView<'_, f64>) -> Result<Pose<f64>> {
    ensure!(
        v.len() == POSE_DIM,
        "expected pose vector of length {}, got {}",
        POSE_DIM,
        v.len()
    );
    Ok(pose_from_view(v))
}

/// Decode a pose block inside a residual.
pub(crate) fn pose_from_view<T: RealField>(v: DVectorView<'_, T>) -> Pose<T> {
    debug_assert_eq!(v.len(), POSE_DIM, "pose must have 6 params");
    Pose::new(
        Vector3::new(
            v[PoseSlot::X.index()].clone(),
            v[PoseSlot::Y.index()].clone(),
            v[PoseSlot::Z.index()].clone(),
        ),
        Vector3::new(
            v[PoseSlot::Rx.index()].clone(),
            v[PoseSlot::Ry.index()].clone(),
            v[PoseSlot::Rz.index()].clone(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dvec_follows_slot_order() {
        let pose = Pose::from_array([1.0, 2.0, 3.0, -0.1, -0.2, -0.3]);
        let v = pose_to_dvec(&pose);
        assert_eq!(v.len(), POSE_DIM);
        assert_eq!(v[PoseSlot::Z.index()], 3.0);
        assert_eq!(v[PoseSlot::Rx.index()], -0.1);
        assert_eq!(pose_from_dvec(v.as_view()).unwrap(), pose);
    }

    #[test]
    fn rejects_se3_quaternion_layout() {
        let v = DVector::from_row_slice(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        let err = pose_from_dvec(v.as_view()).unwrap_err();
        assert!(err.to_string().contains("length 6, got 7"), "{err}");
    }
}
