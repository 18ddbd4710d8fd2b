//! Per-observation Jacobian assembly using `num-dual`.
//!
//! A landmark observation depends on three parameter blocks: the landmark
//! pose, the camera pose and the intrinsics. They are stacked into a local
//! vector of `K = 6 + 6 + 6 = 18` scalars and differentiated in one forward
//! pass with `DualSVec64<K>`. Callers scatter the columns into their global
//! Jacobian using [`ReprojLayout`].
//!
//! The theta column is always zero: the projection never reads that slot.

use std::ops::Range;

use landmark_projection_core::{Intrinsics, IntrinsicsSlot, Pose, PoseSlot, INTRINSICS_DIM, POSE_DIM};
use nalgebra::{DVectorView, RealField, SMatrix, SVector};
use num_dual::{jacobian, DualSVec64};

use crate::factors::{landmark_reproj_residual_generic, LandmarkObservation};
use crate::params::{intrinsics_from_view, pose_from_view};

/// Length of the stacked local parameter vector.
pub const REPROJ_LOCAL_DIM: usize = 2 * POSE_DIM + INTRINSICS_DIM;

/// Column layout of the local parameter vector:
/// `[landmark_pose (6), camera_pose (6), intrinsics (6)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReprojLayout;

impl ReprojLayout {
    pub const fn landmark_pose_range(self) -> Range<usize> {
        0..POSE_DIM
    }

    pub const fn camera_pose_range(self) -> Range<usize> {
        POSE_DIM..2 * POSE_DIM
    }

    pub const fn intrinsics_range(self) -> Range<usize> {
        2 * POSE_DIM..REPROJ_LOCAL_DIM
    }

    pub const fn landmark_pose_col(self, slot: PoseSlot) -> usize {
        slot.index()
    }

    pub const fn camera_pose_col(self, slot: PoseSlot) -> usize {
        POSE_DIM + slot.index()
    }

    pub const fn intrinsics_col(self, slot: IntrinsicsSlot) -> usize {
        2 * POSE_DIM + slot.index()
    }
}

/// Stack the three parameter blocks in [`ReprojLayout`] order.
pub fn build_local_params(
    landmark_pose: &Pose<f64>,
    camera_pose: &Pose<f64>,
    intrinsics: &Intrinsics<f64>,
) -> SVector<f64, REPROJ_LOCAL_DIM> {
    let layout = ReprojLayout;
    let mut local = SVector::<f64, REPROJ_LOCAL_DIM>::zeros();
    for (i, v) in layout.landmark_pose_range().zip(landmark_pose.to_array()) {
        local[i] = v;
    }
    for (i, v) in layout.camera_pose_range().zip(camera_pose.to_array()) {
        local[i] = v;
    }
    for (i, v) in layout.intrinsics_range().zip(intrinsics.to_array()) {
        local[i] = v;
    }
    local
}

/// Split a stacked local vector back into its parameter blocks.
pub(crate) fn split_local_params<T: RealField>(p: &[T]) -> (Pose<T>, Pose<T>, Intrinsics<T>) {
    debug_assert_eq!(p.len(), REPROJ_LOCAL_DIM);
    let layout = ReprojLayout;
    let block = |r: Range<usize>| DVectorView::from_slice(&p[r.clone()], r.len());
    (
        pose_from_view(block(layout.landmark_pose_range())),
        pose_from_view(block(layout.camera_pose_range())),
        intrinsics_from_view(block(layout.intrinsics_range())),
    )
}

/// Residual and its Jacobian with respect to the stacked local parameters.
///
/// Rows are `[u, v]`; columns follow [`ReprojLayout`].
pub fn landmark_reproj_jacobian(
    obs: &LandmarkObservation,
    landmark_pose: &Pose<f64>,
    camera_pose: &Pose<f64>,
    intrinsics: &Intrinsics<f64>,
) -> (SVector<f64, 2>, SMatrix<f64, 2, REPROJ_LOCAL_DIM>) {
    let p0 = build_local_params(landmark_pose, camera_pose, intrinsics);
    jacobian(
        |p: SVector<DualSVec64<REPROJ_LOCAL_DIM>, REPROJ_LOCAL_DIM>| {
            let (lm, cam, k) = split_local_params(p.as_slice());
            landmark_reproj_residual_generic(&lm, &cam, &k, obs)
        },
        p0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use landmark_projection_core::test_utils::sample_scenes;

    #[test]
    fn layout_covers_local_vector() {
        let layout = ReprojLayout;
        assert_eq!(layout.landmark_pose_col(PoseSlot::X), 0);
        assert_eq!(layout.camera_pose_col(PoseSlot::Rz), 11);
        assert_eq!(layout.intrinsics_col(IntrinsicsSlot::F), 12);
        assert_eq!(layout.intrinsics_col(IntrinsicsSlot::Theta), REPROJ_LOCAL_DIM - 1);
        assert_eq!(layout.intrinsics_range().end, REPROJ_LOCAL_DIM);
    }

    #[test]
    fn split_inverts_build() {
        let scene = &sample_scenes()[1];
        let local = build_local_params(&scene.landmark_pose, &scene.camera_pose, &scene.intrinsics);
        let (lm, cam, k) = split_local_params(local.as_slice());
        assert_eq!(lm, scene.landmark_pose);
        assert_eq!(cam, scene.camera_pose);
        assert_eq!(k, scene.intrinsics);
    }

    #[test]
    fn value_matches_plain_evaluation() {
        let scene = &sample_scenes()[0];
        let p = scene.points[1];
        let obs = LandmarkObservation::new([p.x, p.y], [0.05, -0.04]).with_weight(2.0);

        let (r, _) = landmark_reproj_jacobian(
            &obs,
            &scene.landmark_pose,
            &scene.camera_pose,
            &scene.intrinsics,
        );
        let r_plain = landmark_reproj_residual_generic(
            &scene.landmark_pose,
            &scene.camera_pose,
            &scene.intrinsics,
            &obs,
        );
        assert!((r - r_plain).norm() < 1e-14);
    }

    #[test]
    fn theta_column_is_zero() {
        let layout = ReprojLayout;
        for scene in sample_scenes() {
            let p = scene.points[0];
            let obs = LandmarkObservation::new([p.x, p.y], [0.0, 0.0]);
            let (_, j) = landmark_reproj_jacobian(
                &obs,
                &scene.landmark_pose,
                &scene.camera_pose,
                &scene.intrinsics,
            );
            let col = j.column(layout.intrinsics_col(IntrinsicsSlot::Theta));
            assert_eq!(col.norm(), 0.0);
        }
    }
}
