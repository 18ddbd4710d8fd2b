//! Backend-independent reprojection residual models.
//!
//! Residuals are `sqrt(w) · (predicted - observed)`, ordered `[u, v]`. A
//! prediction with zero camera depth has no image point; the residual is then
//! zero, so the observation drops out of that evaluation (the projection still
//! logs its warning).

use landmark_projection_core::{
    landmark_to_image, world_to_image, ImagePoint, Intrinsics, LandmarkPoint, Pose, WorldPoint,
};
use nalgebra::{DVector, RealField, SVector};

use super::{LandmarkObservation, WorldObservation};
use crate::params::{intrinsics_from_view, pose_from_view};

fn weighted_residual<T: RealField>(
    predicted: Option<ImagePoint<T>>,
    uv: [f64; 2],
    w: f64,
) -> SVector<T, 2> {
    let Some(predicted) = predicted else {
        return SVector::<T, 2>::zeros();
    };
    let sqrt_w: T = nalgebra::convert(w.sqrt());
    let u_meas: T = nalgebra::convert(uv[0]);
    let v_meas: T = nalgebra::convert(uv[1]);
    let ru = (predicted.x.clone() - u_meas) * sqrt_w.clone();
    let rv = (predicted.y.clone() - v_meas) * sqrt_w;
    SVector::<T, 2>::new(ru, rv)
}

/// Reprojection residual of a landmark-plane point.
///
/// Differentiable with respect to the landmark pose, the camera pose and the
/// intrinsics.
pub fn landmark_reproj_residual_generic<T: RealField>(
    landmark_pose: &Pose<T>,
    camera_pose: &Pose<T>,
    intrinsics: &Intrinsics<T>,
    obs: &LandmarkObservation,
) -> SVector<T, 2> {
    let p_lm = LandmarkPoint::new(
        nalgebra::convert::<f64, T>(obs.point_lm[0]),
        nalgebra::convert::<f64, T>(obs.point_lm[1]),
    );
    let predicted = landmark_to_image(&p_lm, landmark_pose, camera_pose, intrinsics);
    weighted_residual(predicted, obs.uv, obs.w)
}

/// Reprojection residual of a fixed world point.
pub fn world_reproj_residual_generic<T: RealField>(
    camera_pose: &Pose<T>,
    intrinsics: &Intrinsics<T>,
    obs: &WorldObservation,
) -> SVector<T, 2> {
    let pw = WorldPoint::new(
        nalgebra::convert::<f64, T>(obs.pw[0]),
        nalgebra::convert::<f64, T>(obs.pw[1]),
        nalgebra::convert::<f64, T>(obs.pw[2]),
    );
    let predicted = world_to_image(&pw, camera_pose, intrinsics);
    weighted_residual(predicted, obs.uv, obs.w)
}

/// Landmark reprojection residual on flat parameter blocks.
///
/// # Parameters
/// - `landmark_pose`: `[X, Y, Z, Rx, Ry, Rz]`
/// - `camera_pose`: `[X, Y, Z, Rx, Ry, Rz]`
/// - `intrinsics`: `[f, u0, v0, alpha, beta, theta]`
pub fn landmark_reproj_residual(
    landmark_pose: &DVector<f64>,
    camera_pose: &DVector<f64>,
    intrinsics: &DVector<f64>,
    obs: &LandmarkObservation,
) -> SVector<f64, 2> {
    landmark_reproj_residual_generic(
        &pose_from_view(landmark_pose.as_view()),
        &pose_from_view(camera_pose.as_view()),
        &intrinsics_from_view(intrinsics.as_view()),
        obs,
    )
}

/// World-point reprojection residual on flat parameter blocks.
pub fn world_reproj_residual(
    camera_pose: &DVector<f64>,
    intrinsics: &DVector<f64>,
    obs: &WorldObservation,
) -> SVector<f64, 2> {
    world_reproj_residual_generic(
        &pose_from_view(camera_pose.as_view()),
        &intrinsics_from_view(intrinsics.as_view()),
        obs,
    )
}
