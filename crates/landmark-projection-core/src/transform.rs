//! Chained coordinate transforms: landmark → world → camera → image.
//!
//! All functions are pure and generic over [`RealField`]. The only failure is
//! a camera point with depth exactly zero, which [`project_camera_point`]
//! reports as `None` together with a `log::warn!` record.

use log::warn;
use nalgebra::{Point2, Point3, RealField, Vector3};

use crate::math::{angle_axis_rotate_point, CameraPoint, ImagePoint, LandmarkPoint, WorldPoint};
use crate::models::{Intrinsics, Pose};

/// Map a point from the landmark plane into world coordinates.
///
/// The point is lifted to `(x, y, 0)`, rotated by the landmark's rotation
/// vector and shifted by its translation.
pub fn landmark_to_world<T: RealField>(
    point: &LandmarkPoint<T>,
    landmark_pose: &Pose<T>,
) -> WorldPoint<T> {
    let p_lm = Vector3::new(point.x.clone(), point.y.clone(), T::zero());
    let p_w = angle_axis_rotate_point(&landmark_pose.rotation, &p_lm) + &landmark_pose.translation;
    Point3::from(p_w)
}

/// Express a world point in the camera frame.
///
/// The camera translation is its position in the world, and its rotation
/// vector maps camera axes to world axes, so the inverse is applied: subtract
/// the translation, then rotate by the negated rotation vector.
pub fn world_to_camera<T: RealField>(point: &WorldPoint<T>, camera_pose: &Pose<T>) -> CameraPoint<T> {
    let shifted = &point.coords - &camera_pose.translation;
    let inverse_rotation = -camera_pose.rotation.clone();
    angle_axis_rotate_point(&inverse_rotation, &shifted)
}

/// Apply the intrinsic model and perspective division to a camera point.
///
/// ```text
/// i0 = f·alpha·x + u0·z
/// i1 = f·beta·y  + v0·z
/// i2 = z
/// ```
///
/// The axis angle `theta` is taken as 90°, so there is no shear term.
///
/// Returns `None` when `z` compares exactly equal to zero. There is no
/// tolerance band: depths that are merely tiny are divided through.
pub fn project_camera_point<T: RealField>(
    p_c: &CameraPoint<T>,
    intrinsics: &Intrinsics<T>,
) -> Option<ImagePoint<T>> {
    let (px, py, pz) = (p_c.x.clone(), p_c.y.clone(), p_c.z.clone());
    let f = intrinsics.f.clone();

    let i0 = f.clone() * intrinsics.alpha.clone() * px + intrinsics.u0.clone() * pz.clone();
    let i1 = f * intrinsics.beta.clone() * py + intrinsics.v0.clone() * pz.clone();
    let i2 = pz;

    if i2 == T::zero() {
        warn!("attempt to divide by zero: camera point has zero depth, no projection");
        return None;
    }

    Some(Point2::new(i0 / i2.clone(), i1 / i2))
}

/// Project a world point into the image of a camera.
///
/// See [`project_camera_point`] for the degenerate-depth behaviour.
pub fn world_to_image<T: RealField>(
    point: &WorldPoint<T>,
    camera_pose: &Pose<T>,
    intrinsics: &Intrinsics<T>,
) -> Option<ImagePoint<T>> {
    let p_c = world_to_camera(point, camera_pose);
    project_camera_point(&p_c, intrinsics)
}

/// Project a landmark-plane point into the image of a camera.
///
/// Exactly [`landmark_to_world`] followed by [`world_to_image`].
pub fn landmark_to_image<T: RealField>(
    point: &LandmarkPoint<T>,
    landmark_pose: &Pose<T>,
    camera_pose: &Pose<T>,
    intrinsics: &Intrinsics<T>,
) -> Option<ImagePoint<T>> {
    let p_w = landmark_to_world(point, landmark_pose);
    world_to_image(&p_w, camera_pose, intrinsics)
}
