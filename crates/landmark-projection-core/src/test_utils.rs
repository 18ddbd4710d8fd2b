//! Utilities and common fixtures for testing the projection model.
//!
//! This module is public to allow use across workspace test suites,
//! but is not intended for production use.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;

use crate::models::{Intrinsics, Landmark, Pose};
use crate::{Pt2, Real};

/// A single landmark observed by a single camera.
#[derive(Debug, Clone)]
pub struct Scene {
    pub landmark_pose: Pose<Real>,
    pub camera_pose: Pose<Real>,
    pub intrinsics: Intrinsics<Real>,
    /// Landmark-frame points that project with non-zero depth.
    pub points: Vec<Pt2>,
}

/// Assert that two scalars agree within `tol`.
pub fn approx_eq(a: Real, b: Real, tol: Real) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a} (tol {tol})");
}

/// Intrinsics of a normalized camera with mild anisotropy and offset.
pub fn sample_intrinsics() -> Intrinsics<Real> {
    Intrinsics::from_array([1.25, 0.03, -0.02, 1.04, 0.97, FRAC_PI_2])
}

/// Corners and center of a 0.2 m square marker.
pub fn marker_points() -> Vec<Pt2> {
    vec![
        Pt2::new(-0.1, -0.1),
        Pt2::new(0.1, -0.1),
        Pt2::new(0.1, 0.1),
        Pt2::new(-0.1, 0.1),
        Pt2::new(0.0, 0.0),
    ]
}

/// Non-degenerate landmark/camera configurations.
///
/// Markers sit on a ceiling about 2.5 m above an upward-looking camera, with
/// small tilts on both sides. Scene 0 has zero camera rotation and scene 3
/// zero landmark rotation, so both poses exercise the identity branch of the
/// rotation.
pub fn sample_scenes() -> Vec<Scene> {
    let intrinsics = sample_intrinsics();
    let poses = [
        (
            [0.2, -0.1, 2.5, 0.05, -0.03, 0.4],
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ),
        (
            [-0.4, 0.3, 2.8, -0.02, 0.04, -1.1],
            [0.1, -0.2, 0.1, 0.03, 0.05, 0.7],
        ),
        (
            [1.0, 1.2, 3.0, 0.1, 0.0, 2.5],
            [0.8, 1.0, 0.2, -0.06, 0.04, -0.3],
        ),
        (
            [0.3, 0.2, 2.6, 0.0, 0.0, 0.0],
            [-0.1, 0.15, 0.05, 0.04, -0.02, 1.3],
        ),
    ];
    poses
        .iter()
        .map(|(lm, cam)| Scene {
            landmark_pose: Pose::from_array(*lm),
            camera_pose: Pose::from_array(*cam),
            intrinsics: intrinsics.clone(),
            points: marker_points(),
        })
        .collect()
}

/// A landmark built from a scene.
pub fn scene_landmark(id: u16, scene: &Scene) -> Landmark {
    Landmark::new(id, scene.landmark_pose.clone(), scene.points.clone())
}

/// Camera pose at `height` looking along +z with the given yaw.
pub fn camera_at(x: Real, y: Real, height: Real, yaw: Real) -> Pose<Real> {
    Pose::new(Vector3::new(x, y, height), Vector3::new(0.0, 0.0, yaw))
}
