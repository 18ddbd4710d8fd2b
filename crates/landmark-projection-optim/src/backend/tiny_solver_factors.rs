use nalgebra::{DVector, RealField};
use tiny_solver::factors::Factor;

use crate::factors::{
    landmark_reproj_residual_generic, world_reproj_residual_generic, LandmarkObservation,
    WorldObservation,
};
use crate::params::{intrinsics_from_view, pose_from_view};

/// Reprojection of a landmark-plane point.
///
/// Parameter blocks: `[landmark_pose, camera_pose, intrinsics]`.
#[derive(Debug, Clone)]
pub struct LandmarkReprojFactor {
    pub obs: LandmarkObservation,
}

impl LandmarkReprojFactor {
    pub fn new(obs: LandmarkObservation) -> Self {
        Self { obs }
    }
}

impl<T: RealField> Factor<T> for LandmarkReprojFactor {
    fn residual_func(&self, params: &[DVector<T>]) -> DVector<T> {
        debug_assert_eq!(
            params.len(),
            3,
            "expected [landmark_pose, camera_pose, intrinsics] parameter blocks"
        );
        let r = landmark_reproj_residual_generic(
            &pose_from_view(params[0].as_view()),
            &pose_from_view(params[1].as_view()),
            &intrinsics_from_view(params[2].as_view()),
            &self.obs,
        );
        DVector::from_row_slice(r.as_slice())
    }
}

/// Reprojection of a fixed world point.
///
/// Parameter blocks: `[camera_pose, intrinsics]`.
#[derive(Debug, Clone)]
pub struct WorldReprojFactor {
    pub obs: WorldObservation,
}

impl WorldReprojFactor {
    pub fn new(obs: WorldObservation) -> Self {
        Self { obs }
    }
}

impl<T: RealField> Factor<T> for WorldReprojFactor {
    fn residual_func(&self, params: &[DVector<T>]) -> DVector<T> {
        debug_assert_eq!(params.len(), 2, "expected [camera_pose, intrinsics] parameter blocks");
        let r = world_reproj_residual_generic(
            &pose_from_view(params[0].as_view()),
            &intrinsics_from_view(params[1].as_view()),
            &self.obs,
        );
        DVector::from_row_slice(r.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{intrinsics_to_dvec, pose_to_dvec};
    use landmark_projection_core::test_utils::sample_scenes;
    use landmark_projection_core::{
        landmark_to_image, landmark_to_world, INTRINSICS_DIM, POSE_DIM,
    };
    use std::collections::HashMap;
    use tiny_solver::optimizer::Optimizer;
    use tiny_solver::problem::Problem;
    use tiny_solver::LevenbergMarquardtOptimizer;

    #[test]
    fn factors_match_residual_models() {
        let scene = &sample_scenes()[2];
        let p = scene.points[0];
        let uv = landmark_to_image(
            &p,
            &scene.landmark_pose,
            &scene.camera_pose,
            &scene.intrinsics,
        )
        .unwrap();
        let observed = [uv.x + 0.01, uv.y - 0.02];

        let lm = pose_to_dvec(&scene.landmark_pose);
        let cam = pose_to_dvec(&scene.camera_pose);
        let k = intrinsics_to_dvec(&scene.intrinsics);

        let factor = LandmarkReprojFactor::new(LandmarkObservation::new([p.x, p.y], observed));
        let r = factor.residual_func(&[lm, cam.clone(), k.clone()]);
        assert_eq!(r.len(), 2);
        assert!((r[0] + 0.01).abs() < 1e-12, "{r:?}");
        assert!((r[1] - 0.02).abs() < 1e-12, "{r:?}");

        let pw = landmark_to_world(&p, &scene.landmark_pose);
        let factor = WorldReprojFactor::new(WorldObservation::new([pw.x, pw.y, pw.z], observed));
        let r_w = factor.residual_func(&[cam, k]);
        assert_eq!(r, r_w);
    }

    #[test]
    fn solver_recovers_perturbed_camera_pose() {
        let scene = &sample_scenes()[1];
        let observations: Vec<LandmarkObservation> = scene
            .points
            .iter()
            .map(|p| {
                let uv = landmark_to_image(
                    p,
                    &scene.landmark_pose,
                    &scene.camera_pose,
                    &scene.intrinsics,
                )
                .unwrap();
                LandmarkObservation::new([p.x, p.y], [uv.x, uv.y])
            })
            .collect();

        let mut problem = Problem::new();
        for obs in &observations {
            problem.add_residual_block(
                2,
                &["landmark_pose", "camera_pose", "intrinsics"],
                Box::new(LandmarkReprojFactor::new(*obs)),
                None,
            );
        }
        for idx in 0..POSE_DIM {
            problem.fix_variable("landmark_pose", idx);
        }
        for idx in 0..INTRINSICS_DIM {
            problem.fix_variable("intrinsics", idx);
        }

        let mut cam0 = pose_to_dvec(&scene.camera_pose);
        cam0[0] += 0.02;
        cam0[1] -= 0.015;
        cam0[5] += 0.03;

        let lm = pose_to_dvec(&scene.landmark_pose);
        let k = intrinsics_to_dvec(&scene.intrinsics);
        let cost = |cam: &DVector<f64>| -> f64 {
            observations
                .iter()
                .map(|obs| {
                    crate::factors::landmark_reproj_residual(&lm, cam, &k, obs).norm_squared()
                })
                .sum()
        };
        let initial_cost = cost(&cam0);
        assert!(initial_cost > 1e-6, "initial cost {initial_cost}");

        let initial = HashMap::from([
            ("landmark_pose".to_string(), lm.clone()),
            ("camera_pose".to_string(), cam0),
            ("intrinsics".to_string(), k.clone()),
        ]);
        let solution = LevenbergMarquardtOptimizer::default()
            .optimize(&problem, &initial, None)
            .expect("solver converges");

        let cam = &solution["camera_pose"];
        let final_cost = cost(cam);
        assert!(
            final_cost < initial_cost * 1e-3,
            "cost {initial_cost} -> {final_cost}"
        );
        assert!((&solution["landmark_pose"] - &lm).norm() < 1e-9);
        assert!((&solution["intrinsics"] - &k).norm() < 1e-9);
    }
}
