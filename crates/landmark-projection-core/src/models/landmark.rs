use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use super::{Intrinsics, Pose};
use crate::math::{Pt2, Pt3};
use crate::transform::{landmark_to_image, landmark_to_world};

/// A planar fiducial marker placed in the world.
///
/// `points` are the marker features (e.g. LED centers) in the landmark frame,
/// which lies in the plane z = 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: u16,
    pub pose: Pose<f64>,
    pub points: Vec<Pt2>,
}

impl Landmark {
    pub fn new(id: u16, pose: Pose<f64>, points: Vec<Pt2>) -> Self {
        Self { id, pose, points }
    }

    /// Feature positions in world coordinates.
    pub fn world_points(&self) -> Vec<Pt3> {
        self.points
            .iter()
            .map(|p| landmark_to_world(p, &self.pose))
            .collect()
    }

    /// Project every feature into the image of a camera.
    ///
    /// The output is index-aligned with `points`; a feature at zero camera
    /// depth yields `None`.
    pub fn project(&self, camera_pose: &Pose<f64>, intrinsics: &Intrinsics<f64>) -> Vec<Option<Pt2>> {
        self.points
            .iter()
            .map(|p| landmark_to_image(p, &self.pose, camera_pose, intrinsics))
            .collect()
    }
}

/// Landmarks keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkMap {
    landmarks: BTreeMap<u16, Landmark>,
}

impl LandmarkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a landmark, returning the previous one with the same id.
    pub fn insert(&mut self, landmark: Landmark) -> Option<Landmark> {
        self.landmarks.insert(landmark.id, landmark)
    }

    pub fn get(&self, id: u16) -> Option<&Landmark> {
        self.landmarks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmarks in ascending id order.
    pub fn iter(&self) -> btree_map::Values<'_, u16, Landmark> {
        self.landmarks.values()
    }

    /// Project all landmarks, in ascending id order.
    pub fn project_all(
        &self,
        camera_pose: &Pose<f64>,
        intrinsics: &Intrinsics<f64>,
    ) -> Vec<(u16, Vec<Option<Pt2>>)> {
        self.iter()
            .map(|lm| (lm.id, lm.project(camera_pose, intrinsics)))
            .collect()
    }
}

impl FromIterator<Landmark> for LandmarkMap {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        let mut map = Self::new();
        for lm in iter {
            map.insert(lm);
        }
        map
    }
}
