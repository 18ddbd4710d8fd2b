use std::ops::Index;

use nalgebra::{RealField, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use super::{check_len, SlotError};

/// Number of scalars in a packed pose.
pub const POSE_DIM: usize = 6;

/// Slot order of a packed pose: translation first, then the rotation vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoseSlot {
    X = 0,
    Y = 1,
    Z = 2,
    Rx = 3,
    Ry = 4,
    Rz = 5,
}

impl PoseSlot {
    pub const ALL: [PoseSlot; POSE_DIM] = [
        PoseSlot::X,
        PoseSlot::Y,
        PoseSlot::Z,
        PoseSlot::Rx,
        PoseSlot::Ry,
        PoseSlot::Rz,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rigid transform between a local frame and the world frame.
///
/// `rotation` is an axis-angle (Rodrigues) vector. For a landmark the pose maps
/// landmark coordinates into the world; for a camera `translation` is the
/// optical center in world coordinates and `rotation` maps camera axes into
/// world axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose<T: RealField> {
    pub translation: Vector3<T>,
    pub rotation: Vector3<T>,
}

impl<T: RealField> Pose<T> {
    pub fn new(translation: Vector3<T>, rotation: Vector3<T>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Zero translation and zero rotation.
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }

    /// Unpack `[X, Y, Z, Rx, Ry, Rz]`.
    pub fn from_array(v: [T; POSE_DIM]) -> Self {
        let [x, y, z, rx, ry, rz] = v;
        Self::new(Vector3::new(x, y, z), Vector3::new(rx, ry, rz))
    }

    /// Pack into `[X, Y, Z, Rx, Ry, Rz]`.
    pub fn to_array(&self) -> [T; POSE_DIM] {
        let t = &self.translation;
        let r = &self.rotation;
        [
            t.x.clone(),
            t.y.clone(),
            t.z.clone(),
            r.x.clone(),
            r.y.clone(),
            r.z.clone(),
        ]
    }

    /// Unpack from a flat slice of exactly [`POSE_DIM`] values.
    pub fn from_slice(v: &[T]) -> Result<Self, SlotError> {
        check_len(v, POSE_DIM)?;
        Ok(Self::new(
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
        ))
    }
}

impl Pose<f64> {
    /// Rotation matrix of the axis-angle vector.
    pub fn rotation_matrix(&self) -> Rotation3<f64> {
        Rotation3::from_scaled_axis(self.rotation)
    }
}

impl<T: RealField> Default for Pose<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealField> Index<PoseSlot> for Pose<T> {
    type Output = T;

    fn index(&self, slot: PoseSlot) -> &T {
        match slot {
            PoseSlot::X => &self.translation.x,
            PoseSlot::Y => &self.translation.y,
            PoseSlot::Z => &self.translation.z,
            PoseSlot::Rx => &self.rotation.x,
            PoseSlot::Ry => &self.rotation.y,
            PoseSlot::Rz => &self.rotation.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_follow_contract() {
        let got: Vec<usize> = PoseSlot::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(got, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn array_layout_is_translation_then_rotation() {
        let pose = Pose::from_array([1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
        assert_eq!(pose.translation, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.rotation, Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(pose[PoseSlot::Z], 3.0);
        assert_eq!(pose[PoseSlot::Ry], 0.2);
        assert_eq!(pose.to_array(), [1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = Pose::<f64>::from_slice(&[0.0; 7]).unwrap_err();
        assert_eq!(
            err,
            SlotError::WrongLength {
                expected: 6,
                got: 7
            }
        );
    }

    #[test]
    fn json_layout() {
        let pose = Pose::from_array([1.0, 0.0, -2.0, 0.0, 0.5, 0.0]);
        let json = serde_json::to_string(&pose).unwrap();
        assert_eq!(json, r#"{"translation":[1.0,0.0,-2.0],"rotation":[0.0,0.5,0.0]}"#);
        let back: Pose<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }
}
