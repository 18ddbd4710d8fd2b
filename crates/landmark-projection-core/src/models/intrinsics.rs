use std::ops::Index;

use nalgebra::{Matrix3, RealField};
use serde::{Deserialize, Serialize};

use super::{check_len, SlotError};

/// Number of scalars in packed intrinsics.
pub const INTRINSICS_DIM: usize = 6;

/// Slot order of packed intrinsics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicsSlot {
    F = 0,
    U0 = 1,
    V0 = 2,
    Alpha = 3,
    Beta = 4,
    Theta = 5,
}

impl IntrinsicsSlot {
    pub const ALL: [IntrinsicsSlot; INTRINSICS_DIM] = [
        IntrinsicsSlot::F,
        IntrinsicsSlot::U0,
        IntrinsicsSlot::V0,
        IntrinsicsSlot::Alpha,
        IntrinsicsSlot::Beta,
        IntrinsicsSlot::Theta,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Camera intrinsics with a shared focal length and per-axis scale factors.
///
/// `theta` is the angle between the sensor axes. It is carried through
/// packing and serialization but the projection always assumes 90° (no
/// shear), whatever value the slot holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intrinsics<T: RealField> {
    /// Focal length.
    pub f: T,
    /// Principal point offset along x.
    pub u0: T,
    /// Principal point offset along y.
    pub v0: T,
    /// Scale factor along x.
    pub alpha: T,
    /// Scale factor along y.
    pub beta: T,
    /// Axis skew angle, unused by the projection.
    pub theta: T,
}

impl<T: RealField> Intrinsics<T> {
    /// Unit focal length and scales, zero principal point, square axes.
    pub fn identity() -> Self {
        Self {
            f: T::one(),
            u0: T::zero(),
            v0: T::zero(),
            alpha: T::one(),
            beta: T::one(),
            theta: T::frac_pi_2(),
        }
    }

    /// Unpack `[f, u0, v0, alpha, beta, theta]`.
    pub fn from_array(v: [T; INTRINSICS_DIM]) -> Self {
        let [f, u0, v0, alpha, beta, theta] = v;
        Self {
            f,
            u0,
            v0,
            alpha,
            beta,
            theta,
        }
    }

    /// Pack into `[f, u0, v0, alpha, beta, theta]`.
    pub fn to_array(&self) -> [T; INTRINSICS_DIM] {
        [
            self.f.clone(),
            self.u0.clone(),
            self.v0.clone(),
            self.alpha.clone(),
            self.beta.clone(),
            self.theta.clone(),
        ]
    }

    /// Unpack from a flat slice of exactly [`INTRINSICS_DIM`] values.
    pub fn from_slice(v: &[T]) -> Result<Self, SlotError> {
        check_len(v, INTRINSICS_DIM)?;
        Ok(Self {
            f: v[IntrinsicsSlot::F.index()].clone(),
            u0: v[IntrinsicsSlot::U0.index()].clone(),
            v0: v[IntrinsicsSlot::V0.index()].clone(),
            alpha: v[IntrinsicsSlot::Alpha.index()].clone(),
            beta: v[IntrinsicsSlot::Beta.index()].clone(),
            theta: v[IntrinsicsSlot::Theta.index()].clone(),
        })
    }

    /// The 3x3 projection matrix applied to camera points.
    ///
    /// ```text
    /// | f·alpha  0       u0 |
    /// | 0        f·beta  v0 |
    /// | 0        0       1  |
    /// ```
    pub fn camera_matrix(&self) -> Matrix3<T> {
        Matrix3::new(
            self.f.clone() * self.alpha.clone(),
            T::zero(),
            self.u0.clone(),
            T::zero(),
            self.f.clone() * self.beta.clone(),
            self.v0.clone(),
            T::zero(),
            T::zero(),
            T::one(),
        )
    }
}

impl<T: RealField> Default for Intrinsics<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealField> Index<IntrinsicsSlot> for Intrinsics<T> {
    type Output = T;

    fn index(&self, slot: IntrinsicsSlot) -> &T {
        match slot {
            IntrinsicsSlot::F => &self.f,
            IntrinsicsSlot::U0 => &self.u0,
            IntrinsicsSlot::V0 => &self.v0,
            IntrinsicsSlot::Alpha => &self.alpha,
            IntrinsicsSlot::Beta => &self.beta,
            IntrinsicsSlot::Theta => &self.theta,
        }
    }
}
