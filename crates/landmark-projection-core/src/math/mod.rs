use nalgebra::{Point2, Point3, Vector3};

pub mod rotation;

pub use rotation::angle_axis_rotate_point;

pub type Real = f64;

/// Point in a landmark's own planar frame (z is implicitly zero).
pub type LandmarkPoint<T> = Point2<T>;
/// Point in the shared world frame.
pub type WorldPoint<T> = Point3<T>;
/// Point in the camera frame, before projection.
pub type CameraPoint<T> = Vector3<T>;
/// Point on the normalized image plane, after perspective division.
pub type ImagePoint<T> = Point2<T>;

pub type Pt2 = Point2<Real>;
pub type Pt3 = Point3<Real>;
pub type Vec3 = Vector3<Real>;
