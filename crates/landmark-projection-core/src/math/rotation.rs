//! Axis-angle rotation of points, generic over `RealField`.

use nalgebra::{RealField, Vector3};

/// Rotate `point` by the axis-angle vector `angle_axis`.
///
/// The rotation angle is `|angle_axis|` and the axis is its direction. For
/// angles whose square does not exceed `f64::EPSILON` the first-order
/// expansion `p + w × p` is used instead of the Rodrigues formula. Both
/// branches agree to machine precision there, and the expansion keeps the
/// derivative with respect to `angle_axis` exact at the identity.
pub fn angle_axis_rotate_point<T: RealField>(
    angle_axis: &Vector3<T>,
    point: &Vector3<T>,
) -> Vector3<T> {
    let theta2 = angle_axis.dot(angle_axis);
    if theta2 > nalgebra::convert::<f64, T>(f64::EPSILON) {
        let theta = theta2.sqrt();
        let cos_theta = theta.clone().cos();
        let sin_theta = theta.clone().sin();
        let w = angle_axis / theta;

        // Rodrigues: p cosθ + (w × p) sinθ + w (w·p)(1 - cosθ)
        let w_cross_p = w.cross(point);
        let tmp = w.dot(point) * (T::one() - cos_theta.clone());
        point * cos_theta + w_cross_p * sin_theta + w * tmp
    } else {
        point + angle_axis.cross(point)
    }
}
