use nalgebra::RealField;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Accuracy used by the `std_*` arc-length helpers.
///
/// Suitable for general-purpose 2D/3D work where the unit is roughly a
/// millimetre or a pixel.
pub const DEFAULT_ACCURACY: f64 = 1e-6;

/// Scalar field over which parameters and arc lengths are measured.
///
/// Blanket-implemented for every `Copy` real field, so `f32` and `f64`
/// qualify out of the box.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

/// Converts an `f64` constant into the scalar type `T`.
#[must_use]
pub fn lit<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Absolute value that does not depend on which `abs` the scalar exposes.
#[must_use]
pub fn abs<T: Real>(value: T) -> T {
    if value < nalgebra::zero() {
        -value
    } else {
        value
    }
}

/// Maps `t` from the interval `[lower, upper]` onto `[0, 1]`.
#[must_use]
pub fn normalize<T: Real>(lower: T, upper: T, t: T) -> T {
    (t - lower) / (upper - lower)
}

/// Maps `s` from `[0, 1]` onto the interval `[lower, upper]`.
#[must_use]
pub fn denormalize<T: Real>(lower: T, upper: T, s: T) -> T {
    lower + (upper - lower) * s
}

/// Maps `t`, given in the coordinates of a piece spanning `[from, to]`,
/// into a domain `[lower, upper]` that the piece is stretched over.
#[must_use]
pub fn remap<T: Real>(from: T, to: T, lower: T, upper: T, t: T) -> T {
    denormalize(lower, upper, normalize(from, to, t))
}
