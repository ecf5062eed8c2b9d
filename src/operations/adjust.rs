use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::{lit, Real};
use crate::parametric::ArcLength;

/// How far to move an end of the object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustMethod<T> {
    /// Extend by a raw parameter offset; negative shrinks.
    ByParam(T),
    /// Extend by an arc length; negative shrinks.
    ByAbsolute(T),
    /// Grow or shrink until the object has exactly this arc length.
    ToAbsolute(T),
}

/// Which end(s) of the object to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustSide {
    Start,
    End,
    /// Both ends, each taking half of the adjustment.
    Both,
}

/// Options controlling [`Adjust`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustOptions<T> {
    /// How far to move.
    pub method: AdjustMethod<T>,
    /// Where to move.
    pub side: AdjustSide,
    /// Accuracy of the arc-length computations involved.
    pub epsilon: T,
}

impl<T: Real> Default for AdjustOptions<T> {
    fn default() -> Self {
        Self {
            method: AdjustMethod::ByParam(lit(0.2)),
            side: AdjustSide::Both,
            epsilon: lit(1e-10),
        }
    }
}

impl<T: Real> AdjustOptions<T> {
    /// Creates validated options.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not a positive finite number.
    pub fn new(method: AdjustMethod<T>, side: AdjustSide, epsilon: T) -> Result<Self> {
        Ok(Self {
            method,
            side,
            epsilon: check_epsilon(epsilon)?,
        })
    }

    /// Replaces the method.
    #[must_use]
    pub fn with_method(self, method: AdjustMethod<T>) -> Self {
        Self { method, ..self }
    }

    /// Replaces the side.
    #[must_use]
    pub fn with_side(self, side: AdjustSide) -> Self {
        Self { side, ..self }
    }

    /// Replaces the accuracy.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not a positive finite number.
    pub fn with_epsilon(self, epsilon: T) -> Result<Self> {
        Ok(Self {
            epsilon: check_epsilon(epsilon)?,
            ..self
        })
    }
}

fn check_epsilon<T: Real>(epsilon: T) -> Result<T> {
    if epsilon.is_finite() && epsilon > nalgebra::zero() {
        Ok(epsilon)
    } else {
        Err(OperationError::InvalidInput(format!(
            "adjust epsilon must be positive and finite, got {epsilon}"
        ))
        .into())
    }
}

/// Grows or shrinks one or both ends of a parametric object.
///
/// The result is a [`section`](crate::Sectionable::section) of the input;
/// the input itself is left untouched.
pub struct Adjust<T> {
    options: AdjustOptions<T>,
}

impl<T: Real> Adjust<T> {
    /// Creates a new `Adjust` operation.
    #[must_use]
    pub fn new(options: AdjustOptions<T>) -> Self {
        Self { options }
    }

    /// Executes the adjustment on `curve`.
    ///
    /// Each moved end is shifted by an offset measured from the domain lower
    /// bound of the curve it is computed on; the end is handled through
    /// [`reverse_domain`](crate::Sectionable::reverse_domain) so that both
    /// ends share the same computation.
    #[must_use]
    pub fn execute<P: ArcLength<Scalar = T>>(&self, curve: &P) -> P {
        let AdjustOptions {
            method,
            side,
            epsilon,
        } = self.options;
        let both: T = if side == AdjustSide::Both {
            lit(0.5)
        } else {
            nalgebra::one()
        };

        // The total and both end searches share the `epsilon` budget, so the
        // adjusted length stays within `epsilon` of the target.
        let inner = epsilon * lit(0.25);

        // Only needed for `ToAbsolute`, and only once.
        let excess = match method {
            AdjustMethod::ToAbsolute(length) => curve.arc_length(inner) - length,
            AdjustMethod::ByParam(_) | AdjustMethod::ByAbsolute(_) => nalgebra::zero(),
        };

        let offset = |end: &P| -> T {
            match method {
                AdjustMethod::ByParam(delta) => -delta * both,
                AdjustMethod::ByAbsolute(length) => {
                    end.arc_length_to_param(-length * both, inner) - end.domain_lower()
                }
                AdjustMethod::ToAbsolute(_) => {
                    end.arc_length_to_param(excess * both, inner) - end.domain_lower()
                }
            }
        };

        let (lower, upper) = curve.domain_bounds();
        let new_lower = if side == AdjustSide::End {
            lower
        } else {
            lower + offset(curve)
        };
        let new_upper = if side == AdjustSide::Start {
            upper
        } else {
            upper - offset(&curve.reverse_domain())
        };
        debug!(lower = %new_lower, upper = %new_upper, ?side, "adjusted domain");

        curve.section(new_lower, new_upper)
    }
}

/// Adjusts `curve` according to `options`. See [`Adjust`].
#[must_use]
pub fn adjust<P: ArcLength>(curve: &P, options: &AdjustOptions<P::Scalar>) -> P {
    Adjust::new(*options).execute(curve)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, CubicBezier, Offset, Segment};
    use crate::math::{Point2, Point3, Vector2, Vector3};
    use crate::parametric::{DomainBounds, EndValues, Parametric};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn unit_x() -> Segment<f64, 2> {
        Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0))
    }

    fn s_curve() -> CubicBezier<f64, 2> {
        CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, -1.0),
            Point2::new(4.0, 0.0),
        )
    }

    fn options(method: AdjustMethod<f64>, side: AdjustSide, epsilon: f64) -> AdjustOptions<f64> {
        AdjustOptions::new(method, side, epsilon).unwrap()
    }

    #[test]
    fn default_options() {
        let o = AdjustOptions::<f64>::default();
        assert_eq!(o.method, AdjustMethod::ByParam(0.2));
        assert_eq!(o.side, AdjustSide::Both);
        assert_abs_diff_eq!(o.epsilon, 1e-10);
    }

    #[test]
    fn rejects_bad_epsilon() {
        let method = AdjustMethod::ByParam(0.0);
        assert!(AdjustOptions::new(method, AdjustSide::Both, 0.0).is_err());
        assert!(AdjustOptions::new(method, AdjustSide::Both, -1e-3).is_err());
        assert!(AdjustOptions::new(method, AdjustSide::Both, f64::NAN).is_err());
        assert!(AdjustOptions::new(method, AdjustSide::Both, f64::INFINITY).is_err());
        assert!(AdjustOptions::<f64>::default().with_epsilon(0.0).is_err());
    }

    #[test]
    fn builder_replaces_fields() {
        let o = AdjustOptions::default()
            .with_method(AdjustMethod::ToAbsolute(2.0))
            .with_side(AdjustSide::Start)
            .with_epsilon(1e-6)
            .unwrap();
        assert_eq!(o, options(AdjustMethod::ToAbsolute(2.0), AdjustSide::Start, 1e-6));
    }

    #[test]
    fn default_extends_both_ends() {
        let s = adjust(&unit_x(), &AdjustOptions::default());
        assert_relative_eq!(s.at_start(), Point2::new(-0.1, 0.0), epsilon = 1e-12);
        assert_relative_eq!(s.at_end(), Point2::new(1.1, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_param_is_identity() {
        let o = options(AdjustMethod::ByParam(0.0), AdjustSide::Both, 1e-9);
        let c = s_curve();
        let adjusted = adjust(&c, &o);
        for i in 0..=8 {
            let t = f64::from(i) / 8.0;
            assert_relative_eq!(adjusted.at_param(t), c.at_param(t), epsilon = 1e-9);
        }
    }

    #[test]
    fn negative_param_shrinks_start() {
        let o = options(AdjustMethod::ByParam(-0.25), AdjustSide::Start, 1e-9);
        let s = adjust(&unit_x(), &o);
        assert_relative_eq!(s.at_start(), Point2::new(0.25, 0.0), epsilon = 1e-12);
        assert_relative_eq!(s.at_end(), Point2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn to_absolute_on_end() {
        let o = options(AdjustMethod::ToAbsolute(0.5), AdjustSide::End, 1e-9);
        let s = adjust(&unit_x(), &o);
        assert_relative_eq!(s.at_end(), Point2::new(0.5, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(s.arc_length(1e-9), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn to_absolute_grows_both_ends_evenly() {
        let o = options(AdjustMethod::ToAbsolute(2.0), AdjustSide::Both, 1e-9);
        let s = adjust(&unit_x(), &o);
        assert_relative_eq!(s.at_start(), Point2::new(-0.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(s.at_end(), Point2::new(1.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn by_absolute_on_longer_segment() {
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let o = options(AdjustMethod::ByAbsolute(-1.0), AdjustSide::End, 1e-9);
        let s = adjust(&seg, &o);
        assert_relative_eq!(s.at_end(), Point2::new(3.0, 0.0), epsilon = 1e-9);
        let o = options(AdjustMethod::ByAbsolute(2.0), AdjustSide::Both, 1e-9);
        let s = adjust(&seg, &o);
        assert_relative_eq!(s.at_start(), Point2::new(-1.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(s.at_end(), Point2::new(5.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn to_absolute_on_bezier() {
        let c = s_curve();
        for epsilon in [1e-6, 1e-8] {
            for target in [1.0, 3.0, 8.0] {
                for side in [AdjustSide::Start, AdjustSide::End, AdjustSide::Both] {
                    let o = options(AdjustMethod::ToAbsolute(target), side, epsilon);
                    let length = adjust(&c, &o).arc_length(epsilon * 1e-2);
                    assert!(
                        (length - target).abs() <= epsilon,
                        "{side:?} to {target} at {epsilon}: got {length}"
                    );
                }
            }
        }
    }

    #[test]
    fn by_absolute_on_bezier() {
        let c = s_curve();
        let total = c.arc_length(1e-10);
        let o = options(AdjustMethod::ByAbsolute(-1.5), AdjustSide::Both, 1e-8);
        let length = adjust(&c, &o).arc_length(1e-10);
        assert_abs_diff_eq!(length, total - 1.5, epsilon = 1e-8);
    }

    #[test]
    fn to_absolute_on_arc_with_angle_domain() {
        let arc =
            Arc::new(Point3::origin(), 2.0, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2).unwrap();
        let o = options(AdjustMethod::ToAbsolute(2.0 * PI), AdjustSide::End, 1e-9);
        let adjusted = adjust(&arc, &o);
        assert_eq!(adjusted.domain_bounds(), arc.domain_bounds());
        assert_abs_diff_eq!(adjusted.arc_length(1e-9), 2.0 * PI, epsilon = 1e-9);
        assert_relative_eq!(adjusted.at_end(), Point3::new(-2.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn by_absolute_on_relative_offset() {
        let o = Offset::new(Vector2::new(3.0, 4.0));
        let opts = options(AdjustMethod::ByAbsolute(5.0), AdjustSide::End, 1e-10);
        let adjusted = adjust(&o, &opts);
        assert_relative_eq!(adjusted.at_end(), Vector2::new(6.0, 8.0), epsilon = 1e-8);
    }

    #[test]
    fn operation_struct_matches_function() {
        let o = options(AdjustMethod::ByParam(0.4), AdjustSide::Start, 1e-9);
        let via_struct = Adjust::new(o).execute(&unit_x());
        assert_eq!(via_struct, adjust(&unit_x(), &o));
    }
}
