//! Contracts shared by every parametric object.
//!
//! A representation implements [`Parametric`] and, usually with empty impl
//! blocks, [`DomainBounds`] and [`EndValues`]. It then supplies one of the
//! two [`Sectionable`] primitives and gets sectioning, reversal, arc length
//! and [`adjust`](crate::adjust) from the defaults.

mod arc_length;
mod codomain;
mod section;

pub use arc_length::ArcLength;
pub use codomain::{Codomain, CodomainKind};
pub use section::{SectionPrimitive, Sectionable};

use crate::math::Real;

/// An object that can be evaluated as a function of a scalar parameter.
pub trait Parametric {
    /// Field over which the parameter and arc length are measured.
    type Scalar: Real;

    /// What the object evaluates to: a displacement or a position.
    type Codomain: Codomain<Scalar = Self::Scalar>;

    /// Evaluates the object at parameter `t`.
    ///
    /// `t` may lie outside the domain; what happens there (usually linear or
    /// polynomial extrapolation) is up to the representation.
    fn at_param(&self, t: Self::Scalar) -> Self::Codomain;
}

/// The interval of parameter values an object is primarily defined over.
///
/// Defaults to `[0, 1]`. Representations with another domain override both
/// bounds. `lower <= upper` is not required.
pub trait DomainBounds: Parametric {
    /// Lower bound of the domain.
    fn domain_lower(&self) -> Self::Scalar {
        nalgebra::zero()
    }

    /// Upper bound of the domain.
    fn domain_upper(&self) -> Self::Scalar {
        nalgebra::one()
    }

    /// Both bounds as `(lower, upper)`. Not meant to be overridden.
    fn domain_bounds(&self) -> (Self::Scalar, Self::Scalar) {
        (self.domain_lower(), self.domain_upper())
    }
}

/// Values at the two ends of the domain.
///
/// Overrides must agree with the defaults up to floating-point tolerance;
/// they exist to return an exact closed-form value where evaluating the
/// general formula at the boundary would round.
pub trait EndValues: DomainBounds {
    /// Value at [`DomainBounds::domain_lower`].
    fn at_start(&self) -> Self::Codomain {
        self.at_param(self.domain_lower())
    }

    /// Value at [`DomainBounds::domain_upper`].
    fn at_end(&self) -> Self::Codomain {
        self.at_param(self.domain_upper())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    /// Parabola over the default domain, with no overrides at all.
    struct Parabola;

    impl Parametric for Parabola {
        type Scalar = f64;
        type Codomain = Point2;

        fn at_param(&self, t: f64) -> Point2 {
            Point2::new(t, t * t)
        }
    }

    impl DomainBounds for Parabola {}
    impl EndValues for Parabola {}

    /// Same parabola over `[-2, 3]`.
    struct WideParabola;

    impl Parametric for WideParabola {
        type Scalar = f64;
        type Codomain = Point2;

        fn at_param(&self, t: f64) -> Point2 {
            Point2::new(t, t * t)
        }
    }

    impl DomainBounds for WideParabola {
        fn domain_lower(&self) -> f64 {
            -2.0
        }

        fn domain_upper(&self) -> f64 {
            3.0
        }
    }

    impl EndValues for WideParabola {}

    #[test]
    fn default_domain_is_unit_interval() {
        assert_eq!(Parabola.domain_bounds(), (0.0, 1.0));
    }

    #[test]
    fn overridden_domain_bounds() {
        let p = WideParabola;
        assert_eq!(p.domain_bounds(), (p.domain_lower(), p.domain_upper()));
        assert_eq!(p.domain_bounds(), (-2.0, 3.0));
    }

    #[test]
    fn default_end_values_follow_domain() {
        assert_relative_eq!(Parabola.at_start(), Point2::new(0.0, 0.0));
        assert_relative_eq!(Parabola.at_end(), Point2::new(1.0, 1.0));
        assert_relative_eq!(WideParabola.at_start(), Point2::new(-2.0, 4.0));
        assert_relative_eq!(WideParabola.at_end(), Point2::new(3.0, 9.0));
    }

    #[test]
    fn evaluation_outside_domain() {
        assert_relative_eq!(Parabola.at_param(2.0), Point2::new(2.0, 4.0));
    }
}
