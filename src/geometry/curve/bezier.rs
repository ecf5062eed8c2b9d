use nalgebra::Point;

use crate::math::Real;
use crate::parametric::{
    ArcLength, Codomain, DomainBounds, EndValues, Parametric, SectionPrimitive, Sectionable,
};

/// A cubic Bézier segment over `[0, 1]`.
///
/// Splitting uses de Casteljau's construction, which also extrapolates the
/// polynomial for `t` outside the domain. Arc length and its inverse use the
/// numeric defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier<T: Real, const D: usize> {
    points: [Point<T, D>; 4],
}

impl<T: Real, const D: usize> CubicBezier<T, D> {
    /// Creates a cubic from its four control points.
    #[must_use]
    pub fn new(p0: Point<T, D>, p1: Point<T, D>, p2: Point<T, D>, p3: Point<T, D>) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Returns the control points in order.
    #[must_use]
    pub fn control_points(&self) -> &[Point<T, D>; 4] {
        &self.points
    }

    /// De Casteljau construction at `t`: the control points of the left and
    /// right halves. Both share the point on the curve.
    fn subdivide(&self, t: T) -> ([Point<T, D>; 4], [Point<T, D>; 4]) {
        let lerp = |a: &Point<T, D>, b: &Point<T, D>| Codomain::lerp(a, b, t);
        let [p0, p1, p2, p3] = self.points;
        let p01 = lerp(&p0, &p1);
        let p12 = lerp(&p1, &p2);
        let p23 = lerp(&p2, &p3);
        let p012 = lerp(&p01, &p12);
        let p123 = lerp(&p12, &p23);
        let mid = lerp(&p012, &p123);
        ([p0, p01, p012, mid], [mid, p123, p23, p3])
    }
}

impl<T: Real, const D: usize> Parametric for CubicBezier<T, D> {
    type Scalar = T;
    type Codomain = Point<T, D>;

    fn at_param(&self, t: T) -> Point<T, D> {
        self.subdivide(t).0[3]
    }
}

impl<T: Real, const D: usize> DomainBounds for CubicBezier<T, D> {}

impl<T: Real, const D: usize> EndValues for CubicBezier<T, D> {
    fn at_start(&self) -> Point<T, D> {
        self.points[0]
    }

    fn at_end(&self) -> Point<T, D> {
        self.points[3]
    }
}

impl<T: Real, const D: usize> Sectionable for CubicBezier<T, D> {
    const PRIMITIVE: SectionPrimitive = SectionPrimitive::Split;

    fn split_at_param(&self, t: T) -> (Self, Self) {
        let (left, right) = self.subdivide(t);
        (Self { points: left }, Self { points: right })
    }

    fn reverse_domain(&self) -> Self {
        let [p0, p1, p2, p3] = self.points;
        Self::new(p3, p2, p1, p0)
    }
}

impl<T: Real, const D: usize> ArcLength for CubicBezier<T, D> {}
