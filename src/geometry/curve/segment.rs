use nalgebra::Point;

use crate::math::Real;
use crate::parametric::{
    ArcLength, DomainBounds, EndValues, Parametric, SectionPrimitive, Sectionable,
};

/// A straight segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` over `[0, 1]`,
/// extrapolating linearly outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Real, const D: usize> {
    start: Point<T, D>,
    end: Point<T, D>,
}

impl<T: Real, const D: usize> Segment<T, D> {
    /// Creates a new segment from `start` to `end`.
    ///
    /// Coincident endpoints are allowed; such a segment has zero length.
    #[must_use]
    pub fn new(start: Point<T, D>, end: Point<T, D>) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point<T, D> {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point<T, D> {
        &self.end
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> T {
        nalgebra::distance(&self.start, &self.end)
    }
}

impl<T: Real, const D: usize> Parametric for Segment<T, D> {
    type Scalar = T;
    type Codomain = Point<T, D>;

    fn at_param(&self, t: T) -> Point<T, D> {
        self.start + (self.end - self.start) * t
    }
}

impl<T: Real, const D: usize> DomainBounds for Segment<T, D> {}

impl<T: Real, const D: usize> EndValues for Segment<T, D> {
    fn at_start(&self) -> Point<T, D> {
        self.start
    }

    fn at_end(&self) -> Point<T, D> {
        self.end
    }
}

impl<T: Real, const D: usize> Sectionable for Segment<T, D> {
    const PRIMITIVE: SectionPrimitive = SectionPrimitive::Section;

    fn section(&self, from: T, to: T) -> Self {
        Self::new(self.at_param(from), self.at_param(to))
    }

    fn reverse_domain(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl<T: Real, const D: usize> ArcLength for Segment<T, D> {
    fn arc_length(&self, _epsilon: T) -> T {
        self.length()
    }

    /// Exact for any length; a zero-length segment maps every length to `0`.
    fn arc_length_to_param(&self, length: T, _epsilon: T) -> T {
        let total = self.length();
        if total == nalgebra::zero() {
            return nalgebra::zero();
        }
        length / total
    }
}
