use nalgebra::SVector;

use crate::math::Real;
use crate::parametric::{
    ArcLength, DomainBounds, EndValues, Parametric, SectionPrimitive, Sectionable,
};

/// A straight displacement, `P(t) = t * vector` over `[0, 1]`.
///
/// Values are relative to wherever the offset is placed, so pieces chain by
/// vector addition. Only splitting is implemented; everything else comes
/// from the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset<T: Real, const D: usize> {
    vector: SVector<T, D>,
}

impl<T: Real, const D: usize> Offset<T, D> {
    /// Creates a new offset covering `vector`.
    #[must_use]
    pub fn new(vector: SVector<T, D>) -> Self {
        Self { vector }
    }

    /// Returns the full displacement.
    #[must_use]
    pub fn vector(&self) -> &SVector<T, D> {
        &self.vector
    }
}

impl<T: Real, const D: usize> Parametric for Offset<T, D> {
    type Scalar = T;
    type Codomain = SVector<T, D>;

    fn at_param(&self, t: T) -> SVector<T, D> {
        self.vector * t
    }
}

impl<T: Real, const D: usize> DomainBounds for Offset<T, D> {}

impl<T: Real, const D: usize> EndValues for Offset<T, D> {}

impl<T: Real, const D: usize> Sectionable for Offset<T, D> {
    const PRIMITIVE: SectionPrimitive = SectionPrimitive::Split;

    fn split_at_param(&self, t: T) -> (Self, Self) {
        let one: T = nalgebra::one();
        (Self::new(self.vector * t), Self::new(self.vector * (one - t)))
    }
}

impl<T: Real, const D: usize> ArcLength for Offset<T, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn diagonal() -> Offset<f64, 2> {
        Offset::new(Vector2::new(3.0, 4.0))
    }

    #[test]
    fn starts_at_zero() {
        assert_relative_eq!(diagonal().at_start(), Vector2::zeros());
        assert_relative_eq!(diagonal().at_end(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn split_chains_by_addition() {
        let o = diagonal();
        let (left, right) = o.split_at_param(0.25);
        assert_relative_eq!(left.at_end() + right.at_end(), o.at_end());
        assert_relative_eq!(left.at_param(0.5), o.at_param(0.125));
    }

    #[test]
    fn split_past_the_end_runs_back() {
        let (left, right) = diagonal().split_at_param(2.0);
        assert_relative_eq!(left.at_end(), Vector2::new(6.0, 8.0));
        assert_relative_eq!(right.at_end(), Vector2::new(-3.0, -4.0));
    }

    #[test]
    fn derived_section() {
        let piece = diagonal().section(0.25, 0.75);
        assert_relative_eq!(piece.at_end(), Vector2::new(1.5, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn derived_reverse() {
        let o = diagonal();
        let r = o.reverse_domain();
        assert_relative_eq!(r.at_end(), Vector2::new(-3.0, -4.0), epsilon = 1e-12);
        assert_relative_eq!(r.reverse_domain().at_end(), o.at_end(), epsilon = 1e-12);
    }

    #[test]
    fn default_arc_length() {
        let o = diagonal();
        assert_abs_diff_eq!(o.arc_length(1e-9), 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(o.arc_length_to_param(2.5, 1e-10), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(o.arc_length_to_param(-5.0, 1e-10), -1.0, epsilon = 1e-9);
    }
}
