use nalgebra::{Point, SVector};

use crate::math::Real;

/// Whether a codomain value is a displacement or a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodomainKind {
    /// A displacement relative to where the object starts; pieces are
    /// chained by vector addition.
    Relative,
    /// An absolute position; the later piece's value replaces the earlier one.
    Absolute,
}

/// The value type a parametric object evaluates to.
///
/// The combination rule used at a split boundary ([`Codomain::join`]) is a
/// property of the codomain type, not of the algorithms built on top of it:
/// points are [`CodomainKind::Absolute`], vectors are
/// [`CodomainKind::Relative`].
pub trait Codomain: Clone {
    /// Scalar field of the space the values live in.
    type Scalar: Real;

    /// How values from consecutive pieces combine.
    const KIND: CodomainKind;

    /// Linear interpolation, `self + (other - self) * t`.
    #[must_use]
    fn lerp(&self, other: &Self, t: Self::Scalar) -> Self;

    /// Combines the value reached at the end of a leading piece with a value
    /// of the trailing piece.
    ///
    /// Relative codomains add the two; absolute codomains return `tail`.
    #[must_use]
    fn join(boundary: &Self, tail: &Self) -> Self;

    /// Euclidean distance between two values.
    #[must_use]
    fn distance(&self, other: &Self) -> Self::Scalar;
}

impl<T: Real, const D: usize> Codomain for Point<T, D> {
    type Scalar = T;

    const KIND: CodomainKind = CodomainKind::Absolute;

    fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    fn join(_boundary: &Self, tail: &Self) -> Self {
        *tail
    }

    fn distance(&self, other: &Self) -> T {
        nalgebra::distance(self, other)
    }
}

impl<T: Real, const D: usize> Codomain for SVector<T, D> {
    type Scalar = T;

    const KIND: CodomainKind = CodomainKind::Relative;

    fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    fn join(boundary: &Self, tail: &Self) -> Self {
        *boundary + *tail
    }

    fn distance(&self, other: &Self) -> T {
        (*self - *other).norm()
    }
}
