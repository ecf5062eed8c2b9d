use std::any::type_name;

use crate::math::{lit, remap};

use super::DomainBounds;

/// Which of the two [`Sectionable`] operations a representation implements
/// itself. The other one is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPrimitive {
    /// `split_at_param` is implemented; `section` is derived.
    Split,
    /// `section` is implemented; `split_at_param` is derived.
    Section,
}

/// Objects that can be cut into pieces, each reparameterized onto the
/// original object's domain.
///
/// `split_at_param` and `section` are defined in terms of each other. A
/// representation overrides the one named by [`Sectionable::PRIMITIVE`].
/// Calling the declared primitive without having overridden it panics with
/// the type's name rather than recursing.
pub trait Sectionable: DomainBounds + Sized {
    /// The operation this representation implements itself.
    const PRIMITIVE: SectionPrimitive;

    /// Splits the object at `t` into `(left, right)`.
    ///
    /// `left` covers `[domain_lower, t]` and `right` covers
    /// `[t, domain_upper]`, both stretched over the object's own domain.
    /// `t` beyond the domain is allowed: splitting past `domain_upper` gives
    /// a `left` that is the object extended to `t` and a `right` that runs
    /// backward from there to the original end.
    fn split_at_param(&self, t: Self::Scalar) -> (Self, Self) {
        if Self::PRIMITIVE == SectionPrimitive::Split {
            missing_primitive::<Self>("split_at_param");
        }
        let (lower, upper) = self.domain_bounds();
        (self.section(lower, t), self.section(t, upper))
    }

    /// Extracts the piece between parameters `from` and `to`, linearly
    /// reparameterized so that `from` maps to `domain_lower` and `to` maps to
    /// `domain_upper`. The domain bounds of the result equal this object's.
    ///
    /// `from > to` yields a piece running backward.
    fn section(&self, from: Self::Scalar, to: Self::Scalar) -> Self {
        if Self::PRIMITIVE == SectionPrimitive::Section {
            missing_primitive::<Self>("section");
        }
        section_by_splitting(self, from, to)
    }

    /// Same object traversed in the opposite direction, over the same domain.
    fn reverse_domain(&self) -> Self {
        let (lower, upper) = self.domain_bounds();
        self.section(upper, lower)
    }
}

fn missing_primitive<P>(method: &str) -> ! {
    panic!(
        "`{}` declares `{method}` as its section primitive but does not implement it",
        type_name::<P>()
    )
}

/// Derives `section` from two or three splits.
///
/// The usual route cuts at `to` first and then drops everything before
/// `from`. It divides by `to - lower`, so a piece ending on `domain_lower`
/// (such as the one `reverse_domain` asks for) is instead cut out of the
/// object extended backward from an anchor past `domain_upper`.
fn section_by_splitting<P: Sectionable>(curve: &P, from: P::Scalar, to: P::Scalar) -> P {
    let (lower, upper) = curve.domain_bounds();
    debug_assert!(lower != upper, "cannot section over a degenerate domain");

    if to != lower {
        let (head, _) = curve.split_at_param(to);
        let (_, piece) = head.split_at_param(remap(lower, to, lower, upper, from));
        return piece;
    }

    let anchor = lower + (upper - lower) * lit(2.0);
    // [anchor, upper], running backward.
    let (_, back) = curve.split_at_param(anchor);
    // [anchor, to]
    let (head, _) = back.split_at_param(remap(anchor, upper, lower, upper, to));
    let (_, piece) = head.split_at_param(remap(anchor, to, lower, upper, from));
    piece
}
