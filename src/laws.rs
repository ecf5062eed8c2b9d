//! Consistency checks for parametric representations.
//!
//! The traits in [`crate::parametric`] only fix signatures; these functions
//! check the behavior that overrides are bound to. Call them from the tests
//! of a new representation.

use crate::error::{LawError, OperationError, Result};
use crate::math::{abs, denormalize, lit, normalize, Real};
use crate::parametric::{ArcLength, Codomain, DomainBounds, EndValues, Parametric, Sectionable};

fn violated(law: &'static str, detail: String) -> crate::error::ParametricError {
    LawError::Violated { law, detail }.into()
}

/// `samples + 1` evenly spaced points of `[0, 1]`.
fn unit_samples<T: Real>(samples: u32) -> impl Iterator<Item = T> {
    let samples = samples.max(1);
    (0..=samples).map(move |i| lit(f64::from(i) / f64::from(samples)))
}

fn check_close<P: Parametric>(
    law: &'static str,
    t: P::Scalar,
    expected: &P::Codomain,
    actual: &P::Codomain,
    tolerance: P::Scalar,
) -> Result<()> {
    let deviation = expected.distance(actual);
    if deviation <= tolerance {
        Ok(())
    } else {
        Err(violated(
            law,
            format!("at t = {t}: deviation {deviation} exceeds {tolerance}"),
        ))
    }
}

/// `domain_bounds` must return exactly the two individual bounds.
///
/// # Errors
///
/// Returns [`LawError::Violated`] if they differ.
pub fn check_domain_bounds<P: DomainBounds>(curve: &P) -> Result<()> {
    let bounds = curve.domain_bounds();
    let (lower, upper) = (curve.domain_lower(), curve.domain_upper());
    if bounds == (lower, upper) {
        Ok(())
    } else {
        Err(violated(
            "domain bounds",
            format!("domain_bounds() = {bounds:?}, individual bounds ({lower}, {upper})"),
        ))
    }
}

/// `at_start`/`at_end` must agree with evaluation at the domain bounds.
///
/// # Errors
///
/// Returns [`LawError::Violated`] if either end deviates by more than
/// `tolerance`.
pub fn check_end_values<P: EndValues>(curve: &P, tolerance: P::Scalar) -> Result<()> {
    let (lower, upper) = curve.domain_bounds();
    check_close::<P>("start value", lower, &curve.at_param(lower), &curve.at_start(), tolerance)?;
    check_close::<P>("end value", upper, &curve.at_param(upper), &curve.at_end(), tolerance)
}

/// Splitting at `t` must reproduce the curve from the two pieces.
///
/// Samples `samples + 1` parameters across the domain and compares each to
/// the left piece before `t` and to the joined right piece after it.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if `t` is not strictly inside
/// the domain, and [`LawError::Violated`] on a deviation above `tolerance`.
pub fn check_split<P: Sectionable>(
    curve: &P,
    t: P::Scalar,
    samples: u32,
    tolerance: P::Scalar,
) -> Result<()> {
    let (lower, upper) = curve.domain_bounds();
    let split: P::Scalar = normalize(lower, upper, t);
    let (zero, one) = (nalgebra::zero(), nalgebra::one());
    if !(split > zero && split < one) {
        return Err(OperationError::InvalidInput(format!(
            "split parameter {t} must lie strictly inside ({lower}, {upper})"
        ))
        .into());
    }

    let (left, right) = curve.split_at_param(t);
    check_domain_preserved(curve, &left)?;
    check_domain_preserved(curve, &right)?;

    let base = curve.at_param(lower);
    let boundary = <P::Codomain as Codomain>::join(&base, &left.at_param(upper));
    for s in unit_samples::<P::Scalar>(samples) {
        let u = denormalize(lower, upper, s);
        let expected = curve.at_param(u);
        let actual = if s < split {
            let u = denormalize(lower, upper, s / split);
            <P::Codomain as Codomain>::join(&base, &left.at_param(u))
        } else {
            let r = (s - split) / (one - split);
            let u = denormalize(lower, upper, r);
            <P::Codomain as Codomain>::join(&boundary, &right.at_param(u))
        };
        check_close::<P>("split", u, &expected, &actual, tolerance)?;
    }
    Ok(())
}

/// `section(from, to)` must keep the domain and be the linear
/// reparameterization of the curve between `from` and `to`.
///
/// # Errors
///
/// Returns [`LawError::Violated`] if the domain changes or a sample
/// deviates by more than `tolerance`.
pub fn check_section<P: Sectionable>(
    curve: &P,
    from: P::Scalar,
    to: P::Scalar,
    samples: u32,
    tolerance: P::Scalar,
) -> Result<()> {
    let piece = curve.section(from, to);
    check_domain_preserved(curve, &piece)?;

    let (lower, upper) = curve.domain_bounds();
    let base = curve.at_param(from);
    for s in unit_samples::<P::Scalar>(samples) {
        let t = denormalize(lower, upper, s);
        let expected = curve.at_param(denormalize(from, to, s));
        let actual = <P::Codomain as Codomain>::join(&base, &piece.at_param(t));
        check_close::<P>("section", t, &expected, &actual, tolerance)?;
    }
    Ok(())
}

/// Reversing twice must give back the same curve and domain.
///
/// # Errors
///
/// Returns [`LawError::Violated`] if the domain changes or a sample
/// deviates by more than `tolerance`.
pub fn check_reverse_involution<P: Sectionable>(
    curve: &P,
    samples: u32,
    tolerance: P::Scalar,
) -> Result<()> {
    let twice = curve.reverse_domain().reverse_domain();
    check_domain_preserved(curve, &twice)?;

    let (lower, upper) = curve.domain_bounds();
    for s in unit_samples::<P::Scalar>(samples) {
        let t = denormalize(lower, upper, s);
        check_close::<P>("reverse", t, &curve.at_param(t), &twice.at_param(t), tolerance)?;
    }
    Ok(())
}

/// Searching for the total arc length must land on `domain_upper`.
///
/// # Errors
///
/// Returns [`LawError::Violated`] if the parameter found is further than
/// `tolerance` from the upper bound.
pub fn check_arc_length_inverse<P: ArcLength>(
    curve: &P,
    epsilon: P::Scalar,
    tolerance: P::Scalar,
) -> Result<()> {
    let total = curve.arc_length(epsilon);
    let t = curve.arc_length_to_param(total, epsilon);
    let upper = curve.domain_upper();
    if abs(t - upper) <= tolerance {
        Ok(())
    } else {
        Err(violated(
            "arc length inverse",
            format!("length {total} maps to {t}, expected {upper}"),
        ))
    }
}

fn check_domain_preserved<P: DomainBounds>(curve: &P, piece: &P) -> Result<()> {
    if piece.domain_bounds() == curve.domain_bounds() {
        Ok(())
    } else {
        Err(violated(
            "domain preservation",
            format!(
                "piece has domain {:?}, original {:?}",
                piece.domain_bounds(),
                curve.domain_bounds()
            ),
        ))
    }
}
