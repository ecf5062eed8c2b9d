use tracing::{trace, warn};

use crate::math::{abs, denormalize, lit, DEFAULT_ACCURACY};

use super::{Codomain, Parametric, Sectionable};

/// Subdivision depth before a chord estimate may be accepted.
const MIN_DEPTH: u32 = 3;

/// Subdivision depth at which refinement stops regardless of the estimate.
const MAX_DEPTH: u32 = 32;

/// Doublings tried when bracketing a target length.
const MAX_BRACKET_STEPS: u32 = 64;

/// Bisection steps before the search gives up.
const MAX_BISECTIONS: u32 = 200;

/// Objects whose arc length can be measured and inverted.
///
/// The defaults only need [`Parametric::at_param`] and sectioning. Closed
/// forms should override [`ArcLength::arc_length`] and
/// [`ArcLength::arc_length_to_param`]; the search then picks up the faster
/// measurement too.
pub trait ArcLength: Sectionable {
    /// Total arc length over the domain, accurate to `± epsilon`.
    ///
    /// The default refines chord lengths adaptively with a Richardson
    /// correction.
    fn arc_length(&self, epsilon: Self::Scalar) -> Self::Scalar {
        let (lower, upper) = self.domain_bounds();
        chord_length(self, lower, upper, epsilon)
    }

    /// An interval `(lo, hi)` that contains the true arc length.
    fn arc_length_bounded(&self, epsilon: Self::Scalar) -> (Self::Scalar, Self::Scalar) {
        let length = self.arc_length(epsilon);
        let lo = length - epsilon;
        let lo = if lo < nalgebra::zero() { nalgebra::zero() } else { lo };
        (lo, length + epsilon)
    }

    /// Parameter at which the arc length measured from `domain_lower`
    /// equals `length`, within `± epsilon`.
    ///
    /// Negative lengths are measured backward from `domain_lower`; lengths
    /// past the total run on beyond `domain_upper`. Both extrapolate.
    fn arc_length_to_param(&self, length: Self::Scalar, epsilon: Self::Scalar) -> Self::Scalar {
        search_param(self, length, epsilon)
    }

    /// [`ArcLength::arc_length`] at [`DEFAULT_ACCURACY`].
    fn std_arc_length(&self) -> Self::Scalar {
        self.arc_length(lit(DEFAULT_ACCURACY))
    }

    /// [`ArcLength::arc_length_to_param`] at [`DEFAULT_ACCURACY`].
    fn std_arc_length_to_param(&self, length: Self::Scalar) -> Self::Scalar {
        self.arc_length_to_param(length, lit(DEFAULT_ACCURACY))
    }
}

/// Length of the path traced between parameters `from` and `to`.
fn chord_length<P: Parametric + ?Sized>(
    curve: &P,
    from: P::Scalar,
    to: P::Scalar,
    epsilon: P::Scalar,
) -> P::Scalar {
    let mid = (from + to) * lit(0.5);
    let start = curve.at_param(from);
    let end = curve.at_param(to);
    let chord = start.distance(&end);
    refine(
        curve,
        [(from, &start), (mid, &curve.at_param(mid)), (to, &end)],
        chord,
        epsilon,
        0,
    )
}

/// Refines the piece `[t0, t1]` with its midpoint already evaluated.
///
/// Chord sums converge quadratically, so `sum + (sum - coarser) / 3`
/// extrapolates one level. A piece is accepted once the extrapolations from
/// one to two chords and from two to four chords agree; a single level's
/// gain vanishes whenever the midpoint happens to lie on the chord.
fn refine<P: Parametric + ?Sized>(
    curve: &P,
    [(t0, p0), (tm, pm), (t1, p1)]: [(P::Scalar, &P::Codomain); 3],
    chord: P::Scalar,
    epsilon: P::Scalar,
    depth: u32,
) -> P::Scalar {
    let half: P::Scalar = lit(0.5);
    let three: P::Scalar = lit(3.0);
    let (ta, tb) = ((t0 + tm) * half, (tm + t1) * half);
    let (qa, qb) = (curve.at_param(ta), curve.at_param(tb));

    let left = p0.distance(pm);
    let right = pm.distance(p1);
    let halves = left + right;
    let quarters = p0.distance(&qa) + qa.distance(pm) + pm.distance(&qb) + qb.distance(p1);

    let coarse = halves + (halves - chord) / three;
    let fine = quarters + (quarters - halves) / three;
    let deviation = abs(fine - coarse);

    // Below this the deviation is rounding noise.
    let noise = quarters * lit(64.0 * f64::EPSILON);
    if depth >= MIN_DEPTH && (deviation <= epsilon || deviation <= noise) {
        return fine;
    }
    if depth >= MAX_DEPTH {
        trace!(depth, deviation = %deviation, "arc length subdivision reached its depth limit");
        return fine;
    }

    let epsilon = epsilon * half;
    refine(curve, [(t0, p0), (ta, &qa), (tm, pm)], left, epsilon, depth + 1)
        + refine(curve, [(tm, pm), (tb, &qb), (t1, p1)], right, epsilon, depth + 1)
}

/// Brackets `length` by doubling in normalized coordinates, then bisects.
fn search_param<P: ArcLength>(curve: &P, length: P::Scalar, epsilon: P::Scalar) -> P::Scalar {
    let zero: P::Scalar = nalgebra::zero();
    let one: P::Scalar = nalgebra::one();
    let two: P::Scalar = lit(2.0);
    let half: P::Scalar = lit(0.5);

    let (lower, upper) = curve.domain_bounds();
    if length == zero {
        return lower;
    }
    let at = |s: P::Scalar| denormalize(lower, upper, s);

    let inner = epsilon * lit(0.25);
    let measure = |s: P::Scalar| -> P::Scalar {
        if s == zero {
            return zero;
        }
        let traversed = curve.section(lower, at(s)).arc_length(inner);
        if s < zero {
            -traversed
        } else {
            traversed
        }
    };

    let (mut lo, mut hi) = if length > zero { (zero, one) } else { (-one, zero) };
    let mut steps = 0;
    if length > zero {
        while measure(hi) < length {
            lo = hi;
            hi = hi * two;
            steps += 1;
            if steps > MAX_BRACKET_STEPS {
                warn!(%length, "could not bracket arc length, the curve may be degenerate");
                return at(hi);
            }
        }
    } else {
        while measure(lo) > length {
            hi = lo;
            lo = lo * two;
            steps += 1;
            if steps > MAX_BRACKET_STEPS {
                warn!(%length, "could not bracket arc length, the curve may be degenerate");
                return at(lo);
            }
        }
    }
    trace!(lo = %lo, hi = %hi, steps, "bracketed arc length");

    let noise: P::Scalar = lit(4.0 * f64::EPSILON);
    for _ in 0..MAX_BISECTIONS {
        let mid = (lo + hi) * half;
        let measured = measure(mid);
        let width = hi - lo;
        if abs(measured - length) <= epsilon * half || width <= noise * (one + abs(mid)) {
            return at(mid);
        }
        if measured < length {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    warn!(length = %length, "arc length search did not converge");
    at((lo + hi) * half)
}
