//! Perpendicular distance from a point to the line through two anchors.
//!
//! Works in any dimension. When the anchors coincide the line is undefined,
//! and the distance degrades to the Euclidean distance to the first anchor.

use crate::primitives::Coords;
use num_traits::Float;

/// The infinite line through two anchor points, prepared for repeated queries.
///
/// Building the line normalizes the anchor direction once. The simplifier
/// evaluates every interior point of a range against the same anchors, so
/// this keeps the per-point cost to one projection and one length. A line can
/// be re-anchored with [`AnchorLine::reset`] without reallocating.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorLine<F> {
    origin: Vec<F>,
    /// Unit direction from the first anchor to the second; empty when the
    /// anchors coincide.
    direction: Vec<F>,
}

impl<F> Default for AnchorLine<F> {
    /// An empty, zero-dimensional line, to be anchored with
    /// [`AnchorLine::reset`].
    fn default() -> Self {
        Self {
            origin: Vec::new(),
            direction: Vec::new(),
        }
    }
}

impl<F: Float> AnchorLine<F> {
    /// Creates the line through `start` and `end`.
    ///
    /// The line is degenerate only if the anchors are exactly equal.
    ///
    /// # Panics
    ///
    /// Panics if the anchors have different dimensions.
    pub fn new<P: Coords<F> + ?Sized>(start: &P, end: &P) -> Self {
        Self::with_tolerance(start, end, F::zero())
    }

    /// Creates the line through `start` and `end`, treating the anchors as
    /// coincident when they are no further apart than `degenerate_tolerance`.
    ///
    /// # Panics
    ///
    /// Panics if the anchors have different dimensions.
    pub fn with_tolerance<P: Coords<F> + ?Sized>(
        start: &P,
        end: &P,
        degenerate_tolerance: F,
    ) -> Self {
        let mut line = Self {
            origin: Vec::with_capacity(start.dim()),
            direction: Vec::with_capacity(start.dim()),
        };
        line.reset(start, end, degenerate_tolerance);
        line
    }

    /// Re-anchors the line through `start` and `end`, reusing its buffers.
    ///
    /// # Panics
    ///
    /// Panics if the anchors have different dimensions.
    pub fn reset<P: Coords<F> + ?Sized>(&mut self, start: &P, end: &P, degenerate_tolerance: F) {
        let dim = start.dim();
        assert_eq!(dim, end.dim(), "anchor dimensions differ");

        let Self { origin, direction } = self;
        origin.clear();
        origin.extend((0..dim).map(|axis| start.coord(axis)));
        direction.clear();
        direction.extend((0..dim).map(|axis| end.coord(axis) - origin[axis]));

        let mut length = vector_length(dim, |axis| direction[axis]);
        let mut span = length;
        if !length.is_finite() {
            // Anchors more than F::MAX apart: normalize the halved difference.
            let half = half::<F>();
            for (axis, d) in direction.iter_mut().enumerate() {
                *d = end.coord(axis) * half - origin[axis] * half;
            }
            length = vector_length(dim, |axis| direction[axis]);
            span = length / half;
        }

        if span <= degenerate_tolerance {
            direction.clear();
        } else {
            for d in direction.iter_mut() {
                *d = *d / length;
            }
        }
    }

    /// Number of coordinates of the anchors.
    #[inline]
    pub fn dim(&self) -> usize {
        self.origin.len()
    }

    /// Returns `true` if the anchors were treated as a single point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction.is_empty()
    }

    /// Distance from `point` to this line.
    ///
    /// This is the length of the rejection of `point - start` from the unit
    /// direction, or the distance to `start` for a degenerate line. Finite
    /// inputs always give a non-NaN result; a distance beyond `F::MAX` comes
    /// back as infinity.
    ///
    /// # Panics
    ///
    /// Panics if `point` and the anchors have different dimensions.
    pub fn distance<P: Coords<F> + ?Sized>(&self, point: &P) -> F {
        assert_eq!(self.dim(), point.dim(), "point dimension differs from anchors");

        let dist = self.rejection_length(|axis| point.coord(axis) - self.origin[axis]);
        if dist.is_finite() {
            return dist;
        }

        // The offset or its projection overflowed; measure at a reduced scale.
        let scale = overflow_scale::<F>(self.dim());
        let scaled =
            self.rejection_length(|axis| point.coord(axis) / scale - self.origin[axis] / scale);
        scaled * scale
    }

    fn rejection_length(&self, offset: impl Fn(usize) -> F) -> F {
        if self.is_degenerate() {
            return vector_length(self.dim(), offset);
        }
        let along = self
            .direction
            .iter()
            .enumerate()
            .fold(F::zero(), |acc, (axis, &d)| acc + offset(axis) * d);
        vector_length(self.dim(), |axis| offset(axis) - self.direction[axis] * along)
    }
}

/// Computes the perpendicular distance from `point` to the line through
/// `segment_start` and `segment_end`.
///
/// If the two anchors are equal, returns the Euclidean distance from `point`
/// to `segment_start`. The line is infinite: points beyond either anchor are
/// measured against its extension, not against the nearest endpoint.
///
/// # Example
///
/// ```
/// use rdp2::distance::perpendicular_distance;
/// use rdp2::Point2;
///
/// let d = perpendicular_distance(
///     &Point2::new(1.0, 1.0),
///     &Point2::new(0.0, 0.0),
///     &Point2::new(2.0, 0.0),
/// );
/// assert_eq!(d, 1.0);
/// ```
#[inline]
pub fn perpendicular_distance<F: Float, P: Coords<F> + ?Sized>(
    point: &P,
    segment_start: &P,
    segment_end: &P,
) -> F {
    AnchorLine::new(segment_start, segment_end).distance(point)
}

/// Like [`perpendicular_distance`], but anchors no further apart than
/// `degenerate_tolerance` count as a single point.
#[inline]
pub fn perpendicular_distance_with_tolerance<F: Float, P: Coords<F> + ?Sized>(
    point: &P,
    segment_start: &P,
    segment_end: &P,
    degenerate_tolerance: F,
) -> F {
    AnchorLine::with_tolerance(segment_start, segment_end, degenerate_tolerance).distance(point)
}

/// Euclidean length of a `dim`-component vector.
///
/// Takes the plain sum of squares while it stays in the normal range. If it
/// overflows or underflows, the largest component is factored out first.
/// A NaN component always yields NaN.
fn vector_length<F: Float>(dim: usize, component: impl Fn(usize) -> F) -> F {
    let sum_sq = (0..dim).fold(F::zero(), |acc, axis| {
        let c = component(axis);
        acc + c * c
    });
    if sum_sq.is_normal() || sum_sq.is_nan() {
        return sum_sq.sqrt();
    }

    let scale = (0..dim).fold(F::zero(), |acc, axis| acc.max(component(axis).abs()));
    if scale.is_zero() || !scale.is_finite() {
        return scale;
    }

    let scaled_sq = (0..dim).fold(F::zero(), |acc, axis| {
        let c = component(axis) / scale;
        acc + c * c
    });
    scale * scaled_sq.sqrt()
}

fn half<F: Float>() -> F {
    F::one() / (F::one() + F::one())
}

/// Smallest power of two that is at least `4 * dim`.
///
/// Dividing coordinates by it bounds every offset by `F::MAX / (2 * dim)`, so
/// neither the projection nor the rejection can overflow.
fn overflow_scale<F: Float>(dim: usize) -> F {
    let two = F::one() + F::one();
    let mut scale = two * two;
    let mut reach = 4;
    while reach < 4 * dim {
        scale = scale * two;
        reach *= 2;
    }
    scale
}
