//! Ramer-Douglas-Peucker polyline simplification.
//!
//! The RDP algorithm keeps the two endpoints of a range, finds the interior
//! point farthest from the line through them, and either collapses the range
//! (if that point is within epsilon) or splits the range at that point and
//! handles both halves the same way.
//!
//! Ranges are held on an explicit work stack and results are written into a
//! retain mask indexed by point, so call depth stays constant no matter how
//! deep the split tree grows. With the `parallel` feature, large ranges hand
//! their two halves to rayon, each half owning a disjoint slice of the mask.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::distance::AnchorLine;
use crate::error::SimplifyError;
use crate::polyline::Polyline;
use crate::primitives::Coords;
use log::debug;
use num_traits::Float;

/// Tolerance used by [`Simplifier::default`].
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Range length from which the two halves of a split are reduced in parallel.
#[cfg(feature = "parallel")]
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Nesting limit for parallel splits; deeper ranges use the work stack.
#[cfg(feature = "parallel")]
const MAX_PARALLEL_DEPTH: usize = 8;

/// A reusable simplification configuration.
///
/// Construction validates every parameter, so the simplification methods
/// can only fail on bad point data.
///
/// # Example
///
/// ```
/// use rdp2::{Point2, Simplifier};
///
/// let simplifier = Simplifier::new(0.5).unwrap();
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),
///     Point2::new(4.0, 0.0),
/// ];
///
/// let indices = simplifier.indices(&points).unwrap();
/// assert_eq!(indices, vec![0, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplifier<F> {
    epsilon: F,
    degenerate_tolerance: F,
    #[cfg(feature = "parallel")]
    parallel_threshold: usize,
}

impl<F: Float + Send + Sync> Simplifier<F> {
    /// Creates a simplifier that drops points within `epsilon` of the
    /// simplified path.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidParameter`] if `epsilon` is negative,
    /// NaN, or infinite.
    pub fn new(epsilon: F) -> Result<Self, SimplifyError> {
        check_tolerance("epsilon", epsilon)?;
        Ok(Self {
            epsilon,
            degenerate_tolerance: F::zero(),
            #[cfg(feature = "parallel")]
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    /// Treats range endpoints no further apart than `tolerance` as a single
    /// point, measuring interior points by their distance to it.
    ///
    /// The default of zero only treats exactly equal endpoints that way.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidParameter`] if `tolerance` is
    /// negative, NaN, or infinite.
    pub fn with_degenerate_tolerance(self, tolerance: F) -> Result<Self, SimplifyError> {
        check_tolerance("degenerate_tolerance", tolerance)?;
        Ok(Self {
            degenerate_tolerance: tolerance,
            ..self
        })
    }

    /// Sets the smallest range (in points) whose halves are reduced on
    /// separate rayon workers. Values below 3 are raised to 3.
    #[cfg(feature = "parallel")]
    pub fn with_parallel_threshold(self, threshold: usize) -> Self {
        Self {
            parallel_threshold: threshold.max(3),
            ..self
        }
    }

    /// The distance tolerance.
    #[inline]
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// The coincident-endpoint tolerance.
    #[inline]
    pub fn degenerate_tolerance(&self) -> F {
        self.degenerate_tolerance
    }

    /// Simplifies a slice of points, returning clones of the retained ones.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidInput`] if the points have mixed
    /// dimensions, no coordinates, or a non-finite coordinate.
    pub fn simplify<P: Coords<F> + Clone>(&self, points: &[P]) -> Result<Vec<P>, SimplifyError> {
        let indices = self.indices(points)?;
        Ok(indices.into_iter().map(|i| points[i].clone()).collect())
    }

    /// Simplifies a slice of points, returning the retained indices in order.
    ///
    /// # Errors
    ///
    /// Same as [`Simplifier::simplify`].
    pub fn indices<P: Coords<F>>(&self, points: &[P]) -> Result<Vec<usize>, SimplifyError> {
        let mask = self.mask(points)?;
        Ok(mask_to_indices(&mask))
    }

    /// Simplifies a slice of points, returning one flag per point that is
    /// `true` for retained points.
    ///
    /// # Errors
    ///
    /// Same as [`Simplifier::simplify`].
    pub fn mask<P: Coords<F>>(&self, points: &[P]) -> Result<Vec<bool>, SimplifyError> {
        let line = Polyline::from_points(points).map_err(|err| {
            debug!("rejecting {} points: {}", points.len(), err);
            err
        })?;
        Ok(self.mask_polyline(&line))
    }

    /// Simplifies an already validated polyline into a new one.
    pub fn simplify_polyline(&self, line: &Polyline<F>) -> Polyline<F> {
        let mask = self.mask_polyline(line);
        line.select(&mask_to_indices(&mask))
    }

    /// Computes the retain mask of an already validated polyline.
    pub fn mask_polyline(&self, line: &Polyline<F>) -> Vec<bool> {
        let n = line.len();
        if n <= 2 {
            return vec![true; n];
        }

        let mut retain = vec![false; n];
        retain[0] = true;
        retain[n - 1] = true;

        let ranges = self.reduce(line, 0, n - 1, &mut retain[1..n - 1]);

        debug!(
            "simplified {} points to {} (epsilon {}, {} ranges examined)",
            n,
            retain.iter().filter(|&&keep| keep).count(),
            self.epsilon.to_f64().unwrap_or(f64::NAN),
            ranges
        );
        retain
    }

    #[cfg(not(feature = "parallel"))]
    fn reduce(&self, line: &Polyline<F>, first: usize, last: usize, interior: &mut [bool]) -> usize {
        reduce_with_stack(line, first, last, interior, self.epsilon, self.degenerate_tolerance)
    }

    #[cfg(feature = "parallel")]
    fn reduce(&self, line: &Polyline<F>, first: usize, last: usize, interior: &mut [bool]) -> usize {
        parallel::reduce_split(self, line, first, last, interior, 0)
    }
}

impl<F: Float + Send + Sync> Default for Simplifier<F> {
    fn default() -> Self {
        Self {
            epsilon: F::from(DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            degenerate_tolerance: F::zero(),
            #[cfg(feature = "parallel")]
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// Returns the retained points, in their original order. The first and last
/// points are always kept; inputs of up to two points come back unchanged.
///
/// # Arguments
///
/// * `points` - The input polyline; any [`Coords`] type works
/// * `epsilon` - Distance tolerance. Points within this perpendicular
///   distance of the simplified path are removed.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidParameter`] for a negative or non-finite
/// `epsilon`, and [`SimplifyError::InvalidInput`] for mixed dimensions or
/// non-finite coordinates. Nothing is simplified when an error is returned.
///
/// # Example
///
/// ```
/// use rdp2::{simplify, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),  // Close to the line, will be removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),  // Far from line, will be kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let simplified = simplify(&points, 0.5).unwrap();
/// assert!(simplified.len() < points.len());
/// assert_eq!(simplified[0], points[0]);
/// assert_eq!(simplified[simplified.len() - 1], points[4]);
/// ```
pub fn simplify<F, P>(points: &[P], epsilon: F) -> Result<Vec<P>, SimplifyError>
where
    F: Float + Send + Sync,
    P: Coords<F> + Clone,
{
    Simplifier::new(epsilon)?.simplify(points)
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// This is useful when the points carry associated data (timestamps,
/// elevations) that should follow the simplification.
///
/// # Errors
///
/// Same as [`simplify`].
pub fn simplify_indices<F, P>(points: &[P], epsilon: F) -> Result<Vec<usize>, SimplifyError>
where
    F: Float + Send + Sync,
    P: Coords<F>,
{
    Simplifier::new(epsilon)?.indices(points)
}

/// Simplifies a polyline and returns a retain flag per input point.
///
/// # Errors
///
/// Same as [`simplify`].
pub fn simplify_mask<F, P>(points: &[P], epsilon: F) -> Result<Vec<bool>, SimplifyError>
where
    F: Float + Send + Sync,
    P: Coords<F>,
{
    Simplifier::new(epsilon)?.mask(points)
}

impl<F: Float + Send + Sync> Polyline<F> {
    /// Simplifies this polyline with the given tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidParameter`] for a negative or
    /// non-finite `epsilon`.
    pub fn simplify(&self, epsilon: F) -> Result<Polyline<F>, SimplifyError> {
        Ok(Simplifier::new(epsilon)?.simplify_polyline(self))
    }
}

fn check_tolerance<F: Float>(name: &'static str, value: F) -> Result<(), SimplifyError> {
    if value.is_finite() && value >= F::zero() {
        Ok(())
    } else {
        Err(SimplifyError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

fn mask_to_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| if keep { Some(i) } else { None })
        .collect()
}

/// Finds the interior point of `first..=last` farthest from the line through
/// the range endpoints, re-anchoring `anchor` for the range.
///
/// On exact ties the lowest index wins. A NaN distance counts as infinitely
/// far, so the range splits there instead of collapsing past it. Returns
/// `None` if the range has no interior points.
fn farthest_point<F: Float>(
    line: &Polyline<F>,
    anchor: &mut AnchorLine<F>,
    first: usize,
    last: usize,
    degenerate_tolerance: F,
) -> Option<(usize, F)> {
    anchor.reset(line.point(first), line.point(last), degenerate_tolerance);

    let mut farthest: Option<(usize, F)> = None;
    for i in (first + 1)..last {
        let mut dist = anchor.distance(line.point(i));
        if dist.is_nan() {
            dist = F::infinity();
        }
        if farthest.map_or(true, |(_, max_dist)| dist > max_dist) {
            farthest = Some((i, dist));
        }
    }
    farthest
}

/// Reduces `first..=last` using an explicit stack of index ranges.
///
/// `interior` holds the retain flags for `first + 1..last`. Returns the
/// number of ranges examined.
fn reduce_with_stack<F: Float>(
    line: &Polyline<F>,
    first: usize,
    last: usize,
    interior: &mut [bool],
    epsilon: F,
    degenerate_tolerance: F,
) -> usize {
    debug_assert_eq!(interior.len() + 1, last - first);

    let base = first + 1;
    let mut ranges = 0;
    let mut stack = vec![(first, last)];
    let mut anchor = AnchorLine::default();

    while let Some((start, end)) = stack.pop() {
        ranges += 1;
        let Some((split, dist)) =
            farthest_point(line, &mut anchor, start, end, degenerate_tolerance)
        else {
            continue;
        };
        if dist <= epsilon {
            continue;
        }

        interior[split - base] = true;
        if end - split > 1 {
            stack.push((split, end));
        }
        if split - start > 1 {
            stack.push((start, split));
        }
    }
    ranges
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::{farthest_point, reduce_with_stack, Simplifier, MAX_PARALLEL_DEPTH};
    use crate::distance::AnchorLine;
    use crate::polyline::Polyline;
    use log::trace;
    use num_traits::Float;

    /// Splits large ranges across rayon workers, falling back to the work
    /// stack for small ranges and past the nesting limit.
    ///
    /// `interior` holds the retain flags for `first + 1..last`; each half of
    /// a split receives its own disjoint part of it.
    pub(super) fn reduce_split<F: Float + Send + Sync>(
        simplifier: &Simplifier<F>,
        line: &Polyline<F>,
        first: usize,
        last: usize,
        interior: &mut [bool],
        depth: usize,
    ) -> usize {
        if depth >= MAX_PARALLEL_DEPTH || last - first + 1 < simplifier.parallel_threshold {
            return reduce_with_stack(
                line,
                first,
                last,
                interior,
                simplifier.epsilon,
                simplifier.degenerate_tolerance,
            );
        }

        let mut anchor = AnchorLine::default();
        let Some((split, dist)) =
            farthest_point(line, &mut anchor, first, last, simplifier.degenerate_tolerance)
        else {
            return 1;
        };
        if dist <= simplifier.epsilon {
            return 1;
        }

        trace!("parallel split of {}..={} at {} (depth {})", first, last, split, depth);

        let (left, rest) = interior.split_at_mut(split - first - 1);
        let (pivot, right) = rest.split_at_mut(1);
        pivot[0] = true;

        let (left_ranges, right_ranges) = rayon::join(
            || reduce_split(simplifier, line, first, split, left, depth + 1),
            || reduce_split(simplifier, line, split, last, right, depth + 1),
        );
        1 + left_ranges + right_ranges
    }
}
