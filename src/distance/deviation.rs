//! Deviation of a simplified polyline from its source.

use super::AnchorLine;
use crate::primitives::Coords;
use num_traits::Float;

/// Computes how far the discarded points stray from a simplified polyline.
///
/// `retained` lists the indices of the kept points in increasing order.
/// Every point strictly between two consecutive retained indices is measured
/// against the line through those two retained points. The largest such
/// perpendicular distance is returned, or zero if nothing was discarded.
///
/// For the output of the simplifier this never exceeds the epsilon that
/// produced it. A NaN distance, which only non-finite input can produce, makes
/// the result NaN rather than being skipped.
///
/// # Panics
///
/// Panics if any retained index is out of bounds for `points`.
///
/// # Example
///
/// ```
/// use rdp2::distance::max_deviation;
/// use rdp2::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.5),
///     Point2::new(2.0, 0.0),
/// ];
/// assert_eq!(max_deviation(&points, &[0, 2]), 0.5);
/// ```
pub fn max_deviation<F: Float, P: Coords<F>>(points: &[P], retained: &[usize]) -> F {
    let mut anchor = AnchorLine::<F>::default();
    retained.windows(2).fold(F::zero(), |worst, pair| {
        let (first, last) = (pair[0], pair[1]);
        if last <= first + 1 {
            return worst;
        }
        anchor.reset(&points[first], &points[last], F::zero());
        points[first + 1..last].iter().fold(worst, |worst, p| {
            let dist = anchor.distance(p);
            if dist.is_nan() || dist > worst {
                dist
            } else {
                worst
            }
        })
    })
}
