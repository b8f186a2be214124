//! Validated, fixed-dimension point storage.
//!
//! A [`Polyline`] is the boundary between loosely shaped caller data and the
//! simplifier. Building one checks, once, that every point has the same
//! number of coordinates and that every coordinate is finite. The engine
//! can then index into it without re-checking anything.

use crate::error::{InputError, SimplifyError};
use crate::primitives::Coords;
use num_traits::Float;

/// An ordered sequence of points sharing one dimension.
///
/// Coordinates are stored contiguously, `dim` values per point.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<F> {
    coords: Vec<F>,
    dim: usize,
}

impl<F: Float> Polyline<F> {
    /// Copies and validates a slice of points.
    ///
    /// The dimension is taken from the first point. An empty slice yields an
    /// empty polyline of dimension zero.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidInput`] if a point's dimension differs
    /// from the first point's, if points have no coordinates, or if any
    /// coordinate is NaN or infinite.
    pub fn from_points<P: Coords<F>>(points: &[P]) -> Result<Self, SimplifyError> {
        let Some(first) = points.first() else {
            return Ok(Self {
                coords: Vec::new(),
                dim: 0,
            });
        };

        let dim = first.dim();
        if dim == 0 {
            return Err(InputError::ZeroDimension.into());
        }

        let mut coords = Vec::with_capacity(points.len() * dim);
        for (index, point) in points.iter().enumerate() {
            if point.dim() != dim {
                return Err(InputError::DimensionMismatch {
                    index,
                    expected: dim,
                    found: point.dim(),
                }
                .into());
            }
            for axis in 0..dim {
                let c = point.coord(axis);
                if !c.is_finite() {
                    return Err(InputError::NonFiniteCoordinate { index, axis }.into());
                }
                coords.push(c);
            }
        }

        Ok(Self { coords, dim })
    }

    /// Wraps a flat coordinate buffer holding `dim` values per point.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidInput`] if `dim` is zero, if the buffer
    /// length is not a multiple of `dim` (reported as a dimension mismatch on
    /// the trailing partial point), or if any coordinate is not finite.
    pub fn from_flat(coords: Vec<F>, dim: usize) -> Result<Self, SimplifyError> {
        if dim == 0 {
            return Err(InputError::ZeroDimension.into());
        }
        if coords.len() % dim != 0 {
            return Err(InputError::DimensionMismatch {
                index: coords.len() / dim,
                expected: dim,
                found: coords.len() % dim,
            }
            .into());
        }
        if let Some(pos) = coords.iter().position(|c| !c.is_finite()) {
            return Err(InputError::NonFiniteCoordinate {
                index: pos / dim,
                axis: pos % dim,
            }
            .into());
        }

        Ok(Self { coords, dim })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.coords.len() / self.dim
        }
    }

    /// Returns `true` if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn point(&self, index: usize) -> &[F] {
        &self.coords[index * self.dim..(index + 1) * self.dim]
    }

    /// Iterates over the points in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &[F]> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    /// The flat coordinate buffer.
    #[inline]
    pub fn as_flat(&self) -> &[F] {
        &self.coords
    }

    /// Consumes the polyline, returning the flat coordinate buffer.
    pub fn into_flat(self) -> Vec<F> {
        self.coords
    }

    /// Builds a new polyline from the points at `indices`, in the given order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut coords = Vec::with_capacity(indices.len() * self.dim);
        for &i in indices {
            coords.extend_from_slice(self.point(i));
        }
        Self {
            coords,
            dim: self.dim,
        }
    }
}
