//! Read access to fixed-dimension coordinate tuples.

use crate::primitives::{Point2, Point3};
use num_traits::Float;

/// A point with a fixed number of numeric coordinates.
///
/// This is the only thing the simplifier needs to know about a point, so any
/// container can be simplified as long as it can report its dimension and
/// hand out each coordinate as the scalar type `F`.
///
/// Implementations are provided for [`Point2`], [`Point3`], arrays, slices,
/// vectors, and 2- or 3-tuples whose elements convert losslessly into `F`
/// (so `[i32; 2]` works as `Coords<f64>`).
pub trait Coords<F> {
    /// Number of coordinates carried by this point.
    fn dim(&self) -> usize;

    /// Returns the coordinate along `axis`.
    ///
    /// # Panics
    ///
    /// May panic if `axis >= self.dim()`.
    fn coord(&self, axis: usize) -> F;
}

impl<F: Float> Coords<F> for Point2<F> {
    #[inline]
    fn dim(&self) -> usize {
        2
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("axis {axis} out of range for Point2"),
        }
    }
}

impl<F: Float> Coords<F> for Point3<F> {
    #[inline]
    fn dim(&self) -> usize {
        3
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {axis} out of range for Point3"),
        }
    }
}

impl<F, T: Copy + Into<F>, const N: usize> Coords<F> for [T; N] {
    #[inline]
    fn dim(&self) -> usize {
        N
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        self[axis].into()
    }
}

impl<F, T: Copy + Into<F>> Coords<F> for [T] {
    #[inline]
    fn dim(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        self[axis].into()
    }
}

impl<F, T: Copy + Into<F>> Coords<F> for Vec<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        self[axis].into()
    }
}

impl<F, T: Copy + Into<F>> Coords<F> for (T, T) {
    #[inline]
    fn dim(&self) -> usize {
        2
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        match axis {
            0 => self.0.into(),
            1 => self.1.into(),
            _ => panic!("axis {axis} out of range for a 2-tuple"),
        }
    }
}

impl<F, T: Copy + Into<F>> Coords<F> for (T, T, T) {
    #[inline]
    fn dim(&self) -> usize {
        3
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        match axis {
            0 => self.0.into(),
            1 => self.1.into(),
            2 => self.2.into(),
            _ => panic!("axis {axis} out of range for a 3-tuple"),
        }
    }
}

impl<F, P: Coords<F> + ?Sized> Coords<F> for &P {
    #[inline]
    fn dim(&self) -> usize {
        (**self).dim()
    }

    #[inline]
    fn coord(&self, axis: usize) -> F {
        (**self).coord(axis)
    }
}
