//! 3D point type.

use num_traits::Float;

/// A 3D point with x, y, and z coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a point at the origin (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::zero(),
        }
    }
}

impl<F: Float> Default for Point3<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<[F; 3]> for Point3<F> {
    fn from([x, y, z]: [F; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<F: Float> From<(F, F, F)> for Point3<F> {
    fn from((x, y, z): (F, F, F)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let p: Point3<f64> = Point3::origin();
        assert_eq!((p.x, p.y, p.z), (0.0, 0.0, 0.0));
        assert_eq!(p, Point3::default());
    }

    #[test]
    fn test_conversions() {
        let a: Point3<f32> = [1.0, 2.0, 3.0].into();
        let b: Point3<f32> = (1.0, 2.0, 3.0).into();
        assert_eq!(a, b);
    }
}
