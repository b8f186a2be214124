//! rdp2 - Ramer-Douglas-Peucker polyline simplification
//!
//! Reduces a dense, ordered sequence of points to a subsequence that stays
//! within a given perpendicular distance of the original curve. Points are
//! only ever selected, never moved or interpolated.
//!
//! Any fixed-dimension point type can be simplified through the [`Coords`]
//! trait: [`Point2`], [`Point3`], `[T; N]`, `Vec<T>`, slices and tuples of
//! numbers that convert losslessly into `f32` or `f64`.
//!
//! ```
//! use rdp2::simplify;
//!
//! let line = vec![[0_i32, 0], [1, 0], [2, 0], [3, 4], [4, 0]];
//! let simplified = simplify(&line, 0.5_f64).unwrap();
//! assert_eq!(simplified, vec![[0, 0], [2, 0], [3, 4], [4, 0]]);
//! ```
//!
//! Enable the `parallel` feature to reduce large inputs on rayon workers,
//! and `serde` to serialize the point types.

pub mod distance;
pub mod error;
pub mod polyline;
pub mod primitives;
pub mod simplify;

pub use error::{InputError, SimplifyError};
pub use polyline::Polyline;
pub use primitives::{Coords, Point2, Point3};
pub use simplify::{simplify, simplify_indices, simplify_mask, Simplifier, DEFAULT_EPSILON};
