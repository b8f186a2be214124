//! Floating-point point types and the coordinate access trait.

mod coords;
mod point2;
mod point3;

pub use coords::Coords;
pub use point2::Point2;
pub use point3::Point3;
