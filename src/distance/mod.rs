//! Distance metrics used to decide which points a simplification may drop.

mod deviation;
mod perpendicular;

pub use deviation::max_deviation;
pub use perpendicular::{
    perpendicular_distance, perpendicular_distance_with_tolerance, AnchorLine,
};
