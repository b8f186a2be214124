//! Ramer-Douglas-Peucker polyline simplification.

mod rdp;

pub use rdp::{simplify, simplify_indices, simplify_mask, Simplifier, DEFAULT_EPSILON};

#[cfg(feature = "parallel")]
pub use rdp::DEFAULT_PARALLEL_THRESHOLD;
