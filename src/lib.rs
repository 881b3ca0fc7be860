//! Dimension-rs: path measurement and dimension annotation for 2D vector graphics.
//!
//! Given two anchor points on a vector path, this crate classifies the connecting segment as a
//! straight line or a cubic Bezier curve, measures it (distance, axis-aligned extent, signed
//! angle, and arc length via parametric sampling), and synthesizes a dimension annotation — an
//! offset line, two arrowheads, and a rotated label — as host-agnostic draw commands oriented
//! correctly in all four planar quadrants.
//!
//! The measurement pipeline is pure, synchronous, and single-threaded; only the
//! [`AnnotationSink`] boundary touches external state, and a shared sink must be driven from a
//! single execution context at a time.

#[cfg(test)]
pub(crate) mod compare;

mod annotation;
mod error;
mod measure;
mod path_point;
mod placement;
mod segment;
mod selection;
mod units;
mod utils;

pub mod consts;

pub use annotation::*;
pub use error::*;
pub use measure::*;
pub use path_point::*;
pub use placement::*;
pub use segment::*;
pub use selection::*;
pub use units::*;
pub use utils::{f64_compare, round_to_precision};
