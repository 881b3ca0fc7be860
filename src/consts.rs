// Numeric tolerances:

/// Constant used to determine if `f64`s are equivalent.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;

/// A control handle further than this from its owning anchor is considered active (curve-defining).
/// Handles that nominally coincide with their anchor can drift by floating-point noise; comparing
/// against this tolerance keeps such points classified as straight.
pub const HANDLE_ACTIVE_TOLERANCE: f64 = 1e-3;

// Method argument defaults:

/// Default number of subdivisions used when approximating the arc length of a cubic segment.
pub const DEFAULT_ARC_SUBDIVISIONS: usize = 1000;

/// Default number of decimal places applied to measurements at the presentation boundary.
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

// Dimension annotation geometry:

/// Perpendicular distance between the measured segment and its dimension line.
pub const DIMENSION_LINE_OFFSET: f64 = 10.;

/// Length of an arrowhead triangle from tip to base.
pub const ARROWHEAD_LENGTH: f64 = 8.;

/// Width of an arrowhead triangle at its base.
pub const ARROWHEAD_WIDTH: f64 = 6.;

/// Gap between the dimension line and the measurement label.
pub const LABEL_MARGIN: f64 = 5.;

/// Name of the dedicated layer all dimension annotations are drawn on. The layer is created
/// lazily and reused, so removing every annotation is a single layer deletion.
pub const ANNOTATION_LAYER: &str = "Dimensions";

/// Shared color of the dimension line, arrowheads, and label.
pub const COLOR_DIMENSION: &str = "#00a8ff";
