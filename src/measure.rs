use crate::consts::{DEFAULT_ARC_SUBDIVISIONS, DEFAULT_DISPLAY_PRECISION};
use crate::path_point::PathPoint;
use crate::segment::{Segment, SegmentHandles};
use crate::units::{Unit, UnitConverter};
use crate::utils::round_to_precision;

use glam::DVec2;

/// Euclidean distance between two anchors.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
	a.distance(b)
}

/// Width of the axis-aligned box spanned by two anchors.
pub fn width(a: DVec2, b: DVec2) -> f64 {
	(b.x - a.x).abs()
}

/// Height of the axis-aligned box spanned by two anchors.
pub fn height(a: DVec2, b: DVec2) -> f64 {
	(b.y - a.y).abs()
}

/// Signed planar angle of the vector from `a` to `b`: `atan2(dy, dx)`, in `(-π, π]`.
pub fn angle(a: DVec2, b: DVec2) -> f64 {
	(b.y - a.y).atan2(b.x - a.x)
}

/// Interior control points of a cubic segment, reported so the caller can display or hit-test
/// the curve's handle positions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandlePair {
	pub start: DVec2,
	pub end: DVec2,
}

/// The measures derived from one pair of selected points. Computed fresh per request; purely
/// derived data with no identity beyond the call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementResult {
	pub distance: f64,
	pub width: f64,
	pub height: f64,
	/// Signed angle in radians, `(-π, π]`.
	pub angle_rad: f64,
	/// Signed angle in degrees, `(-180, 180]`: the raw `atan2` result scaled, never normalized
	/// to `[0, 360)`.
	pub angle_deg: f64,
	/// Arc length of the connecting curve. `None` for straight or unconnected segments; always
	/// at least the chord distance when present.
	pub curve_length: Option<f64>,
	/// Interior control points of the connecting curve, `None` when straight.
	pub handles: Option<HandlePair>,
}

/// Explicit context threaded through every pipeline stage in place of ambient document state.
#[derive(Copy, Clone)]
pub struct MeasureContext<'a> {
	pub converter: &'a dyn UnitConverter,
	/// Unit of the path coordinates handed to the kernel. Host documents report geometry in
	/// points.
	pub source_unit: Unit,
	/// Decimal places applied at the presentation boundary; intermediate math is never rounded.
	pub precision: usize,
	/// Subdivision count for arc-length sampling. See [`Segment::length`] for the trade-off.
	pub arc_subdivisions: usize,
}

impl<'a> MeasureContext<'a> {
	pub fn new(converter: &'a dyn UnitConverter) -> Self {
		Self {
			converter,
			source_unit: Unit::Point,
			precision: DEFAULT_DISPLAY_PRECISION,
			arc_subdivisions: DEFAULT_ARC_SUBDIVISIONS,
		}
	}
}

/// Measure the segment between two selected points: classification, scalar measures, and (for
/// connected curved segments) arc length. Pure; all values are in path coordinates and
/// unrounded. Coincident points yield zero distances and a zero angle rather than NaN.
pub fn measure(context: &MeasureContext, point1: &PathPoint, point2: &PathPoint) -> (MeasurementResult, Segment) {
	let segment = Segment::classify(point1, point2);
	let angle_rad = angle(segment.start, segment.end);

	let (curve_length, handles) = match segment.handles {
		SegmentHandles::Cubic { handle_start, handle_end } => (
			Some(segment.length(Some(context.arc_subdivisions))),
			Some(HandlePair { start: handle_start, end: handle_end }),
		),
		SegmentHandles::Linear => (None, None),
	};

	let result = MeasurementResult {
		distance: distance(segment.start, segment.end),
		width: width(segment.start, segment.end),
		height: height(segment.start, segment.end),
		angle_rad,
		angle_deg: angle_rad.to_degrees(),
		curve_length,
		handles,
	};

	(result, segment)
}

impl MeasurementResult {
	/// The headline value a dimension label shows: arc length when the segment is curved, chord
	/// distance otherwise.
	pub fn display_value(&self) -> f64 {
		self.curve_length.unwrap_or(self.distance)
	}

	/// Convert the linear measures into the context's display unit and round everything to the
	/// context's precision. This is the presentation boundary — the only place rounding happens.
	/// Handle positions stay in path coordinates since they locate geometry, not lengths.
	pub fn to_display(&self, context: &MeasureContext) -> MeasurementResult {
		let unit = context.converter.current_display_unit();
		let convert = |value: f64| round_to_precision(context.converter.convert(value, context.source_unit, unit), context.precision);

		MeasurementResult {
			distance: convert(self.distance),
			width: convert(self.width),
			height: convert(self.height),
			angle_rad: round_to_precision(self.angle_rad, context.precision),
			angle_deg: round_to_precision(self.angle_deg, context.precision),
			curve_length: self.curve_length.map(convert),
			handles: self.handles,
		}
	}

	/// The label text for a dimension annotation: the display value converted to the current
	/// display unit, trailing zeros trimmed, unit suffix appended.
	pub fn label_text(&self, context: &MeasureContext) -> String {
		let unit = context.converter.current_display_unit();
		let value = context.converter.convert(self.display_value(), context.source_unit, unit);
		let value = format!("{:.*}", context.precision, value);
		let value = value.trim_end_matches('0').trim_end_matches('.');
		format!("{value} {unit}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_f64;
	use crate::units::DocumentUnits;

	fn horizontal_pair() -> (PathPoint, PathPoint) {
		let point1 = PathPoint::corner(DVec2::new(0., 0.), 0, 2, false);
		let point2 = PathPoint::corner(DVec2::new(100., 0.), 1, 2, false);
		(point1, point2)
	}

	#[test]
	fn straight_horizontal_segment() {
		let units = DocumentUnits::default();
		let context = MeasureContext::new(&units);
		let (point1, point2) = horizontal_pair();

		let (result, segment) = measure(&context, &point1, &point2);
		assert_eq!(result.distance, 100.);
		assert_eq!(result.width, 100.);
		assert_eq!(result.height, 0.);
		assert_eq!(result.angle_deg, 0.);
		assert_eq!(result.curve_length, None);
		assert_eq!(result.handles, None);
		assert!(!segment.is_cubic());
	}

	#[test]
	fn straight_vertical_segment_downward() {
		let units = DocumentUnits::default();
		let context = MeasureContext::new(&units);
		let point1 = PathPoint::corner(DVec2::new(0., 0.), 0, 2, false);
		let point2 = PathPoint::corner(DVec2::new(0., -100.), 1, 2, false);

		let (result, _) = measure(&context, &point1, &point2);
		// atan2(-100, 0) is -π/2, so the sign convention reports -90°
		assert!(compare_f64(result.angle_deg, -90.));
		assert_eq!(result.height, 100.);
		assert_eq!(result.width, 0.);
	}

	#[test]
	fn distance_is_symmetric_and_angle_flips_sign() {
		let a = DVec2::new(3., -17.);
		let b = DVec2::new(-42., 8.5);
		assert_eq!(distance(a, b), distance(b, a));

		// Reversing direction flips the sign modulo the (-180, 180] wrap
		let forward = angle(a, b).to_degrees();
		let backward = angle(b, a).to_degrees();
		let difference = (forward - backward).rem_euclid(360.);
		assert!(compare_f64(difference, 180.));
	}

	#[test]
	fn curved_segment_reports_arc_length_and_handles() {
		let units = DocumentUnits::default();
		let context = MeasureContext::new(&units);
		let point1 = PathPoint::with_handles(DVec2::new(0., 0.), DVec2::new(0., 0.), DVec2::new(0., 50.), 0, 2, false);
		let point2 = PathPoint::with_handles(DVec2::new(100., 0.), DVec2::new(100., 50.), DVec2::new(100., 0.), 1, 2, false);

		let (result, segment) = measure(&context, &point1, &point2);
		assert!(segment.is_cubic());

		let curve_length = result.curve_length.unwrap();
		assert!(curve_length >= result.distance);
		assert!(curve_length > 100.);

		let handles = result.handles.unwrap();
		assert_eq!(handles.start, DVec2::new(0., 50.));
		assert_eq!(handles.end, DVec2::new(100., 50.));
	}

	#[test]
	fn coincident_points_produce_zeros_not_nan() {
		let units = DocumentUnits::default();
		let context = MeasureContext::new(&units);
		let anchor = DVec2::new(5., 5.);
		let point1 = PathPoint::corner(anchor, 0, 2, false);
		let point2 = PathPoint::corner(anchor, 1, 2, false);

		let (result, _) = measure(&context, &point1, &point2);
		assert_eq!(result.distance, 0.);
		assert_eq!(result.angle_rad, 0.);
		assert!(result.angle_deg.is_finite());
		assert!(result.display_value().is_finite());
	}

	#[test]
	fn rounding_happens_only_at_the_presentation_boundary() {
		let units = DocumentUnits::new(Unit::Inch);
		let context = MeasureContext::new(&units);
		let point1 = PathPoint::corner(DVec2::new(0., 0.), 0, 2, false);
		let point2 = PathPoint::corner(DVec2::new(100., 0.), 1, 2, false);

		let (result, _) = measure(&context, &point1, &point2);
		// The raw result stays in path coordinates
		assert_eq!(result.distance, 100.);

		let display = result.to_display(&context);
		assert!(compare_f64(display.distance, 1.39));
		assert_eq!(display.width, 1.39);
	}

	#[test]
	fn label_text_trims_trailing_zeros_and_appends_the_unit() {
		let units = DocumentUnits::default();
		let context = MeasureContext::new(&units);
		let (point1, point2) = horizontal_pair();

		let (result, _) = measure(&context, &point1, &point2);
		assert_eq!(result.label_text(&context), "100 pt");

		let millimeters = DocumentUnits::new(Unit::Millimeter);
		let context = MeasureContext::new(&millimeters);
		let (result, _) = measure(&context, &point1, &point2);
		assert_eq!(result.label_text(&context), "35.28 mm");
	}
}
