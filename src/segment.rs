use crate::consts::{DEFAULT_ARC_SUBDIVISIONS, MAX_ABSOLUTE_DIFFERENCE};
use crate::path_point::PathPoint;

use glam::DVec2;

/// How two selected points sit relative to each other along their parent path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
	/// The second point directly follows the first in the path's point sequence.
	Forward,
	/// The first point is at ordinal 0 of a closed path and the second is its last point; the
	/// connecting segment wraps backward around the path closure.
	Wraparound,
	/// The points share no connecting segment.
	None,
}

/// Representation of the handle point(s) of a classified segment. The host model only produces
/// straight lines and cubic curves, so no quadratic variant exists.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentHandles {
	Linear,
	Cubic {
		/// Handle associated with the start anchor.
		handle_start: DVec2,
		/// Handle associated with the end anchor.
		handle_end: DVec2,
	},
}

impl SegmentHandles {
	pub fn is_cubic(&self) -> bool {
		matches!(self, Self::Cubic { .. })
	}
}

/// The classified segment between two selected anchor points.
///
/// Classification decides whether the connecting segment is a straight line or a cubic Bezier
/// and, when curved, assembles the 4-point control polygon whose interior points are picked by
/// adjacency direction. The control polygon's endpoints are always the two anchors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
	pub start: DVec2,
	pub end: DVec2,
	pub handles: SegmentHandles,
	pub adjacency: Adjacency,
}

impl Segment {
	/// Create a straight segment between two coordinates.
	pub fn from_linear_dvec2(p1: DVec2, p2: DVec2) -> Self {
		Segment {
			start: p1,
			end: p2,
			handles: SegmentHandles::Linear,
			adjacency: Adjacency::Forward,
		}
	}

	/// Create a cubic segment from its 4-point control polygon.
	pub fn from_cubic_dvec2(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Self {
		Segment {
			start: p1,
			end: p4,
			handles: SegmentHandles::Cubic { handle_start: p2, handle_end: p3 },
			adjacency: Adjacency::Forward,
		}
	}

	/// Determine how `point1` and `point2` are connected along their parent path: either the
	/// second directly follows the first, or the pair wraps around the closure of a closed path
	/// (first point at ordinal 0, second point last in the sequence).
	pub fn adjacency(point1: &PathPoint, point2: &PathPoint) -> Adjacency {
		if point2.ordinal == point1.ordinal + 1 {
			Adjacency::Forward
		} else if point1.ordinal == 0 && point2.path_closed && point2.path_point_count > 1 && point2.is_last() {
			Adjacency::Wraparound
		} else {
			Adjacency::None
		}
	}

	/// Classify the segment between two selected points.
	///
	/// The segment is cubic iff the points are connected and at least one handle on the
	/// connecting side is active. For forward adjacency the control polygon is
	/// `[anchor1, out_handle1, in_handle2, anchor2]`; for the closed-path wraparound the handle
	/// sides are reversed to `[anchor1, in_handle1, out_handle2, anchor2]` because the wrap
	/// walks backward around the path. Unconnected points always classify as straight — the
	/// chord is still measurable, but no curve relationship exists.
	pub fn classify(point1: &PathPoint, point2: &PathPoint) -> Self {
		let adjacency = Self::adjacency(point1, point2);
		let handles = match adjacency {
			Adjacency::Forward if point1.out_handle_active() || point2.in_handle_active() => SegmentHandles::Cubic {
				handle_start: point1.out_handle,
				handle_end: point2.in_handle,
			},
			Adjacency::Wraparound if point1.in_handle_active() || point2.out_handle_active() => SegmentHandles::Cubic {
				handle_start: point1.in_handle,
				handle_end: point2.out_handle,
			},
			_ => SegmentHandles::Linear,
		};

		Segment {
			start: point1.anchor,
			end: point2.anchor,
			handles,
			adjacency,
		}
	}

	pub fn is_cubic(&self) -> bool {
		self.handles.is_cubic()
	}

	/// The 4-point control polygon `[start, handle_start, handle_end, end]`, or `None` for a
	/// straight segment.
	pub fn control_polygon(&self) -> Option<[DVec2; 4]> {
		match self.handles {
			SegmentHandles::Linear => None,
			SegmentHandles::Cubic { handle_start, handle_end } => Some([self.start, handle_start, handle_end, self.end]),
		}
	}

	/// Evaluate the segment's position function at parameter `t` in `[0, 1]`. Cubic segments use
	/// the standard Bernstein form `(1-t)³P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³P3`.
	pub fn evaluate(&self, t: f64) -> DVec2 {
		match self.handles {
			SegmentHandles::Linear => self.start.lerp(self.end, t),
			SegmentHandles::Cubic { handle_start, handle_end } => {
				let one_minus_t = 1. - t;
				let squared_one_minus_t = one_minus_t * one_minus_t;
				let t_squared = t * t;
				squared_one_minus_t * one_minus_t * self.start
					+ 3. * squared_one_minus_t * t * handle_start
					+ 3. * one_minus_t * t_squared * handle_end
					+ t_squared * t * self.end
			}
		}
	}

	/// Returns true if the anchors coincide and any handles coincide with their anchors, leaving
	/// a zero-length segment.
	pub fn is_point(&self) -> bool {
		let anchors_coincide = self.start.abs_diff_eq(self.end, MAX_ABSOLUTE_DIFFERENCE);
		match self.handles {
			SegmentHandles::Linear => anchors_coincide,
			SegmentHandles::Cubic { handle_start, handle_end } => {
				anchors_coincide && handle_start.abs_diff_eq(self.start, MAX_ABSOLUTE_DIFFERENCE) && handle_end.abs_diff_eq(self.end, MAX_ABSOLUTE_DIFFERENCE)
			}
		}
	}

	/// Return a polyline approximation of the segment's arc length.
	/// - `num_subdivisions` - Number of subdivisions used to approximate the curve. The default value is 1000.
	///
	/// The cubic position function is sampled at uniformly spaced parameter values and the
	/// chord lengths between consecutive samples are summed. The estimate is always an
	/// underestimate whose error shrinks with `O(1/N²)` for smooth curves, and doubling the
	/// subdivision count monotonically tightens it. A few hundred subdivisions suffice for
	/// display precision; a few thousand buy accuracy that display rounding discards, at a
	/// proportional cost in samples.
	pub fn length(&self, num_subdivisions: Option<usize>) -> f64 {
		match self.handles {
			SegmentHandles::Linear => self.start.distance(self.end),
			SegmentHandles::Cubic { .. } => {
				// Zero-length segments skip sampling so downstream angle math never sees 0/0
				if self.is_point() {
					return 0.;
				}
				let num_subdivisions = num_subdivisions.unwrap_or(DEFAULT_ARC_SUBDIVISIONS).max(1);
				(0..num_subdivisions)
					.map(|i| {
						let sample_start = self.evaluate(i as f64 / num_subdivisions as f64);
						let sample_end = self.evaluate((i + 1) as f64 / num_subdivisions as f64);
						sample_start.distance(sample_end)
					})
					.sum()
			}
		}
	}

	/// Unit tangent at the start of the segment: the chord direction when straight, otherwise
	/// the first non-degenerate edge of the control polygon. Falls back to the positive x axis
	/// for fully degenerate segments.
	pub fn tangent_at_start(&self) -> DVec2 {
		let direction = match self.handles {
			SegmentHandles::Linear => self.end - self.start,
			SegmentHandles::Cubic { handle_start, handle_end } => [handle_start - self.start, handle_end - self.start, self.end - self.start]
				.into_iter()
				.find(|direction| direction.length_squared() > MAX_ABSOLUTE_DIFFERENCE * MAX_ABSOLUTE_DIFFERENCE)
				.unwrap_or(DVec2::X),
		};
		direction.try_normalize().unwrap_or(DVec2::X)
	}

	/// Unit tangent at the end of the segment, pointing in the direction of travel. See
	/// [`Self::tangent_at_start`] for the degenerate fallbacks.
	pub fn tangent_at_end(&self) -> DVec2 {
		let direction = match self.handles {
			SegmentHandles::Linear => self.end - self.start,
			SegmentHandles::Cubic { handle_start, handle_end } => [self.end - handle_end, self.end - handle_start, self.end - self.start]
				.into_iter()
				.find(|direction| direction.length_squared() > MAX_ABSOLUTE_DIFFERENCE * MAX_ABSOLUTE_DIFFERENCE)
				.unwrap_or(DVec2::X),
		};
		direction.try_normalize().unwrap_or(DVec2::X)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64, compare_points};

	fn closed_path_pair() -> (PathPoint, PathPoint) {
		// First and last point of a closed four-point path, both carrying handles
		let first = PathPoint::with_handles(DVec2::new(0., 0.), DVec2::new(-20., 10.), DVec2::new(20., -10.), 0, 4, true);
		let last = PathPoint::with_handles(DVec2::new(50., 50.), DVec2::new(40., 60.), DVec2::new(60., 40.), 3, 4, true);
		(first, last)
	}

	#[test]
	fn adjacency_forward_wraparound_and_none() {
		let point1 = PathPoint::corner(DVec2::new(0., 0.), 1, 5, false);
		let point2 = PathPoint::corner(DVec2::new(10., 0.), 2, 5, false);
		assert_eq!(Segment::adjacency(&point1, &point2), Adjacency::Forward);

		let (first, last) = closed_path_pair();
		assert_eq!(Segment::adjacency(&first, &last), Adjacency::Wraparound);

		// Same ordinals on an open path: the last point does not connect back to the first
		let open_first = PathPoint::corner(DVec2::new(0., 0.), 0, 4, false);
		let open_last = PathPoint::corner(DVec2::new(50., 50.), 3, 4, false);
		assert_eq!(Segment::adjacency(&open_first, &open_last), Adjacency::None);

		let distant = PathPoint::corner(DVec2::new(30., 0.), 3, 5, false);
		assert_eq!(Segment::adjacency(&point1, &distant), Adjacency::None);
	}

	#[test]
	fn forward_adjacency_selects_out_then_in_handles() {
		let point1 = PathPoint::with_handles(DVec2::new(0., 0.), DVec2::new(-10., 0.), DVec2::new(0., 50.), 0, 2, false);
		let point2 = PathPoint::with_handles(DVec2::new(100., 0.), DVec2::new(100., 50.), DVec2::new(110., 0.), 1, 2, false);

		let segment = Segment::classify(&point1, &point2);
		let polygon = segment.control_polygon().unwrap();

		assert_eq!(polygon, [DVec2::new(0., 0.), DVec2::new(0., 50.), DVec2::new(100., 50.), DVec2::new(100., 0.)]);
		assert_eq!(segment.adjacency, Adjacency::Forward);
	}

	#[test]
	fn wraparound_adjacency_reverses_handle_selection() {
		let (first, last) = closed_path_pair();
		let segment = Segment::classify(&first, &last);
		let polygon = segment.control_polygon().unwrap();

		// The wrap walks backward, so the first point contributes its incoming handle and the
		// last point its outgoing handle
		assert_eq!(polygon, [first.anchor, first.in_handle, last.out_handle, last.anchor]);
		assert_eq!(segment.adjacency, Adjacency::Wraparound);
	}

	#[test]
	fn control_polygon_endpoints_are_the_anchors() {
		let point1 = PathPoint::with_handles(DVec2::new(3., 4.), DVec2::new(0., 0.), DVec2::new(9., 9.), 2, 6, false);
		let point2 = PathPoint::with_handles(DVec2::new(-5., 12.), DVec2::new(-8., 6.), DVec2::new(0., 0.), 3, 6, false);

		let segment = Segment::classify(&point1, &point2);
		let [p0, _, _, p3] = segment.control_polygon().unwrap();
		assert_eq!(p0, point1.anchor);
		assert_eq!(p3, point2.anchor);
	}

	#[test]
	fn unconnected_points_are_forced_straight() {
		let point1 = PathPoint::with_handles(DVec2::new(0., 0.), DVec2::new(-10., -10.), DVec2::new(10., 10.), 0, 6, false);
		let point2 = PathPoint::with_handles(DVec2::new(40., 0.), DVec2::new(30., 10.), DVec2::new(50., -10.), 4, 6, false);

		let segment = Segment::classify(&point1, &point2);
		assert!(!segment.is_cubic());
		assert_eq!(segment.control_polygon(), None);
	}

	#[test]
	fn coincident_noisy_handles_classify_as_straight() {
		let anchor1 = DVec2::new(0., 0.);
		let anchor2 = DVec2::new(10., 0.);
		let point1 = PathPoint::with_handles(anchor1, anchor1, anchor1 + DVec2::new(5e-4, 5e-4), 0, 2, false);
		let point2 = PathPoint::with_handles(anchor2, anchor2 - DVec2::new(0., 9e-4), anchor2, 1, 2, false);

		assert!(!Segment::classify(&point1, &point2).is_cubic());
	}

	#[test]
	fn evaluate_interpolates_endpoints() {
		let segment = Segment::from_cubic_dvec2(DVec2::new(0., 0.), DVec2::new(0., 50.), DVec2::new(100., 50.), DVec2::new(100., 0.));
		assert!(compare_points(segment.evaluate(0.), DVec2::new(0., 0.)));
		assert!(compare_points(segment.evaluate(1.), DVec2::new(100., 0.)));
		assert!(compare_points(segment.evaluate(0.5), DVec2::new(50., 37.5)));

		let line = Segment::from_linear_dvec2(DVec2::new(0., 0.), DVec2::new(10., 20.));
		assert!(compare_points(line.evaluate(0.5), DVec2::new(5., 10.)));
	}

	#[test]
	fn length_of_linear_segment_is_the_chord() {
		let line = Segment::from_linear_dvec2(DVec2::new(0., 0.), DVec2::new(30., 40.));
		assert!(compare_f64(line.length(None), 50.));
	}

	#[test]
	fn cubic_length_exceeds_chord_and_converges() {
		let segment = Segment::from_cubic_dvec2(DVec2::new(0., 0.), DVec2::new(0., 50.), DVec2::new(100., 50.), DVec2::new(100., 0.));
		let chord = segment.start.distance(segment.end);

		let estimate = segment.length(Some(1000));
		assert!(estimate > chord);

		// Doubling the subdivision count twice changes the estimate by less than 0.1%
		let refined = segment.length(Some(2000));
		let refined_again = segment.length(Some(4000));
		assert!((refined - estimate) / estimate < 1e-3);
		assert!((refined_again - refined) / refined < 1e-3);
	}

	#[test]
	fn subdividing_monotonically_tightens_the_estimate() {
		let segment = Segment::from_cubic_dvec2(DVec2::new(0., 0.), DVec2::new(40., 80.), DVec2::new(-20., 90.), DVec2::new(60., 10.));

		let coarse = segment.length(Some(100));
		let medium = segment.length(Some(200));
		let fine = segment.length(Some(400));

		// Inserted sample points can only lengthen the polyline, and the improvement shrinks
		assert!(medium >= coarse);
		assert!(fine >= medium);
		assert!(medium - coarse > fine - medium);
	}

	#[test]
	fn degenerate_segment_has_zero_length() {
		let anchor = DVec2::new(7., -3.);
		let degenerate = Segment::from_cubic_dvec2(anchor, anchor, anchor, anchor);
		assert!(degenerate.is_point());
		assert_eq!(degenerate.length(Some(1000)), 0.);

		let tangent = degenerate.tangent_at_start();
		assert!(tangent.is_finite());
		assert!(compare_points(tangent, DVec2::X));
	}

	#[test]
	fn tangents_follow_the_control_polygon_not_the_chord() {
		let segment = Segment::from_cubic_dvec2(DVec2::new(0., 0.), DVec2::new(0., 50.), DVec2::new(100., 50.), DVec2::new(100., 0.));
		assert!(compare_points(segment.tangent_at_start(), DVec2::new(0., 1.)));
		assert!(compare_points(segment.tangent_at_end(), DVec2::new(0., -1.)));

		let line = Segment::from_linear_dvec2(DVec2::new(0., 0.), DVec2::new(10., 0.));
		assert!(compare_points(line.tangent_at_start(), DVec2::X));
		assert!(compare_points(line.tangent_at_end(), DVec2::X));
	}
}
