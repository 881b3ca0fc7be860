use crate::consts::{ARROWHEAD_LENGTH, ARROWHEAD_WIDTH, DIMENSION_LINE_OFFSET, LABEL_MARGIN};
use crate::segment::Segment;

use glam::DVec2;

/// One of the four regions of the plane determined by the independent signs of the x and y
/// displacement between the measured points. Zero components count as positive so axis-aligned
/// segments fall into a deterministic branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
	/// `Δx ≥ 0, Δy ≥ 0`
	RightUp,
	/// `Δx < 0, Δy ≥ 0`
	LeftUp,
	/// `Δx < 0, Δy < 0`
	LeftDown,
	/// `Δx ≥ 0, Δy < 0`
	RightDown,
}

impl Quadrant {
	/// Classify the displacement from the first measured point to the second.
	pub fn from_delta(delta: DVec2) -> Self {
		match (delta.x >= 0., delta.y >= 0.) {
			(true, true) => Self::RightUp,
			(false, true) => Self::LeftUp,
			(false, false) => Self::LeftDown,
			(true, false) => Self::RightDown,
		}
	}
}

/// Placement of one arrowhead: the tip position and the rotation of the arrow's axis in
/// degrees, following the path tangent at that endpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowPlacement {
	pub position: DVec2,
	pub rotation_deg: f64,
}

impl ArrowPlacement {
	/// The three corners of the arrowhead triangle, tip first.
	pub fn triangle(&self) -> [DVec2; 3] {
		let direction = DVec2::from_angle(self.rotation_deg.to_radians());
		let base = self.position - direction * ARROWHEAD_LENGTH;
		let half_width = direction.perp() * (ARROWHEAD_WIDTH / 2.);
		[self.position, base + half_width, base - half_width]
	}
}

/// Placement of the measurement label: its anchor position and rotation in degrees. The
/// rotation always lies within `[-90°, 90°]` so the text never renders upside-down.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelPlacement {
	pub position: DVec2,
	pub rotation_deg: f64,
}

/// Complete placement of one dimension annotation: the dimension line offset perpendicular to
/// the measured segment, two tangent-aligned arrowheads, and the rotated label.
///
/// A single rotation formula flips labels upside-down in two of the four planar quadrants, so
/// placement is an explicit branch table on the signs of the displacement: the two leftward
/// quadrants flip the offset side (keeping the annotation above the segment and away from the
/// path) and swing the label rotation by a half turn to stay within the upright window.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionPlacement {
	pub quadrant: Quadrant,
	/// Start of the offset dimension line (the measured start anchor plus [`Self::offset`]).
	pub line_start: DVec2,
	/// End of the offset dimension line.
	pub line_end: DVec2,
	/// Perpendicular offset applied to the whole annotation, per-quadrant sign included.
	pub offset: DVec2,
	pub start_arrow: ArrowPlacement,
	pub end_arrow: ArrowPlacement,
	pub label: LabelPlacement,
}

impl DimensionPlacement {
	/// Compute the placement for a classified segment with the default line offset.
	pub fn new(segment: &Segment) -> Self {
		Self::with_offset(segment, DIMENSION_LINE_OFFSET)
	}

	/// Compute the placement for a classified segment, offsetting the dimension line by
	/// `offset_distance` perpendicular to the chord.
	pub fn with_offset(segment: &Segment, offset_distance: f64) -> Self {
		let delta = segment.end - segment.start;
		let quadrant = Quadrant::from_delta(delta);
		let chord_direction = delta.try_normalize().unwrap_or(DVec2::X);
		// Left normal of the chord; its y component carries the sign of Δx
		let normal = chord_direction.perp();
		let angle_deg = delta.y.atan2(delta.x).to_degrees();

		// The four quadrant outcomes. Rightward segments keep the raw angle and the left
		// normal (which points upward while x advances); leftward segments flip the offset side
		// and swing the label by a half turn so its baseline stays within ±90° of horizontal.
		let (offset_sign, label_rotation_deg) = match quadrant {
			Quadrant::RightUp => (1., angle_deg),
			Quadrant::LeftUp => (-1., angle_deg - 180.),
			Quadrant::LeftDown => (-1., angle_deg + 180.),
			Quadrant::RightDown => (1., angle_deg),
		};

		let offset = normal * (offset_sign * offset_distance);
		let line_start = segment.start + offset;
		let line_end = segment.end + offset;

		// Arrowheads sit on the offset line and follow the path tangent at each endpoint (not
		// the chord), pointing outward from the measured span
		let start_tangent = -segment.tangent_at_start();
		let end_tangent = segment.tangent_at_end();
		let start_arrow = ArrowPlacement {
			position: line_start,
			rotation_deg: start_tangent.y.atan2(start_tangent.x).to_degrees(),
		};
		let end_arrow = ArrowPlacement {
			position: line_end,
			rotation_deg: end_tangent.y.atan2(end_tangent.x).to_degrees(),
		};

		// The label clears the dimension line on the same side as the offset so the two never
		// overlap
		let midpoint = (line_start + line_end) / 2.;
		let label = LabelPlacement {
			position: midpoint + normal * (offset_sign * LABEL_MARGIN),
			rotation_deg: label_rotation_deg,
		};

		DimensionPlacement {
			quadrant,
			line_start,
			line_end,
			offset,
			start_arrow,
			end_arrow,
			label,
		}
	}
}
