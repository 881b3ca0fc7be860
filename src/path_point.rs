use crate::consts::HANDLE_ACTIVE_TOLERANCE;

use glam::DVec2;
use std::fmt::{Debug, Formatter, Result};

/// A single anchor point on a vector path, together with its absolute control-handle
/// coordinates and its position within the parent path's point sequence.
///
/// Handles are stored the way the host document reports them: a point without a curve handle
/// carries handle coordinates equal to its anchor. [`PathPoint::in_handle_active`] and
/// [`PathPoint::out_handle_active`] apply the tolerance separating real handles from
/// floating-point noise on nominally straight points.
///
/// A `PathPoint` is constructed once per measurement request and never mutated afterwards.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
	pub anchor: DVec2,
	pub in_handle: DVec2,
	pub out_handle: DVec2,
	/// Position of this point within its parent path's point sequence.
	pub ordinal: usize,
	/// Length of the parent path's point sequence, used to detect the closed-path case where
	/// the last point connects back to the first.
	pub path_point_count: usize,
	/// Whether the parent path is closed.
	pub path_closed: bool,
}

impl Debug for PathPoint {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		write!(
			f,
			"anchor: {}, in: {}, out: {}, ordinal: {}/{}{}",
			self.anchor,
			self.in_handle,
			self.out_handle,
			self.ordinal,
			self.path_point_count,
			if self.path_closed { " (closed)" } else { "" }
		)
	}
}

impl PathPoint {
	/// Create a corner point carrying no curve handles.
	pub fn corner(anchor: DVec2, ordinal: usize, path_point_count: usize, path_closed: bool) -> Self {
		Self {
			anchor,
			in_handle: anchor,
			out_handle: anchor,
			ordinal,
			path_point_count,
			path_closed,
		}
	}

	/// Create a point with explicit absolute handle coordinates.
	pub fn with_handles(anchor: DVec2, in_handle: DVec2, out_handle: DVec2, ordinal: usize, path_point_count: usize, path_closed: bool) -> Self {
		Self {
			anchor,
			in_handle,
			out_handle,
			ordinal,
			path_point_count,
			path_closed,
		}
	}

	/// Whether the incoming handle sits far enough from the anchor to define a curve.
	pub fn in_handle_active(&self) -> bool {
		self.anchor.distance(self.in_handle) > HANDLE_ACTIVE_TOLERANCE
	}

	/// Whether the outgoing handle sits far enough from the anchor to define a curve.
	pub fn out_handle_active(&self) -> bool {
		self.anchor.distance(self.out_handle) > HANDLE_ACTIVE_TOLERANCE
	}

	/// Whether this is the last point of its parent path's point sequence.
	pub fn is_last(&self) -> bool {
		self.path_point_count >= 1 && self.ordinal == self.path_point_count - 1
	}
}
