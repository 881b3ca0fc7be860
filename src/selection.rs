use crate::error::MeasureError;
use crate::path_point::PathPoint;

/// A path-bearing item in the host document, resolved into a closed set of variants once at the
/// selection-extraction boundary so the rest of the pipeline never inspects host type names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeItem {
	/// A simple path: one run of anchor points.
	Path(Vec<PathPoint>),
	/// A compound path: several point runs treated as a single shape.
	CompoundPath(Vec<Vec<PathPoint>>),
	/// A group of nested shapes.
	Group(Vec<ShapeItem>),
}

/// Flatten the points out of a shape tree in document order. Traversal uses an explicit
/// worklist so arbitrarily deep group nesting cannot exhaust the call stack.
pub fn collect_points(items: &[ShapeItem]) -> Vec<PathPoint> {
	let mut points = Vec::new();
	let mut worklist: Vec<&ShapeItem> = items.iter().rev().collect();

	while let Some(item) = worklist.pop() {
		match item {
			ShapeItem::Path(path) => points.extend_from_slice(path),
			ShapeItem::CompoundPath(paths) => points.extend(paths.iter().flatten().copied()),
			ShapeItem::Group(children) => worklist.extend(children.iter().rev()),
		}
	}

	points
}

/// Accept a candidate list already filtered to the host's selection, requiring exactly two
/// points. Fails with [`MeasureError::InvalidSelectionCount`] otherwise; never mutates state.
pub fn two_selected_points(candidates: &[PathPoint]) -> Result<(PathPoint, PathPoint), MeasureError> {
	match candidates {
		[point1, point2] => Ok((*point1, *point2)),
		_ => Err(MeasureError::InvalidSelectionCount { found: candidates.len() }),
	}
}
