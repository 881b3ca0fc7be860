use crate::consts::{ANNOTATION_LAYER, COLOR_DIMENSION};
use crate::error::{MeasureError, RenderError};
use crate::measure::{measure, MeasureContext, MeasurementResult};
use crate::path_point::PathPoint;
use crate::placement::DimensionPlacement;
use crate::segment::{Segment, SegmentHandles};
use crate::selection::two_selected_points;

use glam::DVec2;

/// A single host-agnostic drawing primitive. The renderer emits these in order; the host owns
/// the drawn elements once emitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
	Line {
		start: DVec2,
		end: DVec2,
	},
	/// A curve-following dimension line for cubic segments.
	CubicCurve {
		start: DVec2,
		handle_start: DVec2,
		handle_end: DVec2,
		end: DVec2,
	},
	/// An arrowhead triangle, tip first.
	Triangle {
		points: [DVec2; 3],
	},
	/// The measurement label, rotated about its position.
	Text {
		text: String,
		position: DVec2,
		rotation_deg: f64,
	},
}

/// External sink for annotation drawing, implemented against the host document.
///
/// Not thread-safe: the layer lookup-or-create in [`Self::ensure_layer`] and the draw/remove
/// calls assume a single execution context drives a given sink at a time, the way a host
/// application serializes script execution.
pub trait AnnotationSink {
	/// Look up the named annotation layer, creating it on first use.
	fn ensure_layer(&mut self, name: &str) -> Result<(), RenderError>;
	/// Draw one primitive on the named layer, returning a host identifier for later removal.
	fn draw(&mut self, layer: &str, command: &DrawCommand, color: &str) -> Result<u64, RenderError>;
	/// Remove a previously drawn element from the named layer.
	fn remove(&mut self, layer: &str, element: u64) -> Result<(), RenderError>;
}

/// A dimension annotation ready to emit: ordered draw commands sharing one color, targeted at a
/// dedicated annotation layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionAnnotation {
	pub layer: String,
	pub color: String,
	pub commands: Vec<DrawCommand>,
}

impl DimensionAnnotation {
	/// Assemble the draw commands for one measured segment: the dimension line (curve-following
	/// when the segment is cubic, with the control polygon translated by the same perpendicular
	/// offset), the two arrowhead triangles, and the rotated label.
	pub fn build(segment: &Segment, placement: &DimensionPlacement, label_text: String) -> Self {
		let mut commands = Vec::with_capacity(4);

		commands.push(match segment.handles {
			SegmentHandles::Linear => DrawCommand::Line {
				start: placement.line_start,
				end: placement.line_end,
			},
			SegmentHandles::Cubic { handle_start, handle_end } => DrawCommand::CubicCurve {
				start: placement.line_start,
				handle_start: handle_start + placement.offset,
				handle_end: handle_end + placement.offset,
				end: placement.line_end,
			},
		});
		commands.push(DrawCommand::Triangle {
			points: placement.start_arrow.triangle(),
		});
		commands.push(DrawCommand::Triangle {
			points: placement.end_arrow.triangle(),
		});
		commands.push(DrawCommand::Text {
			text: label_text,
			position: placement.label.position,
			rotation_deg: placement.label.rotation_deg,
		});

		Self {
			layer: ANNOTATION_LAYER.to_string(),
			color: COLOR_DIMENSION.to_string(),
			commands,
		}
	}

	/// Emit the annotation through the sink and return a snapshot of what was drawn so the
	/// caller can revert the preview deterministically, without leaning on host undo history.
	/// If a draw call fails partway, the elements drawn so far are removed again on a best
	/// effort basis and the original error is returned.
	pub fn render(&self, sink: &mut impl AnnotationSink) -> Result<PreviewSession, RenderError> {
		sink.ensure_layer(&self.layer)?;

		let mut session = PreviewSession {
			layer: self.layer.clone(),
			elements: Vec::with_capacity(self.commands.len()),
		};
		for command in &self.commands {
			match sink.draw(&self.layer, command, &self.color) {
				Ok(element) => session.elements.push(element),
				Err(error) => {
					let _ = session.revert(sink);
					return Err(error);
				}
			}
		}

		Ok(session)
	}
}

/// Snapshot of the elements one render emitted, so a preview can be rolled back by removing
/// exactly those elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewSession {
	layer: String,
	elements: Vec<u64>,
}

impl PreviewSession {
	pub fn layer(&self) -> &str {
		&self.layer
	}

	pub fn elements(&self) -> &[u64] {
		&self.elements
	}

	/// Remove exactly the elements drawn by the render that produced this session.
	pub fn revert(self, sink: &mut impl AnnotationSink) -> Result<(), RenderError> {
		for element in self.elements {
			sink.remove(&self.layer, element)?;
		}
		Ok(())
	}
}

/// The outcome of one measurement request. The numeric result is always present once the pure
/// pipeline succeeds; the annotation attempt is reported alongside it and a drawing failure
/// never invalidates the numbers.
#[derive(Debug)]
pub struct MeasureOutcome {
	pub result: MeasurementResult,
	pub segment: Segment,
	pub annotation: Result<PreviewSession, RenderError>,
}

/// Run the full pipeline over a candidate selection: validate, classify, measure, place, and
/// draw. Validation and geometry failures abort before anything is drawn; a drawing failure is
/// logged and reported in the outcome next to the already-computed measurement.
pub fn measure_and_annotate(context: &MeasureContext, candidates: &[PathPoint], sink: &mut impl AnnotationSink) -> Result<MeasureOutcome, MeasureError> {
	let (point1, point2) = two_selected_points(candidates)?;
	let (result, segment) = measure(context, &point1, &point2);

	let placement = DimensionPlacement::new(&segment);
	let annotation = DimensionAnnotation::build(&segment, &placement, result.label_text(context));
	let annotation = annotation.render(sink);
	if let Err(error) = &annotation {
		log::warn!("Measurement annotation failed: {error}");
	}

	Ok(MeasureOutcome { result, segment, annotation })
}
