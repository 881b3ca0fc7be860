use thiserror::Error;

fn selection_advice(found: &usize) -> &'static str {
	if *found < 2 {
		"select both endpoints of the segment to measure"
	} else {
		"deselect down to exactly two points"
	}
}

/// The error type used by the measurement pipeline. These errors abort the pipeline before
/// anything is drawn; rendering problems are reported separately as [`RenderError`] so they can
/// never invalidate a measurement that already completed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeasureError {
	#[error("expected exactly two selected anchor points but found {found}; {}", selection_advice(.found))]
	InvalidSelectionCount { found: usize },

	#[error("the selected points coincide, leaving nothing to measure")]
	DegenerateSegment,
}

/// Errors surfaced by the host drawing sink. Drawing happens after the numeric result is
/// computed, so callers surface the measurement anyway and report the annotation failure
/// separately.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
	#[error("annotation layer {0:?} is locked or could not be created")]
	Layer(String),

	#[error("the host rejected a draw call:\n{0}")]
	Draw(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_count_messages_distinguish_too_few_from_too_many() {
		let too_few = MeasureError::InvalidSelectionCount { found: 1 }.to_string();
		let too_many = MeasureError::InvalidSelectionCount { found: 3 }.to_string();

		assert!(too_few.contains("found 1"));
		assert!(too_few.contains("select both endpoints"));
		assert!(too_many.contains("found 3"));
		assert!(too_many.contains("deselect"));
	}
}
