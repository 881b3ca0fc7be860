use std::fmt;

/// A display unit understood by the host document. Path coordinates themselves are always in
/// points; units only matter at the presentation boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
	Point,
	Pica,
	Inch,
	Millimeter,
	Centimeter,
	Pixel,
}

impl Unit {
	/// The suffix appended to measurement labels.
	pub fn suffix(self) -> &'static str {
		match self {
			Unit::Point => "pt",
			Unit::Pica => "pc",
			Unit::Inch => "in",
			Unit::Millimeter => "mm",
			Unit::Centimeter => "cm",
			Unit::Pixel => "px",
		}
	}

	/// The size of one of this unit, expressed in points (72 points per inch, pixels at 1:1).
	pub fn in_points(self) -> f64 {
		match self {
			Unit::Point => 1.,
			Unit::Pica => 12.,
			Unit::Inch => 72.,
			Unit::Millimeter => 72. / 25.4,
			Unit::Centimeter => 720. / 25.4,
			Unit::Pixel => 1.,
		}
	}
}

impl fmt::Display for Unit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.suffix())
	}
}

/// Unit-conversion collaborator provided by the host document. The measurement pipeline never
/// performs unit math of its own beyond these two calls.
pub trait UnitConverter {
	fn convert(&self, value: f64, from: Unit, to: Unit) -> f64;
	fn current_display_unit(&self) -> Unit;
}

/// Point-based converter matching the host application's fixed unit ratios. Suitable as the
/// host-side default and for tests.
#[derive(Copy, Clone, Debug)]
pub struct DocumentUnits {
	pub display_unit: Unit,
}

impl DocumentUnits {
	pub fn new(display_unit: Unit) -> Self {
		Self { display_unit }
	}
}

impl Default for DocumentUnits {
	fn default() -> Self {
		Self { display_unit: Unit::Point }
	}
}

impl UnitConverter for DocumentUnits {
	fn convert(&self, value: f64, from: Unit, to: Unit) -> f64 {
		value * from.in_points() / to.in_points()
	}

	fn current_display_unit(&self) -> Unit {
		self.display_unit
	}
}
