/// Compare two `f64`s based on a provided max absolute value difference.
pub fn f64_compare(f1: f64, f2: f64, max_abs_diff: f64) -> bool {
	(f1 - f2).abs() < max_abs_diff
}

/// Round `value` to `precision` decimal places. Used only at the presentation boundary so that
/// intermediate geometry never accumulates rounding error.
pub fn round_to_precision(value: f64, precision: usize) -> f64 {
	let factor = 10_f64.powi(precision as i32);
	(value * factor).round() / factor
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_to_precision_display_defaults() {
		assert_eq!(round_to_precision(1.23456, 2), 1.23);
		assert_eq!(round_to_precision(1.23556, 2), 1.24);
		assert_eq!(round_to_precision(-0.125, 2), -0.13);
		assert_eq!(round_to_precision(100., 4), 100.);
	}
}
