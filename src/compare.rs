//! Comparison helpers available to tests.

use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
use crate::utils::f64_compare;

use glam::DVec2;

pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

pub fn compare_f64(f1: f64, f2: f64) -> bool {
	f64_compare(f1, f2, MAX_ABSOLUTE_DIFFERENCE)
}
