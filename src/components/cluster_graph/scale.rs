//! Ordinal color scale in the d3 `category10` mold.

use std::collections::HashMap;
use std::hash::Hash;

const CATEGORY10: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Assigns each previously unseen key the next palette entry, in
/// first-seen order, wrapping once the palette runs out. Every diagram
/// owns its own instance, so assignments never leak between diagrams.
pub struct OrdinalScale<K> {
	palette: &'static [&'static str],
	assigned: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> OrdinalScale<K> {
	pub fn category10() -> Self {
		Self {
			palette: CATEGORY10,
			assigned: HashMap::new(),
		}
	}

	pub fn color(&mut self, key: &K) -> &'static str {
		let next = self.assigned.len();
		let slot = *self.assigned.entry(key.clone()).or_insert(next);
		self.palette[slot % self.palette.len()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_are_assigned_palette_entries_in_first_seen_order() {
		let mut scale = OrdinalScale::category10();
		assert_eq!(scale.color(&7), "#1f77b4");
		assert_eq!(scale.color(&0), "#ff7f0e");
		assert_eq!(scale.color(&7), "#1f77b4");
	}

	#[test]
	fn palette_wraps_after_ten_distinct_keys() {
		let mut scale = OrdinalScale::category10();
		for key in 0..10 {
			scale.color(&key);
		}
		assert_eq!(scale.color(&10), "#1f77b4");
		assert_eq!(scale.color(&11), "#ff7f0e");
	}

	#[test]
	fn instances_assign_independently() {
		let mut left = OrdinalScale::category10();
		let mut right = OrdinalScale::category10();
		left.color(&"only-left");
		assert_eq!(left.color(&"shared"), "#ff7f0e");
		assert_eq!(right.color(&"shared"), "#1f77b4");
	}
}
