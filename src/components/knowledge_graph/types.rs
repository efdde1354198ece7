use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of levels in the cognitive taxonomy; every probability vector has
/// exactly this many entries, in canonical level order.
pub const LEVEL_COUNT: usize = 6;

/// Stable identifier of a knowledge node within the current session.
pub type NodeId = u64;

/// The six cognitive taxonomy levels, in canonical order. The discriminant
/// doubles as the index into probability vectors and must never be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyLevel {
	Remember,
	Understand,
	Apply,
	Analyze,
	Evaluate,
	Create,
}

impl TaxonomyLevel {
	/// All levels in canonical order.
	pub const ALL: [TaxonomyLevel; LEVEL_COUNT] = [
		TaxonomyLevel::Remember,
		TaxonomyLevel::Understand,
		TaxonomyLevel::Apply,
		TaxonomyLevel::Analyze,
		TaxonomyLevel::Evaluate,
		TaxonomyLevel::Create,
	];

	/// Canonical index of the level (0 = Remember .. 5 = Create).
	pub fn index(self) -> usize {
		self as usize
	}

	/// Human-readable label shown in the legend and detail panel.
	pub fn label(self) -> &'static str {
		match self {
			TaxonomyLevel::Remember => "Remember",
			TaxonomyLevel::Understand => "Understand",
			TaxonomyLevel::Apply => "Apply",
			TaxonomyLevel::Analyze => "Analyze",
			TaxonomyLevel::Evaluate => "Evaluate",
			TaxonomyLevel::Create => "Create",
		}
	}

	/// Fill color bound to the level.
	pub fn color(self) -> &'static str {
		match self {
			TaxonomyLevel::Remember => "#3b82f6",
			TaxonomyLevel::Understand => "#06b6d4",
			TaxonomyLevel::Apply => "#10b981",
			TaxonomyLevel::Analyze => "#f59e0b",
			TaxonomyLevel::Evaluate => "#f97316",
			TaxonomyLevel::Create => "#ef4444",
		}
	}
}

impl fmt::Display for TaxonomyLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Contract violations in classification data received from upstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
	/// A probability vector did not have exactly one entry per level.
	#[error("probability vector has {got} entries, expected {LEVEL_COUNT}")]
	VectorLength {
		/// Number of entries actually received.
		got: usize,
	},
}

/// Per-level relative scores for one node, in canonical level order.
///
/// Values are non-negative but need not sum to 1. The length-6 invariant is
/// enforced at construction; everything downstream may rely on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityVector([f64; LEVEL_COUNT]);

impl ProbabilityVector {
	/// Wrap a fixed-size array of scores.
	pub fn new(values: [f64; LEVEL_COUNT]) -> Self {
		Self(values)
	}

	/// Validate and wrap a slice of scores. Fails fast on any length other
	/// than six; upstream data is never padded or truncated.
	pub fn from_slice(values: &[f64]) -> Result<Self, TaxonomyError> {
		let values: [f64; LEVEL_COUNT] = values
			.try_into()
			.map_err(|_| TaxonomyError::VectorLength { got: values.len() })?;
		Ok(Self(values))
	}

	/// Score for one level.
	pub fn get(&self, level: TaxonomyLevel) -> f64 {
		self.0[level.index()]
	}

	/// The raw scores in canonical level order.
	pub fn as_array(&self) -> &[f64; LEVEL_COUNT] {
		&self.0
	}
}

/// One classified text segment, immutable once received from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct KnowledgeNode {
	/// Stable id within the current node set.
	pub id: NodeId,
	/// Short label.
	pub title: String,
	/// Explanatory text, may be empty.
	pub context_snippet: String,
	/// Per-level classification scores.
	pub probabilities: ProbabilityVector,
	/// Dominant levels as supplied by the backend, if it supplied any.
	/// When absent the set is derived from the ranking client-side.
	pub top_levels: Option<Vec<TaxonomyLevel>>,
}

/// Relatedness between two nodes. Directed in storage, rendered without
/// direction. Weight is an opaque non-negative score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge {
	/// Source node id.
	pub from: NodeId,
	/// Target node id.
	pub to: NodeId,
	/// Relatedness score; no invariant on range.
	pub weight: f64,
}

/// Per-level visibility toggles. All six levels are always present;
/// everything starts enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterState([bool; LEVEL_COUNT]);

impl Default for FilterState {
	fn default() -> Self {
		Self([true; LEVEL_COUNT])
	}
}

impl FilterState {
	/// Whether nodes classified into `level` are visible.
	pub fn is_enabled(&self, level: TaxonomyLevel) -> bool {
		self.0[level.index()]
	}

	/// Flip the toggle for one level.
	pub fn toggle(&mut self, level: TaxonomyLevel) {
		self.0[level.index()] = !self.0[level.index()];
	}

	/// Set the toggle for one level explicitly.
	pub fn set(&mut self, level: TaxonomyLevel, enabled: bool) {
		self.0[level.index()] = enabled;
	}
}

/// A complete node/edge set as received from one fetch. Replaces, never
/// merges with, the previous set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// All classified nodes.
	pub nodes: Vec<KnowledgeNode>,
	/// All relatedness edges.
	pub edges: Vec<GraphEdge>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_indices_follow_canonical_order() {
		for (i, level) in TaxonomyLevel::ALL.iter().enumerate() {
			assert_eq!(level.index(), i);
		}
	}

	#[test]
	fn vector_from_slice_accepts_exactly_six() {
		let v = ProbabilityVector::from_slice(&[0.1, 0.2, 0.3, 0.1, 0.2, 0.1]).unwrap();
		assert_eq!(v.get(TaxonomyLevel::Apply), 0.3);
	}

	#[test]
	fn vector_from_slice_rejects_other_lengths() {
		assert_eq!(
			ProbabilityVector::from_slice(&[0.5; 5]),
			Err(TaxonomyError::VectorLength { got: 5 })
		);
		assert_eq!(
			ProbabilityVector::from_slice(&[0.5; 7]),
			Err(TaxonomyError::VectorLength { got: 7 })
		);
		assert_eq!(
			ProbabilityVector::from_slice(&[]),
			Err(TaxonomyError::VectorLength { got: 0 })
		);
	}

	#[test]
	fn filter_defaults_to_all_enabled() {
		let filter = FilterState::default();
		for level in TaxonomyLevel::ALL {
			assert!(filter.is_enabled(level));
		}
	}

	#[test]
	fn filter_toggle_flips_one_level_only() {
		let mut filter = FilterState::default();
		filter.toggle(TaxonomyLevel::Analyze);
		assert!(!filter.is_enabled(TaxonomyLevel::Analyze));
		assert!(filter.is_enabled(TaxonomyLevel::Remember));
		filter.toggle(TaxonomyLevel::Analyze);
		assert!(filter.is_enabled(TaxonomyLevel::Analyze));
	}

	#[test]
	fn level_deserializes_from_lowercase_wire_name() {
		let level: TaxonomyLevel = serde_json::from_str("\"analyze\"").unwrap();
		assert_eq!(level, TaxonomyLevel::Analyze);
	}
}
