//! Classification normalizer: turns a raw probability vector into an
//! ordered ranking over taxonomy levels and derives the dominant-level set.

use std::cmp::Ordering;

use super::types::{KnowledgeNode, LEVEL_COUNT, ProbabilityVector, TaxonomyLevel};

/// Cutoff above which the second-ranked level counts as a dominant
/// classification, both for the derived top-levels set and for the
/// two-color gradient rule.
pub const DEFAULT_GRADIENT_THRESHOLD: f64 = 0.3;

/// One entry of a ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedLevel {
	/// The taxonomy level.
	pub level: TaxonomyLevel,
	/// Its score from the probability vector.
	pub probability: f64,
}

/// All six levels ordered by probability descending. Ties keep canonical
/// level order, so identical vectors always rank identically.
#[derive(Clone, Debug, PartialEq)]
pub struct Ranking([RankedLevel; LEVEL_COUNT]);

impl Ranking {
	/// The dominant level.
	pub fn top(&self) -> RankedLevel {
		self.0[0]
	}

	/// The runner-up level.
	pub fn second(&self) -> RankedLevel {
		self.0[1]
	}

	/// All entries, probability descending.
	pub fn entries(&self) -> &[RankedLevel; LEVEL_COUNT] {
		&self.0
	}

	/// Dominant-level set derived from the ranking: the top level, plus the
	/// second level when its probability reaches `threshold`.
	pub fn strong_levels(&self, threshold: f64) -> Vec<TaxonomyLevel> {
		let mut levels = vec![self.top().level];
		if self.second().probability >= threshold {
			levels.push(self.second().level);
		}
		levels
	}
}

/// Rank a probability vector. Sorting is stable, so equal probabilities
/// fall back to ascending canonical level index; an all-equal vector ranks
/// in canonical order.
pub fn rank(vector: &ProbabilityVector) -> Ranking {
	let mut entries = TaxonomyLevel::ALL.map(|level| RankedLevel {
		level,
		probability: vector.get(level),
	});
	entries.sort_by(|a, b| {
		b.probability
			.partial_cmp(&a.probability)
			.unwrap_or(Ordering::Equal)
	});
	Ranking(entries)
}

/// Dominant levels used for filtering: the backend-supplied set when one
/// exists (membership only, order ignored), otherwise derived from the
/// ranking. A node whose set matches no enabled level simply drops out of
/// the graph; that is routine, not an error.
pub fn effective_top_levels(node: &KnowledgeNode, threshold: f64) -> Vec<TaxonomyLevel> {
	match &node.top_levels {
		Some(levels) if !levels.is_empty() => levels.clone(),
		_ => rank(&node.probabilities).strong_levels(threshold),
	}
}
