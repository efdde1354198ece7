//! Visual encoding of a node's classification: a single dominant color, or
//! a two-color gradient when the runner-up level is strong enough to signal
//! genuine ambiguity.

use super::ranking::rank;
use super::types::KnowledgeNode;

/// How a node circle should be filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodePaint {
	/// One dominant classification: solid fill in the top level's color.
	Solid(&'static str),
	/// Two strong classifications: gradient from the top level's color to
	/// the second level's color.
	Gradient(&'static str, &'static str),
}

/// Derive the fill for one node at the given gradient threshold. Always
/// recomputed from the ranking; nothing here is cached between passes.
pub fn node_paint(node: &KnowledgeNode, threshold: f64) -> NodePaint {
	let ranking = rank(&node.probabilities);
	let (top, second) = (ranking.top(), ranking.second());
	if second.probability < threshold {
		NodePaint::Solid(top.level.color())
	} else {
		NodePaint::Gradient(top.level.color(), second.level.color())
	}
}
