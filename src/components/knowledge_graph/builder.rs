//! Graph builder: filters classified nodes, lays the survivors out on a
//! circle, and prunes edges whose endpoints were filtered away.
//!
//! Everything here is pure. Inputs are never mutated and identical inputs
//! always produce identical output, coordinates included.

use std::collections::HashSet;
use std::f64::consts::PI;

use super::ranking::effective_top_levels;
use super::types::{FilterState, GraphEdge, KnowledgeNode, NodeId};

/// Circle on which surviving nodes are placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleLayout {
	/// Circle radius in canvas units.
	pub radius: f64,
	/// Circle center, x.
	pub center_x: f64,
	/// Circle center, y.
	pub center_y: f64,
}

/// A knowledge node with its computed screen position. Recomputed wholesale
/// on every layout pass; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	/// The underlying node.
	pub node: KnowledgeNode,
	/// Layout x coordinate.
	pub x: f64,
	/// Layout y coordinate.
	pub y: f64,
}

/// Output of one build pass: positioned survivors plus the edges whose both
/// endpoints survived.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuiltGraph {
	/// Surviving nodes with coordinates, in filtered input order.
	pub nodes: Vec<PositionedNode>,
	/// Surviving edges; both endpoint ids are guaranteed present in `nodes`.
	pub edges: Vec<GraphEdge>,
}

/// Build a renderable graph from one node/edge set.
///
/// A node survives when at least one of its dominant levels is enabled in
/// `filter` (OR across the set). Survivor `i` of `n` is placed at angle
/// `2π·i/max(n,1)` on the layout circle, in filtered input order. Edges
/// referencing a filtered-out or unknown node are dropped silently.
pub fn build_graph(
	nodes: &[KnowledgeNode],
	edges: &[GraphEdge],
	filter: &FilterState,
	threshold: f64,
	layout: CircleLayout,
) -> BuiltGraph {
	let survivors: Vec<&KnowledgeNode> = nodes
		.iter()
		.filter(|node| {
			effective_top_levels(node, threshold)
				.iter()
				.any(|&level| filter.is_enabled(level))
		})
		.collect();

	let n = survivors.len();
	let positioned: Vec<PositionedNode> = survivors
		.into_iter()
		.enumerate()
		.map(|(i, node)| {
			let angle = 2.0 * PI * (i as f64) / (n.max(1) as f64);
			PositionedNode {
				node: node.clone(),
				x: layout.center_x + layout.radius * angle.cos(),
				y: layout.center_y + layout.radius * angle.sin(),
			}
		})
		.collect();

	let surviving_ids: HashSet<NodeId> = positioned.iter().map(|p| p.node.id).collect();
	let edges: Vec<GraphEdge> = edges
		.iter()
		.filter(|edge| surviving_ids.contains(&edge.from) && surviving_ids.contains(&edge.to))
		.copied()
		.collect();

	BuiltGraph {
		nodes: positioned,
		edges,
	}
}
