//! Interactive view state: pan/zoom transform and node hit-testing. Hover
//! and filter state live in reactive signals owned by the component; the
//! graph itself is derived data and is never written back from here.

use super::builder::PositionedNode;
use super::types::NodeId;

/// Node circle radius in layout units.
pub const NODE_RADIUS: f64 = 10.0;
/// Hit-test radius; slightly larger than the visual circle.
pub const HIT_RADIUS: f64 = 14.0;

/// Screen-space pan/zoom transform applied to the whole graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Screen-space translation, x.
	pub x: f64,
	/// Screen-space translation, y.
	pub y: f64,
	/// Zoom factor.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Map a screen coordinate into graph space.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zoom by `factor` about the screen point `(sx, sy)`, clamped so the
	/// graph can neither vanish nor explode.
	pub fn zoom_about(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}
}

/// Background-drag bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanState {
	/// Whether a drag is in progress.
	pub active: bool,
	/// Screen x where the drag started.
	pub start_x: f64,
	/// Screen y where the drag started.
	pub start_y: f64,
	/// Transform translation at drag start, x.
	pub transform_start_x: f64,
	/// Transform translation at drag start, y.
	pub transform_start_y: f64,
}

/// Find the node under a screen position, if any. Later nodes win when
/// circles overlap, matching paint order.
pub fn node_at_position(
	nodes: &[PositionedNode],
	transform: &ViewTransform,
	sx: f64,
	sy: f64,
) -> Option<NodeId> {
	let (gx, gy) = transform.screen_to_graph(sx, sy);
	let mut found = None;
	for positioned in nodes {
		let (dx, dy) = (positioned.x - gx, positioned.y - gy);
		if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
			found = Some(positioned.node.id);
		}
	}
	found
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::knowledge_graph::types::{KnowledgeNode, ProbabilityVector};

	fn positioned(id: u64, x: f64, y: f64) -> PositionedNode {
		PositionedNode {
			node: KnowledgeNode {
				id,
				title: String::new(),
				context_snippet: String::new(),
				probabilities: ProbabilityVector::new([0.5; 6]),
				top_levels: None,
			},
			x,
			y,
		}
	}

	#[test]
	fn hit_test_respects_transform() {
		let nodes = vec![positioned(1, 100.0, 100.0)];
		let mut transform = ViewTransform::default();
		assert_eq!(node_at_position(&nodes, &transform, 100.0, 100.0), Some(1));
		assert_eq!(node_at_position(&nodes, &transform, 200.0, 200.0), None);

		transform.x = 50.0;
		assert_eq!(node_at_position(&nodes, &transform, 150.0, 100.0), Some(1));
	}

	#[test]
	fn zoom_keeps_anchor_point_fixed() {
		let mut transform = ViewTransform::default();
		let before = transform.screen_to_graph(300.0, 200.0);
		transform.zoom_about(300.0, 200.0, 1.1);
		let after = transform.screen_to_graph(300.0, 200.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn zoom_factor_is_clamped() {
		let mut transform = ViewTransform::default();
		for _ in 0..100 {
			transform.zoom_about(0.0, 0.0, 1.5);
		}
		assert!(transform.k <= 10.0);
		for _ in 0..200 {
			transform.zoom_about(0.0, 0.0, 0.5);
		}
		assert!(transform.k >= 0.1);
	}
}
