//! End-to-end pipeline: wire JSON in, positioned and color-encoded graph out.

use taxonomy_graph_canvas::api::parse_graph_response;
use taxonomy_graph_canvas::components::knowledge_graph::{
	CircleLayout, DEFAULT_GRADIENT_THRESHOLD, FilterState, NodePaint, TaxonomyLevel, build_graph,
	node_paint,
};

const LAYOUT: CircleLayout = CircleLayout {
	radius: 200.0,
	center_x: 450.0,
	center_y: 320.0,
};

#[test]
fn single_dominant_node_renders_solid_at_angle_zero() {
	let body = r#"{
		"nodes": [
			{"id": 1, "title": "Design a study", "context_text": "Closing exercise",
			 "prob_vector": [0.1, 0.1, 0.1, 0.1, 0.1, 0.5]}
		]
	}"#;
	let data = parse_graph_response(body).unwrap();
	let built = build_graph(
		&data.nodes,
		&data.edges,
		&FilterState::default(),
		DEFAULT_GRADIENT_THRESHOLD,
		LAYOUT,
	);

	assert_eq!(built.nodes.len(), 1);
	assert_eq!(built.nodes[0].x, LAYOUT.center_x + LAYOUT.radius);
	assert_eq!(built.nodes[0].y, LAYOUT.center_y);
	assert_eq!(
		node_paint(&built.nodes[0].node, DEFAULT_GRADIENT_THRESHOLD),
		NodePaint::Solid(TaxonomyLevel::Create.color())
	);
}

#[test]
fn filtering_rebuilds_layout_and_prunes_edges() {
	let body = r#"{
		"nodes": [
			{"id": 1, "title": "Recall terms", "prob_vector": [0.8, 0.05, 0.05, 0.05, 0.03, 0.02]},
			{"id": 2, "title": "Explain process", "prob_vector": [0.05, 0.8, 0.05, 0.05, 0.03, 0.02]},
			{"id": 3, "title": "Critique method", "prob_vector": [0.02, 0.03, 0.05, 0.05, 0.8, 0.05]}
		],
		"edges": [
			{"from_id": 1, "to_id": 2, "weight": 0.7},
			{"from_id": 2, "to_id": 3, "weight": 0.6}
		]
	}"#;
	let data = parse_graph_response(body).unwrap();

	let all = build_graph(
		&data.nodes,
		&data.edges,
		&FilterState::default(),
		DEFAULT_GRADIENT_THRESHOLD,
		LAYOUT,
	);
	assert_eq!(all.nodes.len(), 3);
	assert_eq!(all.edges.len(), 2);

	let mut filter = FilterState::default();
	filter.set(TaxonomyLevel::Evaluate, false);
	let filtered = build_graph(
		&data.nodes,
		&data.edges,
		&filter,
		DEFAULT_GRADIENT_THRESHOLD,
		LAYOUT,
	);
	assert_eq!(filtered.nodes.len(), 2);
	// The edge into the filtered-out node is gone, silently.
	assert_eq!(filtered.edges.len(), 1);
	assert_eq!(filtered.edges[0].from, 1);

	// Survivors are re-laid-out on the smaller circle, not pinned.
	let angle_step = std::f64::consts::PI; // 2π / 2 survivors
	assert_eq!(filtered.nodes[0].x, LAYOUT.center_x + LAYOUT.radius);
	assert!((filtered.nodes[1].x - (LAYOUT.center_x + LAYOUT.radius * angle_step.cos())).abs() < 1e-9);
}

#[test]
fn upstream_top_levels_override_survives_filtering_by_that_level() {
	let body = r#"{
		"nodes": [
			{"id": 5, "title": "Mixed", "prob_vector": [0.9, 0.02, 0.02, 0.02, 0.02, 0.02],
			 "top_levels": ["create"]}
		]
	}"#;
	let data = parse_graph_response(body).unwrap();

	// Only the upstream-declared level keeps the node visible.
	let mut only_remember = FilterState::default();
	for level in TaxonomyLevel::ALL {
		only_remember.set(level, level == TaxonomyLevel::Remember);
	}
	let built = build_graph(
		&data.nodes,
		&data.edges,
		&only_remember,
		DEFAULT_GRADIENT_THRESHOLD,
		LAYOUT,
	);
	assert!(built.nodes.is_empty());

	let mut only_create = FilterState::default();
	for level in TaxonomyLevel::ALL {
		only_create.set(level, level == TaxonomyLevel::Create);
	}
	let built = build_graph(
		&data.nodes,
		&data.edges,
		&only_create,
		DEFAULT_GRADIENT_THRESHOLD,
		LAYOUT,
	);
	assert_eq!(built.nodes.len(), 1);
}
