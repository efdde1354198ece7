use std::collections::HashMap;
use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::builder::BuiltGraph;
use super::color::{NodePaint, node_paint};
use super::state::{NODE_RADIUS, ViewTransform};
use super::types::NodeId;

/// Render one frame: background, straight edges, then node circles with
/// their classification fill. Paints are derived fresh from the current
/// threshold on every call.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	graph: &BuiltGraph,
	hovered: Option<NodeId>,
	threshold: f64,
	transform: &ViewTransform,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, width, height);
	ctx.save();
	let _ = ctx.translate(transform.x, transform.y);
	let _ = ctx.scale(transform.k, transform.k);
	draw_edges(ctx, graph, transform.k);
	draw_nodes(ctx, graph, hovered, threshold, transform.k);
	ctx.restore();
}

fn draw_edges(ctx: &CanvasRenderingContext2d, graph: &BuiltGraph, k: f64) {
	let positions: HashMap<NodeId, (f64, f64)> = graph
		.nodes
		.iter()
		.map(|p| (p.node.id, (p.x, p.y)))
		.collect();

	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.5)");
	ctx.set_line_width(1.5 / k);
	for edge in &graph.edges {
		// Builder guarantees both endpoints exist.
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.from), positions.get(&edge.to))
		else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(
	ctx: &CanvasRenderingContext2d,
	graph: &BuiltGraph,
	hovered: Option<NodeId>,
	threshold: f64,
	k: f64,
) {
	for positioned in &graph.nodes {
		let (x, y) = (positioned.x, positioned.y);
		let is_hovered = hovered == Some(positioned.node.id);
		let radius = if is_hovered {
			NODE_RADIUS * 1.25
		} else {
			NODE_RADIUS
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		match node_paint(&positioned.node, threshold) {
			NodePaint::Solid(color) => ctx.set_fill_style_str(color),
			NodePaint::Gradient(top, second) => {
				let gradient = ctx.create_linear_gradient(x - radius, y, x + radius, y);
				gradient.add_color_stop(0.0, top).unwrap();
				gradient.add_color_stop(1.0, second).unwrap();
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
			}
		}
		ctx.fill();

		if is_hovered {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
		let _ = ctx.fill_text(&positioned.node.title, x + radius + 4.0, y + 3.0);
	}
}
