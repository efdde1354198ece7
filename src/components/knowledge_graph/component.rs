use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::builder::{CircleLayout, build_graph};
use super::render;
use super::state::{PanState, ViewTransform, node_at_position};
use super::types::{FilterState, GraphData, NodeId};

/// Canvas view of a classified knowledge graph.
///
/// The positioned graph is a memo over `(data, filter, threshold)` and is
/// re-derived wholesale whenever any of them changes; node positions are
/// never carried over between passes. Hover state is exposed through the
/// `hovered` signal so the surrounding shell can drive a detail panel.
#[component]
pub fn KnowledgeGraphCanvas(
	/// Current node/edge set.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Per-level visibility toggles.
	filter: RwSignal<FilterState>,
	/// Gradient threshold, live-adjustable.
	threshold: RwSignal<f64>,
	/// At most one hovered node; cleared when the pointer leaves.
	hovered: RwSignal<Option<NodeId>>,
	/// Canvas width in pixels.
	#[prop(default = 800.0)]
	width: f64,
	/// Canvas height in pixels.
	#[prop(default = 600.0)]
	height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let transform = RwSignal::new(ViewTransform::default());
	let pan: Rc<RefCell<PanState>> = Rc::new(RefCell::new(PanState::default()));

	let layout = CircleLayout {
		radius: 0.35 * width.min(height),
		center_x: width / 2.0,
		center_y: height / 2.0,
	};

	let built = Memo::new(move |_| {
		let data = data.get();
		build_graph(
			&data.nodes,
			&data.edges,
			&filter.get(),
			threshold.get(),
			layout,
		)
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if canvas.width() != width as u32 {
			canvas.set_width(width as u32);
		}
		if canvas.height() != height as u32 {
			canvas.set_height(height as u32);
		}
		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		render::render(
			&ctx,
			&built.get(),
			hovered.get(),
			threshold.get(),
			&transform.get(),
			width,
			height,
		);
	});

	let cursor_position = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let pan_md = pan.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = cursor_position(&ev);
		let t = transform.get_untracked();
		let mut pan = pan_md.borrow_mut();
		pan.active = true;
		pan.start_x = x;
		pan.start_y = y;
		pan.transform_start_x = t.x;
		pan.transform_start_y = t.y;
	};

	let pan_mm = pan.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = cursor_position(&ev);
		let pan = pan_mm.borrow();
		if pan.active {
			let (sx, sy) = (pan.start_x, pan.start_y);
			let (tx, ty) = (pan.transform_start_x, pan.transform_start_y);
			transform.update(|t| {
				t.x = tx + (x - sx);
				t.y = ty + (y - sy);
			});
		} else {
			let hit = node_at_position(
				&built.get_untracked().nodes,
				&transform.get_untracked(),
				x,
				y,
			);
			if hovered.get_untracked() != hit {
				hovered.set(hit);
			}
		}
	};

	let pan_mu = pan.clone();
	let on_mouseup = move |_: MouseEvent| {
		pan_mu.borrow_mut().active = false;
	};

	let pan_ml = pan.clone();
	let on_mouseleave = move |_: MouseEvent| {
		pan_ml.borrow_mut().active = false;
		hovered.set(None);
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
		transform.update(|t| t.zoom_about(x, y, factor));
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="knowledge-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
