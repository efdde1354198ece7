//! Shell-facing controls around the canvas: the taxonomy filter chips, the
//! gradient-threshold slider, and the hover detail panel.

use leptos::prelude::*;

use super::ranking::rank;
use super::types::{FilterState, GraphData, NodeId, TaxonomyLevel};

/// One toggle chip per taxonomy level, doubling as the color legend.
#[component]
pub fn TaxonomyFilterBar(
	/// Per-level visibility toggles, shared with the canvas.
	filter: RwSignal<FilterState>,
) -> impl IntoView {
	view! {
		<div class="filter-bar">
			{TaxonomyLevel::ALL
				.into_iter()
				.map(|level| {
					view! {
						<button
							class="level-chip"
							class:off=move || !filter.get().is_enabled(level)
							on:click=move |_| filter.update(|f| f.toggle(level))
						>
							<span class="swatch" style:background-color=level.color()></span>
							{level.label()}
						</button>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Live control for the gradient threshold.
#[component]
pub fn ThresholdSlider(
	/// Gradient threshold, shared with the canvas.
	threshold: RwSignal<f64>,
) -> impl IntoView {
	view! {
		<label class="threshold-control">
			"Gradient threshold: "
			{move || format!("{:.2}", threshold.get())}
			<input
				type="range"
				min="0"
				max="1"
				step="0.05"
				prop:value=move || threshold.get().to_string()
				on:input=move |ev| {
					if let Ok(value) = event_target_value(&ev).parse::<f64>() {
						threshold.set(value);
					}
				}
			/>
		</label>
	}
}

/// Detail card for the hovered node: title, context snippet, and the full
/// ranking in descending probability order.
#[component]
pub fn NodeDetailPanel(
	/// Current node/edge set.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Hover state owned by the canvas.
	hovered: RwSignal<Option<NodeId>>,
) -> impl IntoView {
	let detail = move || {
		let data = data.get();
		hovered
			.get()
			.and_then(|id| data.nodes.iter().find(|n| n.id == id).cloned())
	};

	view! {
		<div class="detail-panel">
			{move || match detail() {
				Some(node) => {
					let ranking = rank(&node.probabilities);
					let rows = ranking
						.entries()
						.iter()
						.map(|entry| {
							view! {
								<li>
									<span class="swatch" style:background-color=entry.level.color()></span>
									{entry.level.label()}
									": "
									{format!("{:.3}", entry.probability)}
								</li>
							}
						})
						.collect_view();
					view! {
						<div>
							<h3>{node.title.clone()}</h3>
							<p class="snippet">{node.context_snippet.clone()}</p>
							<ul class="ranking">{rows}</ul>
						</div>
					}
						.into_any()
				}
				None => {
					view! {
						<div>
							<p class="hint">"Hover a node to inspect its classification."</p>
						</div>
					}
						.into_any()
				}
			}}
		</div>
	}
}
