use leptos::prelude::*;

use crate::components::knowledge_graph::{
	DEFAULT_GRADIENT_THRESHOLD, FilterState, GraphData, GraphEdge, KnowledgeGraphCanvas,
	KnowledgeNode, NodeDetailPanel, NodeId, ProbabilityVector, TaxonomyFilterBar, TaxonomyLevel,
	ThresholdSlider,
};

/// Generate a deterministic sample graph of classified text segments so the
/// page renders without a backend.
fn generate_sample_data(n: usize) -> GraphData {
	let nodes: Vec<KnowledgeNode> = (0..n)
		.map(|i| {
			let dominant = TaxonomyLevel::ALL[i % 6];
			let runner_up = TaxonomyLevel::ALL[(i + 2) % 6];
			let mut values = [0.0; 6];
			for (j, value) in values.iter_mut().enumerate() {
				*value = 0.12 * rand_simple(i * 7 + j);
			}
			values[dominant.index()] = 0.45 + 0.3 * rand_simple(i * 13);
			values[runner_up.index()] = 0.45 * rand_simple(i * 31);

			KnowledgeNode {
				id: i as u64,
				title: format!("Segment {}", i + 1),
				context_snippet: format!(
					"Sample text segment {} classified mostly as \"{}\".",
					i + 1,
					dominant.label()
				),
				probabilities: ProbabilityVector::new(values),
				top_levels: None,
			}
		})
		.collect();

	let edges: Vec<GraphEdge> = (1..n)
		.map(|i| {
			let target = (rand_simple(i) * (i as f64)) as usize;
			GraphEdge {
				from: i as u64,
				to: target as u64,
				weight: 0.2 + 0.6 * rand_simple(i * 3),
			}
		})
		.collect();

	GraphData { nodes, edges }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(move || generate_sample_data(18));
	let filter = RwSignal::new(FilterState::default());
	let threshold = RwSignal::new(DEFAULT_GRADIENT_THRESHOLD);
	let hovered = RwSignal::new(None::<NodeId>);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-controls">
					<h1>"Knowledge Graph"</h1>
					<TaxonomyFilterBar filter=filter />
					<ThresholdSlider threshold=threshold />
				</div>
				<div class="graph-main">
					<KnowledgeGraphCanvas
						data=graph_data
						filter=filter
						threshold=threshold
						hovered=hovered
						width=900.0
						height=640.0
					/>
					<NodeDetailPanel data=graph_data hovered=hovered />
				</div>
			</div>
		</ErrorBoundary>
	}
}
