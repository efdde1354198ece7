//! Wire model for the classification backend.
//!
//! The backend owns storage, segmentation, and the classifier itself; this
//! module only mirrors the JSON it returns and converts it into the domain
//! types, surfacing the length-6 probability-vector contract at the
//! boundary. Fetching is left to the surrounding shell.

use serde::Deserialize;
use thiserror::Error;

use crate::components::knowledge_graph::{
	GraphData, GraphEdge, KnowledgeNode, ProbabilityVector, TaxonomyError, TaxonomyLevel,
};

/// Failure to turn a backend response into graph data.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The response body was not the expected JSON shape.
	#[error("malformed response: {0}")]
	Json(#[from] serde_json::Error),
	/// A node violated the classification contract.
	#[error("invalid node {id}: {source}")]
	InvalidNode {
		/// Id of the offending node.
		id: u64,
		/// The underlying violation.
		source: TaxonomyError,
	},
}

/// One node as serialized by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct WireNode {
	/// Node id.
	pub id: u64,
	/// Short label.
	pub title: String,
	/// Explanatory text.
	#[serde(default)]
	pub context_text: String,
	/// Raw per-level scores; must have exactly six entries.
	pub prob_vector: Vec<f64>,
	/// Backend-computed dominant levels, when the backend supplies them.
	#[serde(default)]
	pub top_levels: Option<Vec<TaxonomyLevel>>,
}

/// One edge as serialized by the backend.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WireEdge {
	/// Source node id.
	pub from_id: u64,
	/// Target node id.
	pub to_id: u64,
	/// Relatedness score.
	pub weight: f64,
}

/// Body of both the analysis result and the graph fetch result; the former
/// simply carries no edges.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphResponse {
	/// Classified nodes.
	pub nodes: Vec<WireNode>,
	/// Relatedness edges.
	#[serde(default)]
	pub edges: Vec<WireEdge>,
}

/// Query parameters of the graph fetch. All of them are pass-through knobs
/// owned by the backend; the client never interprets them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphQuery {
	/// Nearest neighbors considered per node.
	pub top_k: u32,
	/// Minimum relatedness score for an edge.
	pub min_score: f64,
	/// Cap on edges returned.
	pub max_edges: u32,
	/// Whether co-occurrence edges are included.
	pub include_cooccurrence: bool,
	/// Cap on nodes returned.
	pub limit_nodes: u32,
}

impl Default for GraphQuery {
	fn default() -> Self {
		Self {
			top_k: 5,
			min_score: 0.2,
			max_edges: 200,
			include_cooccurrence: true,
			limit_nodes: 500,
		}
	}
}

impl GraphQuery {
	/// Encode as a URL query string.
	pub fn to_query_string(&self) -> String {
		format!(
			"top_k={}&min_score={}&max_edges={}&include_cooccurrence={}&limit_nodes={}",
			self.top_k, self.min_score, self.max_edges, self.include_cooccurrence, self.limit_nodes
		)
	}
}

impl TryFrom<WireNode> for KnowledgeNode {
	type Error = ApiError;

	fn try_from(wire: WireNode) -> Result<Self, Self::Error> {
		let probabilities = ProbabilityVector::from_slice(&wire.prob_vector)
			.map_err(|source| ApiError::InvalidNode {
				id: wire.id,
				source,
			})?;
		Ok(KnowledgeNode {
			id: wire.id,
			title: wire.title,
			context_snippet: wire.context_text,
			probabilities,
			top_levels: wire.top_levels,
		})
	}
}

impl From<WireEdge> for GraphEdge {
	fn from(wire: WireEdge) -> Self {
		GraphEdge {
			from: wire.from_id,
			to: wire.to_id,
			weight: wire.weight,
		}
	}
}

/// Parse a backend response body into a fresh graph data set. The result
/// replaces any previous set; nothing is merged.
pub fn parse_graph_response(body: &str) -> Result<GraphData, ApiError> {
	let response: GraphResponse = serde_json::from_str(body)?;
	let nodes = response
		.nodes
		.into_iter()
		.map(KnowledgeNode::try_from)
		.collect::<Result<Vec<_>, _>>()?;
	let edges = response.edges.into_iter().map(GraphEdge::from).collect();
	Ok(GraphData { nodes, edges })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_graph_response() {
		let body = r#"{
			"nodes": [
				{"id": 1, "title": "Cell structure", "context_text": "Intro paragraph",
				 "prob_vector": [0.6, 0.2, 0.1, 0.05, 0.03, 0.02]},
				{"id": 2, "title": "Design an experiment", "context_text": "",
				 "prob_vector": [0.05, 0.05, 0.1, 0.1, 0.2, 0.5],
				 "top_levels": ["create", "evaluate"]}
			],
			"edges": [{"from_id": 1, "to_id": 2, "weight": 0.42}]
		}"#;
		let data = parse_graph_response(body).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.edges.len(), 1);
		assert_eq!(data.nodes[0].context_snippet, "Intro paragraph");
		assert_eq!(
			data.nodes[1].top_levels,
			Some(vec![TaxonomyLevel::Create, TaxonomyLevel::Evaluate])
		);
		assert_eq!(data.edges[0].from, 1);
		assert_eq!(data.edges[0].weight, 0.42);
	}

	#[test]
	fn analysis_response_without_edges_parses() {
		let body = r#"{"nodes": [{"id": 3, "title": "t", "prob_vector": [0.2, 0.2, 0.2, 0.2, 0.1, 0.1]}]}"#;
		let data = parse_graph_response(body).unwrap();
		assert_eq!(data.nodes.len(), 1);
		assert!(data.edges.is_empty());
		assert_eq!(data.nodes[0].top_levels, None);
	}

	#[test]
	fn short_probability_vector_is_a_contract_violation() {
		let body = r#"{"nodes": [{"id": 9, "title": "t", "prob_vector": [0.5, 0.5]}]}"#;
		let err = parse_graph_response(body).unwrap_err();
		match err {
			ApiError::InvalidNode { id, source } => {
				assert_eq!(id, 9);
				assert_eq!(source, TaxonomyError::VectorLength { got: 2 });
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn malformed_json_is_rejected() {
		assert!(matches!(
			parse_graph_response("not json"),
			Err(ApiError::Json(_))
		));
	}

	#[test]
	fn query_string_round_trips_defaults() {
		let q = GraphQuery::default();
		assert_eq!(
			q.to_query_string(),
			"top_k=5&min_score=0.2&max_edges=200&include_cooccurrence=true&limit_nodes=500"
		);
	}
}
