mod builder;
mod color;
mod component;
mod panel;
mod ranking;
mod render;
mod state;
mod types;

pub use builder::{BuiltGraph, CircleLayout, PositionedNode, build_graph};
pub use color::{NodePaint, node_paint};
pub use component::KnowledgeGraphCanvas;
pub use panel::{NodeDetailPanel, TaxonomyFilterBar, ThresholdSlider};
pub use ranking::{
	DEFAULT_GRADIENT_THRESHOLD, RankedLevel, Ranking, effective_top_levels, rank,
};
pub use types::{
	FilterState, GraphData, GraphEdge, KnowledgeNode, NodeId, ProbabilityVector, TaxonomyError,
	TaxonomyLevel,
};
