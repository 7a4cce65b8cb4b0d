use thiserror::Error;

use crate::ranges::ScoreRange;

#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("duplicate node id: {node_id}")]
  DuplicateNodeId { node_id: String },

  #[error("edge '{edge_id}' references unknown node: {node_id}")]
  InvalidEdge { edge_id: String, node_id: String },

  #[error("flow '{flow_id}' cannot be locked from bare id references")]
  NotMaterialized { flow_id: String },

  #[error(
    "conditional edges overlap on source node {source_id}: \
     {first_edge}={first_range} intersects {second_edge}={second_range} (Q={question_count})"
  )]
  OverlappingConditionalEdges {
    source_id: String,
    first_edge: String,
    first_range: ScoreRange,
    second_edge: String,
    second_range: ScoreRange,
    question_count: u32,
  },
}
