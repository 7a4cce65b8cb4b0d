use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutionError {
  /// Requested distribution algorithm is not in the registry. Raised at
  /// orchestrator construction, before any traversal.
  #[error("distribution algorithm not registered: {name}")]
  UnknownAlgorithm { name: String },

  #[error("flow '{flow_id}' has no entry nodes (every node has incoming edges)")]
  NoEntryNodes { flow_id: String },

  /// A node id was revisited before a presentable node was reached.
  #[error("cycle detected while resolving the next exercise, at node {node_id}")]
  CycleDetected { node_id: String },
}
