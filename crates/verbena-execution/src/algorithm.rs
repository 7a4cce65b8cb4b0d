use verbena_flow::{Flow, Node};

use crate::context::NodeInfo;

/// Outcome of one selection step: the updated bookkeeping and at most one
/// node to advance to. `node: None` signals the terminal state.
#[derive(Debug, Clone)]
pub struct Selection {
  pub node_info: NodeInfo,
  pub node: Option<Node>,
}

/// A pluggable next-node selection policy.
///
/// Implementations are registered by name in an
/// [`AlgorithmRegistry`](crate::AlgorithmRegistry) and instantiated per
/// traversal. All algorithm state that must survive between learner
/// interactions belongs in the returned `node_info`, which the orchestrator
/// round-trips through the execution context.
pub trait DistributionAlgorithm: Send {
  /// Bind the policy to the flow being traversed. Called once by the
  /// orchestrator before any selection.
  fn set_flow(&mut self, flow: &Flow);

  /// Select one node among the candidates reachable via currently-satisfied
  /// edges. An empty candidate set must yield `node: None`.
  fn next_exercise(&mut self, candidates: &[Node], node_info: &NodeInfo) -> Selection;
}
