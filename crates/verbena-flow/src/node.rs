use serde::{Deserialize, Serialize};

/// Sentinel node id set by a distribution algorithm to request a
/// fixed-function advance on the next traversal step, without consulting
/// the algorithm again.
pub const GHOST_NODE_ID: &str = "ghostNode";

/// Node kind marking an abstract (non-presentable) graph node. The
/// orchestrator never returns an abstract node to the caller; it keeps
/// resolving until it reaches presentable content.
const ABSTRACT_NODE_KIND: &str = "abstractNode";

/// A unit of content or assessment. Read-only during execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub node_id: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub difficulty: Option<u8>,
  pub platform: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub data: serde_json::Value,
}

impl Node {
  /// Whether this node is abstract, i.e. must never be presented to a
  /// learner directly.
  pub fn is_abstract(&self) -> bool {
    self.kind == ABSTRACT_NODE_KIND
  }
}
