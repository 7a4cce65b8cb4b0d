use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Bookkeeping map owned exclusively by the active distribution algorithm,
/// round-tripped through the execution context between calls. The
/// orchestrator never interprets it.
pub type NodeInfo = HashMap<String, serde_json::Value>;

/// Per-learner, per-flow traversal state. Created at the start of a
/// traversal; mutated only by the orchestrator's resolution step; stored
/// and re-supplied by the caller between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionContext {
  pub flow_id: String,
  /// Anonymous learners are allowed.
  pub user_id: Option<String>,
  pub username: String,
  pub session_id: String,
  pub current_node_id: String,
  #[serde(default)]
  pub node_info: NodeInfo,
}

impl ExecutionContext {
  /// Fresh context pointing at `current_node_id`, with a new session id and
  /// empty bookkeeping.
  pub fn create(
    flow_id: &str,
    current_node_id: &str,
    user_id: Option<&str>,
    username: Option<&str>,
  ) -> Self {
    Self {
      flow_id: flow_id.to_string(),
      user_id: user_id.map(str::to_string),
      username: username.unwrap_or("guest").to_string(),
      session_id: uuid::Uuid::new_v4().to_string(),
      current_node_id: current_node_id.to_string(),
      node_info: NodeInfo::new(),
    }
  }
}
