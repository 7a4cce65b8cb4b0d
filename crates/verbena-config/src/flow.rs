use serde::{Deserialize, Serialize};

use crate::refs::{EdgeRefs, NodeRefs};

/// Execution settings recorded on the flow by its author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSettings {
  /// Name of the distribution algorithm driving traversal.
  pub algo: String,
}

/// A learning flow as authored and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDef {
  pub flow_id: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
  #[serde(default)]
  pub publish: bool,
  #[serde(default)]
  pub tags: Vec<String>,
  pub execution: ExecutionSettings,
  #[serde(default)]
  pub nodes: NodeRefs,
  #[serde(default)]
  pub edges: EdgeRefs,
}

impl FlowDef {
  /// Whether both the node and edge sets carry full objects. Semantic
  /// validation only runs on materialized submissions.
  pub fn is_materialized(&self) -> bool {
    self.nodes.as_defs().is_some() && self.edges.as_defs().is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mixed_submission_is_not_materialized() {
    let def: FlowDef = serde_json::from_str(
      r#"{
        "flow_id": "f1",
        "title": "Intro",
        "execution": {"algo": "random"},
        "nodes": [{"node_id": "a", "type": "lessonTextNode"}],
        "edges": ["e1"]
      }"#,
    )
    .unwrap();
    assert!(!def.is_materialized());
    assert_eq!(def.nodes.len(), 1);
  }
}
