use serde::{Deserialize, Serialize};

use crate::enums::ConditionalOperator;

/// An edge definition: a directed link from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDef {
  pub edge_id: String,
  pub source: String,
  pub target: String,
  #[serde(default)]
  pub title: String,
  /// Client-side validation snippet shipped to the caller in the edge
  /// projection, never evaluated by the engine.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,
  #[serde(flatten)]
  pub kind: EdgeKindDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeKindDef {
  /// Always available.
  Plain,
  /// Gated by the learner's score against the source node.
  Conditional {
    operator: ConditionalOperator,
    threshold: i64,
  },
}
