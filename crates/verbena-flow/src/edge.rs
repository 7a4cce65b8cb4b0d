use serde::{Deserialize, Serialize};
use verbena_config::ConditionalOperator;

/// A directed link between two nodes of a locked flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
  pub edge_id: String,
  pub source: String,
  pub target: String,
  #[serde(default)]
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,
  #[serde(flatten)]
  pub kind: EdgeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeKind {
  Plain,
  Conditional {
    operator: ConditionalOperator,
    threshold: i64,
  },
}

impl Edge {
  pub fn is_conditional(&self) -> bool {
    matches!(self.kind, EdgeKind::Conditional { .. })
  }

  /// The kind tag as it appears on the wire.
  pub fn kind_tag(&self) -> &'static str {
    match self.kind {
      EdgeKind::Plain => "plain",
      EdgeKind::Conditional { .. } => "conditional",
    }
  }

  /// Kind-specific public payload for the caller-facing projection. Carries
  /// what the client needs to compute which edges a score satisfies.
  pub fn public_data(&self) -> serde_json::Value {
    match &self.kind {
      EdgeKind::Plain => serde_json::json!({}),
      EdgeKind::Conditional {
        operator,
        threshold,
      } => serde_json::json!({
        "operator": operator,
        "threshold": threshold,
      }),
    }
  }
}
