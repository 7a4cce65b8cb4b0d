use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::node::Node;

/// Public fields of an outgoing edge, shipped with a presented node so the
/// caller can collect what it needs to compute which edges a score
/// satisfies. Deliberately omits `source` and `target`: routing targets
/// must never leak to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeValidation {
  pub id: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,
  pub data: serde_json::Value,
  #[serde(rename = "type")]
  pub kind: String,
}

impl From<&Edge> for EdgeValidation {
  fn from(edge: &Edge) -> Self {
    EdgeValidation {
      id: edge.edge_id.clone(),
      title: edge.title.clone(),
      code: edge.code.clone(),
      data: edge.public_data(),
      kind: edge.kind_tag().to_string(),
    }
  }
}

/// A node as returned to the caller: the node itself plus the routing menu
/// of its outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentableNode {
  #[serde(flatten)]
  pub node: Node,
  pub validation: Vec<EdgeValidation>,
}

impl PresentableNode {
  /// Enrich a node with the projection of its outgoing edges.
  pub fn project<'a>(node: Node, outgoing: impl Iterator<Item = &'a Edge>) -> Self {
    PresentableNode {
      node,
      validation: outgoing.map(EdgeValidation::from).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::edge::EdgeKind;
  use verbena_config::ConditionalOperator;

  #[test]
  fn projection_never_exposes_targets() {
    let edge = Edge {
      edge_id: "e1".to_string(),
      source: "a".to_string(),
      target: "secret".to_string(),
      title: "pass".to_string(),
      code: None,
      kind: EdgeKind::Conditional {
        operator: ConditionalOperator::GreaterOrEqual,
        threshold: 5,
      },
    };

    let validation = EdgeValidation::from(&edge);
    let json = serde_json::to_value(&validation).unwrap();

    assert_eq!(json["id"], "e1");
    assert_eq!(json["type"], "conditional");
    assert_eq!(json["data"]["operator"], ">=");
    assert_eq!(json["data"]["threshold"], 5);
    assert!(json.get("target").is_none());
    assert!(json.get("source").is_none());
  }
}
