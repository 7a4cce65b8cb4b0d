use serde::{Deserialize, Serialize};

use crate::edge::EdgeDef;
use crate::node::NodeDef;

/// Nodes of a stored flow: either bare id references (partial submission)
/// or full definitions. Storage may hand back either form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRefs {
  // Ids first: an empty array is a bare-id list, not a materialized one.
  Ids(Vec<String>),
  Defs(Vec<NodeDef>),
}

impl NodeRefs {
  /// Full node objects, if this submission carries them.
  pub fn as_defs(&self) -> Option<&[NodeDef]> {
    match self {
      NodeRefs::Defs(defs) => Some(defs),
      NodeRefs::Ids(_) => None,
    }
  }

  pub fn len(&self) -> usize {
    match self {
      NodeRefs::Defs(defs) => defs.len(),
      NodeRefs::Ids(ids) => ids.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for NodeRefs {
  fn default() -> Self {
    NodeRefs::Ids(Vec::new())
  }
}

/// Edges of a stored flow, in the same two forms as [`NodeRefs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeRefs {
  Ids(Vec<String>),
  Defs(Vec<EdgeDef>),
}

impl EdgeRefs {
  pub fn as_defs(&self) -> Option<&[EdgeDef]> {
    match self {
      EdgeRefs::Defs(defs) => Some(defs),
      EdgeRefs::Ids(_) => None,
    }
  }

  pub fn len(&self) -> usize {
    match self {
      EdgeRefs::Defs(defs) => defs.len(),
      EdgeRefs::Ids(ids) => ids.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for EdgeRefs {
  fn default() -> Self {
    EdgeRefs::Ids(Vec::new())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_ids_deserialize_as_ids() {
    let refs: NodeRefs = serde_json::from_str(r#"["a", "b"]"#).unwrap();
    assert_eq!(refs, NodeRefs::Ids(vec!["a".to_string(), "b".to_string()]));
    assert!(refs.as_defs().is_none());
  }

  #[test]
  fn objects_deserialize_as_defs() {
    let refs: NodeRefs = serde_json::from_str(
      r#"[{"node_id": "a", "type": "lessonTextNode", "data": {"text": "hi"}}]"#,
    )
    .unwrap();
    let defs = refs.as_defs().unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].node_id, "a");
    assert_eq!(defs[0].title, "Node");
  }

  #[test]
  fn empty_array_is_a_bare_id_list() {
    let refs: EdgeRefs = serde_json::from_str("[]").unwrap();
    assert!(refs.as_defs().is_none());
    assert!(refs.is_empty());
  }
}
