use serde_json::Value;
use verbena_flow::{Flow, Node};

use crate::algorithm::{DistributionAlgorithm, Selection};
use crate::context::NodeInfo;

/// Mastery-style policy: presents the candidate the learner has seen the
/// fewest times, tracking visit counts per node id in the bookkeeping map.
/// Ties go to the first candidate in edge order.
pub struct LeastVisitedAlgorithm;

fn visits(node_info: &NodeInfo, node_id: &str) -> u64 {
  node_info
    .get(node_id)
    .and_then(Value::as_u64)
    .unwrap_or(0)
}

impl DistributionAlgorithm for LeastVisitedAlgorithm {
  fn set_flow(&mut self, _flow: &Flow) {}

  fn next_exercise(&mut self, candidates: &[Node], node_info: &NodeInfo) -> Selection {
    let mut node_info = node_info.clone();
    let chosen = candidates
      .iter()
      .min_by_key(|n| visits(&node_info, &n.node_id))
      .cloned();

    if let Some(node) = &chosen {
      let count = visits(&node_info, &node.node_id) + 1;
      node_info.insert(node.node_id.clone(), Value::from(count));
    }

    Selection {
      node_info,
      node: chosen,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn node(id: &str) -> Node {
    Node {
      node_id: id.to_string(),
      title: id.to_string(),
      description: String::new(),
      difficulty: None,
      platform: "webApp".to_string(),
      kind: "lessonTextNode".to_string(),
      data: serde_json::Value::Null,
    }
  }

  #[test]
  fn picks_the_least_visited_candidate() {
    let candidates = vec![node("a"), node("b")];
    let mut info = NodeInfo::new();
    info.insert("a".to_string(), Value::from(2u64));

    let mut algo = LeastVisitedAlgorithm;
    let selection = algo.next_exercise(&candidates, &info);

    assert_eq!(selection.node.unwrap().node_id, "b");
    assert_eq!(selection.node_info["b"], Value::from(1u64));
    // a's count is untouched
    assert_eq!(selection.node_info["a"], Value::from(2u64));
  }

  #[test]
  fn cycles_through_candidates_over_repeated_calls() {
    let candidates = vec![node("a"), node("b"), node("c")];
    let mut algo = LeastVisitedAlgorithm;
    let mut info = NodeInfo::new();
    let mut order = Vec::new();

    for _ in 0..6 {
      let selection = algo.next_exercise(&candidates, &info);
      info = selection.node_info;
      order.push(selection.node.unwrap().node_id);
    }

    assert_eq!(order, ["a", "b", "c", "a", "b", "c"]);
  }

  #[test]
  fn empty_candidates_yield_no_node() {
    let mut algo = LeastVisitedAlgorithm;
    let selection = algo.next_exercise(&[], &NodeInfo::new());
    assert!(selection.node.is_none());
    assert!(selection.node_info.is_empty());
  }
}
