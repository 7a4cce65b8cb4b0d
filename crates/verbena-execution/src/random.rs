use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use verbena_flow::{Flow, Node};

use crate::algorithm::{DistributionAlgorithm, Selection};
use crate::context::NodeInfo;

/// Uniform random choice among the candidates. Keeps no bookkeeping.
pub struct RandomAlgorithm {
  rng: StdRng,
}

impl RandomAlgorithm {
  pub fn new() -> Self {
    Self {
      rng: StdRng::from_entropy(),
    }
  }

  /// Deterministic variant for tests and replay.
  pub fn with_seed(seed: u64) -> Self {
    Self {
      rng: StdRng::seed_from_u64(seed),
    }
  }
}

impl Default for RandomAlgorithm {
  fn default() -> Self {
    Self::new()
  }
}

impl DistributionAlgorithm for RandomAlgorithm {
  fn set_flow(&mut self, _flow: &Flow) {}

  fn next_exercise(&mut self, candidates: &[Node], node_info: &NodeInfo) -> Selection {
    let node = if candidates.is_empty() {
      None
    } else {
      Some(candidates[self.rng.gen_range(0..candidates.len())].clone())
    };

    Selection {
      node_info: node_info.clone(),
      node,
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
  fn empty_candidates_yield_no_node() {
    let mut algo = RandomAlgorithm::with_seed(7);
    let selection = algo.next_exercise(&[], &NodeInfo::new());
    assert!(selection.node.is_none());
  }

  #[test]
  fn same_seed_same_choices() {
    let candidates: Vec<Node> = ["a", "b", "c", "d"].iter().map(|id| node(id)).collect();
    let picks = |seed| -> Vec<String> {
      let mut algo = RandomAlgorithm::with_seed(seed);
      (0..16)
        .map(|_| {
          algo
            .next_exercise(&candidates, &NodeInfo::new())
            .node
            .unwrap()
            .node_id
        })
        .collect()
    };
    assert_eq!(picks(42), picks(42));
  }

  #[test]
  fn all_candidates_are_eventually_chosen() {
    let candidates: Vec<Node> = ["a", "b", "c"].iter().map(|id| node(id)).collect();
    let mut algo = RandomAlgorithm::with_seed(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..64 {
      let chosen = algo.next_exercise(&candidates, &NodeInfo::new()).node.unwrap();
      seen.insert(chosen.node_id);
    }
    assert_eq!(seen.len(), 3);
  }
}
