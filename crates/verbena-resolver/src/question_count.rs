use std::collections::HashMap;

use serde_json::Value;
use verbena_config::NodeDef;

/// Extractor for the total addressable question/item count of a node
/// payload. Returns the length of the relevant list, or 0 when the field is
/// missing or not an array.
pub type CountExtractor = fn(&Value) -> u32;

fn array_len(data: &Value, field: &str) -> u32 {
  data
    .get(field)
    .and_then(Value::as_array)
    .map(|items| items.len() as u32)
    .unwrap_or(0)
}

fn count_questions(data: &Value) -> u32 {
  array_len(data, "questions")
}

fn count_quiz(data: &Value) -> u32 {
  array_len(data, "quiz")
}

fn count_items(data: &Value) -> u32 {
  array_len(data, "items")
}

/// Registry of per-kind question-count extractors. Adding a node kind means
/// registering one function here, not editing a central switch.
pub struct QuestionCounters {
  extractors: HashMap<String, CountExtractor>,
}

impl QuestionCounters {
  /// Empty registry.
  pub fn new() -> Self {
    Self {
      extractors: HashMap::new(),
    }
  }

  /// Registry with the built-in assessment kinds.
  pub fn builtin() -> Self {
    let mut counters = Self::new();
    counters.register("emotionAttributionTestNode", count_questions);
    counters.register("eyesTaskTestNode", count_questions);
    counters.register("theoryOfMindTestNode", count_quiz);
    counters.register("fauxPasTestNode", count_quiz);
    counters.register("socialSituationsNode", count_items);
    counters
  }

  pub fn register(&mut self, kind: impl Into<String>, extractor: CountExtractor) {
    self.extractors.insert(kind.into(), extractor);
  }

  /// Question count for a node, or `None` when the node's kind has no
  /// registered extractor (a tolerated gap: such nodes are skipped by the
  /// disjointness check).
  pub fn count(&self, node: &NodeDef) -> Option<u32> {
    self
      .extractors
      .get(&node.kind)
      .map(|extract| extract(&node.data))
  }
}

impl Default for QuestionCounters {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn node(kind: &str, data: Value) -> NodeDef {
    NodeDef {
      node_id: "n".to_string(),
      title: "Node".to_string(),
      description: String::new(),
      difficulty: None,
      platform: "webApp".to_string(),
      kind: kind.to_string(),
      data,
    }
  }

  #[test]
  fn counts_the_kind_specific_list() {
    let counters = QuestionCounters::builtin();

    let eyes = node("eyesTaskTestNode", json!({"questions": [{}, {}, {}]}));
    assert_eq!(counters.count(&eyes), Some(3));

    let faux_pas = node("fauxPasTestNode", json!({"quiz": [{}, {}]}));
    assert_eq!(counters.count(&faux_pas), Some(2));

    let social = node("socialSituationsNode", json!({"items": [{}]}));
    assert_eq!(counters.count(&social), Some(1));
  }

  #[test]
  fn missing_or_non_array_field_counts_zero() {
    let counters = QuestionCounters::builtin();

    let empty = node("eyesTaskTestNode", json!({}));
    assert_eq!(counters.count(&empty), Some(0));

    let wrong_shape = node("theoryOfMindTestNode", json!({"quiz": "oops"}));
    assert_eq!(counters.count(&wrong_shape), Some(0));
  }

  #[test]
  fn unknown_kind_has_no_count() {
    let counters = QuestionCounters::builtin();
    let lesson = node("lessonTextNode", json!({"text": "hello"}));
    assert_eq!(counters.count(&lesson), None);
  }

  #[test]
  fn registering_a_kind_extends_the_registry() {
    let mut counters = QuestionCounters::builtin();
    counters.register("circuitNode", |data| {
      data
        .get("pinsList")
        .and_then(Value::as_array)
        .map(|pins| pins.len() as u32)
        .unwrap_or(0)
    });

    let circuit = node("circuitNode", json!({"pinsList": [{}, {}, {}, {}]}));
    assert_eq!(counters.count(&circuit), Some(4));
  }
}
