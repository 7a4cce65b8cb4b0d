use serde::{Deserialize, Serialize};

fn default_title() -> String {
  "Node".to_string()
}

fn default_platform() -> String {
  "webApp".to_string()
}

/// A node definition as authored. The payload schema is selected by `kind`
/// (e.g. `"multipleChoiceQuestionNode"`, `"lessonTextNode"`); the engine
/// never interprets `data` beyond the kind-specific question-count
/// extractors in the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
  pub node_id: String,
  #[serde(default = "default_title")]
  pub title: String,
  #[serde(default)]
  pub description: String,
  /// Difficulty rank, 1 (easiest) to 5.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub difficulty: Option<u8>,
  #[serde(default = "default_platform")]
  pub platform: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub data: serde_json::Value,
}
