use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operator of a conditional edge, applied as
/// `score <operator> threshold` against the edge's source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionalOperator {
  #[serde(rename = ">")]
  GreaterThan,
  #[serde(rename = ">=")]
  GreaterOrEqual,
  #[serde(rename = "<")]
  LessThan,
  #[serde(rename = "<=")]
  LessOrEqual,
  #[serde(rename = "==")]
  Equal,
}

impl fmt::Display for ConditionalOperator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let symbol = match self {
      ConditionalOperator::GreaterThan => ">",
      ConditionalOperator::GreaterOrEqual => ">=",
      ConditionalOperator::LessThan => "<",
      ConditionalOperator::LessOrEqual => "<=",
      ConditionalOperator::Equal => "==",
    };
    f.write_str(symbol)
  }
}
