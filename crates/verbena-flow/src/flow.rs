use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::graph::Graph;
use crate::node::Node;

/// A locked flow ready for traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
  pub flow_id: String,
  pub title: String,
  /// Name of the distribution algorithm recorded by the author.
  pub algorithm: String,
  pub nodes: HashMap<String, Node>,
  pub edges: Vec<Edge>,
}

impl Flow {
  /// Get a node by id.
  pub fn node(&self, node_id: &str) -> Option<&Node> {
    self.nodes.get(node_id)
  }

  /// Edges leaving the given node.
  pub fn edges_from<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> {
    self.edges.iter().filter(move |e| e.source == node_id)
  }

  /// Build the graph structure for traversal.
  pub fn graph(&self) -> Graph {
    Graph::new(&self.nodes, &self.edges)
  }
}
