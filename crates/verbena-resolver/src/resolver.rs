use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};
use verbena_config::{EdgeDef, EdgeKindDef, FlowDef, NodeDef};
use verbena_flow::{Edge, EdgeKind, Flow, Node};

use crate::error::ResolveError;
use crate::question_count::QuestionCounters;
use crate::ranges::{ScoreRange, satisfying_range};

/// Resolver performs the write-time validation pass and locks a flow
/// definition into a traversable [`Flow`].
pub struct Resolver {
  counters: QuestionCounters,
}

impl Resolver {
  /// Resolver with the built-in question-count extractors.
  pub fn new() -> Self {
    Self::with_counters(QuestionCounters::builtin())
  }

  /// Resolver with a caller-supplied extractor registry.
  pub fn with_counters(counters: QuestionCounters) -> Self {
    Self { counters }
  }

  /// Validate a submitted definition.
  ///
  /// Runs only when the submission carries full node and edge objects; a
  /// bare-id submission is skipped, not failed. Checks referential
  /// integrity and conditional-range disjointness.
  pub fn validate(&self, def: &FlowDef) -> Result<(), ResolveError> {
    let (Some(nodes), Some(edges)) = (def.nodes.as_defs(), def.edges.as_defs()) else {
      debug!(flow_id = %def.flow_id, "partial submission, skipping semantic validation");
      return Ok(());
    };

    self.check_structure(nodes, edges)?;
    self.check_conditional_ranges(nodes, edges)
  }

  /// Validate and lock a definition into a traversable flow.
  ///
  /// Unlike [`Resolver::validate`], locking requires a fully-materialized
  /// definition: the engine cannot traverse bare id references.
  pub fn lock(&self, def: FlowDef) -> Result<Flow, ResolveError> {
    if !def.is_materialized() {
      return Err(ResolveError::NotMaterialized {
        flow_id: def.flow_id,
      });
    }

    self.validate(&def)?;

    let FlowDef {
      flow_id,
      title,
      execution,
      nodes,
      edges,
      ..
    } = def;

    let nodes = match nodes {
      verbena_config::NodeRefs::Defs(defs) => defs
        .into_iter()
        .map(|d| (d.node_id.clone(), lock_node(d)))
        .collect(),
      verbena_config::NodeRefs::Ids(_) => unreachable!("materialized above"),
    };
    let edges = match edges {
      verbena_config::EdgeRefs::Defs(defs) => defs.into_iter().map(lock_edge).collect(),
      verbena_config::EdgeRefs::Ids(_) => unreachable!("materialized above"),
    };

    Ok(Flow {
      flow_id,
      title,
      algorithm: execution.algo,
      nodes,
      edges,
    })
  }

  fn check_structure(&self, nodes: &[NodeDef], edges: &[EdgeDef]) -> Result<(), ResolveError> {
    let mut node_ids = HashSet::new();
    for node in nodes {
      if !node_ids.insert(node.node_id.as_str()) {
        return Err(ResolveError::DuplicateNodeId {
          node_id: node.node_id.clone(),
        });
      }
    }

    for edge in edges {
      for endpoint in [&edge.source, &edge.target] {
        if !node_ids.contains(endpoint.as_str()) {
          return Err(ResolveError::InvalidEdge {
            edge_id: edge.edge_id.clone(),
            node_id: endpoint.clone(),
          });
        }
      }
    }

    Ok(())
  }

  /// Prove that conditional routing is unambiguous: for every source node
  /// with a known question count, the conditional edges leaving it admit
  /// pairwise disjoint score ranges.
  fn check_conditional_ranges(
    &self,
    nodes: &[NodeDef],
    edges: &[EdgeDef],
  ) -> Result<(), ResolveError> {
    let nodes_by_id: HashMap<&str, &NodeDef> =
      nodes.iter().map(|n| (n.node_id.as_str(), n)).collect();

    let mut by_source: HashMap<&str, Vec<&EdgeDef>> = HashMap::new();
    for edge in edges {
      if matches!(edge.kind, EdgeKindDef::Conditional { .. }) {
        by_source.entry(edge.source.as_str()).or_default().push(edge);
      }
    }

    for (source_id, conditional) in by_source {
      let Some(source) = nodes_by_id.get(source_id) else {
        continue;
      };
      let Some(question_count) = self.counters.count(source) else {
        // Tolerated gap: without a count we cannot prove disjointness.
        warn!(
          node_id = %source_id,
          kind = %source.kind,
          "no question-count extractor for node kind, skipping overlap check"
        );
        continue;
      };

      let ranges: Vec<(&str, ScoreRange)> = conditional
        .iter()
        .map(|edge| {
          let EdgeKindDef::Conditional {
            operator,
            threshold,
          } = &edge.kind
          else {
            unreachable!("filtered to conditional edges above");
          };
          (
            edge.edge_id.as_str(),
            satisfying_range(*operator, *threshold, question_count),
          )
        })
        .collect();

      for i in 0..ranges.len() {
        for j in (i + 1)..ranges.len() {
          let (first_edge, first_range) = ranges[i];
          let (second_edge, second_range) = ranges[j];
          if first_range.overlaps(&second_range) {
            return Err(ResolveError::OverlappingConditionalEdges {
              source_id: source_id.to_string(),
              first_edge: first_edge.to_string(),
              first_range,
              second_edge: second_edge.to_string(),
              second_range,
              question_count,
            });
          }
        }
      }
    }

    Ok(())
  }
}

impl Default for Resolver {
  fn default() -> Self {
    Self::new()
  }
}

fn lock_node(def: NodeDef) -> Node {
  Node {
    node_id: def.node_id,
    title: def.title,
    description: def.description,
    difficulty: def.difficulty,
    platform: def.platform,
    kind: def.kind,
    data: def.data,
  }
}

fn lock_edge(def: EdgeDef) -> Edge {
  Edge {
    edge_id: def.edge_id,
    source: def.source,
    target: def.target,
    title: def.title,
    code: def.code,
    kind: match def.kind {
      EdgeKindDef::Plain => EdgeKind::Plain,
      EdgeKindDef::Conditional {
        operator,
        threshold,
      } => EdgeKind::Conditional {
        operator,
        threshold,
      },
    },
  }
}
