//! Execution orchestrator.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};
use verbena_flow::{Edge, Flow, GHOST_NODE_ID, Node, PresentableNode};

use crate::algorithm::DistributionAlgorithm;
use crate::context::{ExecutionContext, NodeInfo};
use crate::error::ExecutionError;
use crate::registry::AlgorithmRegistry;

/// One traversal step as returned to the caller: the updated context plus
/// the node to present, or `None` once the flow is complete.
#[derive(Debug)]
pub struct ExerciseStep {
  pub ctx: ExecutionContext,
  pub node: Option<PresentableNode>,
}

/// Immutable view of the traversal state threaded through resolution. The
/// caller-visible context is rebuilt once from the final snapshot.
struct Snapshot {
  current_node_id: String,
  node_info: NodeInfo,
}

/// Owns one learner's traversal of one flow.
///
/// The orchestrator is a request-scoped value: callers reconstruct it from
/// a stored [`ExecutionContext`] on every interaction and persist the
/// context returned in each [`ExerciseStep`]. Calls against a single
/// context must be serialized by the caller; distinct contexts are fully
/// independent.
pub struct Execution {
  ctx: ExecutionContext,
  algorithm: Box<dyn DistributionAlgorithm>,
  flow: Flow,
  rng: StdRng,
}

impl Execution {
  /// Construct an orchestrator for `ctx` over `flow`, driving selection
  /// with the named algorithm from `registry`.
  ///
  /// # Errors
  /// [`ExecutionError::UnknownAlgorithm`] when the name was never
  /// registered. This is a configuration error and is raised before any
  /// traversal begins.
  pub fn new(
    ctx: ExecutionContext,
    algorithm: &str,
    flow: Flow,
    registry: &AlgorithmRegistry,
  ) -> Result<Self, ExecutionError> {
    let mut algorithm = registry
      .create(algorithm)
      .ok_or_else(|| ExecutionError::UnknownAlgorithm {
        name: algorithm.to_string(),
      })?;
    algorithm.set_flow(&flow);

    Ok(Self {
      ctx,
      algorithm,
      flow,
      rng: StdRng::from_entropy(),
    })
  }

  /// Seed the entry-node selection, for tests and replay.
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.rng = StdRng::seed_from_u64(seed);
    self
  }

  pub fn context(&self) -> &ExecutionContext {
    &self.ctx
  }

  pub fn flow(&self) -> &Flow {
    &self.flow
  }

  /// Start a traversal: pick an entry node (no incoming edges) uniformly at
  /// random, build a fresh context pointing at it, and return it enriched
  /// with its outgoing-edge metadata.
  ///
  /// # Errors
  /// [`ExecutionError::NoEntryNodes`] when every node has an incoming edge.
  pub fn get_first_exercise(
    &mut self,
    username: Option<&str>,
    user_id: Option<&str>,
  ) -> Result<ExerciseStep, ExecutionError> {
    let graph = self.flow.graph();
    let entry_points = graph.entry_points();
    if entry_points.is_empty() {
      return Err(ExecutionError::NoEntryNodes {
        flow_id: self.flow.flow_id.clone(),
      });
    }

    let first_id = entry_points[self.rng.gen_range(0..entry_points.len())].clone();
    let node = self
      .flow
      .node(&first_id)
      .cloned()
      .expect("entry candidates are drawn from the node set");

    let ctx = ExecutionContext::create(&self.flow.flow_id, &node.node_id, user_id, username);
    self.ctx = ctx.clone();

    info!(
      flow_id = %self.flow.flow_id,
      node_id = %node.node_id,
      session_id = %ctx.session_id,
      "first_exercise_selected"
    );

    let outgoing = self.flow.edges_from(&first_id);
    Ok(ExerciseStep {
      ctx,
      node: Some(PresentableNode::project(node, outgoing)),
    })
  }

  /// The context's current node, unchanged between resolution steps.
  pub fn get_current_node(&self) -> Option<&Node> {
    self.flow.node(&self.ctx.current_node_id)
  }

  /// Advance the traversal given the edges the learner's score satisfied.
  ///
  /// Returns the next presentable node, or `node: None` once no further
  /// node is reachable (flow completion — not an error).
  #[instrument(
    name = "next_exercise",
    skip(self, satisfied_edge_ids),
    fields(
      flow_id = %self.flow.flow_id,
      session_id = %session_id,
      current_node_id = %self.ctx.current_node_id,
    )
  )]
  pub fn get_next_exercise(
    &mut self,
    satisfied_edge_ids: &[String],
    session_id: &str,
  ) -> Result<ExerciseStep, ExecutionError> {
    let satisfied: Vec<Edge> = self
      .flow
      .edges
      .iter()
      .filter(|e| satisfied_edge_ids.contains(&e.edge_id))
      .cloned()
      .collect();

    if self.ctx.current_node_id == GHOST_NODE_ID {
      return Ok(self.ghost_advance(&satisfied));
    }

    let current = self.flow.node(&self.ctx.current_node_id).cloned();
    let snapshot = Snapshot {
      current_node_id: self.ctx.current_node_id.clone(),
      node_info: self.ctx.node_info.clone(),
    };

    let (snapshot, node) = self.resolve(snapshot, current, Some(satisfied))?;

    self.ctx.current_node_id = snapshot.current_node_id;
    self.ctx.node_info = snapshot.node_info;

    match &node {
      Some(presentable) => info!(node_id = %presentable.node.node_id, "exercise_resolved"),
      None => info!("flow_completed"),
    }

    Ok(ExerciseStep {
      ctx: self.ctx.clone(),
      node,
    })
  }

  /// Fixed-function advance out of the ghost state: jump to the first
  /// satisfied edge's target without consulting the algorithm.
  fn ghost_advance(&mut self, satisfied: &[Edge]) -> ExerciseStep {
    let Some(first) = satisfied.first() else {
      return ExerciseStep {
        ctx: self.ctx.clone(),
        node: None,
      };
    };

    let Some(node) = self.flow.node(&first.target).cloned() else {
      return ExerciseStep {
        ctx: self.ctx.clone(),
        node: None,
      };
    };

    self.ctx.current_node_id = node.node_id.clone();
    info!(node_id = %node.node_id, "ghost_advance");

    let outgoing = self.flow.edges_from(&first.target);
    ExerciseStep {
      ctx: self.ctx.clone(),
      node: Some(PresentableNode::project(node, outgoing)),
    }
  }

  /// Resolution step over an immutable snapshot.
  ///
  /// `satisfied: None` is the recursion terminator: present the current
  /// node. `satisfied: Some(edges)` (even empty) consults the algorithm
  /// with the candidate targets; an abstract chosen node triggers another
  /// automatic hop along its plain outgoing edges, since no learner score
  /// exists mid-hop to evaluate conditional ones.
  fn resolve(
    &mut self,
    mut snapshot: Snapshot,
    mut current: Option<Node>,
    mut satisfied: Option<Vec<Edge>>,
  ) -> Result<(Snapshot, Option<PresentableNode>), ExecutionError> {
    let mut visited: HashSet<String> = HashSet::new();

    loop {
      // Absent current node: dangling edge or graph exhaustion.
      let Some(node) = current else {
        return Ok((snapshot, None));
      };

      let Some(edges) = satisfied.take() else {
        snapshot.current_node_id = node.node_id.clone();
        let node_id = node.node_id.clone();
        let outgoing = self.flow.edges_from(&node_id);
        return Ok((snapshot, Some(PresentableNode::project(node, outgoing))));
      };

      let candidates: Vec<Node> = edges
        .iter()
        .filter_map(|e| self.flow.node(&e.target).cloned())
        .collect();
      let selection = self.algorithm.next_exercise(&candidates, &snapshot.node_info);
      snapshot.node_info = selection.node_info;

      let Some(chosen) = selection.node else {
        return Ok((snapshot, None));
      };

      if !visited.insert(chosen.node_id.clone()) {
        return Err(ExecutionError::CycleDetected {
          node_id: chosen.node_id,
        });
      }
      snapshot.current_node_id = chosen.node_id.clone();

      if chosen.is_abstract() {
        info!(node_id = %chosen.node_id, "abstract_node_hop");
        satisfied = Some(
          self
            .flow
            .edges_from(&chosen.node_id)
            .filter(|e| !e.is_conditional())
            .cloned()
            .collect(),
        );
      } else {
        satisfied = None;
      }
      current = Some(chosen);
    }
  }
}
