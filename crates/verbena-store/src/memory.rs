use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use verbena_config::FlowDef;
use verbena_execution::ExecutionContext;

use crate::{Store, StoreError};

/// In-memory store for tests and the CLI.
#[derive(Default)]
pub struct MemoryStore {
  flows: RwLock<HashMap<String, FlowDef>>,
  contexts: RwLock<HashMap<String, ExecutionContext>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn get_flow(&self, flow_id: &str) -> Result<FlowDef, StoreError> {
    self
      .flows
      .read()
      .expect("flow store lock poisoned")
      .get(flow_id)
      .cloned()
      .ok_or_else(|| StoreError::NotFound(format!("flow {flow_id}")))
  }

  async fn put_flow(&self, def: &FlowDef) -> Result<(), StoreError> {
    self
      .flows
      .write()
      .expect("flow store lock poisoned")
      .insert(def.flow_id.clone(), def.clone());
    Ok(())
  }

  async fn list_flows(&self, query: Option<&str>) -> Result<Vec<FlowDef>, StoreError> {
    let flows = self.flows.read().expect("flow store lock poisoned");
    let needle = query.map(str::to_lowercase);
    let mut matching: Vec<FlowDef> = flows
      .values()
      .filter(|def| match &needle {
        Some(q) => def.title.to_lowercase().contains(q),
        None => true,
      })
      .cloned()
      .collect();
    matching.sort_by(|a, b| a.flow_id.cmp(&b.flow_id));
    Ok(matching)
  }

  async fn delete_flow(&self, flow_id: &str) -> Result<(), StoreError> {
    self
      .flows
      .write()
      .expect("flow store lock poisoned")
      .remove(flow_id)
      .map(|_| ())
      .ok_or_else(|| StoreError::NotFound(format!("flow {flow_id}")))
  }

  async fn get_context(&self, session_id: &str) -> Result<ExecutionContext, StoreError> {
    self
      .contexts
      .read()
      .expect("context store lock poisoned")
      .get(session_id)
      .cloned()
      .ok_or_else(|| StoreError::NotFound(format!("context {session_id}")))
  }

  async fn put_context(&self, ctx: &ExecutionContext) -> Result<(), StoreError> {
    self
      .contexts
      .write()
      .expect("context store lock poisoned")
      .insert(ctx.session_id.clone(), ctx.clone());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use verbena_config::{EdgeRefs, ExecutionSettings, NodeRefs};

  fn flow_def(flow_id: &str, title: &str) -> FlowDef {
    FlowDef {
      flow_id: flow_id.to_string(),
      title: title.to_string(),
      description: String::new(),
      author: None,
      publish: false,
      tags: Vec::new(),
      execution: ExecutionSettings {
        algo: "random".to_string(),
      },
      nodes: NodeRefs::Ids(vec!["a".to_string()]),
      edges: EdgeRefs::Ids(Vec::new()),
    }
  }

  #[tokio::test]
  async fn flows_round_trip_in_either_reference_form() {
    let store = MemoryStore::new();
    let def = flow_def("f1", "Intro to Graphs");
    store.put_flow(&def).await.unwrap();

    let fetched = store.get_flow("f1").await.unwrap();
    assert_eq!(fetched, def);

    let materialized: FlowDef = serde_json::from_str(
      r#"{
        "flow_id": "f2",
        "title": "Full Graph",
        "execution": {"algo": "leastVisited"},
        "nodes": [{"node_id": "a", "type": "lessonTextNode"}],
        "edges": [{"edge_id": "e1", "source": "a", "target": "a", "type": "plain"}]
      }"#,
    )
    .unwrap();
    store.put_flow(&materialized).await.unwrap();
    let fetched = store.get_flow("f2").await.unwrap();
    assert!(fetched.is_materialized());
  }

  #[tokio::test]
  async fn list_filters_by_title_substring() {
    let store = MemoryStore::new();
    store.put_flow(&flow_def("f1", "Intro to Graphs")).await.unwrap();
    store.put_flow(&flow_def("f2", "Advanced Topics")).await.unwrap();

    let all = store.list_flows(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let graphs = store.list_flows(Some("graph")).await.unwrap();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].flow_id, "f1");
  }

  #[tokio::test]
  async fn missing_records_are_not_found() {
    let store = MemoryStore::new();
    assert!(matches!(
      store.get_flow("nope").await,
      Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
      store.delete_flow("nope").await,
      Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
      store.get_context("nope").await,
      Err(StoreError::NotFound(_))
    ));
  }

  #[tokio::test]
  async fn contexts_are_keyed_by_session_id() {
    let store = MemoryStore::new();
    let mut ctx = verbena_execution::ExecutionContext::create("f1", "a", Some("u1"), None);
    store.put_context(&ctx).await.unwrap();

    ctx.current_node_id = "b".to_string();
    store.put_context(&ctx).await.unwrap();

    let fetched = store.get_context(&ctx.session_id).await.unwrap();
    assert_eq!(fetched.current_node_id, "b");
  }
}
