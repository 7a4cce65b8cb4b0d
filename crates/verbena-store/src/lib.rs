//! Verbena Store
//!
//! This crate provides the storage trait for flow documents and execution
//! contexts. The engine itself never persists anything: flows are fetched
//! before an orchestrator is constructed, and the context returned by each
//! resolution step is stored here and re-supplied on the next request.
//!
//! The [`Store`] trait defines operations for:
//! - Creating, fetching, listing and deleting flow definitions
//! - Storing and fetching execution contexts between learner interactions
//!
//! Flow definitions round-trip in whichever reference form they were
//! submitted: bare id lists and fully-materialized graphs are both valid
//! documents.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use verbena_config::FlowDef;
use verbena_execution::ExecutionContext;

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  /// The requested record was not found.
  #[error("not found: {0}")]
  NotFound(String),
}

/// Storage trait for flow documents and execution contexts.
#[async_trait]
pub trait Store: Send + Sync {
  /// Fetch a flow definition by id.
  async fn get_flow(&self, flow_id: &str) -> Result<FlowDef, StoreError>;

  /// Create or replace a flow definition.
  async fn put_flow(&self, def: &FlowDef) -> Result<(), StoreError>;

  /// List flow definitions, optionally filtered by a case-insensitive
  /// title substring.
  async fn list_flows(&self, query: Option<&str>) -> Result<Vec<FlowDef>, StoreError>;

  /// Delete a flow definition.
  async fn delete_flow(&self, flow_id: &str) -> Result<(), StoreError>;

  /// Fetch an execution context by session id.
  async fn get_context(&self, session_id: &str) -> Result<ExecutionContext, StoreError>;

  /// Create or replace an execution context, keyed by its session id.
  async fn put_context(&self, ctx: &ExecutionContext) -> Result<(), StoreError>;
}
