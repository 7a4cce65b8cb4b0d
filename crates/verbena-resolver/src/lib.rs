//! Verbena Resolver
//!
//! This crate turns a serializable [`verbena_config::FlowDef`] into a locked
//! [`verbena_flow::Flow`], and performs the write-time semantic checks the
//! engine relies on at traversal time:
//!
//! 1. Structural integrity: unique node ids, edge endpoints referencing
//!    nodes of the same flow.
//! 2. Deterministic conditional routing: for every node whose question count
//!    is known, the conditional edges leaving it must induce pairwise
//!    disjoint score ranges over `[0, Q]`.
//!
//! Validation only runs when the submitted definition carries full node and
//! edge objects. Bare-id submissions (partial updates) are skipped; callers
//! must submit the full graph at least once before relying on disjointness.

mod error;
mod question_count;
mod ranges;
mod resolver;

pub use error::ResolveError;
pub use question_count::QuestionCounters;
pub use ranges::ScoreRange;
pub use resolver::Resolver;
