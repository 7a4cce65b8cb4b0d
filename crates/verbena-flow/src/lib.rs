//! Verbena Flow
//!
//! This crate provides the locked flow representation for Verbena. A locked
//! flow is a validated, fully-materialized form of a flow definition that is
//! ready for traversal.
//!
//! Key differences from `verbena-config`:
//! - Nodes and edges are full objects, never bare id references
//! - Edge endpoints are known to reference nodes of the same flow
//! - Conditional routing has been proven unambiguous by the resolver
//!
//! The flow is read-only for the duration of a traversal. Nothing here
//! validates; validation is the resolver's write-time pass.

mod edge;
mod flow;
mod graph;
mod node;
mod projection;

pub use edge::{Edge, EdgeKind};
pub use flow::Flow;
pub use graph::Graph;
pub use node::{GHOST_NODE_ID, Node};
pub use projection::{EdgeValidation, PresentableNode};
