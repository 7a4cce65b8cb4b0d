//! Verbena Execution
//!
//! The learning-flow execution engine: given a locked [`verbena_flow::Flow`]
//! and a per-learner [`ExecutionContext`], the [`Execution`] orchestrator
//! determines which node the learner sees next.
//!
//! Next-node selection is delegated to a pluggable
//! [`DistributionAlgorithm`], looked up by name in an explicit
//! [`AlgorithmRegistry`] passed to the orchestrator's constructor. The
//! engine is purely synchronous; persistence of the context between calls
//! is the caller's responsibility.

mod algorithm;
mod context;
mod error;
mod execution;
mod least_visited;
mod random;
mod registry;

pub use algorithm::{DistributionAlgorithm, Selection};
pub use context::{ExecutionContext, NodeInfo};
pub use error::ExecutionError;
pub use execution::{Execution, ExerciseStep};
pub use least_visited::LeastVisitedAlgorithm;
pub use random::RandomAlgorithm;
pub use registry::{AlgorithmFactory, AlgorithmRegistry};
