use std::collections::HashMap;

use crate::algorithm::DistributionAlgorithm;
use crate::least_visited::LeastVisitedAlgorithm;
use crate::random::RandomAlgorithm;

pub type AlgorithmFactory = Box<dyn Fn() -> Box<dyn DistributionAlgorithm> + Send + Sync>;

/// Name -> constructor table for distribution algorithms.
///
/// An explicit value passed into [`Execution::new`](crate::Execution::new),
/// not a process-wide singleton, so tests and embedders can supply their
/// own policies without global state.
pub struct AlgorithmRegistry {
  factories: HashMap<String, AlgorithmFactory>,
}

impl AlgorithmRegistry {
  /// Empty registry.
  pub fn empty() -> Self {
    Self {
      factories: HashMap::new(),
    }
  }

  /// Registry with the built-in policies: `random` and `leastVisited`.
  pub fn builtin() -> Self {
    let mut registry = Self::empty();
    registry.register("random", || Box::new(RandomAlgorithm::new()));
    registry.register("leastVisited", || Box::new(LeastVisitedAlgorithm));
    registry
  }

  pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
  where
    F: Fn() -> Box<dyn DistributionAlgorithm> + Send + Sync + 'static,
  {
    self.factories.insert(name.into(), Box::new(factory));
  }

  /// Instantiate the named algorithm, or `None` if it was never registered.
  pub fn create(&self, name: &str) -> Option<Box<dyn DistributionAlgorithm>> {
    self.factories.get(name).map(|factory| factory())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.factories.contains_key(name)
  }

  /// Registered algorithm names.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.factories.keys().map(String::as_str)
  }
}

impl Default for AlgorithmRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_registry_knows_the_shipped_policies() {
    let registry = AlgorithmRegistry::builtin();
    assert!(registry.contains("random"));
    assert!(registry.contains("leastVisited"));
    assert!(registry.create("random").is_some());
    assert!(registry.create("no-such-policy").is_none());
  }

  #[test]
  fn custom_policies_can_be_registered() {
    let mut registry = AlgorithmRegistry::empty();
    assert!(!registry.contains("random"));
    registry.register("mine", || Box::new(LeastVisitedAlgorithm));
    assert!(registry.contains("mine"));
    assert_eq!(registry.names().count(), 1);
  }
}
