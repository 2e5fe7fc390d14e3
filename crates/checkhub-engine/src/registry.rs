//! Check registry — ordered, per-hook-type registration of check factories.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::check::{Check, CheckFactory, ClosureFactory};
use crate::definitions::HookType;

/// Registry of check factories organized by hook type.
///
/// Populated during startup/plugin loading; read-only during execution
/// passes. Registration order is the execution order — no priorities, no
/// dedup (registering the same factory twice runs the check twice).
#[derive(Debug)]
pub struct CheckRegistry {
    /// Hook type → ordered list of factories.
    factories: RwLock<HashMap<HookType, Vec<Arc<dyn CheckFactory>>>>,
}

impl CheckRegistry {
    /// Creates a new empty check registry.
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a check factory for a hook type, appending in order.
    pub async fn register(&self, hook: HookType, factory: Arc<dyn CheckFactory>) {
        let mut factories = self.factories.write().await;
        let entries = factories.entry(hook.clone()).or_default();
        entries.push(factory);

        info!(
            hook = %hook,
            total = entries.len(),
            "Check registered"
        );
    }

    /// Registers a closure as a check factory.
    pub async fn register_fn<F>(&self, hook: HookType, build: F)
    where
        F: Fn() -> Arc<dyn Check> + Send + Sync + 'static,
    {
        self.register(hook, Arc::new(ClosureFactory::new(build)))
            .await;
    }

    /// Returns the factories for a hook type in registration order.
    ///
    /// An unregistered hook type yields an empty list, never an error.
    pub async fn checks_for(&self, hook: &HookType) -> Vec<Arc<dyn CheckFactory>> {
        let factories = self.factories.read().await;
        factories.get(hook).cloned().unwrap_or_default()
    }

    /// Returns whether any checks are registered for a hook type.
    pub async fn has_checks(&self, hook: &HookType) -> bool {
        let factories = self.factories.read().await;
        factories
            .get(hook)
            .map(|entries| !entries.is_empty())
            .unwrap_or(false)
    }

    /// Returns the number of checks registered for a hook type.
    pub async fn check_count(&self, hook: &HookType) -> usize {
        let factories = self.factories.read().await;
        factories.get(hook).map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns all hook types with at least one registered check.
    pub async fn registered_hooks(&self) -> Vec<HookType> {
        let factories = self.factories.read().await;
        factories.keys().cloned().collect()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
