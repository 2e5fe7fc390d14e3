//! The check contract — the capability set every pluggable check satisfies.

use std::sync::Arc;

use async_trait::async_trait;

use checkhub_core::result::AppResult;

use crate::definitions::RunStatus;
use crate::policy::SkipContext;

/// Trait for check implementations.
///
/// A check is an opaque unit of work with a uniform lifecycle: the engine
/// asks it whether it wants to skip, then (policy permitting) runs it once.
/// One instance is built per execution pass and discarded afterwards.
#[async_trait]
pub trait Check: Send + Sync + std::fmt::Debug {
    /// Returns the check's identity, matched against skip-list entries.
    fn name(&self) -> &str;

    /// Returns whether this check is mandatory.
    ///
    /// Required checks run even under a global skip-all directive. The flag
    /// is fixed at definition time.
    fn required(&self) -> bool {
        false
    }

    /// Decides whether this check wants to skip the current pass.
    ///
    /// Must be a pure decision over the context — no side effects. An `Err`
    /// is treated as a policy-evaluation failure, not as skip or run.
    async fn skip(&self, _ctx: &SkipContext) -> AppResult<bool> {
        Ok(false)
    }

    /// Performs the check's action.
    ///
    /// `Ok(RunStatus::Failed { .. })` is the expected negative result;
    /// `Err` signals an abnormal condition.
    async fn run(&self) -> AppResult<RunStatus>;
}

/// Trait for check factories.
///
/// The registry stores factories rather than instances so the controller can
/// build a fresh check per execution pass. This is also the substitution
/// seam for tests: register a factory that returns a pre-built stub.
pub trait CheckFactory: Send + Sync + std::fmt::Debug {
    /// Builds a check instance for one execution pass.
    fn build(&self) -> Arc<dyn Check>;
}

/// A closure-based check factory for quick registration.
pub struct ClosureFactory {
    /// Factory function.
    build: Box<dyn Fn() -> Arc<dyn Check> + Send + Sync>,
}

impl std::fmt::Debug for ClosureFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureFactory")
            .field("build", &"<closure>")
            .finish()
    }
}

impl ClosureFactory {
    /// Creates a new closure-based factory.
    pub fn new<F>(build: F) -> Self
    where
        F: Fn() -> Arc<dyn Check> + Send + Sync + 'static,
    {
        Self {
            build: Box::new(build),
        }
    }
}

impl CheckFactory for ClosureFactory {
    fn build(&self) -> Arc<dyn Check> {
        (self.build)()
    }
}
