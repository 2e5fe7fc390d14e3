//! Execution controller — runs every registered check for a hook type and
//! aggregates the outcomes.
//!
//! Checks run sequentially in registration order: implementations may have
//! ordering-sensitive side effects (inspecting state a prior check touched),
//! so the engine does not assume they are independent.
//!
//! No individual check failure, error, or panic escapes `run` — everything
//! is captured into the returned [`RunReport`].

use std::sync::Arc;

use tokio::task::JoinError;
use tracing::{debug, error, info, warn};

use crate::check::Check;
use crate::definitions::{CheckOutcome, HookType};
use crate::policy::{SkipConfig, SkipContext, SkipDecision, SkipPolicy};
use crate::registry::CheckRegistry;
use crate::report::{CheckReport, RunReport, aggregate};

/// Runs registered checks for a hook type and folds their outcomes.
#[derive(Debug)]
pub struct HookController {
    /// Check registry.
    registry: Arc<CheckRegistry>,
    /// Skip policy.
    policy: SkipPolicy,
}

impl HookController {
    /// Creates a new controller over a registry.
    pub fn new(registry: Arc<CheckRegistry>) -> Self {
        Self {
            registry,
            policy: SkipPolicy,
        }
    }

    /// Returns a reference to the check registry.
    pub fn registry(&self) -> &Arc<CheckRegistry> {
        &self.registry
    }

    /// Runs one execution pass for a hook type.
    ///
    /// Builds each registered check in order, applies the skip policy, and
    /// invokes eligible checks exactly once. Running with no registered
    /// checks is a vacuous success.
    pub async fn run(&self, hook: HookType, skip: &SkipConfig) -> RunReport {
        let factories = self.registry.checks_for(&hook).await;

        if factories.is_empty() {
            debug!(hook = %hook, "No checks registered");
            return RunReport::empty(hook);
        }

        debug!(
            hook = %hook,
            check_count = factories.len(),
            "Running checks"
        );

        let ctx = SkipContext::new(hook.clone(), skip.clone());
        let mut checks = Vec::with_capacity(factories.len());

        for factory in &factories {
            let check = factory.build();
            let name = check.name().to_string();

            let outcome = match self.policy.decide(check.as_ref(), &ctx).await {
                Ok(SkipDecision::Skip) => {
                    debug!(hook = %hook, check = %name, "Check skipped");
                    CheckOutcome::Skipped
                }
                Ok(SkipDecision::Run) => self.run_check(&hook, &name, check).await,
                Err(e) => {
                    warn!(
                        hook = %hook,
                        check = %name,
                        error = %e,
                        "Skip decision failed"
                    );
                    CheckOutcome::Errored {
                        message: e.to_string(),
                    }
                }
            };

            checks.push(CheckReport::new(name, outcome));
        }

        let report = aggregate(hook, checks);

        info!(
            hook = %report.hook,
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            skipped = report.skipped,
            success = report.success,
            "Hook pass finished"
        );

        report
    }

    /// Invokes one check's `run`, catching panics at the task boundary so a
    /// crashing check cannot abort the rest of the pass.
    async fn run_check(&self, hook: &HookType, name: &str, check: Arc<dyn Check>) -> CheckOutcome {
        let result = tokio::spawn(async move { check.run().await }).await;

        match result {
            Ok(Ok(status)) => {
                let outcome = CheckOutcome::from(status);
                match &outcome {
                    CheckOutcome::Failed { message } => {
                        warn!(
                            hook = %hook,
                            check = %name,
                            message = message.as_deref().unwrap_or(""),
                            "Check failed"
                        );
                    }
                    _ => {
                        debug!(hook = %hook, check = %name, "Check passed");
                    }
                }
                outcome
            }
            Ok(Err(e)) => {
                error!(hook = %hook, check = %name, error = %e, "Check errored");
                CheckOutcome::Errored {
                    message: e.to_string(),
                }
            }
            Err(join_err) => {
                let message = panic_message(join_err);
                error!(hook = %hook, check = %name, error = %message, "Check panicked");
                CheckOutcome::Errored { message }
            }
        }
    }
}

/// Extracts a readable message from a crashed check task.
fn panic_message(err: JoinError) -> String {
    if !err.is_panic() {
        return "check task was cancelled".to_string();
    }

    let payload = err.into_panic();
    if let Some(s) = payload.downcast_ref::<String>() {
        format!("check panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        format!("check panicked: {s}")
    } else {
        "check panicked".to_string()
    }
}
