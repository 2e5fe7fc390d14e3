//! # checkhub-engine
//!
//! Hook-execution engine for CheckHub. Provides:
//!
//! - Check contract every pluggable check implements (skip-decision + run)
//! - Check registry with ordered, per-hook-type registration
//! - Skip policy combining ambient skip configuration with a check's own answer
//! - Execution controller with per-check error and panic isolation
//! - Pure result aggregation into a reportable pass/fail verdict
//!
//! Check implementations, VCS hook installation, and CLI reporting live
//! outside this crate; the engine treats every check as opaque.

pub mod check;
pub mod controller;
pub mod definitions;
pub mod policy;
pub mod registry;
pub mod report;

pub use check::{Check, CheckFactory, ClosureFactory};
pub use controller::HookController;
pub use definitions::{CheckOutcome, HookType, RunStatus};
pub use policy::{SkipConfig, SkipContext, SkipDecision, SkipPolicy};
pub use registry::CheckRegistry;
pub use report::{CheckReport, RunReport, aggregate};
