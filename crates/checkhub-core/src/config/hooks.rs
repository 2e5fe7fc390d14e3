//! Hook execution configuration.

use serde::{Deserialize, Serialize};

/// Hook execution configuration.
///
/// The `skip` value is the raw ambient skip input, resolved by the caller
/// (typically from the `SKIP_CHECKS` environment variable) before a pass
/// starts. The engine itself never reads the process environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Raw skip directive: `"all"`, or a comma-separated list of check names.
    #[serde(default)]
    pub skip: Option<String>,
}
