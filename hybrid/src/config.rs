use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Credentials and model selection forwarded to the move suggester.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub api_key: String,
    pub model_name: String,
    pub provider_name: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSettings {
    pub depth: u8,
    pub time_budget_ms: u64,
}

impl Default for ReferenceSettings {
    fn default() -> Self {
        Self {
            depth: 12,
            time_budget_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EngineMode {
    #[default]
    Local,
    CustomRemote(ProviderConfig),
    ReferenceRemote(ReferenceSettings),
}

/// What to do when a remote source fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Return the failure to the caller.
    #[default]
    Surface,
    /// Let the local search answer instead, recording why.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridConfig {
    /// Bound on a move suggester request.
    pub remote_timeout: Duration,
    /// Added to the reference engine's own time budget before giving up.
    pub reference_grace: Duration,
    pub fallback: FallbackPolicy,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            remote_timeout: Duration::from_secs(10),
            reference_grace: Duration::from_secs(2),
            fallback: FallbackPolicy::Surface,
        }
    }
}
