//! Backend selection configuration.

use serde::{Deserialize, Serialize};

/// Which backend variant to run. Decided once at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// In-process store with inline payloads.
    #[default]
    Local,
    /// Remote store reached over HTTP.
    Remote,
}

/// Top-level backend configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend variant to use.
    #[serde(default)]
    pub mode: BackendMode,
    /// Local backend settings.
    #[serde(default)]
    pub local: LocalBackendConfig,
    /// Remote backend settings.
    #[serde(default)]
    pub remote: RemoteBackendConfig,
}

/// Local backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalBackendConfig {
    /// Path of the persisted JSON collection. Empty means in-memory only.
    #[serde(default)]
    pub db_path: String,
    /// Total-size quota across all active records, in bytes.
    #[serde(default = "default_quota")]
    pub quota_bytes: u64,
}

impl Default for LocalBackendConfig {
    fn default() -> Self {
        Self {
            db_path: String::new(),
            quota_bytes: default_quota(),
        }
    }
}

/// Remote backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteBackendConfig {
    /// Base URL of the remote file service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteBackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_quota() -> u64 {
    52_428_800 // 50 MB
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}
