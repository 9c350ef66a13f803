use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::retry::RetryPolicy;

/// Environment variable that overrides `api_token` from the config file.
pub const API_TOKEN_ENV: &str = "FIXKIT_API_TOKEN";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per fetch (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay: Duration::try_from_secs_f64(self.base_delay_secs)
                .unwrap_or(Duration::ZERO),
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/fixkit/config.toml`.
///
/// `Debug` redacts `api_token` so the config can be logged.
#[derive(Clone, Serialize, Deserialize)]
pub struct FixkitConfig {
    /// Connect timeout for fetches, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for a single fetch attempt, in seconds.
    pub timeout_secs: u64,
    /// Follow HTTP redirects.
    pub follow_redirects: bool,
    pub user_agent: String,
    /// Bearer token sent as `Authorization`. `FIXKIT_API_TOKEN` takes precedence.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for FixkitConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
            user_agent: concat!("fixkit/", env!("CARGO_PKG_VERSION")).to_string(),
            api_token: None,
            retry: None,
        }
    }
}

impl fmt::Debug for FixkitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixkitConfig")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("follow_redirects", &self.follow_redirects)
            .field("user_agent", &self.user_agent)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("retry", &self.retry)
            .finish()
    }
}

impl FixkitConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default().to_policy()
    }

    /// Token from the environment if set and non-empty, else from the file.
    pub fn resolved_api_token(&self) -> Option<String> {
        match std::env::var(API_TOKEN_ENV) {
            Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
            _ => self.api_token.clone().filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            follow_redirects: self.follow_redirects,
            user_agent: Some(self.user_agent.clone()),
            bearer_token: self.resolved_api_token(),
            headers: Vec::new(),
            retry: self.retry_policy(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fixkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FixkitConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<FixkitConfig> {
    if !path.exists() {
        let default_cfg = FixkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FixkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
