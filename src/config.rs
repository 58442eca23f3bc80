//! TOML configuration: invoker mode, simulation tuning, startup merges.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which invoker implementation the process uses. Never mixed at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvokerMode {
    Live,
    /// Default: no live calls leave the process unless configured to.
    #[default]
    Simulated,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    /// Base URL prepended to relative descriptor paths.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twilio.com".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Probability in [0, 1] that a simulated call fails.
    pub failure_rate: f64,
    pub latency_ms: u64,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            failure_rate: 0.3,
            latency_ms: 1500,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: InvokerMode,
    pub live: LiveConfig,
    pub simulation: SimConfig,
    /// JSON descriptor files merged into the catalog at startup, with the
    /// same validation as a runtime upload.
    pub descriptor_files: Vec<std::path::PathBuf>,
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_simulated() {
        let config = Config::default();
        assert_eq!(config.mode, InvokerMode::Simulated);
        assert!((config.simulation.failure_rate - 0.3).abs() < f64::EPSILON);
        assert!(config.descriptor_files.is_empty());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            mode = "live"

            [live]
            base_url = "https://api.example.com"

            [simulation]
            failure_rate = 0.5
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.mode, InvokerMode::Live);
        assert_eq!(config.live.base_url, "https://api.example.com");
        // Unspecified fields keep their defaults.
        assert_eq!(config.live.timeout_secs, 10);
        assert_eq!(config.simulation.seed, Some(42));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load(Path::new("/nonexistent/apivault.toml")).unwrap();
        assert_eq!(config.mode, InvokerMode::Simulated);
    }
}
