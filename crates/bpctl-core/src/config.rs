use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::report::DEFAULT_RELEASE_HINT;

#[derive(Debug, Default, Deserialize)]
pub struct BpctlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BpctlConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path}"))?;
        let cfg = toml::from_str::<Self>(&text)
            .with_context(|| format!("failed to parse TOML config: {path}"))?;
        Ok(cfg)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// App used when neither `--app` nor the environment names one.
    pub default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_release_hint")]
    pub release_hint: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            release_hint: default_release_hint(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_release_hint() -> String {
    DEFAULT_RELEASE_HINT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: BpctlConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.api.base_url, DEFAULT_API_URL);
        assert_eq!(cfg.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.app.default, None);
        assert_eq!(cfg.output.release_hint, DEFAULT_RELEASE_HINT);
    }

    #[test]
    fn loads_sections_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bpctl.toml");
        std::fs::write(
            &path,
            r#"
            [api]
            base_url = "http://localhost:5000"

            [app]
            default = "example"

            [output]
            release_hint = "git push origin main"
            "#,
        )
        .unwrap();

        let cfg = BpctlConfig::load_from_file(path.to_str().unwrap()).expect("config should load");
        assert_eq!(cfg.api.base_url, "http://localhost:5000");
        assert_eq!(cfg.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.app.default.as_deref(), Some("example"));
        assert_eq!(cfg.output.release_hint, "git push origin main");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cfg = BpctlConfig::load_or_default(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bpctl.toml");
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();
        let err = BpctlConfig::load_or_default(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("failed to parse TOML config"));
    }
}
