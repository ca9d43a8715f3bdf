// src/config/app.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, fs, path::Path};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config/credibility.toml";
pub const ENV_CONFIG_PATH: &str = "CREDIBILITY_CONFIG_PATH";
/// Overrides `client.base_url`.
pub const ENV_API_BASE: &str = "CREDIBILITY_API_BASE";

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
fn default_endpoint_path() -> String {
    "/api/analyze".to_string()
}
fn default_min_content_chars() -> usize {
    20
}
fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Where and how the client reaches the remote analyzer.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    /// Whole-request timeout. Unset means wait for the server.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint_path: default_endpoint_path(),
            timeout_ms: None,
            connect_timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full endpoint URL; tolerates a trailing `/` on the base and a missing
    /// leading `/` on the path.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Trimmed content shorter than this is rejected with 400.
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_content_chars: default_min_content_chars(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(s).context("parsing credibility config")?;
        Ok(cfg)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&data)
    }

    /// `$CREDIBILITY_CONFIG_PATH`, else `config/credibility.toml`; a missing default
    /// file yields defaults. `$CREDIBILITY_API_BASE` is applied last.
    pub fn load() -> Result<Self> {
        let mut cfg = match env::var(ENV_CONFIG_PATH) {
            Ok(p) => Self::load_from_file(&p)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_PATH)?
            }
            Err(_) => Self::default(),
        };
        cfg.apply_env();
        info!(
            endpoint = %cfg.client.endpoint(),
            min_content_chars = cfg.service.min_content_chars,
            "credibility config loaded"
        );
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Ok(base) = env::var(ENV_API_BASE) {
            let base = base.trim();
            if !base.is_empty() {
                self.client.base_url = base.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.client.endpoint(), "http://127.0.0.1:8000/api/analyze");
        assert_eq!(cfg.client.timeout_ms, None);
        assert_eq!(cfg.service.min_content_chars, 20);
        assert_eq!(cfg.service.static_dir, "static");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [client]
            base_url = "https://scorer.example/"
            timeout_ms = 2500

            [service]
            min_content_chars = 5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.client.endpoint(), "https://scorer.example/api/analyze");
        assert_eq!(cfg.client.timeout_ms, Some(2500));
        assert_eq!(cfg.client.connect_timeout_ms, None);
        assert_eq!(cfg.service.min_content_chars, 5);
        assert_eq!(cfg.service.static_dir, "static");
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let mut c = ClientConfig::with_base_url("http://h:1/");
        c.endpoint_path = "api/analyze".into();
        assert_eq!(c.endpoint(), "http://h:1/api/analyze");
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[client\nbase_url=").is_err());
    }

    #[test]
    #[serial_test::serial]
    fn env_overrides_base_url() {
        std::env::set_var(ENV_API_BASE, "http://override:9000");
        let mut cfg = AppConfig::default();
        cfg.apply_env();
        std::env::remove_var(ENV_API_BASE);
        assert_eq!(cfg.client.endpoint(), "http://override:9000/api/analyze");
    }
}
