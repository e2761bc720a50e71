use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::CurlOptions;
use crate::storage::DEFAULT_OUTPUT_DIR;
use crate::url_model::{TemplateError, UrlTemplate, DEFAULT_URL_TEMPLATE};

/// Default number of fetch units in flight.
pub const DEFAULT_PROCESSOR: usize = 3;

/// Settings loaded from `~/.config/imgbatch/config.toml`.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// URL template with `{prefix}`, `{code}`, `{suffix}`, `{qty}`, `{size}`,
    /// `{wid}`, `{hei}`, `{fmt}`, `{extend}`, `{column1}`, `{column2}`.
    pub url_template: String,
    /// Preferred output directory; an alternate name is used if it exists.
    pub output_dir: PathBuf,
    /// Maximum concurrent fetch units (one per product code).
    pub processor: usize,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = no deadline).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Append logs to this file instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            processor: DEFAULT_PROCESSOR,
            connect_timeout_secs: None,
            timeout_secs: None,
            user_agent: None,
            log_file: None,
        }
    }
}

impl BatchConfig {
    pub fn template(&self) -> Result<UrlTemplate, TemplateError> {
        UrlTemplate::parse(&self.url_template)
    }

    pub fn curl_options(&self) -> CurlOptions {
        CurlOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgbatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG path, creating a default file if none exists.
pub fn load_or_init() -> Result<BatchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from_path(path: &Path) -> Result<BatchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: BatchConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
