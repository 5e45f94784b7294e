use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Template configuration loaded from `~/.config/xrest/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, including reading the body.
    pub read_timeout_secs: u64,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Headers sent with every request; per-call headers with the same name win.
    #[serde(default = "default_headers")]
    pub default_headers: BTreeMap<String, String>,
    /// Extra charset aliases (declared label -> canonical name), on top of the built-in ones.
    #[serde(default)]
    pub charset_aliases: BTreeMap<String, String>,
}

fn default_headers() -> BTreeMap<String, String> {
    [
        ("Accept", "application/json"),
        ("Accept-Charset", "UTF-8"),
        ("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            read_timeout_secs: 30,
            user_agent: format!("xrest/{}", env!("CARGO_PKG_VERSION")),
            default_headers: default_headers(),
            charset_aliases: BTreeMap::new(),
        }
    }
}

impl TemplateConfig {
    /// Default headers plus `User-Agent`, in the order they are sent.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = self
            .default_headers
            .iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case("User-Agent"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        headers.push(("User-Agent".to_string(), self.user_agent.clone()));
        headers
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xrest")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TemplateConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<TemplateConfig> {
    if !path.exists() {
        let default_cfg = TemplateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TemplateConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
