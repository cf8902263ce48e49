use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Last visited screen (restored on startup)
    pub last_screen: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "mono".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "swatch", "swatch");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("swatch"));
        Self { data_dir }
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "swatch", "swatch").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        save(&cfg, Some(&path))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
