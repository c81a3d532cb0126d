use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::lookup::DEFAULT_LOOKUP_DELAY_MS;

/// Global configuration loaded from `~/.config/smd/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmdConfig {
    /// Simulated lookup delay in milliseconds.
    pub lookup_delay_ms: u64,
    /// Watermark text a fresh session starts with.
    pub default_watermark: String,
    /// Cap on watermark history entries kept per session (clamped to >= 2).
    pub history_limit: usize,
}

impl Default for SmdConfig {
    fn default() -> Self {
        Self {
            lookup_delay_ms: DEFAULT_LOOKUP_DELAY_MS,
            default_watermark: "chaitanyalinked".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SmdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SmdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SmdConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Load configuration from an explicit path. A missing file yields the
/// defaults; a present but malformed file is an error.
pub fn load_from_path(path: &Path) -> Result<SmdConfig> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SmdConfig::default()),
        Err(e) => return Err(e).with_context(|| format!("read config: {}", path.display())),
    };
    toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SmdConfig::default();
        assert_eq!(cfg.lookup_delay_ms, 2000);
        assert_eq!(cfg.default_watermark, "chaitanyalinked");
        assert_eq!(cfg.history_limit, 100);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SmdConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SmdConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            lookup_delay_ms = 250
            default_watermark = "mymark"
            history_limit = 8
        "#;
        let cfg: SmdConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.lookup_delay_ms, 250);
        assert_eq!(cfg.default_watermark, "mymark");
        assert_eq!(cfg.history_limit, 8);
    }

    #[test]
    fn load_from_missing_path_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, SmdConfig::default());
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "lookup_delay_ms = 0\ndefault_watermark = \"wm\"\nhistory_limit = 3\n",
        )
        .unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.lookup_delay_ms, 0);
        assert_eq!(cfg.default_watermark, "wm");
        assert_eq!(cfg.history_limit, 3);
    }

    #[test]
    fn load_from_path_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "lookup_delay_ms = \"soon\"").unwrap();
        assert!(load_from_path(&path).is_err());
    }
}
