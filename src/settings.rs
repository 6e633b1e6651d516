use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QianjiError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_output_dir_string")]
    pub output_dir: String,
}

fn default_output_dir_string() -> String {
    default_output_dir().to_string_lossy().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir_string(),
        }
    }
}

fn home_or_cwd() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn config_dir() -> PathBuf {
    home_or_cwd().join(".config").join("qianji")
}

fn default_output_dir() -> PathBuf {
    home_or_cwd().join("Documents").join("qianji")
}

const SETTINGS_FILE: &str = "settings.json";

/// Settings stored under `dir`; a missing or unreadable file gives defaults.
pub fn load_from(dir: &Path) -> Settings {
    std::fs::read_to_string(dir.join(SETTINGS_FILE))
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// Write settings as pretty JSON under `dir`, creating it. Returns the file path.
pub fn save_to(dir: &Path, settings: &Settings) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| QianjiError::Settings(e.to_string()))?;
    let path = dir.join(SETTINGS_FILE);
    std::fs::write(&path, format!("{json}\n"))?;
    Ok(path)
}

pub fn load_settings() -> Settings {
    load_from(&config_dir())
}

pub fn save_settings(settings: &Settings) -> Result<PathBuf> {
    save_to(&config_dir(), settings)
}

/// Output directory: the CLI flag when given, otherwise the saved setting.
pub fn resolve_output_dir(flag: Option<&str>) -> PathBuf {
    match flag {
        Some(dir) => PathBuf::from(expand_home(dir)),
        None => PathBuf::from(expand_home(&load_settings().output_dir)),
    }
}

pub fn expand_home(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("nested").join("qianji");
        let settings = Settings {
            output_dir: "/tmp/qianji-out".to_string(),
        };
        let path = save_to(&config, &settings).unwrap();
        assert_eq!(path, config.join("settings.json"));
        assert!(std::fs::read_to_string(&path).unwrap().ends_with("}\n"));

        let loaded = load_from(&config);
        assert_eq!(loaded.output_dir, "/tmp/qianji-out");
    }

    #[test]
    fn test_load_from_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(dir.path()).output_dir, Settings::default().output_dir);

        std::fs::write(dir.path().join("settings.json"), "not json").unwrap();
        assert_eq!(load_from(dir.path()).output_dir, Settings::default().output_dir);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s.output_dir, Settings::default().output_dir);
        assert!(s.output_dir.ends_with("qianji"));
    }

    #[test]
    fn test_flag_overrides_settings() {
        assert_eq!(resolve_output_dir(Some("/tmp/elsewhere")), PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), "/abs/path");
        assert_eq!(expand_home("relative/dir"), "relative/dir");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/out"), format!("{}/out", home.to_string_lossy()));
        }
        assert_eq!(expand_home("~user/out"), "~user/out");
    }
}
