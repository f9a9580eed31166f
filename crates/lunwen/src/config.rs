//! Configuration for the command line front end
//!
//! Holds the default analyzer mode, output format and the per-section length
//! limits that essays are checked against. The analyzers themselves take no
//! configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{LunwenError, Result};
use crate::wordcount::{SectionBounds, SectionCheck};

const CONFIG_PATHS: [&str; 3] = [".lunwen.json", "lunwen.json", ".lunwen/config.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
  #[default]
  Basic,
  Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub mode: AnalysisMode,
  #[serde(default)]
  pub format: OutputFormat,
  /// Length limits keyed by section name
  #[serde(default = "default_sections")]
  pub sections: BTreeMap<String, SectionBounds>,
}

fn default_sections() -> BTreeMap<String, SectionBounds> {
  [
    ("title", 10, 50),
    ("background", 300, 800),
    ("problem_analysis", 200, 500),
    ("solution", 500, 1200),
    ("implementation", 400, 1000),
    ("results", 300, 700),
    ("conclusion", 200, 500),
  ]
  .into_iter()
  .map(|(name, min, max)| (name.to_string(), SectionBounds::new(min, max)))
  .collect()
}

impl Default for Config {
  fn default() -> Self {
    Self { mode: AnalysisMode::default(), format: OutputFormat::default(), sections: default_sections() }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| LunwenError::io(path, e))?;
    serde_json::from_str(&content)
      .map_err(|source| LunwenError::InvalidConfig { path: path.to_path_buf(), source })
  }

  /// Load from the working directory, then the user config dir, else defaults
  pub fn load() -> Result<Self> {
    let user_config = dirs::config_dir().map(|dir| dir.join("lunwen").join("config.json"));
    let candidates = CONFIG_PATHS.iter().map(PathBuf::from).chain(user_config);

    for path in candidates {
      if path.exists() {
        tracing::debug!(path = %path.display(), "loading configuration");
        return Self::load_from_file(path);
      }
    }

    Ok(Config::default())
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content).map_err(|e| LunwenError::io(path, e))?;
    Ok(())
  }

  pub fn section(&self, name: &str) -> Result<SectionBounds> {
    self.sections.get(name).copied().ok_or_else(|| LunwenError::UnknownSection {
      name: name.to_string(),
      known: self.sections.keys().cloned().collect::<Vec<_>>().join(", "),
    })
  }

  /// Check `text` against the bounds configured for `name`
  pub fn check_section(&self, name: &str, text: &str) -> Result<SectionCheck> {
    Ok(self.section(name)?.check(text))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.mode, AnalysisMode::Basic);
    assert_eq!(config.format, OutputFormat::Pretty);
    assert_eq!(config.sections.len(), 7);
    assert_eq!(config.section("solution").unwrap(), SectionBounds::new(500, 1200));
  }

  #[test]
  fn test_config_load_nonexistent_file() {
    let result = Config::load_from_file(Path::new("nonexistent.json"));
    assert!(matches!(result, Err(LunwenError::Io { .. })));
  }

  #[test]
  fn test_config_load_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("lunwen.json");

    let config_content = r#"{
            "mode": "advanced",
            "format": "json",
            "sections": {
                "abstract": { "min_words": 100, "max_words": 300 }
            }
        }"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    assert_eq!(config.mode, AnalysisMode::Advanced);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.sections.len(), 1);
    assert_eq!(config.section("abstract").unwrap(), SectionBounds::new(100, 300));
  }

  #[test]
  fn test_config_load_partial_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("partial.json");

    fs::write(&config_path, r#"{ "mode": "advanced" }"#).unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    assert_eq!(config.mode, AnalysisMode::Advanced);
    // Other fields should have defaults
    assert_eq!(config.format, OutputFormat::Pretty);
    assert_eq!(config.sections, default_sections());
  }

  #[test]
  fn test_config_load_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid.json");

    fs::write(&config_path, "{ invalid json }").unwrap();

    let result = Config::load_from_file(&config_path);
    assert!(matches!(result, Err(LunwenError::InvalidConfig { .. })));
  }

  #[test]
  fn test_config_load_and_save() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("test_config.json");

    let mut original = Config::default();
    original.format = OutputFormat::Json;
    original.sections.insert("abstract".to_string(), SectionBounds::new(50, 150));

    original.save_to_file(&config_path).unwrap();
    let loaded = Config::load_from_file(&config_path).unwrap();

    assert_eq!(original, loaded);
  }

  #[test]
  fn test_unknown_section() {
    let config = Config::default();
    let err = config.section("appendix").unwrap_err();
    assert!(err.to_string().contains("appendix"));
    assert!(err.to_string().contains("background"));
  }

  #[test]
  fn test_check_section() {
    let config = Config::default();
    let check = config.check_section("title", "基于微服务的电商平台架构设计").unwrap();
    assert_eq!(check.count, 14);
    assert!(check.within_bounds);

    let check = config.check_section("title", "短").unwrap();
    assert!(!check.within_bounds);
  }
}
