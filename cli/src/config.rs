use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use numerology_core::Gender;
use serde::{Deserialize, Deserializer, Serialize};

const CONFIG_DIR: &str = "numerology";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub log_level: String,
    /// Used when a command line carries no `gender:` argument. Accepts the
    /// same spellings as `gender:` (`f`, `female`, `Female`, ...).
    #[serde(deserialize_with = "gender_from_str")]
    pub default_gender: Option<Gender>,
    /// Colour table headers in text output.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
            default_gender: None,
            color: true,
        }
    }
}

impl CliConfig {
    /// Loads `explicit` if given, else the per-user config file.
    ///
    /// A missing file means defaults. A file that exists but does not parse
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Ok(p) => p,
                Err(_) => return Ok(Self::default()),
            },
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

fn gender_from_str<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| s.parse::<Gender>().map_err(serde::de::Error::custom))
        .transpose()
}

pub fn default_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;
    Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = CliConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, "warn");
        assert!(config.color);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"format": "json", "default_gender": "Female"}}"#).unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.default_gender, Some(Gender::Female));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_default_gender_accepts_cli_spellings() {
        for (raw, expected) in [("female", Gender::Female), ("F", Gender::Female), ("o", Gender::Other)] {
            let json = format!(r#"{{"default_gender": "{}"}}"#, raw);
            let config: CliConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config.default_gender, Some(expected), "{}", raw);
        }

        let config: CliConfig = serde_json::from_str(r#"{"default_gender": null}"#).unwrap();
        assert_eq!(config.default_gender, None);

        let err = serde_json::from_str::<CliConfig>(r#"{"default_gender": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown gender"));
    }

    #[test]
    fn test_malformed_file_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = CliConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
