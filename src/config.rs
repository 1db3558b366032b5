//! User configuration loaded from `~/.config/zcalc/config.toml`.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// How the terminal front end prints the readout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputFormat,
    /// Copy the final readout to the clipboard.
    pub copy_result: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            copy_result: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default config file location, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load the config from `path`, or the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents).map_err(|source| Error::ConfigParse { path, source })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(Error::ConfigRead { path, source }),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_config() {
        let config = Config::parse(
            r#"
            output = "json"
            copy_result = true
            log_filter = "zcalc=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.copy_result);
        assert_eq!(config.log_filter, "zcalc=debug");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::parse("colour = \"red\"").is_err());
        assert!(Config::parse("output = \"xml\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("zcalc-test-missing").join("config.toml");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = std::env::temp_dir().join(format!("zcalc-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "copy_result = \"yes\"").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
