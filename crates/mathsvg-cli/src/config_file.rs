use std::{fs, io, path::Path};

use mathsvg::MarkupConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    #[serde(flatten)]
    pub markup: MarkupConfig,
}

/// Error type for configuration loading operations.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error when reading the file.
    Io(io::Error),
    /// TOML parsing error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Loads the markup configuration from a TOML file with kebab-case keys.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[inline]
fn parse_config(s: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use mathsvg::PrettyPrint;

    use super::*;

    #[test]
    fn test_full_config() {
        let toml_content = r#"
pretty-print = "auto"
xml-namespace = true
enforce-arity = true
        "#;
        let config = parse_config(toml_content).unwrap();
        assert_eq!(config.markup.pretty_print, PrettyPrint::Auto);
        assert!(config.markup.xml_namespace);
        assert!(config.markup.enforce_arity);
    }

    #[test]
    fn test_invalid_config() {
        let result = parse_config("invalid_toml");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let result = parse_config(r#"pretty-print = "sometimes""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config("xml-namespace = true").unwrap();
        assert_eq!(config.markup.pretty_print, PrettyPrint::Never);
        assert!(config.markup.xml_namespace);
        assert!(!config.markup.enforce_arity);
    }

    #[test]
    fn test_missing_file() {
        let result = load_config_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
