use std::{fs, path::PathBuf, str::FromStr};

use serde_derive::Deserialize;
use tracing::Level;

use crate::HuffError;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Appended to compressed files, stripped when expanding them.
    pub extension: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: String::from("hh"),
            log_level: String::from("info"),
        }
    }
}

impl Config {
    pub fn new(path: &PathBuf) -> Result<Self, HuffError> {
        let content =
            fs::read_to_string(path).map_err(|e| HuffError::MissingConfigurationFile {
                config_file_path: path.clone(),
                source: e,
            })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, HuffError> {
        let config: Config = toml::from_str(content)?;
        config.level()?;
        Ok(config)
    }

    pub fn level(&self) -> Result<Level, HuffError> {
        Level::from_str(&self.log_level)
            .map_err(|_| HuffError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tracing::Level;

    use crate::{config::Config, HuffError};

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.level().unwrap(), Level::INFO);
    }

    #[test]
    fn fields_override_defaults() {
        let config = Config::parse("extension = \"huf\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.extension, "huf");
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let result = Config::parse("log_level = \"chatty\"");
        assert!(matches!(result, Err(HuffError::InvalidLogLevel(l)) if l == "chatty"));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = Config::parse("extension = ");
        assert!(matches!(result, Err(HuffError::InvalidConfig(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = Config::new(&PathBuf::from("/definitely/not/here.toml"));
        assert!(matches!(
            result,
            Err(HuffError::MissingConfigurationFile { .. })
        ));
    }
}
