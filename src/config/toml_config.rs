use crate::utils::error::{BookError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Optional file-based configuration. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<StorageConfig>,
    pub birthdays: Option<BirthdaysConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdaysConfig {
    pub window_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BookError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BookError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::{Captures, Regex};
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn data_file(&self) -> Option<&str> {
        self.storage.as_ref()?.path.as_deref()
    }

    pub fn window_days(&self) -> Option<u32> {
        self.birthdays.as_ref()?.window_days
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.data_file() {
            validate_path("storage.path", path)?;
        }

        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(BookError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
path = "./data/contacts.json"

[birthdays]
window_days = 10

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_file(), Some("./data/contacts.json"));
        assert_eq!(config.window_days(), Some(10));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.data_file().is_none());
        assert!(config.window_days().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ADDRESS_BOOK_TEST_DIR", "/tmp/contacts");

        let toml_content = r#"
[storage]
path = "${ADDRESS_BOOK_TEST_DIR}/book.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_file(), Some("/tmp/contacts/book.json"));

        std::env::remove_var("ADDRESS_BOOK_TEST_DIR");
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(BookError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[storage\npath ="),
            Err(BookError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[birthdays]\nwindow_days = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.window_days(), Some(3));
    }
}
