//! Board configuration.
//!
//! # Responsibility
//! - Describe form validation rules and logging settings as plain data.
//! - Reject contradictory settings before a board is built.
//!
//! # Invariants
//! - Every field has a default; an empty document yields the stock rules.
//! - Default form rules: title required; description required with at least
//!   5 characters; people required within `1..=5`.

use crate::logging::default_log_level;
use crate::validation::validator::{FieldValue, Validatable};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Rules applied to one form field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRules {
    /// Builds the validator input for `value` under these rules.
    pub fn to_validatable(&self, value: impl Into<FieldValue>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    field,
                    min: min as f64,
                    max: max as f64,
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min.is_nan() || max.is_nan() || min > max {
                return Err(ConfigError::InvertedBounds { field, min, max });
            }
        }
        Ok(())
    }
}

/// Validation rules for the three project form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRules {
                required: true,
                ..FieldRules::default()
            },
            description: FieldRules {
                required: true,
                min_length: Some(5),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(1.0),
                max: Some(5.0),
                ..FieldRules::default()
            },
        }
    }
}

/// Logging settings consumed by `init_logging_from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files. `None` disables file logging.
    pub log_dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Parsed level. Case-insensitive; `warning` is accepted for `warn`.
    ///
    /// # Errors
    /// `InvalidLogLevel` for `off` or any unknown name.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        let trimmed = self.level.trim();
        let name = if trimmed.eq_ignore_ascii_case("warning") {
            "warn"
        } else {
            trimmed
        };
        match name.parse::<LevelFilter>() {
            Ok(LevelFilter::Off) | Err(_) => Err(ConfigError::InvalidLogLevel(trimmed.to_string())),
            Ok(level) => Ok(level),
        }
    }

    /// Trimmed log directory, or `None` when file logging is off.
    ///
    /// # Errors
    /// `EmptyLogDir` for blank text, `RelativeLogDir` for a relative path.
    pub fn log_dir_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        let Some(raw) = &self.log_dir else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyLogDir);
        }
        let path = PathBuf::from(trimmed);
        if !path.is_absolute() {
            return Err(ConfigError::RelativeLogDir(trimmed.to_string()));
        }
        Ok(Some(path))
    }
}

/// Top-level configuration for one board.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub form: FormRules,
    pub logging: LogConfig,
}

impl BoardConfig {
    /// Checks rule bounds and logging settings.
    ///
    /// # Errors
    /// - `InvertedBounds` when a lower bound exceeds its upper bound.
    /// - `InvalidLogLevel` / `EmptyLogDir` / `RelativeLogDir` for unusable
    ///   logging settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.form.title.check("title")?;
        self.form.description.check("description")?;
        self.form.people.check("people")?;

        self.logging.level_filter()?;
        self.logging.log_dir_path()?;
        Ok(())
    }
}

/// Configuration rejection reasons.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvertedBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
    InvalidLogLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedBounds { field, min, max } => {
                write!(f, "rules for `{field}` have lower bound {min} above upper bound {max}")
            }
            Self::InvalidLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => f.write_str("log_dir cannot be empty"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, FieldRules, FormRules, LogConfig};
    use log::LevelFilter;
    use std::path::PathBuf;

    #[test]
    fn default_rules_match_project_form() {
        let rules = FormRules::default();
        assert!(rules.title.required);
        assert_eq!(rules.description.min_length, Some(5));
        assert_eq!(rules.people.min, Some(1.0));
        assert_eq!(rules.people.max, Some(5.0));
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_people_bounds() {
        let mut config = BoardConfig::default();
        config.form.people = FieldRules {
            required: true,
            min: Some(6.0),
            max: Some(2.0),
            ..FieldRules::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBounds {
                field: "people",
                min: 6.0,
                max: 2.0,
            })
        );
    }

    #[test]
    fn validate_rejects_relative_log_dir() {
        let mut config = BoardConfig::default();
        config.logging.log_dir = Some("logs".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RelativeLogDir(_))
        ));

        config.logging.log_dir = Some("  ".to_string());
        assert_eq!(config.validate(), Err(ConfigError::EmptyLogDir));
    }

    #[test]
    fn log_level_parsing_is_case_insensitive_and_rejects_off() {
        let level = |raw: &str| {
            LogConfig {
                level: raw.to_string(),
                log_dir: None,
            }
            .level_filter()
        };
        assert_eq!(level(" INFO "), Ok(LevelFilter::Info));
        assert_eq!(level("Warning"), Ok(LevelFilter::Warn));
        assert_eq!(
            level("off"),
            Err(ConfigError::InvalidLogLevel("off".to_string()))
        );
        assert!(level("verbose").is_err());
    }

    #[test]
    fn log_dir_is_trimmed() {
        let config = LogConfig {
            level: "info".to_string(),
            log_dir: Some("  /tmp/projboard/logs  ".to_string()),
        };
        assert_eq!(
            config.log_dir_path(),
            Ok(Some(PathBuf::from("/tmp/projboard/logs")))
        );
    }
}
