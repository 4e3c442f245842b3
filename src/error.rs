use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed alert message shown when a required field is missing
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos!";

/// Fixed alert title for validation failures
pub const ERROR_TITLE: &str = "Erro";

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Form fields that must be filled before an order can be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    ClientName,
    Item,
    Quantity,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::ClientName => write!(f, "client name"),
            RequiredField::Item => write!(f, "item"),
            RequiredField::Quantity => write!(f, "quantity"),
        }
    }
}

/// Submission rejected because the form is incomplete
///
/// The display text is always the fixed user-facing message; the list of
/// missing fields is kept for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields(Vec<RequiredField>),
}

impl ValidationError {
    /// Fields that were empty at submission
    pub fn missing(&self) -> &[RequiredField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("Could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Theme name does not match any built-in theme
    #[error("Theme '{0}' not found")]
    UnknownTheme(String),

    /// A date or time format string chrono cannot render
    #[error("Invalid {kind} format '{format}'")]
    InvalidFormat { kind: &'static str, format: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_shows_fixed_message() {
        let error = ValidationError::MissingFields(vec![RequiredField::ClientName]);
        assert_eq!(error.to_string(), "Por favor, preencha todos os campos!");
        assert_eq!(error.missing(), &[RequiredField::ClientName]);
    }

    #[test]
    fn test_config_error_messages() {
        let error = ConfigError::UnknownTheme("neon".to_string());
        assert_eq!(error.to_string(), "Theme 'neon' not found");

        let error = ConfigError::InvalidFormat {
            kind: "date",
            format: "%Q".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid date format '%Q'");
    }
}
