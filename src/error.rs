use thiserror::Error;

use crate::options::OptionKind;

/// Main error type for the pixel-filters library
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Option error: {0}")]
    Option(#[from] OptionError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Buffer shape mismatch: {len} bytes cannot hold a {width}x{height} RGBA image ({})", describe_expected(.expected))]
    ShapeMismatch {
        len: usize,
        width: u32,
        height: u32,
        /// `None` when the geometry's byte length does not fit in `usize`
        expected: Option<usize>,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Option declaration and resolution errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionError {
    #[error("Option name must not be empty")]
    EmptyName,

    #[error("Duplicate option declared: {name}")]
    DuplicateName { name: String },

    #[error("Default for '{name}' is {default}, outside of [{min}, {max}]")]
    DefaultOutOfBounds {
        name: String,
        default: String,
        min: String,
        max: String,
    },

    #[error("Bounds for '{name}' are inverted: min {min} > max {max}")]
    InvalidBounds {
        name: String,
        min: String,
        max: String,
    },

    #[error("Default for '{name}' is not a valid {kind} value: {details}")]
    InvalidDefault {
        name: String,
        kind: OptionKind,
        details: String,
    },

    #[error("Unknown option: {name}")]
    Unknown { name: String },

    #[error("Missing value for option: {name}")]
    Missing { name: String },

    #[error("Option '{name}' expects a {expected} value, got {found}")]
    TypeMismatch {
        name: String,
        expected: OptionKind,
        found: &'static str,
    },

    #[error("Value {value} for '{name}' is outside of [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Invalid color for '{name}': {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Expected name=value, got '{input}'")]
    MalformedAssignment { input: String },

    #[error("Cannot parse '{raw}' as a {kind} value for '{name}'")]
    Unparseable {
        name: String,
        kind: OptionKind,
        raw: String,
    },
}

/// Hex color parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseColorError {
    #[error("color must start with '#': {value}")]
    MissingHash { value: String },

    #[error("invalid hex color length (expected 6 digits): {value}")]
    InvalidLength { value: String },

    #[error("invalid hex digit in color: {value}")]
    InvalidDigit { value: String },
}

/// Filter registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Filter not found: {name}")]
    NotFound { name: String },

    #[error("Filter failed to build: {name} - {reason}")]
    BuildFailed { name: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path} ({reason})")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using FilterError
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Registry(RegistryError::NotFound { name }) => {
                format!("Filter '{}' not found. Run with --list to see available filters.", name)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Option(OptionError::Unknown { name }) => {
                format!("The selected filter has no option named '{}'.", name)
            }
            _ => self.to_string(),
        }
    }
}

fn describe_expected(expected: &Option<usize>) -> String {
    match expected {
        Some(bytes) => format!("{} bytes expected", bytes),
        None => "too large to address".to_string(),
    }
}
