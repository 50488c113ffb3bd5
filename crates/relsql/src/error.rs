//! Error types for relsql

use thiserror::Error;

/// Result type alias for relsql operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while building statements.
///
/// All of these are build-time failures. Rendering a statement that was
/// built successfully never fails.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A column, table or index was looked up by a name that was never declared
    #[error("Unknown {kind}: {name}")]
    Lookup { kind: &'static str, name: String },

    /// A placeholder style key outside the supported set
    #[error("Unsupported parameter style: {0}")]
    UnsupportedStyle(String),

    /// A clause operation was called in a state where it has nothing to act on
    #[error("Misuse: {0}")]
    Misuse(String),

    /// A column definition string could not be parsed
    #[error("Invalid column definition: {0:?}")]
    InvalidColumn(String),

    /// Schema configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create a lookup error for a named object of the given kind
    pub fn lookup(kind: &'static str, name: impl Into<String>) -> Self {
        Self::Lookup {
            kind,
            name: name.into(),
        }
    }

    /// Create a misuse error
    pub fn misuse(message: impl Into<String>) -> Self {
        Self::Misuse(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a lookup error
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }

    /// Check if this is a misuse error
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::Misuse(_))
    }

    /// Check if this is an unsupported style error
    pub fn is_unsupported_style(&self) -> bool {
        matches!(self, Self::UnsupportedStyle(_))
    }
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
