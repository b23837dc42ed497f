//! Error types for descriptor construction, value conversion, option tables
//! and configuration loading.
//!
//! Every failure in this crate is recoverable. Each component has its own
//! error enum, and [`Error`] unifies them for callers that do not care which
//! layer failed.

use thiserror::Error;

/// Descriptor construction or checked copy failed name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// The short name was rejected by the name validator.
    #[error("invalid short option name: {0:?}")]
    InvalidShortName(char),
    /// A non-empty long name was rejected by the name validator.
    #[error("invalid long option name: {0:?}")]
    InvalidLongName(String),
}

/// Why a raw value could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// The raw text is empty.
    Empty,
    /// The raw text does not start with a literal of the requested type.
    Invalid,
    /// The literal is well-formed but does not fit the requested type.
    OutOfRange,
}

impl std::fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ConversionErrorKind::Empty => "empty value",
            ConversionErrorKind::Invalid => "invalid literal",
            ConversionErrorKind::OutOfRange => "out of range",
        };
        f.write_str(text)
    }
}

/// A typed read of an [`OptionValue`](crate::OptionValue) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {raw:?} to {target}: {kind}")]
pub struct ConversionError {
    /// The raw text that was being converted.
    pub raw: String,
    /// Name of the requested target type (e.g. `"i32"`).
    pub target: &'static str,
    /// Failure category.
    pub kind: ConversionErrorKind,
}

impl ConversionError {
    pub(crate) fn new(raw: &str, target: &'static str, kind: ConversionErrorKind) -> Self {
        Self {
            raw: raw.to_string(),
            target,
            kind,
        }
    }
}

/// An [`OptionTable`](crate::OptionTable) insertion collided with an
/// existing descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Another descriptor already uses this short name.
    #[error("duplicate short option: -{0}")]
    DuplicateShortName(char),
    /// Another descriptor already uses this long name.
    #[error("duplicate long option: --{0}")]
    DuplicateLongName(String),
}

/// Configuration file could not be read, written or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
