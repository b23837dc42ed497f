//! Library configuration.
//!
//! Controls how lenient value conversion is and which option names are
//! legal. Loaded from YAML (or JSON when the file has a `.json` extension);
//! every section is optional.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! conversion:
//!   policy: lenient
//! names:
//!   extra_short_chars: "?#"
//!   min_long_len: 3
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::names::NameRules;
use crate::value::ConversionPolicy;

/// Settings for typed reads of option values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// What to do when a value cannot be converted.
    pub policy: ConversionPolicy,
}

/// Top-level configuration.
///
/// # Examples
///
/// ```
/// use optargs_core::{ConversionPolicy, NameValidator, OptargsConfig};
///
/// let config = OptargsConfig::from_yaml_str("conversion: { policy: lenient }").unwrap();
/// assert_eq!(config.policy(), ConversionPolicy::Lenient);
/// assert!(config.validator().is_valid_short_name('?'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptargsConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Value conversion settings.
    pub conversion: ConversionConfig,
    /// Option name rules.
    pub names: NameRules,
}

impl Default for OptargsConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            conversion: ConversionConfig::default(),
            names: NameRules::default(),
        }
    }
}

impl OptargsConfig {
    /// Loads configuration from a YAML file, or JSON if the extension is
    /// `.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be read,
    /// or [`YamlError`](ConfigError::YamlError) /
    /// [`JsonError`](ConfigError::JsonError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = if is_json(path) {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };
        tracing::debug!(path = %path.display(), policy = ?config.conversion.policy, "loaded optargs config");
        Ok(config)
    }

    /// Saves the configuration, as JSON if the extension is `.json` and as
    /// YAML otherwise.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        if is_json(path) {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_yaml::to_writer(writer, self)?;
        }
        Ok(())
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Returns the configured conversion policy.
    pub fn policy(&self) -> ConversionPolicy {
        self.conversion.policy
    }

    /// Returns the configured name rules, for use with
    /// [`OptionDescriptor::new_with`](crate::OptionDescriptor::new_with).
    pub fn validator(&self) -> &NameRules {
        &self.names
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
