//! Option name validation.
//!
//! Descriptors delegate the question "is this a legal option name?" to a
//! [`NameValidator`]. [`NameRules`] is the stock implementation and can be
//! tuned through [`OptargsConfig`](crate::OptargsConfig). An empty long name
//! always means "no long name" and is accepted by every validator.
//!
//! # Examples
//!
//! ```
//! use optargs_core::{is_valid_long_name, is_valid_short_name};
//!
//! assert!(is_valid_short_name('v'));
//! assert!(!is_valid_short_name('-'));
//!
//! assert!(is_valid_long_name(""));
//! assert!(is_valid_long_name("dry-run"));
//! assert!(!is_valid_long_name("--verbose"));
//! ```

use serde::{Deserialize, Serialize};

/// Decides which short and long option names are legal.
pub trait NameValidator: Send + Sync {
    /// Returns `true` if `name` may be used as a short option name.
    fn is_valid_short_name(&self, name: char) -> bool;

    /// Returns `true` if `name` may be used as a long option name.
    ///
    /// Implementations must accept the empty string.
    fn is_valid_long_name(&self, name: &str) -> bool;
}

/// Configurable name rules.
///
/// - short names: ASCII alphanumeric, or one of `extra_short_chars`;
/// - long names: empty, or at least `min_long_len` characters, starting with
///   an ASCII alphanumeric and continuing with ASCII alphanumerics, `-` or `_`.
///
/// # Examples
///
/// ```
/// use optargs_core::{NameRules, NameValidator};
///
/// let rules = NameRules::default();
/// assert!(rules.is_valid_short_name('?'));
/// assert!(!rules.is_valid_long_name("x"));
///
/// let strict = NameRules { extra_short_chars: String::new(), min_long_len: 3 };
/// assert!(!strict.is_valid_short_name('?'));
/// assert!(!strict.is_valid_long_name("ab"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRules {
    /// Punctuation accepted as a short name besides ASCII alphanumerics.
    pub extra_short_chars: String,
    /// Minimum length of a non-empty long name.
    pub min_long_len: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            extra_short_chars: "?".to_string(),
            min_long_len: 2,
        }
    }
}

impl NameValidator for NameRules {
    fn is_valid_short_name(&self, name: char) -> bool {
        if name.is_ascii_alphanumeric() {
            return true;
        }
        // '-' would make "-" + name read as a long option marker.
        name != '-' && name.is_ascii_graphic() && self.extra_short_chars.contains(name)
    }

    fn is_valid_long_name(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            None => true,
            Some(first) if first.is_ascii_alphanumeric() => {
                name.chars().count() >= self.min_long_len
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }
            Some(_) => false,
        }
    }
}

impl<V: NameValidator + ?Sized> NameValidator for &V {
    fn is_valid_short_name(&self, name: char) -> bool {
        (**self).is_valid_short_name(name)
    }

    fn is_valid_long_name(&self, name: &str) -> bool {
        (**self).is_valid_long_name(name)
    }
}

/// Checks `name` against the default [`NameRules`].
pub fn is_valid_short_name(name: char) -> bool {
    NameRules::default().is_valid_short_name(name)
}

/// Checks `name` against the default [`NameRules`]. The empty string is valid.
pub fn is_valid_long_name(name: &str) -> bool {
    NameRules::default().is_valid_long_name(name)
}
