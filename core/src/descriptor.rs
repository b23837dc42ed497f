//! Option descriptors.
//!
//! An [`OptionDescriptor`] is the static definition of one option: its short
//! name (the identity key), an optional long name, and display metadata used
//! by help generators. Names are validated when the descriptor is built and
//! can never change afterwards; the metadata is freely mutable.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use crate::error::DescriptorError;
use crate::names::{NameRules, NameValidator};
use crate::value::OptionValue;

static DEFAULT_RULES: LazyLock<Arc<dyn NameValidator>> =
    LazyLock::new(|| Arc::new(NameRules::default()) as Arc<dyn NameValidator>);

/// Whether an option takes an argument.
///
/// # Examples
///
/// ```
/// use optargs_core::OptionType;
///
/// assert_eq!(OptionType::default(), OptionType::Value);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OptionType {
    /// Boolean switch; present or absent, no argument.
    Flag,
    /// Option followed by an argument (the default).
    #[default]
    Value,
}

/// Static definition of a single command-line option.
///
/// Two descriptors are equal when their short names are equal; the long name
/// and all metadata are ignored. This lets a table of descriptors detect
/// duplicate *options* and be probed by short name (`Borrow<char>`).
///
/// Use [`new`](OptionDescriptor::new) or
/// [`with_long_name`](OptionDescriptor::with_long_name) to create a
/// descriptor, then chain either the `set_*` methods on a `&mut` or the
/// consuming `with_*` builders.
///
/// A descriptor remembers the validator its names were checked against, so
/// [`try_clone`](OptionDescriptor::try_clone) re-checks with the same rules.
///
/// # Examples
///
/// ```
/// use optargs_core::{DescriptorError, OptionDescriptor, OptionType};
///
/// let output = OptionDescriptor::with_long_name('o', "output")?
///     .with_metavar("FILE")
///     .with_default_value("out.txt")
///     .with_help("write results to FILE");
///
/// assert_eq!(output.short_name(), 'o');
/// assert_eq!(output.long_name(), "output");
/// assert_eq!(output.option_type(), OptionType::Value);
///
/// // Identity is the short name only.
/// assert_eq!(output, OptionDescriptor::new('o')?);
///
/// assert_eq!(
///     OptionDescriptor::new('\0').unwrap_err(),
///     DescriptorError::InvalidShortName('\0'),
/// );
/// # Ok::<(), DescriptorError>(())
/// ```
#[derive(Clone)]
pub struct OptionDescriptor {
    short_name: char,
    long_name: String,
    help: String,
    default_value: String,
    metavar: String,
    option_type: OptionType,
    validator: Arc<dyn NameValidator>,
}

impl OptionDescriptor {
    /// Creates a descriptor with only a short name.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::InvalidShortName`] if `short_name` fails the
    /// default [`NameRules`].
    pub fn new(short_name: char) -> Result<Self, DescriptorError> {
        Self::build(Arc::clone(&DEFAULT_RULES), short_name, String::new())
    }

    /// Creates a descriptor with a short and a long name. An empty
    /// `long_name` means the option has no long form.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::InvalidShortName`] or
    /// [`DescriptorError::InvalidLongName`] if either name fails the default
    /// [`NameRules`].
    pub fn with_long_name(short_name: char, long_name: impl Into<String>) -> Result<Self, DescriptorError> {
        Self::build(Arc::clone(&DEFAULT_RULES), short_name, long_name.into())
    }

    /// Creates a descriptor whose names are checked by `validator`. The
    /// descriptor keeps a copy of `validator` for later checked copies.
    ///
    /// ```
    /// use optargs_core::{NameRules, OptionDescriptor};
    ///
    /// let rules = NameRules { extra_short_chars: "#".into(), min_long_len: 4 };
    /// assert!(OptionDescriptor::new_with(&rules, '#', "hash").is_ok());
    /// assert!(OptionDescriptor::new_with(&rules, 'h', "sha").is_err());
    /// ```
    pub fn new_with<V>(validator: &V, short_name: char, long_name: impl Into<String>) -> Result<Self, DescriptorError>
    where
        V: NameValidator + Clone + 'static,
    {
        Self::build(Arc::new(validator.clone()), short_name, long_name.into())
    }

    fn build(validator: Arc<dyn NameValidator>, short_name: char, long_name: String) -> Result<Self, DescriptorError> {
        check_names(validator.as_ref(), short_name, &long_name)?;
        Ok(Self {
            short_name,
            long_name,
            help: String::new(),
            default_value: String::new(),
            metavar: String::new(),
            option_type: OptionType::default(),
            validator,
        })
    }

    /// Copies the descriptor, re-checking its names against the validator
    /// it was built with.
    ///
    /// ```
    /// use optargs_core::{NameRules, OptionDescriptor};
    ///
    /// let rules = NameRules { extra_short_chars: "#".into(), min_long_len: 4 };
    /// let hash = OptionDescriptor::new_with(&rules, '#', "hash").unwrap();
    /// assert_eq!(hash.try_clone().unwrap().long_name(), "hash");
    /// ```
    pub fn try_clone(&self) -> Result<Self, DescriptorError> {
        check_names(self.validator.as_ref(), self.short_name, &self.long_name)?;
        Ok(self.clone())
    }

    /// Copies the descriptor, re-checking its names against `validator`.
    /// The copy keeps `validator` for its own checked copies.
    ///
    /// Useful when a table built under one set of rules is imported into a
    /// parser with stricter ones.
    pub fn try_clone_with<V>(&self, validator: &V) -> Result<Self, DescriptorError>
    where
        V: NameValidator + Clone + 'static,
    {
        check_names(validator, self.short_name, &self.long_name)?;
        Ok(Self {
            validator: Arc::new(validator.clone()),
            ..self.clone()
        })
    }

    /// Returns the short name, the descriptor's identity key.
    pub fn short_name(&self) -> char {
        self.short_name
    }

    /// Returns the long name, or `""` if the option has none.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Returns `true` if a long name was given.
    pub fn has_long_name(&self) -> bool {
        !self.long_name.is_empty()
    }

    /// Returns the help text, or `""` if none was set.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Returns the textual default value, or `""` if none was set.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Returns the usage placeholder, or `""` if none was set.
    pub fn metavar(&self) -> &str {
        &self.metavar
    }

    /// Returns whether the option is a flag or takes a value.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns `true` if the option expects an argument.
    pub fn takes_value(&self) -> bool {
        self.option_type == OptionType::Value
    }

    /// Wraps the default value in an [`OptionValue`], as a parser does when
    /// the option was not given on the command line.
    pub fn default_value_box(&self) -> OptionValue {
        OptionValue::new(self.default_value.as_str())
    }

    /// Replaces the help text.
    pub fn set_help(&mut self, help: impl Into<String>) -> &mut Self {
        self.help = help.into();
        self
    }

    /// Replaces the textual default value.
    pub fn set_default_value(&mut self, default_value: impl Into<String>) -> &mut Self {
        self.default_value = default_value.into();
        self
    }

    /// Replaces the usage placeholder.
    pub fn set_metavar(&mut self, metavar: impl Into<String>) -> &mut Self {
        self.metavar = metavar.into();
        self
    }

    /// Changes whether the option takes an argument.
    pub fn set_type(&mut self, option_type: OptionType) -> &mut Self {
        self.option_type = option_type;
        self
    }

    /// Adds help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.set_help(help);
        self
    }

    /// Adds a textual default value.
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.set_default_value(default_value);
        self
    }

    /// Adds a usage placeholder for the option's argument.
    pub fn with_metavar(mut self, metavar: impl Into<String>) -> Self {
        self.set_metavar(metavar);
        self
    }

    /// Sets whether the option takes an argument.
    pub fn with_type(mut self, option_type: OptionType) -> Self {
        self.set_type(option_type);
        self
    }
}

fn check_names(validator: &(impl NameValidator + ?Sized), short_name: char, long_name: &str) -> Result<(), DescriptorError> {
    if !validator.is_valid_short_name(short_name) {
        tracing::debug!(short_name = ?short_name, "rejected short option name");
        return Err(DescriptorError::InvalidShortName(short_name));
    }
    if !long_name.is_empty() && !validator.is_valid_long_name(long_name) {
        tracing::debug!(short_name = ?short_name, long_name, "rejected long option name");
        return Err(DescriptorError::InvalidLongName(long_name.to_string()));
    }
    Ok(())
}

impl fmt::Debug for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("help", &self.help)
            .field("default_value", &self.default_value)
            .field("metavar", &self.metavar)
            .field("option_type", &self.option_type)
            .finish_non_exhaustive()
    }
}

impl PartialEq for OptionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.short_name == other.short_name
    }
}

impl Eq for OptionDescriptor {}

// Must agree with `Borrow<char>`: hash the short name and nothing else.
impl Hash for OptionDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.short_name.hash(state);
    }
}

impl Borrow<char> for OptionDescriptor {
    fn borrow(&self) -> &char {
        &self.short_name
    }
}
