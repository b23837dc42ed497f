//! Typed option descriptors and option values.
//!
//! This crate is the data model underneath a command-line option parser:
//!
//! - [`OptionDescriptor`] — the static definition of one option (short name,
//!   optional long name, help text, default value, metavar, [`OptionType`]).
//!   Names are validated at construction by a [`NameValidator`].
//! - [`OptionValue`] — the immutable text bound to a matched or defaulted
//!   option, with explicit typed reads (`as_boolean`, `as_int32`, ...) that
//!   report a [`ConversionError`] instead of guessing.
//! - [`OptionTable`] — insertion-ordered descriptors with unique names.
//! - [`OptargsConfig`] — YAML/JSON configuration for name rules and the
//!   [`ConversionPolicy`].
//!
//! Scanning `argv` and rendering help text are left to the consumer.
//!
//! # Example
//!
//! ```
//! use optargs_core::*;
//!
//! let mut table = OptionTable::new();
//! table.insert(
//!     OptionDescriptor::with_long_name('j', "jobs")?
//!         .with_metavar("N")
//!         .with_default_value("4")
//!         .with_help("number of parallel jobs"),
//! )?;
//!
//! // A parser that saw `-j 8` hands back the matched text.
//! let jobs = OptionValue::new("8");
//! assert_eq!(jobs.as_uint32()?, 8);
//!
//! // Unmatched options fall back to their defaults.
//! let default = table.get('j').unwrap().default_value_box();
//! assert_eq!(default.as_uint32()?, 4);
//!
//! assert!(OptionValue::new("eight").as_uint32().is_err());
//! # Ok::<(), Error>(())
//! ```

mod config;
mod descriptor;
mod error;
mod names;
mod table;
mod value;

pub use config::{ConversionConfig, OptargsConfig};
pub use descriptor::{OptionDescriptor, OptionType};
pub use error::{
    ConfigError, ConversionError, ConversionErrorKind, DescriptorError, Error, Result, TableError,
};
pub use names::{NameRules, NameValidator, is_valid_long_name, is_valid_short_name};
pub use table::OptionTable;
pub use value::{ConversionPolicy, FromOptionValue, OptionValue};
