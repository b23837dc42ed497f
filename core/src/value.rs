//! Option values and their typed views.
//!
//! An [`OptionValue`] owns the raw text an argument parser matched (or the
//! descriptor's default) and converts it on demand. Nothing is cached: every
//! typed read parses the raw text again.
//!
//! Numeric reads follow stream-extraction rules: leading whitespace is
//! skipped, the longest numeric literal at the start of the text is parsed,
//! and anything after it is ignored. Booleans accept exactly `true` or
//! `false` with optional surrounding whitespace; the empty string reads as
//! `false`. Only ASCII whitespace is skipped.
//!
//! # Examples
//!
//! ```
//! use optargs_core::{ConversionErrorKind, OptionValue};
//!
//! let port = OptionValue::new("8080");
//! assert_eq!(port.as_uint16().unwrap(), 8080);
//! assert_eq!(port.as_int64().unwrap(), 8080);
//!
//! let err = OptionValue::new("abc").as_int32().unwrap_err();
//! assert_eq!(err.kind, ConversionErrorKind::Invalid);
//!
//! assert_eq!(OptionValue::new("").as_boolean().unwrap(), false);
//! assert!(OptionValue::new("yes").as_boolean().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionErrorKind};

/// What a policy-aware read does when conversion fails.
///
/// # Examples
///
/// ```
/// use optargs_core::{ConversionPolicy, OptionValue};
///
/// let value = OptionValue::new("many");
/// assert!(value.get_with::<u32>(ConversionPolicy::Strict).is_err());
/// assert_eq!(value.get_with::<u32>(ConversionPolicy::Lenient).unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionPolicy {
    /// Report the failure to the caller (the default).
    #[default]
    Strict,
    /// Log a warning and fall back to the target type's default value.
    Lenient,
}

/// Types an [`OptionValue`] can be converted into.
pub trait FromOptionValue: Sized + Default {
    /// Name used in [`ConversionError::target`].
    const TYPE_NAME: &'static str;

    /// Converts raw option text.
    fn from_raw(raw: &str) -> Result<Self, ConversionErrorKind>;
}

impl FromOptionValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_raw(raw: &str) -> Result<Self, ConversionErrorKind> {
        if raw.is_empty() {
            return Ok(false);
        }
        match raw.trim_matches(is_stream_space) {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConversionErrorKind::Invalid),
        }
    }
}

impl FromOptionValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_raw(raw: &str) -> Result<Self, ConversionErrorKind> {
        Ok(raw.to_string())
    }
}

/// Whitespace skipped by C-locale stream extraction (`isspace`).
fn is_stream_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Returns the optional sign plus decimal digits at the start of `text`.
fn integer_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then(|| &text[..sign + digits])
}

/// Returns the decimal floating-point literal at the start of `text`.
fn float_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = count_digits(end);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    Some(&text[..end])
}

macro_rules! impl_from_option_value_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FromOptionValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn from_raw(raw: &str) -> Result<Self, ConversionErrorKind> {
                if raw.is_empty() {
                    return Err(ConversionErrorKind::Empty);
                }
                let literal = integer_prefix(raw.trim_start_matches(is_stream_space)).ok_or(ConversionErrorKind::Invalid)?;
                if <$ty>::MIN == 0 && literal.starts_with('-') {
                    // No wrap-around for unsigned targets; only "-0" survives.
                    return if literal[1..].bytes().all(|b| b == b'0') {
                        Ok(0)
                    } else {
                        Err(ConversionErrorKind::OutOfRange)
                    };
                }
                <$ty>::from_str(literal).map_err(|_| ConversionErrorKind::OutOfRange)
            }
        }
    )*};
}

impl_from_option_value_int!(i16, i32, i64, u16, u32, u64);

macro_rules! impl_from_option_value_float {
    ($($ty:ty),* $(,)?) => {$(
        impl FromOptionValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn from_raw(raw: &str) -> Result<Self, ConversionErrorKind> {
                if raw.is_empty() {
                    return Err(ConversionErrorKind::Empty);
                }
                let literal = float_prefix(raw.trim_start_matches(is_stream_space)).ok_or(ConversionErrorKind::Invalid)?;
                let value = <$ty>::from_str(literal).map_err(|_| ConversionErrorKind::Invalid)?;
                if value.is_infinite() {
                    return Err(ConversionErrorKind::OutOfRange);
                }
                Ok(value)
            }
        }
    )*};
}

impl_from_option_value_float!(f32, f64);

/// Immutable textual value bound to an option.
///
/// Equality is textual: `"1"` and `"01"` are different values even though
/// they read as the same integer.
///
/// # Examples
///
/// ```
/// use optargs_core::OptionValue;
///
/// let value = OptionValue::new(" 2.5e3 ");
/// assert_eq!(value.value(), " 2.5e3 ");
/// assert_eq!(value.as_double().unwrap(), 2500.0);
/// assert_eq!(value.to_string(), " 2.5e3 ");
///
/// assert_ne!(OptionValue::new("1"), OptionValue::new("01"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptionValue {
    raw: String,
}

impl OptionValue {
    /// Wraps raw option text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw text exactly as constructed.
    pub fn value(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the raw text is empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Converts the raw text into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] naming the raw text, `T`, and why the
    /// conversion failed.
    pub fn get<T: FromOptionValue>(&self) -> Result<T, ConversionError> {
        T::from_raw(&self.raw).map_err(|kind| ConversionError::new(&self.raw, T::TYPE_NAME, kind))
    }

    /// Converts the raw text into `T`, applying `policy` on failure.
    ///
    /// Under [`ConversionPolicy::Lenient`] this never fails: an unconvertible
    /// value is logged and replaced by `T::default()`.
    pub fn get_with<T: FromOptionValue>(&self, policy: ConversionPolicy) -> Result<T, ConversionError> {
        match (self.get::<T>(), policy) {
            (Ok(value), _) => Ok(value),
            (Err(err), ConversionPolicy::Strict) => Err(err),
            (Err(err), ConversionPolicy::Lenient) => {
                tracing::warn!(
                    raw = %err.raw,
                    target_type = err.target,
                    kind = %err.kind,
                    "using default for unconvertible option value"
                );
                Ok(T::default())
            }
        }
    }

    /// Hands the whole raw text to `T`'s [`FromStr`] implementation.
    ///
    /// Unlike the numeric views this does no prefix scanning or whitespace
    /// skipping; it is meant for caller-defined types such as enums or paths.
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use optargs_core::OptionValue;
    ///
    /// let addr: Ipv4Addr = OptionValue::new("127.0.0.1").parse().unwrap();
    /// assert!(addr.is_loopback());
    /// ```
    pub fn parse<T: FromStr>(&self) -> Result<T, ConversionError> {
        self.raw.parse().map_err(|_| {
            let kind = if self.raw.is_empty() {
                ConversionErrorKind::Empty
            } else {
                ConversionErrorKind::Invalid
            };
            ConversionError::new(&self.raw, std::any::type_name::<T>(), kind)
        })
    }

    /// Reads the value as a boolean. Empty text is `false`.
    pub fn as_boolean(&self) -> Result<bool, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a 16-bit signed integer.
    pub fn as_int16(&self) -> Result<i16, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a 32-bit signed integer.
    pub fn as_int32(&self) -> Result<i32, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a 64-bit signed integer.
    pub fn as_int64(&self) -> Result<i64, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a 16-bit unsigned integer.
    pub fn as_uint16(&self) -> Result<u16, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a 32-bit unsigned integer.
    pub fn as_uint32(&self) -> Result<u32, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a 64-bit unsigned integer.
    pub fn as_uint64(&self) -> Result<u64, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a single-precision float.
    pub fn as_float(&self) -> Result<f32, ConversionError> {
        self.get()
    }

    /// Reads the leading literal as a double-precision float.
    pub fn as_double(&self) -> Result<f64, ConversionError> {
        self.get()
    }

    /// Returns an owned copy of the raw text.
    pub fn as_string(&self) -> String {
        self.raw.clone()
    }
}

impl From<&str> for OptionValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for OptionValue {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl AsRef<str> for OptionValue {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
