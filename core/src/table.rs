//! Ordered collection of option descriptors.
//!
//! An [`OptionTable`] is what an argument parser builds at startup and a help
//! generator walks later. It keeps insertion order for display and refuses
//! descriptors whose short or long name is already taken.
//!
//! # Examples
//!
//! ```
//! use optargs_core::{OptionDescriptor, OptionTable, OptionType, TableError};
//!
//! let mut table = OptionTable::new();
//! table.insert(OptionDescriptor::with_long_name('v', "verbose")?.with_type(OptionType::Flag))?;
//! table.insert(OptionDescriptor::with_long_name('o', "output")?.with_default_value("out.txt"))?;
//!
//! assert_eq!(table.find("--output").unwrap().short_name(), 'o');
//! assert_eq!(table.find("-v").unwrap().long_name(), "verbose");
//!
//! let clash = table.insert(OptionDescriptor::new('v')?);
//! assert_eq!(clash.unwrap_err(), TableError::DuplicateShortName('v'));
//! # Ok::<(), optargs_core::Error>(())
//! ```

use crate::descriptor::OptionDescriptor;
use crate::error::TableError;
use crate::value::OptionValue;

/// Insertion-ordered descriptors with unique short and long names.
#[derive(Debug, Clone, Default)]
pub struct OptionTable {
    options: Vec<OptionDescriptor>,
}

impl OptionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `descriptors`, stopping at the first collision.
    pub fn try_from_descriptors(
        descriptors: impl IntoIterator<Item = OptionDescriptor>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new();
        for descriptor in descriptors {
            table.insert(descriptor)?;
        }
        Ok(table)
    }

    /// Appends `descriptor` and returns a handle for further configuration.
    ///
    /// # Errors
    ///
    /// [`TableError::DuplicateShortName`] if the short name is taken,
    /// [`TableError::DuplicateLongName`] if a non-empty long name is taken.
    /// The table is unchanged on error.
    pub fn insert(&mut self, descriptor: OptionDescriptor) -> Result<&mut OptionDescriptor, TableError> {
        if self.contains(descriptor.short_name()) {
            tracing::debug!(short_name = ?descriptor.short_name(), "duplicate short option");
            return Err(TableError::DuplicateShortName(descriptor.short_name()));
        }
        if descriptor.has_long_name() && self.find_long(descriptor.long_name()).is_some() {
            tracing::debug!(long_name = descriptor.long_name(), "duplicate long option");
            return Err(TableError::DuplicateLongName(descriptor.long_name().to_string()));
        }
        self.options.push(descriptor);
        let last = self.options.len() - 1;
        Ok(&mut self.options[last])
    }

    /// Finds a descriptor by short name.
    pub fn get(&self, short_name: char) -> Option<&OptionDescriptor> {
        self.options.iter().find(|o| o.short_name() == short_name)
    }

    /// Mutable access for adjusting metadata. Names stay fixed, so the
    /// table's uniqueness guarantees survive.
    pub fn get_mut(&mut self, short_name: char) -> Option<&mut OptionDescriptor> {
        self.options.iter_mut().find(|o| o.short_name() == short_name)
    }

    /// Finds a descriptor by long name. The empty string never matches.
    pub fn find_long(&self, long_name: &str) -> Option<&OptionDescriptor> {
        if long_name.is_empty() {
            return None;
        }
        self.options.iter().find(|o| o.long_name() == long_name)
    }

    /// Finds a descriptor by any spelling: `-x`, `--name`, `x`, or `name`.
    pub fn find(&self, name: &str) -> Option<&OptionDescriptor> {
        if let Some(long) = name.strip_prefix("--") {
            return self.find_long(long);
        }
        let bare = name.strip_prefix('-').unwrap_or(name);
        let mut chars = bare.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => self.get(short),
            _ => self.find_long(bare),
        }
    }

    /// Returns `true` if a descriptor uses `short_name`.
    pub fn contains(&self, short_name: char) -> bool {
        self.get(short_name).is_some()
    }

    /// Removes and returns the descriptor with `short_name`.
    pub fn remove(&mut self, short_name: char) -> Option<OptionDescriptor> {
        let index = self.options.iter().position(|o| o.short_name() == short_name)?;
        Some(self.options.remove(index))
    }

    /// Returns the number of descriptors.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the table has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates descriptors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor> {
        self.options.iter()
    }

    /// Yields `(short_name, value)` for every descriptor with a non-empty
    /// default, in insertion order.
    ///
    /// ```
    /// use optargs_core::{OptionDescriptor, OptionTable};
    ///
    /// let table = OptionTable::try_from_descriptors([
    ///     OptionDescriptor::new('j').unwrap().with_default_value("4"),
    ///     OptionDescriptor::new('q').unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let defaults: Vec<_> = table.default_values().collect();
    /// assert_eq!(defaults.len(), 1);
    /// assert_eq!(defaults[0].0, 'j');
    /// assert_eq!(defaults[0].1.as_uint32().unwrap(), 4);
    /// ```
    pub fn default_values(&self) -> impl Iterator<Item = (char, OptionValue)> + '_ {
        self.options
            .iter()
            .filter(|o| !o.default_value().is_empty())
            .map(|o| (o.short_name(), o.default_value_box()))
    }
}

impl<'a> IntoIterator for &'a OptionTable {
    type Item = &'a OptionDescriptor;
    type IntoIter = std::slice::Iter<'a, OptionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::OptionType;

    fn sample_table() -> OptionTable {
        OptionTable::try_from_descriptors([
            OptionDescriptor::with_long_name('v', "verbose")
                .unwrap()
                .with_type(OptionType::Flag),
            OptionDescriptor::with_long_name('o', "output")
                .unwrap()
                .with_metavar("FILE")
                .with_default_value("out.txt"),
            OptionDescriptor::new('x').unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_insertion_order_preserved() {
        let table = sample_table();
        let names: Vec<char> = table.iter().map(|o| o.short_name()).collect();
        assert_eq!(names, vec!['v', 'o', 'x']);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_short_name() {
        let mut table = sample_table();
        let err = table
            .insert(OptionDescriptor::with_long_name('v', "version").unwrap())
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateShortName('v'));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_rejects_duplicate_long_name() {
        let mut table = sample_table();
        let err = table
            .insert(OptionDescriptor::with_long_name('V', "verbose").unwrap())
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateLongName("verbose".into()));
        assert!(!table.contains('V'));
    }

    #[test]
    fn test_many_short_only_options_coexist() {
        let mut table = sample_table();
        table.insert(OptionDescriptor::new('y').unwrap()).unwrap();
        table.insert(OptionDescriptor::new('z').unwrap()).unwrap();
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_find_spellings() {
        let table = sample_table();
        assert_eq!(table.find("-o").unwrap().long_name(), "output");
        assert_eq!(table.find("o").unwrap().long_name(), "output");
        assert_eq!(table.find("--output").unwrap().short_name(), 'o');
        assert_eq!(table.find("output").unwrap().short_name(), 'o');
        assert!(table.find("--").is_none());
        assert!(table.find("-").is_none());
        assert!(table.find("--o").is_none());
        assert!(table.find("missing").is_none());
    }

    #[test]
    fn test_get_mut_updates_metadata() {
        let mut table = sample_table();
        table.get_mut('x').unwrap().set_help("extra").set_type(OptionType::Flag);
        let x = table.get('x').unwrap();
        assert_eq!(x.help(), "extra");
        assert!(!x.takes_value());
    }

    #[test]
    fn test_insert_returns_handle() {
        let mut table = OptionTable::new();
        table
            .insert(OptionDescriptor::new('n').unwrap())
            .unwrap()
            .set_metavar("N");
        assert_eq!(table.get('n').unwrap().metavar(), "N");
    }

    #[test]
    fn test_remove() {
        let mut table = sample_table();
        let removed = table.remove('o').unwrap();
        assert_eq!(removed.long_name(), "output");
        assert!(table.find_long("output").is_none());
        assert!(table.remove('o').is_none());
        table
            .insert(OptionDescriptor::with_long_name('O', "output").unwrap())
            .unwrap();
    }

    #[test]
    fn test_default_values() {
        let table = sample_table();
        let defaults: Vec<(char, OptionValue)> = table.default_values().collect();
        assert_eq!(defaults, vec![('o', OptionValue::new("out.txt"))]);
    }
}
