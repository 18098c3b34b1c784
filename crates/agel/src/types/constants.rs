use std::collections::btree_map::Iter;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::interpreter::LoadError;
use crate::parser::{ParseError, parse_constants};

/// A name to value table consulted by `$CONSTANTS.NAME$` references.
///
/// The evaluator borrows the table for the duration of one top-level call and
/// writes each constant's fully resolved value back with [`set`], so later
/// references to the same name are not evaluated again.
///
/// [`set`]: ConstantsTable::set
pub trait ConstantsTable {
    /// Current value of `name`, which may still contain expressions.
    fn get(&self, name: &str) -> Option<String>;

    /// Replace the value of `name`.
    fn set(&mut self, name: &str, value: String);

    /// Names known to this table, used for "did you mean" suggestions.
    fn names(&self) -> Vec<String> {
        Vec::new()
    }
}

impl ConstantsTable for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }

    fn set(&mut self, name: &str, value: String) {
        self.insert(name.to_string(), value);
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.keys().cloned().collect();
        names.sort();
        names
    }
}

impl ConstantsTable for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }

    fn set(&mut self, name: &str, value: String) {
        self.insert(name.to_string(), value);
    }

    fn names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

/// An ordered constants table, usually loaded from a constants file.
///
/// # Example
///
/// ```
/// use agel::{Constants, ConstantsTable};
///
/// let constants = Constants::from_str_source(r##"
///     // base values
///     C1 = "1";
///     C2 = "#{$CONSTANTS.C1$ + 1}";
/// "##).unwrap();
///
/// assert_eq!(constants.len(), 2);
/// assert_eq!(constants.get("C1"), Some("1".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constants {
    entries: BTreeMap<String, String>,
}

impl Constants {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse constants from the text of a constants file.
    pub fn from_str_source(source: &str) -> Result<Self, ParseError> {
        let entries = parse_constants(source)?
            .into_iter()
            .map(|def| (def.name, def.value))
            .collect();
        Ok(Self { entries })
    }

    /// Read and parse a constants file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str_source(&content).map_err(|e| LoadError::from_parse_error(path, e))
    }

    /// Insert or replace a constant, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no constants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl ConstantsTable for Constants {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: String) {
        self.entries.insert(name.to_string(), value);
    }

    fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Constants {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Constants {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
