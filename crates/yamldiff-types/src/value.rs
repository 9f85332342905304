//! The tree value model shared by the loader and the diff engine.
//!
//! A [`TreeValue`] is a closed variant over the YAML data model with
//! order-preserving mappings. [`Slot`] marks a position that may be missing
//! on one side of a comparison.

use std::fmt;

use indexmap::IndexMap;

/// A parsed YAML value.
///
/// Values are produced once by the loader and never mutated afterwards.
/// Numbers compare equal when they are numerically equal, and `NaN` equals
/// `NaN` so that every value equals itself.
#[derive(Clone, Debug)]
pub enum TreeValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Mapping(Mapping),
    Sequence(Vec<TreeValue>),
}

impl TreeValue {
    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, TreeValue::Null)
    }

    /// Returns `true` for a mapping or sequence with no entries.
    pub fn is_empty_container(&self) -> bool {
        match self {
            TreeValue::Mapping(m) => m.is_empty(),
            TreeValue::Sequence(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns `true` for the zero value of a scalar type: `""`, `0`, `false`.
    pub fn is_zero(&self) -> bool {
        match self {
            TreeValue::Bool(b) => !b,
            TreeValue::Number(n) => *n == 0.0,
            TreeValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns `true` for mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(self, TreeValue::Mapping(_) | TreeValue::Sequence(_))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            TreeValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Length of the canonical rendering in Unicode scalar values.
    pub fn canonical_len(&self) -> usize {
        self.to_string().chars().count()
    }
}

impl PartialEq for TreeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TreeValue::Null, TreeValue::Null) => true,
            (TreeValue::Bool(a), TreeValue::Bool(b)) => a == b,
            (TreeValue::Number(a), TreeValue::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (TreeValue::String(a), TreeValue::String(b)) => a == b,
            (TreeValue::Mapping(a), TreeValue::Mapping(b)) => a == b,
            (TreeValue::Sequence(a), TreeValue::Sequence(b)) => a == b,
            _ => false,
        }
    }
}

/// Canonical compact rendering, used to weigh scalar differences.
///
/// Strings render raw (unquoted), sequences as `[a, b]`, mappings as
/// `{k: v}`.
impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeValue::Null => f.write_str("null"),
            TreeValue::Bool(b) => write!(f, "{b}"),
            TreeValue::Number(n) => f.write_str(&format_number(*n)),
            TreeValue::String(s) => f.write_str(s),
            TreeValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            TreeValue::Mapping(m) => {
                f.write_str("{")?;
                for (i, (key, value)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

pub(crate) const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
pub(crate) const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Format a number: integral values in full integer digits, everything
/// else in shortest round-trip form.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        if (-TWO_POW_63..TWO_POW_63).contains(&n) {
            return (n as i64).to_string();
        }
        if n > 0.0 && n < TWO_POW_64 {
            return (n as u64).to_string();
        }
    }
    format!("{n}")
}

impl From<bool> for TreeValue {
    fn from(b: bool) -> Self {
        TreeValue::Bool(b)
    }
}

impl From<i32> for TreeValue {
    fn from(n: i32) -> Self {
        TreeValue::Number(f64::from(n))
    }
}

impl From<i64> for TreeValue {
    fn from(n: i64) -> Self {
        TreeValue::Number(n as f64)
    }
}

impl From<f64> for TreeValue {
    fn from(n: f64) -> Self {
        TreeValue::Number(n)
    }
}

impl From<&str> for TreeValue {
    fn from(s: &str) -> Self {
        TreeValue::String(s.to_owned())
    }
}

impl From<String> for TreeValue {
    fn from(s: String) -> Self {
        TreeValue::String(s)
    }
}

impl From<Vec<TreeValue>> for TreeValue {
    fn from(items: Vec<TreeValue>) -> Self {
        TreeValue::Sequence(items)
    }
}

impl From<Mapping> for TreeValue {
    fn from(m: Mapping) -> Self {
        TreeValue::Mapping(m)
    }
}

/// An insertion-ordered mapping with unique string keys.
///
/// Equality ignores entry order, like the structural diff does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping {
    entries: IndexMap<String, TreeValue>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and has its value
    /// replaced; the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: TreeValue) -> Option<TreeValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, TreeValue)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, TreeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// One side of a comparison: a borrowed value, or nothing at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slot<'a> {
    Present(&'a TreeValue),
    Absent,
}

impl<'a> Slot<'a> {
    pub fn value(self) -> Option<&'a TreeValue> {
        match self {
            Slot::Present(v) => Some(v),
            Slot::Absent => None,
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, Slot::Absent)
    }
}

impl<'a> From<Option<&'a TreeValue>> for Slot<'a> {
    fn from(value: Option<&'a TreeValue>) -> Self {
        value.map_or(Slot::Absent, Slot::Present)
    }
}
