//! Options controlling null-equivalence in the primitive differ.

use serde::{Deserialize, Serialize};
use yamldiff_types::TreeValue;

/// Configuration for a diff run.
///
/// Both options default to off. They only decide which values count as
/// equal to a missing key; they never affect comparisons where both sides
/// are present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Treat `null` and empty mappings/sequences as if the key were absent.
    pub treat_empty_as_missing: bool,
    /// Treat `""`, `0`, and `false` as if the key were absent.
    pub treat_zero_as_missing: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with only `treat_empty_as_missing` enabled.
    pub fn ignore_empty() -> Self {
        Self::new().with_treat_empty_as_missing(true)
    }

    /// Options with only `treat_zero_as_missing` enabled.
    pub fn ignore_zero() -> Self {
        Self::new().with_treat_zero_as_missing(true)
    }

    pub fn with_treat_empty_as_missing(mut self, enabled: bool) -> Self {
        self.treat_empty_as_missing = enabled;
        self
    }

    pub fn with_treat_zero_as_missing(mut self, enabled: bool) -> Self {
        self.treat_zero_as_missing = enabled;
        self
    }

    /// Whether `value` compares equal to an absent slot under these options.
    pub fn is_null_equivalent(&self, value: &TreeValue) -> bool {
        (self.treat_empty_as_missing && (value.is_null() || value.is_empty_container()))
            || (self.treat_zero_as_missing && value.is_zero())
    }
}
