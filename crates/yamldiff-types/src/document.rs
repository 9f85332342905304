use std::fmt;

use crate::value::TreeValue;

/// Opaque identity of a loaded document (UUID v7).
///
/// Ids exist for matching bookkeeping only. They are never derived from
/// content: two identical documents still receive distinct ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(uuid::Uuid);

impl DocumentId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.short_id())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One parsed YAML document together with its identity.
#[derive(Clone, Debug)]
pub struct Document {
    tree: TreeValue,
    id: DocumentId,
}

impl Document {
    pub fn new(tree: TreeValue) -> Self {
        Self {
            tree,
            id: DocumentId::new(),
        }
    }

    pub fn tree(&self) -> &TreeValue {
        &self.tree
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn into_tree(self) -> TreeValue {
        self.tree
    }
}
