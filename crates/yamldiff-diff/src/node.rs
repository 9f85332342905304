//! The diff tree produced by the structural differ.

use std::fmt;

use serde::Serialize;
use yamldiff_types::Slot;

/// Outcome of comparing two slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffStatus {
    /// Both sides are equal (or equivalent under the active options).
    Same,
    /// Both sides exist and differ. Composite nodes only ever report this or `Same`.
    Changed,
    /// Only the left side has a value.
    OnlyInA,
    /// Only the right side has a value.
    OnlyInB,
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiffStatus::Same => "same",
            DiffStatus::Changed => "changed",
            DiffStatus::OnlyInA => "only-in-a",
            DiffStatus::OnlyInB => "only-in-b",
        };
        f.write_str(s)
    }
}

/// Children of a composite node.
#[derive(Clone, Debug, PartialEq)]
pub enum DiffChildren<'a> {
    /// Element diffs in matching order.
    Sequence(Vec<DiffNode<'a>>),
    /// Per-key diffs: left keys in left order, then right-only keys in right order.
    Mapping(Vec<(&'a str, DiffNode<'a>)>),
}

impl<'a> DiffChildren<'a> {
    pub fn len(&self) -> usize {
        match self {
            DiffChildren::Sequence(items) => items.len(),
            DiffChildren::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The child nodes, without their keys.
    pub fn nodes(&self) -> Box<dyn Iterator<Item = &DiffNode<'a>> + '_> {
        match self {
            DiffChildren::Sequence(items) => Box::new(items.iter()),
            DiffChildren::Mapping(entries) => Box::new(entries.iter().map(|(_, n)| n)),
        }
    }

    fn weight(&self) -> usize {
        self.nodes().map(|n| n.weight).sum()
    }

    fn all_same(&self) -> bool {
        self.nodes().all(|n| n.is_same())
    }
}

/// One node of a diff tree.
///
/// Leaves carry the two compared slots and a weight; composite nodes own
/// their children and weigh exactly the sum of them.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffNode<'a> {
    pub a: Slot<'a>,
    pub b: Slot<'a>,
    pub status: DiffStatus,
    pub weight: usize,
    pub children: Option<DiffChildren<'a>>,
    pub depth: usize,
}

impl<'a> DiffNode<'a> {
    pub(crate) fn leaf(
        a: Slot<'a>,
        b: Slot<'a>,
        status: DiffStatus,
        weight: usize,
        depth: usize,
    ) -> Self {
        debug_assert!(status != DiffStatus::Same || weight == 0);
        Self {
            a,
            b,
            status,
            weight,
            children: None,
            depth,
        }
    }

    /// A mapping node: `Same` only when every child is.
    pub(crate) fn mapping(
        a: Slot<'a>,
        b: Slot<'a>,
        entries: Vec<(&'a str, DiffNode<'a>)>,
        depth: usize,
    ) -> Self {
        let children = DiffChildren::Mapping(entries);
        let status = if children.all_same() {
            DiffStatus::Same
        } else {
            DiffStatus::Changed
        };
        Self::composite(a, b, children, status, depth)
    }

    /// A sequence node whose status was decided by the matcher.
    pub(crate) fn sequence(
        a: Slot<'a>,
        b: Slot<'a>,
        items: Vec<DiffNode<'a>>,
        status: DiffStatus,
        depth: usize,
    ) -> Self {
        Self::composite(a, b, DiffChildren::Sequence(items), status, depth)
    }

    fn composite(
        a: Slot<'a>,
        b: Slot<'a>,
        children: DiffChildren<'a>,
        status: DiffStatus,
        depth: usize,
    ) -> Self {
        Self {
            a,
            b,
            status,
            weight: children.weight(),
            children: Some(children),
            depth,
        }
    }

    pub fn is_same(&self) -> bool {
        self.status == DiffStatus::Same
    }

    pub fn is_composite(&self) -> bool {
        self.children.is_some()
    }

    /// Look up a mapping child by key.
    pub fn child(&self, key: &str) -> Option<&DiffNode<'a>> {
        match &self.children {
            Some(DiffChildren::Mapping(entries)) => {
                entries.iter().find(|(k, _)| *k == key).map(|(_, n)| n)
            }
            _ => None,
        }
    }

    /// Sequence children, if this is a sequence node.
    pub fn items(&self) -> Option<&[DiffNode<'a>]> {
        match &self.children {
            Some(DiffChildren::Sequence(items)) => Some(items),
            _ => None,
        }
    }

    /// Render this node as annotated pseudo-YAML.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
