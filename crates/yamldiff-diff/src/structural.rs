//! Recursive structural diff of mappings and sequences.
//!
//! Mappings are compared key by key, sequences are handed to the greedy
//! element matcher in [`crate::sequence`], and everything else (scalars,
//! nulls, absent slots, type mismatches) goes to the primitive differ.

use yamldiff_types::{Mapping, Slot, TreeValue};

use crate::node::DiffNode;
use crate::options::DiffOptions;
use crate::primitive::diff_primitive;

/// The diff engine, parameterised by [`DiffOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Diff two values, producing a tree rooted at depth 0.
    pub fn diff<'a>(&self, a: &'a TreeValue, b: &'a TreeValue) -> DiffNode<'a> {
        self.diff_slots(Slot::Present(a), Slot::Present(b), 0)
    }

    /// Diff a value against nothing, as happens for an unmatched document.
    pub fn diff_only_in_a<'a>(&self, a: &'a TreeValue) -> DiffNode<'a> {
        self.diff_slots(Slot::Present(a), Slot::Absent, 0)
    }

    /// Diff nothing against a value.
    pub fn diff_only_in_b<'a>(&self, b: &'a TreeValue) -> DiffNode<'a> {
        self.diff_slots(Slot::Absent, Slot::Present(b), 0)
    }

    /// Diff two slots. At least one must be present.
    pub(crate) fn diff_slots<'a>(&self, a: Slot<'a>, b: Slot<'a>, depth: usize) -> DiffNode<'a> {
        match (a, b) {
            (Slot::Present(va), Slot::Present(vb)) => match (va, vb) {
                (TreeValue::Mapping(ma), TreeValue::Mapping(mb)) => {
                    self.diff_mappings(a, b, ma, mb, depth)
                }
                (TreeValue::Sequence(sa), TreeValue::Sequence(sb)) => {
                    self.diff_sequences(a, b, sa, sb, depth)
                }
                _ => diff_primitive(&self.options, a, b, depth),
            },
            _ => diff_primitive(&self.options, a, b, depth),
        }
    }

    fn diff_mappings<'a>(
        &self,
        a: Slot<'a>,
        b: Slot<'a>,
        ma: &'a Mapping,
        mb: &'a Mapping,
        depth: usize,
    ) -> DiffNode<'a> {
        let mut entries = Vec::with_capacity(ma.len() + mb.len());

        for (key, va) in ma.iter() {
            let child = self.diff_slots(Slot::Present(va), Slot::from(mb.get(key)), depth + 1);
            entries.push((key, child));
        }

        for (key, vb) in mb.iter().filter(|(key, _)| !ma.contains_key(key)) {
            entries.push((key, self.diff_slots(Slot::Absent, Slot::Present(vb), depth + 1)));
        }

        DiffNode::mapping(a, b, entries, depth)
    }
}
