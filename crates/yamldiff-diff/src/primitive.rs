//! Leaf comparison of scalars, nulls, absent slots, and type mismatches.

use yamldiff_types::Slot;

use crate::node::{DiffNode, DiffStatus};
use crate::options::DiffOptions;

/// Compare two slots as opaque values.
///
/// At least one side must be present. Weights come from the canonical
/// rendering: a one-sided value weighs its rendered length, and a changed
/// pair weighs [`changed_weight`] of the two renderings.
pub(crate) fn diff_primitive<'a>(
    options: &DiffOptions,
    a: Slot<'a>,
    b: Slot<'a>,
    depth: usize,
) -> DiffNode<'a> {
    let (status, weight) = match (a, b) {
        (Slot::Absent, Slot::Absent) => unreachable!("primitive diff of two absent slots"),
        (Slot::Present(va), Slot::Absent) => {
            if options.is_null_equivalent(va) {
                (DiffStatus::Same, 0)
            } else {
                (DiffStatus::OnlyInA, va.canonical_len())
            }
        }
        (Slot::Absent, Slot::Present(vb)) => {
            if options.is_null_equivalent(vb) {
                (DiffStatus::Same, 0)
            } else {
                (DiffStatus::OnlyInB, vb.canonical_len())
            }
        }
        (Slot::Present(va), Slot::Present(vb)) if va == vb => (DiffStatus::Same, 0),
        // Cross-type pairs with identical renderings (1 vs "1") weigh 0 here
        // while still reporting `Changed`.
        (Slot::Present(va), Slot::Present(vb)) => (
            DiffStatus::Changed,
            changed_weight(&va.to_string(), &vb.to_string()),
        ),
    };

    DiffNode::leaf(a, b, status, weight, depth)
}

/// Dissimilarity of two renderings: the longer length minus the index of
/// the first differing character, or the length difference when one is a
/// prefix of the other. Not an edit distance.
pub fn changed_weight(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());

    match a.iter().zip(&b).position(|(x, y)| x != y) {
        Some(k) => longest - k,
        None => longest - a.len().min(b.len()),
    }
}
