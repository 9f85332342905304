//! Pairing whole documents between two inputs.
//!
//! Every left/right pair is diffed, plus every document against nothing.
//! Candidates are ordered exact matches first, then by ascending weight
//! (stable), and confirmed greedily while both endpoints are unclaimed. An
//! absent endpoint is never claimed, so any document can fall back to its
//! own "versus nothing" diff.

use std::collections::HashSet;

use tracing::debug;
use yamldiff_types::{Document, DocumentId, Slot};

use crate::node::{DiffNode, DiffStatus};
use crate::options::DiffOptions;
use crate::structural::Differ;

/// The diff of one matched (or unmatched) document.
#[derive(Clone, Debug)]
pub struct DocumentDiff<'a> {
    /// Left document, or `None` when the right document has no partner.
    pub left: Option<DocumentId>,
    /// Right document, or `None` when the left document has no partner.
    pub right: Option<DocumentId>,
    pub node: DiffNode<'a>,
}

impl DocumentDiff<'_> {
    pub fn status(&self) -> DiffStatus {
        self.node.status
    }

    pub fn weight(&self) -> usize {
        self.node.weight
    }

    pub fn is_same(&self) -> bool {
        self.node.is_same()
    }

    /// The annotated text block for this document.
    pub fn render(&self) -> String {
        self.node.render()
    }
}

struct Candidate<'a> {
    left: Option<usize>,
    right: Option<usize>,
    node: DiffNode<'a>,
}

impl Differ {
    /// Pair documents between `left` and `right` and diff each pair.
    ///
    /// Results follow left order (each left document with the diff that
    /// claimed it), then right-only documents in right order.
    pub fn diff_documents<'a>(
        &self,
        left: &'a [Document],
        right: &'a [Document],
    ) -> Vec<DocumentDiff<'a>> {
        let capacity = left.len() * right.len() + left.len() + right.len();
        let mut candidates = Vec::with_capacity(capacity);

        for (i, l) in left.iter().enumerate() {
            for (j, r) in right.iter().enumerate() {
                candidates.push(Candidate {
                    left: Some(i),
                    right: Some(j),
                    node: self.diff_slots(Slot::Present(l.tree()), Slot::Present(r.tree()), 0),
                });
            }
        }
        for (i, l) in left.iter().enumerate() {
            candidates.push(Candidate {
                left: Some(i),
                right: None,
                node: self.diff_slots(Slot::Present(l.tree()), Slot::Absent, 0),
            });
        }
        for (j, r) in right.iter().enumerate() {
            candidates.push(Candidate {
                left: None,
                right: Some(j),
                node: self.diff_slots(Slot::Absent, Slot::Present(r.tree()), 0),
            });
        }

        debug!(
            left = left.len(),
            right = right.len(),
            candidates = candidates.len(),
            "matching documents"
        );

        candidates.sort_by_key(|c| (!c.node.is_same(), c.node.weight));

        let mut claimed_left: HashSet<DocumentId> = HashSet::new();
        let mut claimed_right: HashSet<DocumentId> = HashSet::new();
        let mut by_left: Vec<Option<DocumentDiff<'a>>> = vec![None; left.len()];
        let mut right_only: Vec<Option<DocumentDiff<'a>>> = vec![None; right.len()];

        for Candidate { left: i, right: j, node } in candidates {
            let left_id = i.map(|i| left[i].id());
            let right_id = j.map(|j| right[j].id());

            if left_id.is_some_and(|id| claimed_left.contains(&id))
                || right_id.is_some_and(|id| claimed_right.contains(&id))
            {
                continue;
            }
            claimed_left.extend(left_id);
            claimed_right.extend(right_id);

            let diff = DocumentDiff {
                left: left_id,
                right: right_id,
                node,
            };
            match (i, j) {
                (Some(i), _) => by_left[i] = Some(diff),
                (None, Some(j)) => right_only[j] = Some(diff),
                (None, None) => {}
            }
        }

        let results: Vec<_> = by_left.into_iter().chain(right_only).flatten().collect();
        debug!(
            results = results.len(),
            changed = results.iter().filter(|d| !d.is_same()).count(),
            "document matching complete"
        );
        results
    }
}

/// Diff two document lists with the given options.
pub fn diff_documents<'a>(
    left: &'a [Document],
    right: &'a [Document],
    options: DiffOptions,
) -> Vec<DocumentDiff<'a>> {
    Differ::new(options).diff_documents(left, right)
}
