//! Order-insensitive sequence diff via greedy minimum-weight matching.
//!
//! Every element pair is diffed up front. Exact matches are confirmed
//! first, scanning left elements in order and taking the first unclaimed
//! right element that is `Same`. The rest are paired by repeatedly taking
//! the globally lightest remaining pair, scanning left then right so the
//! earliest pair wins ties. Leftovers become one-sided children.
//!
//! This is a heuristic, not an optimal assignment, and the tie-break order
//! determines output.

use yamldiff_types::{Slot, TreeValue};

use crate::node::{DiffNode, DiffStatus};
use crate::structural::Differ;

impl Differ {
    pub(crate) fn diff_sequences<'a>(
        &self,
        a: Slot<'a>,
        b: Slot<'a>,
        xs: &'a [TreeValue],
        ys: &'a [TreeValue],
        depth: usize,
    ) -> DiffNode<'a> {
        let mut grid: Vec<Vec<Option<DiffNode<'a>>>> = xs
            .iter()
            .map(|x| {
                ys.iter()
                    .map(|y| Some(self.diff_slots(Slot::Present(x), Slot::Present(y), depth + 1)))
                    .collect()
            })
            .collect();

        let mut matched_a = vec![false; xs.len()];
        let mut matched_b = vec![false; ys.len()];
        let mut children = Vec::with_capacity(xs.len().max(ys.len()));

        for (i, row) in grid.iter_mut().enumerate() {
            let exact = (0..ys.len())
                .find(|&j| !matched_b[j] && row[j].as_ref().is_some_and(|n| n.is_same()));
            if let Some(node) = exact.and_then(|j| row[j].take()) {
                matched_a[i] = true;
                if let Some(j) = exact {
                    matched_b[j] = true;
                }
                children.push(node);
            }
        }

        if matched_a.iter().all(|&m| m) && matched_b.iter().all(|&m| m) {
            return DiffNode::sequence(a, b, children, DiffStatus::Same, depth);
        }

        loop {
            if matched_a.iter().all(|&m| m) {
                for (y, _) in ys.iter().zip(&matched_b).filter(|&(_, &m)| !m) {
                    children.push(self.diff_slots(Slot::Absent, Slot::Present(y), depth + 1));
                }
                break;
            }

            if matched_b.iter().all(|&m| m) {
                for (x, _) in xs.iter().zip(&matched_a).filter(|&(_, &m)| !m) {
                    children.push(self.diff_slots(Slot::Present(x), Slot::Absent, depth + 1));
                }
                break;
            }

            let Some((i, j)) = lightest_pair(&grid, &matched_a, &matched_b) else {
                break;
            };
            matched_a[i] = true;
            matched_b[j] = true;
            if let Some(node) = grid[i][j].take() {
                children.push(node);
            }
        }

        DiffNode::sequence(a, b, children, DiffStatus::Changed, depth)
    }
}

/// The unmatched pair with the smallest weight; the first one scanned wins ties.
fn lightest_pair(
    grid: &[Vec<Option<DiffNode<'_>>>],
    matched_a: &[bool],
    matched_b: &[bool],
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;

    for (i, row) in grid.iter().enumerate().filter(|(i, _)| !matched_a[*i]) {
        for (j, cell) in row.iter().enumerate().filter(|(j, _)| !matched_b[*j]) {
            let Some(node) = cell else { continue };
            if best.map_or(true, |(_, _, weight)| node.weight < weight) {
                best = Some((i, j, node.weight));
            }
        }
    }

    best.map(|(i, j, _)| (i, j))
}

#[cfg(test)]
mod tests {
    use crate::node::DiffStatus;
    use crate::options::DiffOptions;
    use crate::structural::Differ;
    use yamldiff_types::TreeValue;

    fn seq(items: Vec<TreeValue>) -> TreeValue {
        TreeValue::Sequence(items)
    }

    fn nums(ns: &[i32]) -> TreeValue {
        seq(ns.iter().map(|&n| TreeValue::from(n)).collect())
    }

    fn pairs(node: &crate::node::DiffNode<'_>) -> Vec<(Option<String>, Option<String>)> {
        node.items()
            .unwrap()
            .iter()
            .map(|n| (n.a.value().map(|v| v.to_string()), n.b.value().map(|v| v.to_string())))
            .collect()
    }

    fn p(a: Option<&str>, b: Option<&str>) -> (Option<String>, Option<String>) {
        (a.map(String::from), b.map(String::from))
    }

    #[test]
    fn same_order_is_same() {
        let a = nums(&[1, 2, 3]);
        let node = Differ::default().diff(&a, &a);
        assert!(node.is_same());
        assert_eq!(node.items().unwrap().len(), 3);
    }

    #[test]
    fn reordered_is_same_in_left_order() {
        let a = nums(&[1, 2, 3]);
        let b = nums(&[3, 1, 2]);
        let node = Differ::default().diff(&a, &b);

        assert!(node.is_same());
        assert_eq!(
            pairs(&node),
            vec![p(Some("1"), Some("1")), p(Some("2"), Some("2")), p(Some("3"), Some("3"))]
        );
    }

    #[test]
    fn missing_in_a_is_appended() {
        let (a, b) = (nums(&[1, 2]), nums(&[1, 2, 3]));
        let node = Differ::default().diff(&a, &b);
        assert_eq!(node.status, DiffStatus::Changed);
        assert_eq!(node.weight, 1);
        let last = &node.items().unwrap()[2];
        assert_eq!((last.status, last.weight), (DiffStatus::OnlyInB, 1));
    }

    #[test]
    fn missing_in_b_is_appended_last() {
        let (a, b) = (nums(&[1, 2, 3]), nums(&[1, 3]));
        let node = Differ::default().diff(&a, &b);
        assert_eq!(
            pairs(&node),
            vec![p(Some("1"), Some("1")), p(Some("3"), Some("3")), p(Some("2"), None)]
        );
        assert_eq!(node.items().unwrap()[2].status, DiffStatus::OnlyInA);
    }

    #[test]
    fn unmatched_elements_pair_up_as_changes() {
        let (a, b) = (nums(&[1, 2, 3]), nums(&[1, 3, 4]));
        let node = Differ::default().diff(&a, &b);
        assert_eq!(
            pairs(&node),
            vec![p(Some("1"), Some("1")), p(Some("3"), Some("3")), p(Some("2"), Some("4"))]
        );
        assert_eq!(node.weight, 1);
    }

    #[test]
    fn nested_sequences_pick_the_lightest_pair() {
        let a = seq(vec![
            TreeValue::from(1),
            nums(&[2, 3, 4]),
            TreeValue::from(5),
            TreeValue::from(6),
        ]);
        let b = seq(vec![TreeValue::from(1), TreeValue::from(5), nums(&[2])]);
        let node = Differ::default().diff(&a, &b);

        let items = node.items().unwrap();
        assert_eq!(items.len(), 4);
        assert!(items[0].is_same() && items[1].is_same());
        // [2, 3, 4] vs [2] weighs 2; 6 vs [2] weighs 3.
        assert!(items[2].is_composite());
        assert_eq!(items[2].weight, 2);
        assert_eq!(items[2].depth, 1);
        assert_eq!((items[3].status, items[3].weight), (DiffStatus::OnlyInA, 1));
        assert_eq!(node.weight, 3);
    }

    #[test]
    fn duplicates_claim_distinct_partners() {
        let (a, b) = (nums(&[1, 1]), nums(&[1, 2]));
        let node = Differ::default().diff(&a, &b);
        assert_eq!(
            pairs(&node),
            vec![p(Some("1"), Some("1")), p(Some("1"), Some("2"))]
        );
        assert_eq!(node.status, DiffStatus::Changed);
    }

    #[test]
    fn ties_go_to_the_first_scanned_pair() {
        // Every cross pair weighs 1, so left order then right order decides.
        let (a, b) = (nums(&[1, 2]), nums(&[3, 4]));
        let node = Differ::default().diff(&a, &b);
        assert_eq!(
            pairs(&node),
            vec![p(Some("1"), Some("3")), p(Some("2"), Some("4"))]
        );
    }

    #[test]
    fn empty_sequences_are_same() {
        let empty = seq(vec![]);
        let node = Differ::default().diff(&empty, &empty);
        assert!(node.is_same());
        assert!(node.items().unwrap().is_empty());
    }

    #[test]
    fn leftover_null_equivalent_is_same_but_sequence_changed() {
        let a = seq(vec![TreeValue::from(1), TreeValue::Null]);
        let b = nums(&[1]);
        let node = Differ::new(DiffOptions::ignore_empty()).diff(&a, &b);

        assert_eq!(node.status, DiffStatus::Changed);
        assert_eq!(node.weight, 0);
        assert!(node.items().unwrap()[1].is_same());
    }
}
