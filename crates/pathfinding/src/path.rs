//! Path reconstruction from a parent table.

use std::collections::HashMap;
use std::hash::Hash;

/// Walks `parents` from `target` back to `start` and returns the nodes in
/// start-to-target order, both ends included.
///
/// Returns `None` when `target` has no parent entry, or when the chain does
/// not lead back to `start` within `parents.len()` steps (a cycle left behind
/// by an inconsistent graph).
pub fn reconstruct_path<T>(parents: &HashMap<T, T>, start: &T, target: &T) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    if !parents.contains_key(target) {
        return None;
    }

    let mut path = vec![target.clone()];
    let mut current = target;
    while current != start {
        if path.len() > parents.len() {
            return None;
        }
        let parent = parents.get(current)?;
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    Some(path)
}
