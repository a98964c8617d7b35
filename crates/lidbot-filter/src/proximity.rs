use std::collections::HashSet;

/// Whether some lemma from `left` sits within `window` positions of some
/// lemma from `right`.
///
/// Both index lists are collected in ascending order, so a single forward
/// pointer over the right indices is enough: for each left index it skips
/// right indices further than `window` behind, then checks the first remaining
/// one.
#[must_use]
pub fn has_proximity(
    lemmas: &[String],
    left: &HashSet<String>,
    right: &HashSet<String>,
    window: usize,
) -> bool {
    let left_idx: Vec<usize> = positions(lemmas, left);
    if left_idx.is_empty() {
        return false;
    }
    let right_idx: Vec<usize> = positions(lemmas, right);
    if right_idx.is_empty() {
        return false;
    }

    let mut j = 0;
    for &i in &left_idx {
        while j < right_idx.len() && right_idx[j].saturating_add(window) < i {
            j += 1;
        }
        if j < right_idx.len() && right_idx[j].abs_diff(i) <= window {
            return true;
        }
    }
    false
}

fn positions(lemmas: &[String], set: &HashSet<String>) -> Vec<usize> {
    lemmas
        .iter()
        .enumerate()
        .filter(|(_, lemma)| set.contains(lemma.as_str()))
        .map(|(i, _)| i)
        .collect()
}
