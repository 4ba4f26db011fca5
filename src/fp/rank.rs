use std::collections::{HashMap, HashSet};

use crate::Item;

/// Count how many transactions contain each item.
///
/// Duplicate occurrences of an item within one transaction count once:
/// counting is driven by membership, not multiplicity.
pub fn item_counts<I: Item>(transactions: &[Vec<I>]) -> HashMap<I, usize> {
    let mut counts: HashMap<I, usize> = HashMap::new();

    for transaction in transactions {
        let mut seen: HashSet<&I> = HashSet::with_capacity(transaction.len());
        for item in transaction {
            if seen.insert(item) {
                *counts.entry(item.clone()).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Rank the items that survive the support threshold.
///
/// Items with count below `min_support` are excluded outright. Survivors are
/// sorted by descending count, ties broken by ascending item, so the ranking
/// is a total order and the resulting tree shape is reproducible across runs.
///
/// Pure: empty input yields an empty ranking, and `min_support == 0` keeps
/// everything. Threshold validation is the coordinator's job.
pub fn rank_items<I: Item>(transactions: &[Vec<I>], min_support: usize) -> Vec<I> {
    let mut frequent: Vec<(I, usize)> = item_counts(transactions)
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .collect();

    frequent.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    frequent.into_iter().map(|(item, _)| item).collect()
}
