use std::collections::HashSet;

use super::tree::FpTree;
use crate::Item;

/// Build the shared prefix tree from the transactions and the global ranking.
///
/// Each transaction is projected onto the ranking: items absent from the
/// ranking or from the transaction are skipped, and the survivors keep the
/// ranking's order. That projected sequence drives one insertion walk, which
/// is what lets transactions sharing a frequent-item prefix share nodes and
/// counts. Transactions with no ranked items contribute nothing.
pub fn build_fp_tree<I: Item>(transactions: &[Vec<I>], ranked_items: &[I]) -> FpTree<I> {
    let mut tree = FpTree::new();

    for transaction in transactions {
        let members: HashSet<&I> = transaction.iter().collect();
        let path: Vec<I> = ranked_items
            .iter()
            .filter(|item| members.contains(item))
            .cloned()
            .collect();

        if !path.is_empty() {
            tree.insert_path(&path);
        }
    }

    tree
}
