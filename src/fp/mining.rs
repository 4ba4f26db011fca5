use super::storage::PatternStore;
use super::tree::FpTree;
use crate::Item;

/// Walk the completed tree depth-first, emitting one pattern per node.
///
/// Every non-root node yields `(prefix path + its item, its count)`, so the
/// output deliberately contains nested sequences (both `[a]` and `[a, b]`
/// where applicable) and its cardinality equals the non-root node count.
/// Siblings are visited in child insertion order, which fixes the output
/// order but not its content.
pub fn mine_patterns<I: Item>(tree: &FpTree<I>, patterns: &mut PatternStore<I>) {
    let mut prefix = Vec::new();
    mine_node(tree, tree.root_index, &mut prefix, patterns);
}

fn mine_node<I: Item>(
    tree: &FpTree<I>,
    node_index: usize,
    prefix: &mut Vec<I>,
    patterns: &mut PatternStore<I>,
) {
    for (item, &child_index) in &tree.nodes[node_index].children {
        prefix.push(item.clone());
        patterns.push(prefix, tree.nodes[child_index].count);
        mine_node(tree, child_index, prefix, patterns);
        prefix.pop();
    }
}
