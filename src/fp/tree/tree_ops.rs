use super::tree::{FpNode, FpTree};
use crate::Item;

impl<I: Item> FpTree<I> {
    /// Run one incrementing walk from the root along `path`.
    ///
    /// For each item the walk either descends into the matching existing
    /// child (incrementing its count) or creates a new child with count 1.
    /// `path` must already be filtered to ranked items and ordered by the
    /// global ranking; the walk itself does no reordering.
    pub fn insert_path(&mut self, path: &[I]) {
        let mut current_index = self.root_index;

        for item in path {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += 1;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FpNode::new_item(item.clone(), current_index));
                self.nodes[current_index]
                    .children
                    .insert(item.clone(), new_index);
                current_index = new_index;
            }
        }
    }

    /// Item sequence from just below the root down to `node_index`, rebuilt
    /// by following parent handles upward.
    pub fn prefix_path(&self, node_index: usize) -> Vec<I> {
        let mut path = Vec::new();
        let mut current = Some(node_index);

        while let Some(idx) = current {
            let node = &self.nodes[idx];
            if let Some(item) = &node.item {
                path.push(item.clone());
            }
            current = node.parent;
        }

        path.reverse();
        path
    }
}
