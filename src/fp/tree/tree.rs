use indexmap::IndexMap;

use crate::Item;

/// One position in the shared prefix structure.
///
/// Nodes live in the tree's arena and refer to each other by index. The
/// `parent` handle is kept for structural navigation only; ownership flows
/// strictly downward through `children`, whose insertion order fixes the
/// order in which patterns are later emitted.
#[derive(Debug, Clone)]
pub struct FpNode<I> {
    /// `None` marks the root sentinel.
    pub item: Option<I>,
    /// Number of transactions whose filtered-and-ordered prefix passes
    /// through this node. Zero at the root.
    pub count: usize,
    pub parent: Option<usize>,
    pub children: IndexMap<I, usize>,
}

/// Arena-backed prefix tree. Index 0 is always the root sentinel.
#[derive(Debug, Clone)]
pub struct FpTree<I> {
    pub nodes: Vec<FpNode<I>>,
    pub root_index: usize,
}

impl<I: Item> FpNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: IndexMap::new(),
        }
    }

    pub fn new_item(item: I, parent: usize) -> Self {
        Self {
            item: Some(item),
            count: 1,
            parent: Some(parent),
            children: IndexMap::new(),
        }
    }
}

impl<I: Item> FpTree<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FpNode::new_root()],
            root_index: 0,
        }
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<I: Item> Default for FpTree<I> {
    fn default() -> Self {
        Self::new()
    }
}
