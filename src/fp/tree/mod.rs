// Tree module - FP-tree data structures and operations

mod tree;
mod tree_ops;

pub use tree::{FpNode, FpTree};
