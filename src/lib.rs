//! Frequent itemset mining over transaction batches using a shared FP-tree.
//!
//! Given a batch of transactions (each an unordered collection of items) and
//! an integer minimum-support threshold, the miner reports every item
//! sequence whose occurrence count meets the threshold, paired with that
//! count. The pipeline is a strict sequence: item frequencies are counted
//! and ranked, a single prefix tree is built from the transactions ordered
//! by that ranking, and the tree is walked depth-first emitting one pattern
//! per node.
//!
//! This is the simplified single-tree variant: every root-to-node path is
//! emitted as a pattern. It does not build per-item conditional sub-trees,
//! so its output is order-dependent and includes non-maximal itemsets;
//! callers wanting textbook FP-Growth semantics need a different algorithm.
//!
//! ```
//! use fp_miner::FpGrowth;
//!
//! let transactions = vec![
//!     vec!["a", "b"],
//!     vec!["a"],
//!     vec!["b", "c"],
//! ];
//!
//! let mut miner = FpGrowth::new(2);
//! miner.fit(&transactions).unwrap();
//!
//! let patterns = miner.frequent_patterns().to_vec();
//! assert_eq!(patterns, vec![
//!     (vec!["a"], 2),
//!     (vec!["a", "b"], 1),
//!     (vec!["b"], 1),
//! ]);
//! ```

use std::hash::Hash;

pub mod dataset;
pub mod error;
pub mod fp;

pub use error::MineError;
pub use fp::{FpGrowth, FpNode, FpTree, PatternStore};

/// Bound alias for item identifiers: anything comparable, hashable, and
/// cloneable works (strings and small integers in practice).
pub trait Item: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> Item for T {}
