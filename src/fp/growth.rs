use tracing::debug;

use super::builder::build_fp_tree;
use super::mining::mine_patterns;
use super::rank::rank_items;
use super::storage::PatternStore;
use crate::error::MineError;
use crate::Item;

/// Coordinator for one mining run: rank, build, mine, in strict sequence.
///
/// Holds exactly two pieces of state: the configured threshold and the
/// accumulated patterns. There is no implicit reset between runs — calling
/// [`fit`](Self::fit) twice appends the second run's entries after the
/// first's. Use a fresh instance or [`clear`](Self::clear) for a clean run.
#[derive(Debug, Clone)]
pub struct FpGrowth<I> {
    min_support: usize,
    patterns: PatternStore<I>,
}

impl<I: Item> FpGrowth<I> {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            patterns: PatternStore::new(),
        }
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    /// Mine the transaction batch, appending patterns to this instance.
    ///
    /// Rejects a threshold below 1 before touching any state, so a failed
    /// call leaves previously accumulated results intact.
    pub fn fit(&mut self, transactions: &[Vec<I>]) -> Result<(), MineError> {
        if self.min_support < 1 {
            return Err(MineError::InvalidThreshold {
                min_support: self.min_support,
            });
        }

        let ranked_items = rank_items(transactions, self.min_support);
        debug!(frequent = ranked_items.len(), "ranked frequent items");

        let tree = build_fp_tree(transactions, &ranked_items);
        debug!(nodes = tree.node_count(), "prefix tree built");

        mine_patterns(&tree, &mut self.patterns);
        debug!(patterns = self.patterns.len(), "mining complete");

        Ok(())
    }

    /// Patterns accumulated so far, in emission order.
    pub fn frequent_patterns(&self) -> &PatternStore<I> {
        &self.patterns
    }

    /// Drop all accumulated patterns, keeping the threshold.
    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}
