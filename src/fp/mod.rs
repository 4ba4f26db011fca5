pub mod builder;
pub mod growth;
pub mod mining;
pub mod rank;
pub mod storage;
pub mod tree;


pub use builder::build_fp_tree;
pub use growth::FpGrowth;
pub use mining::mine_patterns;
pub use rank::{item_counts, rank_items};
pub use storage::PatternStore;
pub use tree::{FpNode, FpTree};
