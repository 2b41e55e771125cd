//! Frequent itemset miners.
//!
//! `dfs` is the primary miner: depth-first extension over the inverted index.
//! `join` is the alternate breadth-first, candidate-join miner; both produce
//! the same table for the same inputs.

pub mod dfs;
pub mod join;

pub use dfs::mine_frequent_itemsets;
pub use join::mine_frequent_itemsets_join;
