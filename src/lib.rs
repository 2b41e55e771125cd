//! Frequent itemset mining over in-memory transaction collections.
//!
//! The pipeline: [`TransactionStore`] interns transactions and builds the
//! inverted index, [`support`] counts any itemset against the index,
//! [`mine_frequent_itemsets`] enumerates the full level-keyed table of
//! frequent itemsets depth-first, and [`maximal_itemsets`] /
//! [`closed_itemsets`] derive the two canonical summaries from the finished
//! table. [`mine_frequent_itemsets_join`] is an alternate breadth-first miner
//! with the same contract.

pub mod combi;
pub mod error;
pub mod ingest;
pub mod itemsets;
pub mod store;
pub mod summaries;
pub mod support;
pub mod types;

pub use error::{MineError, Result};
pub use itemsets::{mine_frequent_itemsets, mine_frequent_itemsets_join};
pub use store::{InvertedIndex, TransactionStore};
pub use summaries::{closed_itemsets, maximal_itemsets};
pub use support::support;
