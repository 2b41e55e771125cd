//! Breadth-first, candidate-join frequent itemset miner.
//!
//! Alternate implementation of the mining contract: same table as
//! [`crate::itemsets::dfs::mine_frequent_itemsets`] for the same inputs.
//! Counts candidates by scanning the transaction collection instead of
//! intersecting posting sets, parallelized across candidates.

use std::collections::HashMap;

use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::combi::join_step;
use crate::store::TransactionStore;
use crate::types::{
    FrequentItemsets, ItemCounts, ItemId, Itemset, ItemsetCounts, Support, Transaction,
};

/// Enumerates every itemset with support >= `min_support`, keyed by size,
/// level by level: survivors of level 1 are paired into 2-item candidates,
/// higher levels come from joining the previous level's itemsets. Mining
/// stops at the first level with no frequent itemset; empty levels are never
/// inserted.
pub fn mine_frequent_itemsets_join(
    store: &TransactionStore,
    min_support: Support,
) -> FrequentItemsets {
    let mut table: FrequentItemsets = HashMap::new();

    let mut item_counts: ItemCounts = HashMap::new();
    for transaction in store.transactions() {
        for &item in transaction {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }
    item_counts.retain(|_, &mut count| count >= min_support);

    if item_counts.is_empty() {
        return table;
    }

    let mut survivors: Vec<ItemId> = item_counts.keys().copied().collect();
    survivors.sort_unstable();

    table.insert(
        1,
        item_counts
            .iter()
            .map(|(&item, &count)| (vec![item], count))
            .collect(),
    );

    // Transactions shorter than the current size cannot support a candidate.
    let mut transactions: Vec<Transaction> = store.transactions().to_vec();
    let mut candidates: Vec<Itemset> = survivors.into_iter().combinations(2).collect();
    let mut size = 2;

    while !candidates.is_empty() {
        debug!(size, num_candidates = candidates.len(), "counting level");

        transactions.retain(|transaction| transaction.len() >= size);
        let counts = count_frequent_candidates(&candidates, &transactions, min_support);
        if counts.is_empty() {
            break;
        }

        candidates = join_step(counts.keys().cloned().collect());
        table.insert(size, counts);
        size += 1;
    }

    table
}

fn count_frequent_candidates(
    candidates: &[Itemset],
    transactions: &[Transaction],
    min_support: Support,
) -> ItemsetCounts {
    candidates
        .par_iter()
        .filter_map(|candidate| {
            let count = transactions
                .iter()
                .filter(|transaction| {
                    candidate.iter().all(|item| transaction.contains(item))
                })
                .count();
            if count >= min_support {
                Some((candidate.clone(), count))
            } else {
                None
            }
        })
        .collect()
}
