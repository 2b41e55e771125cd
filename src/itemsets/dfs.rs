//! Depth-first frequent itemset miner.

use std::collections::HashMap;

use tracing::debug;

use crate::store::{InvertedIndex, TransactionStore};
use crate::support::support;
use crate::types::{FrequentItemsets, ItemCounts, ItemId, Itemset, ItemsetLength, Support};

/// Enumerates every itemset with support >= `min_support`, keyed by size.
///
/// Level 1 is seeded by a single tally pass over the transactions. From the
/// surviving items, itemsets are extended depth-first; extension candidates
/// are restricted to ids strictly greater than the item just added, so each
/// itemset is generated exactly once. An infrequent itemset is never extended
/// (no superset of an infrequent set can be frequent).
///
/// The result contains only sizes with at least one frequent itemset.
///
/// A `min_support` of 0 makes every itemset over the item universe frequent;
/// guarding against the combinatorial blow-up is the caller's responsibility.
pub fn mine_frequent_itemsets(
    store: &TransactionStore,
    index: &InvertedIndex,
    min_support: Support,
) -> FrequentItemsets {
    let mut item_counts: ItemCounts = HashMap::new();
    for transaction in store.transactions() {
        for &item in transaction {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    let mut seeds: Vec<ItemId> = item_counts
        .iter()
        .filter(|(_, &count)| count >= min_support)
        .map(|(&item, _)| item)
        .collect();
    seeds.sort_unstable();

    debug!(
        num_items = item_counts.len(),
        num_seeds = seeds.len(),
        min_support,
        "seeded level 1"
    );

    if seeds.is_empty() {
        return FrequentItemsets::new();
    }

    let mut table: FrequentItemsets = HashMap::new();
    let level_1 = table.entry(1).or_default();
    for &item in &seeds {
        level_1.insert(vec![item], item_counts[&item]);
    }

    for (position, &item) in seeds.iter().enumerate() {
        let remaining = &seeds[position + 1..];
        if remaining.is_empty() {
            continue;
        }
        let seed: Itemset = vec![item];
        let deeper = extend(&seed, remaining, 2, index, min_support);
        merge(&mut table, deeper);
    }

    table
}

/// One depth-first extension step. `remaining` holds only ids strictly
/// greater than the last item of `current`, in ascending order, so pushing a
/// candidate keeps the itemset sorted. Returns the level-keyed table found in
/// this branch; the caller merges.
fn extend(
    current: &Itemset,
    remaining: &[ItemId],
    level: ItemsetLength,
    index: &InvertedIndex,
    min_support: Support,
) -> FrequentItemsets {
    let mut found: FrequentItemsets = HashMap::new();

    for (position, &item) in remaining.iter().enumerate() {
        let mut candidate = current.clone();
        candidate.push(item);

        let count = support(&candidate, index);
        if count < min_support {
            continue;
        }

        let rest = &remaining[position + 1..];
        if !rest.is_empty() {
            let deeper = extend(&candidate, rest, level + 1, index, min_support);
            merge(&mut found, deeper);
        }
        found.entry(level).or_default().insert(candidate, count);
    }

    found
}

fn merge(table: &mut FrequentItemsets, found: FrequentItemsets) {
    for (level, itemset_counts) in found {
        table.entry(level).or_default().extend(itemset_counts);
    }
}
