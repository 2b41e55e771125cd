//! Candidate generation for the breadth-first miner.

use itertools::Itertools;

use crate::types::{ItemId, Itemset};

/// Joins sorted k-itemsets that share their first k-1 items into (k+1)-item
/// candidates. Every frequent (k+1)-itemset has two frequent k-subsets that
/// differ only in their last item, so no frequent candidate is missed.
pub fn join_step(mut itemsets: Vec<Itemset>) -> Vec<Itemset> {
    if itemsets.is_empty() {
        return vec![];
    }

    itemsets.sort_unstable();

    let mut candidates: Vec<Itemset> = Vec::new();
    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, last) = itemsets[i].split_at(itemsets[i].len() - 1);

        // Tail items of every itemset sharing this prefix, ascending because
        // the itemsets are sorted.
        let mut tail_items: Vec<ItemId> = vec![last[0]];
        let mut j = i + 1;
        while j < itemsets.len() && itemsets[j][..prefix.len()] == *prefix {
            tail_items.push(itemsets[j][itemsets[j].len() - 1]);
            j += 1;
        }

        for (a, b) in tail_items.iter().tuple_combinations() {
            let mut candidate = prefix.to_vec();
            candidate.push(*a);
            candidate.push(*b);
            candidates.push(candidate);
        }

        i = j;
    }

    candidates
}
