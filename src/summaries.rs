//! Maximal and closed itemset extraction.
//!
//! Both walks check only the next level up. If a frequent superset exists at
//! any higher level, the Apriori closure property guarantees a witness one
//! level up with support at least as high, so the single-level check is
//! exhaustive. The table must be complete before either extraction runs.

use crate::types::{FrequentItemsets, ItemId, ItemsetCounts};

/// Frequent itemsets with no frequent strict superset.
pub fn maximal_itemsets(table: &FrequentItemsets) -> ItemsetCounts {
    let mut maximal = ItemsetCounts::new();

    for (&size, level) in table {
        let next_level = table.get(&(size + 1));
        for (itemset, &count) in level {
            let has_frequent_superset = next_level.is_some_and(|supersets| {
                supersets.keys().any(|superset| is_subset(itemset, superset))
            });
            if !has_frequent_superset {
                maximal.insert(itemset.clone(), count);
            }
        }
    }

    maximal
}

/// Frequent itemsets with no strict superset of equal support.
pub fn closed_itemsets(table: &FrequentItemsets) -> ItemsetCounts {
    let mut closed = ItemsetCounts::new();

    for (&size, level) in table {
        let next_level = table.get(&(size + 1));
        for (itemset, &count) in level {
            let has_equal_support_superset = next_level.is_some_and(|supersets| {
                supersets
                    .iter()
                    .any(|(superset, &superset_count)| {
                        superset_count == count && is_subset(itemset, superset)
                    })
            });
            if !has_equal_support_superset {
                closed.insert(itemset.clone(), count);
            }
        }
    }

    closed
}

/// Merge walk over two canonical (sorted) itemsets. `a` shorter than `b`
/// makes any hit a strict subset.
fn is_subset(a: &[ItemId], b: &[ItemId]) -> bool {
    let mut b_iter = b.iter();
    a.iter()
        .all(|item| b_iter.by_ref().any(|candidate| candidate == item))
}
