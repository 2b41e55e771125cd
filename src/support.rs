//! Support counting via posting-set intersection.

use crate::store::InvertedIndex;
use crate::types::{ItemId, Postings, Support};

/// Number of transactions whose item set is a superset of `itemset`.
///
/// Every item is looked up, and an item absent from the index contributes an
/// empty posting set, which forces the result to 0. The empty itemset is
/// supported by every transaction by convention.
///
/// Intersection starts from the smallest posting set; this only affects
/// speed, never the result.
pub fn support(itemset: &[ItemId], index: &InvertedIndex) -> Support {
    if itemset.is_empty() {
        return index.num_transactions();
    }

    let mut postings: Vec<&Postings> = Vec::with_capacity(itemset.len());
    for &item in itemset {
        match index.postings(item) {
            Some(transaction_ids) => postings.push(transaction_ids),
            // Item occurs in no transaction: empty posting set, empty
            // intersection.
            None => return 0,
        }
    }

    postings.sort_unstable_by_key(|transaction_ids| transaction_ids.len());
    let (smallest, rest) = (postings[0], &postings[1..]);

    smallest
        .iter()
        .filter(|transaction_id| {
            rest.iter()
                .all(|transaction_ids| transaction_ids.contains(transaction_id))
        })
        .count()
}
