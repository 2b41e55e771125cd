//! Transaction collection and inverted index.

use std::collections::HashMap;

use crate::error::{MineError, Result};
use crate::types::{Inventory, ItemId, Postings, RawTransaction, ReverseLookup, Transaction};

/// Owns the interned transaction collection and the item inventory.
///
/// Item ids are assigned in ascending lexicographic order of the item labels,
/// so the total order on `ItemId` is the lexicographic order on labels. That
/// order defines the canonical (sorted) itemset representation used
/// everywhere downstream.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    inventory: Inventory,
}

impl TransactionStore {
    /// Interns item labels and produces sorted, deduplicated transactions.
    /// A transaction's identity is its position in `raw_transactions`.
    pub fn from_raw(raw_transactions: &[RawTransaction]) -> Self {
        let mut labels: Vec<&str> = raw_transactions
            .iter()
            .flat_map(|transaction| transaction.iter().map(String::as_str))
            .collect();
        labels.sort_unstable();
        labels.dedup();

        let inventory: Inventory = labels.iter().map(|&label| label.to_owned()).collect();
        let reverse_lookup: ReverseLookup = inventory
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();

        let transactions = raw_transactions
            .iter()
            .map(|raw_transaction| {
                let mut items: Transaction = raw_transaction
                    .iter()
                    .map(|item| reverse_lookup[item.as_str()])
                    .collect();
                items.sort_unstable();
                items
            })
            .collect();

        Self {
            transactions,
            inventory,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Label for an interned item id, if the id is known.
    pub fn item_name(&self, item: ItemId) -> Option<&str> {
        self.inventory.get(item).map(String::as_str)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Opt-in emptiness check for callers that require non-empty input.
    /// An empty collection is not an error by default.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.transactions.is_empty() {
            return Err(MineError::EmptyInput);
        }
        Ok(())
    }

    /// Builds the inverted index: one posting set of transaction ids per item.
    pub fn build_index(&self) -> InvertedIndex {
        let mut postings: HashMap<ItemId, Postings> = HashMap::new();

        for (transaction_id, transaction) in self.transactions.iter().enumerate() {
            for &item in transaction {
                postings.entry(item).or_default().insert(transaction_id);
            }
        }

        InvertedIndex {
            postings,
            num_transactions: self.transactions.len(),
        }
    }
}

/// Read-only mapping from item to the set of transactions containing it.
/// Items absent from every transaction have no entry.
pub struct InvertedIndex {
    postings: HashMap<ItemId, Postings>,
    num_transactions: usize,
}

impl InvertedIndex {
    pub fn postings(&self, item: ItemId) -> Option<&Postings> {
        self.postings.get(&item)
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn num_items(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! raw_transaction {
        ($($x:expr),*) => {
            {
                let mut set: RawTransaction = RawTransaction::new();
                $(set.insert($x.to_string());)*
                set
            }
        };
    }

    #[test]
    fn interns_items_in_label_order() {
        let raw = vec![raw_transaction!["B", "A"], raw_transaction!["C", "A"]];
        let store = TransactionStore::from_raw(&raw);

        assert_eq!(store.inventory(), &vec!["A", "B", "C"]);
        assert_eq!(store.transactions(), &[vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn item_name_round_trips() {
        let raw = vec![raw_transaction!["B", "A"]];
        let store = TransactionStore::from_raw(&raw);

        assert_eq!(store.item_name(0), Some("A"));
        assert_eq!(store.item_name(1), Some("B"));
        assert_eq!(store.item_name(2), None);
    }

    #[test]
    fn builds_postings_per_item() {
        let raw = vec![
            raw_transaction!["A", "B"],
            raw_transaction!["A"],
            raw_transaction!["B", "C"],
        ];
        let store = TransactionStore::from_raw(&raw);
        let index = store.build_index();

        assert_eq!(index.num_transactions(), 3);
        assert_eq!(index.num_items(), 3);
        assert_eq!(
            index.postings(0).unwrap(),
            &[0, 1].iter().copied().collect::<Postings>()
        );
        assert_eq!(
            index.postings(1).unwrap(),
            &[0, 2].iter().copied().collect::<Postings>()
        );
        assert_eq!(
            index.postings(2).unwrap(),
            &[2].iter().copied().collect::<Postings>()
        );
    }

    #[test]
    fn empty_collection_yields_empty_index() {
        let store = TransactionStore::from_raw(&[]);
        let index = store.build_index();

        assert_eq!(index.num_transactions(), 0);
        assert_eq!(index.num_items(), 0);
        assert!(store.ensure_non_empty().is_err());
    }
}
