//! End-to-end mining properties and scenarios.

use maplit::hashmap;

use freqmine::ingest::{CharItems, ItemExtractor};
use freqmine::types::{FrequentItemsets, Itemset, RawTransaction, Support};
use freqmine::{
    closed_itemsets, maximal_itemsets, mine_frequent_itemsets, mine_frequent_itemsets_join,
    support, TransactionStore,
};

macro_rules! raw_transaction {
    ($($x:expr),*) => {
        {
            let mut set: RawTransaction = RawTransaction::new();
            $(set.insert($x.to_string());)*
            set
        }
    };
}

fn mine(raw: &[RawTransaction], min_support: Support) -> (TransactionStore, FrequentItemsets) {
    let store = TransactionStore::from_raw(raw);
    let index = store.build_index();
    let table = mine_frequent_itemsets(&store, &index, min_support);
    (store, table)
}

fn grocery_dataset() -> Vec<RawTransaction> {
    vec![
        raw_transaction!["bread", "yogurt"],
        raw_transaction!["bread", "milk", "cereal", "eggs"],
        raw_transaction!["yogurt", "milk", "cereal", "cheese"],
        raw_transaction!["bread", "yogurt", "milk", "cereal"],
        raw_transaction!["bread", "yogurt", "milk", "cheese"],
    ]
}

#[test]
fn scenario_two_items_and_their_pair() {
    // A=0 B=1
    let raw = vec![
        raw_transaction!["A", "B"],
        raw_transaction!["A", "B"],
        raw_transaction!["A"],
    ];
    let (_, table) = mine(&raw, 2);

    let expected = hashmap! {
        1 => hashmap! {
            vec![0] => 3,
            vec![1] => 2,
        },
        2 => hashmap! {
            vec![0, 1] => 2,
        },
    };
    assert_eq!(table, expected);

    // {A,B} is the only maximal itemset; {B} shares its support with {A,B}
    // and is therefore not closed, {A} is.
    assert_eq!(maximal_itemsets(&table), hashmap! { vec![0, 1] => 2 });
    assert_eq!(
        closed_itemsets(&table),
        hashmap! {
            vec![0] => 3,
            vec![0, 1] => 2,
        }
    );
}

#[test]
fn scenario_empty_collection() {
    let (_, table) = mine(&[], 1);

    assert!(table.is_empty());
    assert!(maximal_itemsets(&table).is_empty());
    assert!(closed_itemsets(&table).is_empty());
}

#[test]
fn scenario_character_extraction_collapses_duplicates() {
    let transaction = CharItems.extract("AAB");
    assert_eq!(transaction, raw_transaction!["A", "B"]);
}

#[test]
fn scenario_threshold_above_transaction_count() {
    let (_, table) = mine(&grocery_dataset(), 6);
    assert!(table.is_empty());
}

#[test]
fn every_level_holds_itemsets_of_that_size_in_canonical_form() {
    let (_, table) = mine(&grocery_dataset(), 2);

    assert!(!table.is_empty());
    for (&size, level) in &table {
        assert!(!level.is_empty());
        for itemset in level.keys() {
            assert_eq!(itemset.len(), size);
            assert!(itemset.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[test]
fn supports_are_anti_monotonic() {
    let raw = grocery_dataset();
    let store = TransactionStore::from_raw(&raw);
    let index = store.build_index();
    let table = mine_frequent_itemsets(&store, &index, 2);

    for level in table.values() {
        for (itemset, &count) in level {
            assert_eq!(support(itemset, &index), count);
            for subset in proper_subsets(itemset) {
                assert!(support(&subset, &index) >= count);
            }
        }
    }
}

#[test]
fn apriori_closure_holds_across_levels() {
    let (_, table) = mine(&grocery_dataset(), 2);

    for (&size, level) in &table {
        if size < 2 {
            continue;
        }
        let below = &table[&(size - 1)];
        for (itemset, &count) in level {
            for subset in proper_subsets(itemset) {
                let subset_count = below
                    .get(&subset)
                    .unwrap_or_else(|| panic!("{subset:?} missing below {itemset:?}"));
                assert!(*subset_count >= count);
            }
        }
    }
}

#[test]
fn maximal_itemsets_have_no_frequent_superset_anywhere() {
    let (_, table) = mine(&grocery_dataset(), 2);
    let maximal = maximal_itemsets(&table);

    assert!(!maximal.is_empty());
    for itemset in maximal.keys() {
        // Table membership for the maximal itemset itself.
        assert_eq!(table[&itemset.len()].get(itemset), maximal.get(itemset));
        // No strict superset at any level of the table.
        for level in table.values() {
            for other in level.keys() {
                if other.len() > itemset.len() {
                    assert!(!is_subset(itemset, other));
                }
            }
        }
    }
}

#[test]
fn closed_itemsets_contain_the_maximal_ones() {
    let (_, table) = mine(&grocery_dataset(), 2);
    let maximal = maximal_itemsets(&table);
    let closed = closed_itemsets(&table);

    for (itemset, count) in &maximal {
        assert_eq!(closed.get(itemset), Some(count));
    }
}

#[test]
fn extraction_is_idempotent() {
    let (_, table) = mine(&grocery_dataset(), 2);

    assert_eq!(maximal_itemsets(&table), maximal_itemsets(&table));
    assert_eq!(closed_itemsets(&table), closed_itemsets(&table));
}

#[test]
fn dfs_and_join_miners_agree() {
    let datasets = vec![
        vec![],
        vec![raw_transaction!["A"]],
        vec![
            raw_transaction!["A", "B"],
            raw_transaction!["A", "B"],
            raw_transaction!["A"],
        ],
        grocery_dataset(),
        vec![
            raw_transaction!["A", "B", "C", "D"],
            raw_transaction!["A", "B", "C"],
            raw_transaction!["A", "B"],
            raw_transaction!["C", "D"],
            raw_transaction!["B", "D"],
        ],
    ];

    for raw in datasets {
        let store = TransactionStore::from_raw(&raw);
        let index = store.build_index();
        for min_support in [1, 2, 3] {
            let dfs = mine_frequent_itemsets(&store, &index, min_support);
            let join = mine_frequent_itemsets_join(&store, min_support);
            assert_eq!(dfs, join, "min_support {min_support}");
        }
    }
}

fn proper_subsets(itemset: &Itemset) -> Vec<Itemset> {
    (0..itemset.len())
        .map(|skip| {
            itemset
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != skip)
                .map(|(_, &item)| item)
                .collect()
        })
        .collect()
}

fn is_subset(a: &Itemset, b: &Itemset) -> bool {
    a.iter().all(|item| b.contains(item))
}
