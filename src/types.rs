use std::collections::{HashMap, HashSet};

pub type ItemId = usize;
pub type ItemName = String;
pub type TransactionId = usize;

/// Canonical itemset: item ids sorted ascending, no duplicates.
pub type Itemset = Vec<ItemId>;

pub type RawTransaction = HashSet<ItemName>;
pub type Transaction = Vec<ItemId>;

pub type Inventory = Vec<ItemName>;
pub type ReverseLookup = HashMap<ItemName, ItemId>;

pub type Support = usize;
pub type ItemCounts = HashMap<ItemId, Support>;
pub type ItemsetCounts = HashMap<Itemset, Support>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = HashMap<ItemsetLength, ItemsetCounts>;

pub type Postings = HashSet<TransactionId>;
