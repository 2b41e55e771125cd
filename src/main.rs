use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use freqmine::ingest::{self, CharItems, DelimitedItems};
use freqmine::types::{FrequentItemsets, Itemset, ItemsetCounts};
use freqmine::{closed_itemsets, maximal_itemsets, mine_frequent_itemsets, TransactionStore};

#[derive(Parser, Debug)]
#[command(name = "freqmine", about = "Frequent, maximal and closed itemset mining")]
struct Cli {
    /// Path to the input CSV (must have an 'items' column)
    #[arg(long, env = "DATA_FILE")]
    input: PathBuf,

    /// Minimum support as an absolute transaction count
    #[arg(long, env = "MIN_SUPPORT", default_value_t = 2)]
    min_support: i64,

    /// Split the items cell on this delimiter instead of treating each
    /// character as an item
    #[arg(long)]
    delimiter: Option<char>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let min_support = ingest::validate_min_support(cli.min_support)?;

    let raw_transactions = match cli.delimiter {
        Some(delimiter) => {
            ingest::read_transactions(&cli.input, &DelimitedItems { delimiter })?
        }
        None => ingest::read_transactions(&cli.input, &CharItems)?,
    };

    let store = TransactionStore::from_raw(&raw_transactions);
    let index = store.build_index();
    info!(
        num_transactions = store.len(),
        num_items = index.num_items(),
        min_support,
        "mining"
    );

    let table = mine_frequent_itemsets(&store, &index, min_support);
    let maximal = maximal_itemsets(&table);
    let closed = closed_itemsets(&table);

    print_table(&table, &store);
    print_summary("Maximal frequent itemsets", &maximal, &store);
    print_summary("Closed frequent itemsets", &closed, &store);

    Ok(())
}

fn print_table(table: &FrequentItemsets, store: &TransactionStore) {
    println!("Frequent itemsets (min support reached at {} sizes)", table.len());

    let mut sizes: Vec<usize> = table.keys().copied().collect();
    sizes.sort_unstable();

    for size in sizes {
        println!("  size {}", size);
        for (itemset, count) in sorted(&table[&size]) {
            println!("    {}: {}", render_itemset(&itemset, store), count);
        }
    }
}

fn print_summary(title: &str, itemset_counts: &ItemsetCounts, store: &TransactionStore) {
    println!("{}", title);
    for (itemset, count) in sorted(itemset_counts) {
        println!("  {}: {}", render_itemset(&itemset, store), count);
    }
}

/// Shortest itemsets first, then canonical (id-sorted) order, which is
/// lexicographic label order.
fn sorted(itemset_counts: &ItemsetCounts) -> Vec<(Itemset, usize)> {
    let mut entries: Vec<(Itemset, usize)> = itemset_counts
        .iter()
        .map(|(itemset, &count)| (itemset.clone(), count))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
    entries
}

fn render_itemset(itemset: &Itemset, store: &TransactionStore) -> String {
    let labels: Vec<&str> = itemset
        .iter()
        .filter_map(|&item| store.item_name(item))
        .collect();
    format!("{{{}}}", labels.join(", "))
}
