//! Ingestion collaborator: reading transactions from a delimited file.
//!
//! The mining core only ever sees in-memory [`RawTransaction`]s; files,
//! columns and tokenization policy all live here.

use std::path::Path;

use tracing::debug;

use crate::error::{MineError, Result};
use crate::types::{RawTransaction, Support};

/// Name of the column holding one transaction per row.
pub const ITEMS_COLUMN: &str = "items";

/// Tokenization policy: turns the raw cell of a row into a transaction.
pub trait ItemExtractor {
    fn extract(&self, raw: &str) -> RawTransaction;
}

/// Items are the distinct individual characters of the cell: `"AAB"` yields
/// `{A, B}`. This is the compatibility mode for the existing data contract.
pub struct CharItems;

impl ItemExtractor for CharItems {
    fn extract(&self, raw: &str) -> RawTransaction {
        raw.chars().map(String::from).collect()
    }
}

/// Items are the non-empty tokens of the cell split on a delimiter; the
/// explicit word-level input mode.
pub struct DelimitedItems {
    pub delimiter: char,
}

impl ItemExtractor for DelimitedItems {
    fn extract(&self, raw: &str) -> RawTransaction {
        raw.split(self.delimiter)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Reads a headered CSV and extracts one transaction per row from the
/// `items` column.
pub fn read_transactions<E: ItemExtractor>(
    path: &Path,
    extractor: &E,
) -> Result<Vec<RawTransaction>> {
    let mut reader = csv::Reader::from_path(path)?;

    let column = reader
        .headers()?
        .iter()
        .position(|header| header == ITEMS_COLUMN)
        .ok_or_else(|| MineError::MissingColumn(ITEMS_COLUMN.to_owned()))?;

    let mut transactions = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let cell = record.get(column).ok_or(MineError::MalformedRow(row))?;
        transactions.push(extractor.extract(cell));
    }

    debug!(num_transactions = transactions.len(), "read input file");

    Ok(transactions)
}

/// Validates a raw (possibly signed) minimum-support value from the
/// configuration surface. The core API only accepts the validated count.
pub fn validate_min_support(raw: i64) -> Result<Support> {
    if raw < 0 {
        return Err(MineError::InvalidThreshold(raw));
    }
    Ok(raw as Support)
}
