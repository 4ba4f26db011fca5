//! Basket-format transaction readers.
//!
//! The core miner takes transactions from any caller-supplied source; these
//! readers cover the common plain-text layout of one transaction per line
//! with whitespace-separated item tokens. Blank lines are skipped.

use std::io::BufRead;

use crate::error::MineError;

/// Read transactions with string item identifiers.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>, MineError> {
    let mut transactions = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let items: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
        if !items.is_empty() {
            transactions.push(items);
        }
    }

    Ok(transactions)
}

/// Read transactions with integer item identifiers.
///
/// A token that does not parse as an unsigned integer makes the whole read
/// fail with [`MineError::MalformedTransaction`] naming the 1-based line.
pub fn read_numeric_transactions<R: BufRead>(reader: R) -> Result<Vec<Vec<u64>>, MineError> {
    let mut transactions = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut items = Vec::new();

        for token in line.split_whitespace() {
            let item = token
                .parse::<u64>()
                .map_err(|_| MineError::MalformedTransaction {
                    line: line_index + 1,
                    reason: format!("token {token:?} is not an unsigned integer"),
                })?;
            items.push(item);
        }

        if !items.is_empty() {
            transactions.push(items);
        }
    }

    Ok(transactions)
}
