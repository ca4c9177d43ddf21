use std::collections::HashMap;

use crate::error::Error;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolFrequency {
    pub symbol: char,
    pub count: usize,
    pub probability: f64,
}

/// Relative frequency of every distinct symbol in one input text.
///
/// Entries keep the order in which symbols first appear, which fixes the
/// tie-break order of the tree builder downstream.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    entries: Vec<SymbolFrequency>,
    symbol_count: usize,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[SymbolFrequency] {
        &self.entries
    }

    /// Total number of symbols in the analyzed text.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Number of distinct symbols.
    pub fn alphabet_size(&self) -> usize {
        self.entries.len()
    }
}

/// Count every symbol of `text` and derive its relative frequency.
pub fn analyze(text: &str) -> Result<FrequencyTable> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut positions: HashMap<char, usize> = HashMap::new();
    let mut counts: Vec<(char, usize)> = Vec::new();
    let mut symbol_count = 0;
    for symbol in text.chars() {
        symbol_count += 1;
        match positions.get(&symbol) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(symbol, counts.len());
                counts.push((symbol, 1));
            }
        }
    }
    let entries = counts
        .into_iter()
        .map(|(symbol, count)| SymbolFrequency {
            symbol,
            count,
            probability: count as f64 / symbol_count as f64,
        })
        .collect();
    Ok(FrequencyTable {
        entries,
        symbol_count,
    })
}
