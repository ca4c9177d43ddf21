use std::collections::HashMap;

/// Prefix-free mapping from symbols to binary codewords.
///
/// Entries keep the order in which the tree extraction inserted them,
/// lookups go through a positional index.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    entries: Vec<(char, String)>,
    positions: HashMap<char, usize>,
}

impl CodeTable {
    pub fn new() -> CodeTable {
        CodeTable::default()
    }

    pub(crate) fn insert(&mut self, symbol: char, codeword: String) {
        debug_assert!(
            !self.positions.contains_key(&symbol),
            "symbol {:?} inserted twice",
            symbol
        );
        self.positions.insert(symbol, self.entries.len());
        self.entries.push((symbol, codeword));
    }

    pub fn codeword(&self, symbol: char) -> Option<&str> {
        self.positions
            .get(&symbol)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries
            .iter()
            .map(|(symbol, codeword)| (*symbol, codeword.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codeword-to-symbol view, precomputed once per decode call.
    pub fn inverse(&self) -> HashMap<&str, char> {
        self.entries
            .iter()
            .map(|(symbol, codeword)| (codeword.as_str(), *symbol))
            .collect()
    }
}
