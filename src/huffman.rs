pub mod codebook;
pub mod codec;
pub mod tree;

pub use codebook::CodeTable;
pub use tree::HuffmanTree;

use crate::frequency::SymbolFrequency;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolWeight {
    pub symbol: char,
    pub weight: f64,
}

impl From<(char, f64)> for SymbolWeight {
    fn from(value: (char, f64)) -> Self {
        SymbolWeight {
            symbol: value.0,
            weight: value.1,
        }
    }
}

impl From<&SymbolFrequency> for SymbolWeight {
    fn from(frequency: &SymbolFrequency) -> Self {
        SymbolWeight {
            symbol: frequency.symbol,
            weight: frequency.probability,
        }
    }
}
