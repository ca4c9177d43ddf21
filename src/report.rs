use std::fmt;

use crate::binary_stream::Bitstring;
use crate::frequency::FrequencyTable;
use crate::huffman::CodeTable;
use crate::metrics::CompressionMetrics;

/// Everything one compression run produced, ready for display.
pub struct CompressionReport {
    pub original: String,
    pub frequencies: FrequencyTable,
    pub code_table: CodeTable,
    pub encoded: Bitstring,
    pub decoded: String,
    pub metrics: CompressionMetrics,
}

impl CompressionReport {
    /// The decode-after-encode verification step succeeded.
    pub fn is_verified(&self) -> bool {
        self.original == self.decoded
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman codes:")?;
        for entry in self.frequencies.entries() {
            let codeword = self.code_table.codeword(entry.symbol).unwrap_or("?");
            writeln!(
                f,
                "{:?}: {:.4} -> {}",
                entry.symbol, entry.probability, codeword
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Original text: {}", self.original)?;
        writeln!(f, "Encoded binary: {}", self.encoded)?;
        writeln!(f, "Decoded text: {}", self.decoded)?;
        writeln!(f)?;
        writeln!(f, "Entropy (H): {:.4} bits/symbol", self.metrics.entropy)?;
        writeln!(
            f,
            "Average code length (L): {:.4} bits/symbol",
            self.metrics.average_code_length
        )?;
        writeln!(f, "Efficiency: {:.2}%", self.metrics.efficiency * 100.0)?;
        writeln!(f)?;
        writeln!(
            f,
            "Original size: {} bits",
            self.metrics.original_size_bits
        )?;
        writeln!(
            f,
            "Compressed size: {} bits",
            self.metrics.compressed_size_bits
        )?;
        write!(
            f,
            "Compression ratio: {:.2}%",
            self.metrics.compression_ratio_percent()
        )
    }
}
