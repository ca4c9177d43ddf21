use crate::error::Error;
use crate::frequency::FrequencyTable;
use crate::huffman::CodeTable;
use crate::Result;

/// Information-theoretic quality of one code table against one
/// frequency distribution. Derived values only, recomputed per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionMetrics {
    /// Shannon entropy of the distribution in bits per symbol, the lower
    /// bound on the average code length
    pub entropy: f64,
    /// expected codeword length in bits per symbol
    pub average_code_length: f64,
    /// entropy over average code length, at most 1.0
    pub efficiency: f64,
    /// input size against the fixed 8-bit-per-symbol baseline
    pub original_size_bits: usize,
    /// total bit length of the encoded stream
    pub compressed_size_bits: usize,
}

impl CompressionMetrics {
    pub fn measure(
        frequencies: &FrequencyTable,
        table: &CodeTable,
        compressed_size_bits: usize,
    ) -> Result<CompressionMetrics> {
        let mut entropy = 0.0;
        let mut average_code_length = 0.0;
        for entry in frequencies.entries() {
            let length = table
                .codeword(entry.symbol)
                .ok_or(Error::UnknownSymbol(entry.symbol))?
                .len();
            entropy -= entry.probability * entry.probability.log2();
            average_code_length += entry.probability * length as f64;
        }
        Ok(CompressionMetrics {
            entropy,
            average_code_length,
            efficiency: entropy / average_code_length,
            original_size_bits: frequencies.symbol_count() * 8,
            compressed_size_bits,
        })
    }

    /// Compressed size relative to the 8-bit baseline, in percent.
    /// Deliberately unclamped: a short input over a tiny alphabet may
    /// exceed 100.
    pub fn compression_ratio_percent(&self) -> f64 {
        self.compressed_size_bits as f64 / self.original_size_bits as f64 * 100.0
    }
}
