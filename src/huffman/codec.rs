use super::codebook::CodeTable;
use crate::binary_stream::Bitstring;
use crate::error::Error;
use crate::Result;

/// Concatenate the codeword of every input symbol, in input order.
pub fn encode(text: &str, table: &CodeTable) -> Result<Bitstring> {
    let mut bits = Bitstring::new();
    for symbol in text.chars() {
        let codeword = table
            .codeword(symbol)
            .ok_or(Error::UnknownSymbol(symbol))?;
        bits.push_codeword(codeword);
    }
    Ok(bits)
}

/// Greedily match growing bit runs against the inverted code table.
///
/// Prefix-freeness guarantees the first exact match is the only possible
/// one, so no backtracking is needed.
pub fn decode(bits: &Bitstring, table: &CodeTable) -> Result<String> {
    let inverse = table.inverse();
    let mut decoded = String::new();
    let mut buffer = String::new();
    for bit in bits.iter() {
        buffer.push(if bit { '1' } else { '0' });
        if let Some(&symbol) = inverse.get(buffer.as_str()) {
            decoded.push(symbol);
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        return Err(Error::MalformedBitstream {
            trailing_bits: buffer.len(),
        });
    }
    Ok(decoded)
}

#[cfg(test)]
mod test {
    use super::{decode, encode};
    use crate::error::Error;
    use crate::frequency;
    use crate::huffman::{HuffmanTree, SymbolWeight};

    fn table_for(text: &str) -> crate::huffman::CodeTable {
        let frequencies = frequency::analyze(text).expect("analysis failed");
        let weights: Vec<SymbolWeight> =
            frequencies.entries().iter().map(SymbolWeight::from).collect();
        HuffmanTree::new(&weights).unwrap().code_table()
    }

    #[test]
    fn encode_concatenates_codewords_in_input_order() {
        let text = "aabbbcc";
        let table = table_for(text);
        // a -> 10, b -> 0, c -> 11
        let encoded = encode(text, &table).expect("encoding failed");
        assert_eq!(encoded.to_string(), "10100001111");
        assert_eq!(encoded.len(), 11);
    }

    #[test]
    fn round_trip_recovers_the_original_text() {
        for text in ["aabbbcc", "to be or not to be", "mississippi", "héhé!"] {
            let table = table_for(text);
            let encoded = encode(text, &table).expect("encoding failed");
            let decoded = decode(&encoded, &table).expect("decoding failed");
            assert_eq!(decoded, text, "round trip failed for {:?}", text);
        }
    }

    #[test]
    fn single_symbol_round_trip() {
        let text = "aaaa";
        let table = table_for(text);
        let encoded = encode(text, &table).expect("encoding failed");
        assert_eq!(encoded.len(), 4, "one bit per input symbol");
        assert_eq!(encoded.to_string(), "0000");
        let decoded = decode(&encoded, &table).expect("decoding failed");
        assert_eq!(decoded, text);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let table = table_for("aabbbcc");
        let result = encode("abd", &table);
        assert!(matches!(result, Err(Error::UnknownSymbol('d'))));
    }

    #[test]
    fn truncated_stream_is_rejected() {
        let text = "aabbbcc";
        let table = table_for(text);
        let mut encoded = encode(text, &table).expect("encoding failed");
        // the stream ends in c -> "11"; dropping the last bit leaves a
        // dangling "1" that matches no codeword
        encoded.truncate(encoded.len() - 1);
        let result = decode(&encoded, &table);
        assert!(
            matches!(result, Err(Error::MalformedBitstream { trailing_bits: 1 })),
            "truncated stream must not decode silently"
        );
    }

    #[test]
    fn empty_stream_decodes_to_the_empty_text() {
        let table = table_for("ab");
        let encoded = encode("", &table).expect("encoding failed");
        let decoded = decode(&encoded, &table).expect("decoding failed");
        assert_eq!(decoded, "");
    }
}
