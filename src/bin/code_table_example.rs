use huffman_text_compressor::huffman::{codec, HuffmanTree, SymbolWeight};
use huffman_text_compressor::Result;

fn main() -> Result<()> {
    // symbol-weight pairs
    let weights: Vec<SymbolWeight> = vec![('a', 0.45), ('b', 0.35), ('c', 0.15), ('d', 0.05)]
        .into_iter()
        .map(SymbolWeight::from)
        .collect();

    let tree = HuffmanTree::new(&weights)?;
    let table = tree.code_table();
    println!("code table");
    for (symbol, codeword) in table.iter() {
        println!("{:?} -> {}", symbol, codeword);
    }

    let text = "abacabad";
    let encoded = codec::encode(text, &table)?;
    println!("text to encode\n{}", text);
    println!("encoded bitstring\n{}", encoded);

    let decoded = codec::decode(&encoded, &table)?;
    println!("decoded text\n{}", decoded);
    Ok(())
}
