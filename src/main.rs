use std::env::args_os;

use huffman_text_compressor::{compress_files, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    if let Err(e) = compress_files(&arguments) {
        eprintln!("Compression failed because of: {}", e);
        std::process::exit(1);
    }
}
