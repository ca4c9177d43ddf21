use crate::huffman::CodeTable;

#[ctor::ctor]
fn init() {
    use log4rs;
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}

pub fn log_code_table(table: &CodeTable) {
    for (symbol, codeword) in table.iter() {
        log::debug!("{:?} -> {}", symbol, codeword);
    }
}
