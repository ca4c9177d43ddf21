use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use threadpool::ThreadPool;

pub use cli::CLIParser;
use error::Error;
use huffman::SymbolWeight;
use metrics::CompressionMetrics;
use report::CompressionReport;

pub mod binary_stream;
mod cli;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;
pub mod metrics;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_files: Vec<PathBuf>,
    output_directory: Option<PathBuf>,
    number_of_threads: usize,
}

/// Run the whole pipeline over one input text: frequency analysis, code
/// construction, encode, decode as verification, metrics.
pub fn compress_text(text: &str) -> Result<CompressionReport> {
    let frequencies = frequency::analyze(text)?;
    log::debug!(
        "alphabet of {} distinct symbols over {} input symbols",
        frequencies.alphabet_size(),
        frequencies.symbol_count()
    );
    let weights: Vec<SymbolWeight> = frequencies.entries().iter().map(SymbolWeight::from).collect();
    let tree = huffman::HuffmanTree::new(&weights)?;
    let code_table = tree.code_table();
    logger::log_code_table(&code_table);
    let encoded = huffman::codec::encode(text, &code_table)?;
    let decoded = huffman::codec::decode(&encoded, &code_table)?;
    let metrics = CompressionMetrics::measure(&frequencies, &code_table, encoded.len())?;
    log::info!(
        "compressed {} bits down to {} bits ({:.2}%)",
        metrics.original_size_bits,
        metrics.compressed_size_bits,
        metrics.compression_ratio_percent()
    );
    Ok(CompressionReport {
        original: text.to_owned(),
        frequencies,
        code_table,
        encoded,
        decoded,
        metrics,
    })
}

/// Read one input file and compress its trimmed content.
pub fn compress_file(input_file: &Path) -> Result<CompressionReport> {
    let text = read_input_file(input_file)?;
    compress_text(text.trim())
}

/// Compress every input file, in parallel when more than one was given,
/// and emit the reports in input order.
pub fn compress_files(arguments: &Arguments) -> Result<()> {
    if let [input_file] = arguments.input_files.as_slice() {
        let report = compress_file(input_file)?;
        return write_report(&report, input_file, arguments.output_directory.as_deref());
    }
    let pool = ThreadPool::new(arguments.number_of_threads);
    let (sender, receiver) = mpsc::channel();
    for (index, input_file) in arguments.input_files.iter().enumerate() {
        let sender = sender.clone();
        let input_file = input_file.clone();
        pool.execute(move || {
            let result = compress_file(&input_file);
            // the receiver outlives every worker, a closed channel only
            // happens when the main thread already gave up
            let _ = sender.send((index, result));
        });
    }
    drop(sender);
    let mut results: Vec<Option<Result<CompressionReport>>> =
        (0..arguments.input_files.len()).map(|_| None).collect();
    for (index, result) in receiver {
        results[index] = Some(result);
    }
    pool.join();
    for (input_file, slot) in arguments.input_files.iter().zip(results) {
        let report = slot.ok_or_else(|| {
            Error::WorkerPoolFailure(format!(
                "no result received for input file '{}'",
                input_file.display()
            ))
        })??;
        write_report(&report, input_file, arguments.output_directory.as_deref())?;
    }
    Ok(())
}

fn read_input_file(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .map_err(|e| Error::FailedToReadInputFile(file_path.to_string_lossy().into_owned(), e))
}

fn report_file_path(input_file: &Path, output_directory: &Path) -> PathBuf {
    let stem = input_file
        .file_stem()
        .unwrap_or_else(|| input_file.as_os_str());
    let mut path = output_directory.join(stem);
    path.set_extension("report.txt");
    path
}

fn write_report(
    report: &CompressionReport,
    input_file: &Path,
    output_directory: Option<&Path>,
) -> Result<()> {
    match output_directory {
        Some(directory) => {
            let path = report_file_path(input_file, directory);
            fs::write(&path, format!("{}\n", report))
                .map_err(|e| Error::FailedToWriteReport(path.to_string_lossy().into_owned(), e))
        }
        None => {
            println!("{}", report);
            Ok(())
        }
    }
}
