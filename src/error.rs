use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    EmptyDistribution,
    UnknownSymbol(char),
    MalformedBitstream { trailing_bits: usize },
    FailedToReadInputFile(String, std::io::Error),
    FailedToWriteReport(String, std::io::Error),
    WorkerPoolFailure(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Input text contains no symbols")
            }
            Self::EmptyDistribution => {
                write!(f, "Frequency distribution contains no symbols")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {:?} has no entry in the code table", symbol)
            }
            Self::MalformedBitstream { trailing_bits } => {
                write!(
                    f,
                    "Bitstream ended mid-codeword with {} unmatched trailing bits",
                    trailing_bits
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteReport(path, error) => {
                write!(f, "Failed to write report to '{}': {}", path, error)
            }
            Self::WorkerPoolFailure(reason) => {
                write!(f, "Worker pool failure: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {}
