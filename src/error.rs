use thiserror::Error;

#[derive(Error, Debug)]
pub enum QianjiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown bank: {0} (expected one of: hsbc, bea)")]
    UnknownBank(String),

    #[error("Could not detect the bank from the CSV headers; pass --bank hsbc or --bank bea")]
    UndetectedBank,

    #[error("File not found: {0}")]
    InputNotFound(String),

    #[error("No convertible records found; check the file format.")]
    NoRecords,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QianjiError>;
