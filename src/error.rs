use crate::table::GenotypeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// A table operation would break the partition. Always a defect.
    #[error("Invariant Violation: {0}")]
    Invariant(String),

    #[error("Genotype {id} is out of range for {bits}-bit genotypes")]
    OutOfRange { id: GenotypeId, bits: u32 },

    #[error("Parse Error: {0}")]
    Parse(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type GpResult<T> = Result<T, GpError>;
