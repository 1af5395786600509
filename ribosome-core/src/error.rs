use crate::seq::MoleculeType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos} for {molecule} sequence")]
    InvalidChar {
        ch: char,
        pos: usize,
        molecule: MoleculeType,
    },

    #[error("sequence length {len} is shorter than one codon")]
    TooShort { len: usize },

    #[error("codon table no. {id} not found")]
    UnknownTable { id: u32 },

    #[error("invalid codon usage '{codon}' -> '{amino_acid}': {reason}")]
    Validation {
        codon: String,
        amino_acid: char,
        reason: &'static str,
    },

    #[error("transcribe records to RNA first")]
    NotTranscribed,

    #[error("batch aborted at record '{id}': {source}")]
    BatchAbort {
        id: Box<str>,
        #[source]
        source: Box<BioError>,
    },

    #[error("failed to configure thread pool: {msg}")]
    ThreadPool { msg: String },
}

pub type BioResult<T> = Result<T, BioError>;
