// File: src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AutocompleteError>;

#[derive(Debug, Error)]
pub enum AutocompleteError {
    #[error("invalid symbol {0:?}: only 'a'-'z' and ' ' are accepted")]
    InvalidSymbol(char),

    #[error("input buffer is full ({max} symbols)")]
    BufferOverflow { max: usize },

    #[error("weight of {sentence:?} would overflow")]
    WeightOverflow { sentence: String },

    #[error("sentence is {len} symbols long, the maximum is {max}")]
    SentenceTooLong { len: usize, max: usize },

    #[error("weight of {sentence:?} must be positive")]
    ZeroWeight { sentence: String },

    #[error("{sentences} seed sentences but {weights} seed weights")]
    SeedLengthMismatch { sentences: usize, weights: usize },

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AutocompleteError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSymbol(_) => "INVALID_SYMBOL",
            Self::BufferOverflow { .. } => "BUFFER_OVERFLOW",
            Self::WeightOverflow { .. } => "WEIGHT_OVERFLOW",
            Self::SentenceTooLong { .. } => "SENTENCE_TOO_LONG",
            Self::ZeroWeight { .. } => "ZERO_WEIGHT",
            Self::SeedLengthMismatch { .. } => "SEED_LENGTH_MISMATCH",
            Self::Config(_) => "INVALID_CONFIG",
            Self::Json(_) => "JSON_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}
