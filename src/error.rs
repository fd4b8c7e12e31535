use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexwalkError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("unknown cipher algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    #[error("internal error")]
    Internal,
}
