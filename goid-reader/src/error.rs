//! Errors raised while reading GO list files.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadError>;

#[derive(Debug, Error)]
pub enum ReadError {
    /// The source could not be opened or a line could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A finished group held a token that is not `GO:` followed by seven digits
    #[error("BAD GO({id}): {context}")]
    MalformedIdentifier { id: String, context: String },
}
