use thiserror::Error;

/// Errors produced by record encoding and decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode record: {0}")]
    Encode(serde_json::Error),

    #[error("failed to decode record: {0}")]
    Decode(serde_json::Error),

    #[error("stored value is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),
}
