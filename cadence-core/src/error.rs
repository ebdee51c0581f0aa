use thiserror::Error;

/// All errors produced by cadence-core.
#[derive(Debug, Error)]
pub enum CadenceError {
    #[error("audio clip contains no samples")]
    EmptyClip,

    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    #[error("invalid analyzer configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CadenceError>;
