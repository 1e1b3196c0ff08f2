//! Mask resolution errors

/// Failure to turn a mask configuration into engine options.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    #[error("unknown mask token `{0}`")]
    UnknownToken(String),

    #[error("token placeholder opened at {position} is never closed")]
    UnterminatedToken { position: usize },

    #[error("empty token placeholder at {position}")]
    EmptyToken { position: usize },

    #[error("mask template ends with a dangling escape")]
    DanglingEscape,

    #[error("invalid token name `{0}`")]
    InvalidTokenName(String),

    #[error("invalid pattern for token `{token}`")]
    InvalidPattern {
        token: String,
        #[source]
        source: regex::Error,
    },
}
