use thiserror::Error;

/// Errors produced when decoding a value from its dictionary representation.
///
/// Decoding is all-or-nothing: every required key must resolve to a number,
/// and the first miss aborts the decode.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("missing key \"{0}\"")]
    MissingKey(&'static str),

    #[error("value under \"{0}\" is not a number")]
    NotANumber(&'static str),
}

/// Convenience type alias for results using [`DictError`].
pub type Result<T> = std::result::Result<T, DictError>;
