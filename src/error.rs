use std::path::PathBuf;
use thiserror::Error;

/// Precondition failures of the positioner and the controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("deck has no cards")]
    EmptyDeck,
}

/// Failures while loading the portfolio data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("data file has no {0} section")]
    MissingSection(&'static str),

    #[error("{section} card {index}: {reason}")]
    InvalidCard {
        section: &'static str,
        index: usize,
        reason: String,
    },

    #[error("{0} autoSlideInterval must be greater than zero")]
    ZeroInterval(&'static str),
}
