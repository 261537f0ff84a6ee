use thiserror::Error;

/// Raised when image parts do not describe a consistent pixel grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("expected {expected} pixels for a {width}x{height} image, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Everything that can go wrong during a single classification request.
///
/// The `Display` text is what ends up in the error area, so every variant
/// reads as a complete sentence fragment on its own.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The request never got a response (unreachable host, TLS, aborted).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Http failure response for {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// The body was not a JSON string.
    #[error("Http failure during parsing for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
