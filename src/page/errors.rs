/// Errors from the conjugation-page layer.
use thiserror::Error;

/// Typed errors from fetching and dissecting a conjugation page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The HTTP request itself failed (DNS, connect, timeout, body read).
    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// A tense block has no preceding mode heading.
    #[error("tense block #{index} has no preceding mode heading")]
    MissingModeHeading {
        /// Zero-based position of the block on the page.
        index: usize,
    },

    /// A tense block has no tense heading of its own.
    #[error("tense block #{index} has no tense heading")]
    MissingTenseHeading {
        /// Zero-based position of the block on the page.
        index: usize,
    },
}
