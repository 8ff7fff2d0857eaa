use thiserror::Error;

/// Failures reported by the browser host. None of these are fatal; the
/// controllers log them and fall back to a safe default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("DOM access failed: {0}")]
    Dom(String),
    #[error("media query failed: {0}")]
    MediaQuery(String),
    #[error("couldn't schedule timer: {0}")]
    Timer(String),
}
