use thiserror::Error;

/// Unified error type for the whole Folio workspace.
#[derive(Error, Debug)]
pub enum FolioError {
    // ── Store errors ───────────────────────────────────────────
    #[error("store error: {0}")]
    Store(String),

    #[error("not found: {0}")]
    NotFound(String),

    // ── Remote API errors ──────────────────────────────────────
    #[error("api returned status {status}")]
    Http { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Server errors ──────────────────────────────────────────
    #[error("server error: {0}")]
    Server(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::NotFound(_) | FolioError::Http { status: 404 })
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
