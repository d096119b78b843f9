use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KeskusError {
    #[error("extraction service request failed: {0}")]
    Service(String),

    #[error("extraction service returned {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("failed to decode extraction response: {0}")]
    Decode(String),

    #[error("cache entry at {path} is corrupt: {reason}")]
    CacheCorrupt { path: PathBuf, reason: String },

    #[error("no cached extraction found. Run `keskus extract <pdf>` first, or pass a JSON file")]
    NoCachedExtraction,

    #[error("cannot determine cache directory: set KESKUS_CACHE_DIR or HOME")]
    NoCacheDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
