use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("failed to open document: {0}")]
    Open(String),

    #[error("page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange { page: u32, page_count: u32 },

    #[error("invalid page geometry: {width}x{height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("render error: {0}")]
    Render(String),

    #[error("audio playback failed: {0}")]
    Audio(String),

    #[error("viewport {width}x{height} leaves no room for a page")]
    DegenerateViewport { width: f64, height: f64 },

    #[error("unknown catalogue: {0}")]
    UnknownCatalogue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "native")]
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("message is {len} characters (limit {limit})")]
    MessageTooLong { len: usize, limit: usize },
}
