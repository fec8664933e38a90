//! Seams to the PDF engine and the page-flip widget.
//!
//! Neither capability is implemented here. The site binds them to pdf.js and
//! a page-flip library; the `native` feature provides a measuring-only
//! renderer on top of lopdf.

use std::sync::OnceLock;

use serde::Serialize;

use crate::error::ViewerError;

/// Intrinsic size of a page at scale 1, in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    pub fn new(width: f64, height: f64) -> Result<Self, ViewerError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(ViewerError::InvalidGeometry { width, height })
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Opens PDFs by URL, measures pages and rasterizes them.
///
/// Page numbers are 1-based like the PDF engines behind this trait.
#[allow(async_fn_in_trait)]
pub trait DocumentRenderer {
    type Surface;

    /// Open the document and return its page count.
    async fn open(&mut self, url: &str) -> Result<u32, ViewerError>;

    async fn page_geometry(&self, page: u32) -> Result<PageGeometry, ViewerError>;

    async fn rasterize(&self, page: u32, target_width: f64) -> Result<Self::Surface, ViewerError>;
}

/// Paginated book widget. Out-of-range commands are the widget's to ignore.
pub trait BookWidget {
    fn flip_next(&mut self);
    fn flip_prev(&mut self);
}

pub fn check_page(page: u32, page_count: u32) -> Result<(), ViewerError> {
    if page == 0 || page > page_count {
        Err(ViewerError::PageOutOfRange { page, page_count })
    } else {
        Ok(())
    }
}

// ─── Worker endpoint ─────────────────────────────────────────────────

static WORKER_SRC: OnceLock<String> = OnceLock::new();

pub const DEFAULT_WORKER_SRC: &str =
    "https://unpkg.com/pdfjs-dist@4.4.168/build/pdf.worker.min.mjs";

/// Set the renderer worker script once, before any viewer is built.
/// Returns `false` if it was already configured; the first value wins.
pub fn configure_worker(src: impl Into<String>) -> bool {
    WORKER_SRC.set(src.into()).is_ok()
}

/// Configured worker script, or the pinned default.
pub fn worker_src() -> &'static str {
    WORKER_SRC.get_or_init(|| DEFAULT_WORKER_SRC.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_rejects_degenerate() {
        assert!(PageGeometry::new(0.0, 842.0).is_err());
        assert!(PageGeometry::new(595.0, -1.0).is_err());
        assert!(PageGeometry::new(f64::INFINITY, 842.0).is_err());
        let g = PageGeometry::new(595.0, 842.0).unwrap();
        assert!((g.aspect_ratio() - 595.0 / 842.0).abs() < 1e-12);
    }

    #[test]
    fn test_check_page_is_one_based() {
        assert!(check_page(0, 3).is_err());
        assert!(check_page(1, 3).is_ok());
        assert!(check_page(3, 3).is_ok());
        assert!(matches!(
            check_page(4, 3),
            Err(ViewerError::PageOutOfRange { page: 4, page_count: 3 })
        ));
    }

    #[test]
    fn test_worker_src_is_init_once() {
        let first = worker_src().to_string();
        assert!(!configure_worker("https://example.invalid/worker.js"));
        assert_eq!(worker_src(), first);
    }
}
