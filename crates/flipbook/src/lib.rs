pub mod audio;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod error;
pub mod idle;
pub mod layout;
pub mod links;
#[cfg(feature = "native")]
pub mod native;
pub mod navigation;
pub mod renderer;
pub mod routes;
pub mod seo;
pub mod session;
pub mod types;

use error::ViewerError;
use layout::{DisplayDimensions, Viewport};
use types::Catalogue;

/// Look up a catalogue by slug.
pub fn find_catalogue(slug: &str) -> Result<&'static Catalogue, ViewerError> {
    content::catalogue_by_slug(slug).ok_or_else(|| ViewerError::UnknownCatalogue(slug.to_string()))
}

/// Compute the spread layout for a viewport using the default margins and
/// bounds. Returns `None` for degenerate viewports.
pub fn spread_layout(viewport: Viewport, aspect_ratio: f64) -> Option<DisplayDimensions> {
    layout::LayoutConfig::default().compute(viewport, aspect_ratio)
}
