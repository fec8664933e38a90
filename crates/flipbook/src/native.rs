//! Local-file renderer on top of lopdf.
//!
//! It measures pages but cannot paint them; `rasterize` always fails. That is
//! enough to drive the layout and loading logic from the CLI and in tests.

use std::path::Path;

use log::{debug, warn};
use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::ViewerError;
use crate::renderer::{check_page, DocumentRenderer, PageGeometry};

/// US Letter, used when neither the page nor its ancestors carry a MediaBox.
const FALLBACK_MEDIA_BOX: (f64, f64) = (612.0, 792.0);
/// Page-tree depth after which inherited attributes stop being searched.
const MAX_INHERIT_DEPTH: usize = 32;

#[derive(Default)]
pub struct LocalPdf {
    doc: Option<Document>,
}

impl LocalPdf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ViewerError> {
        let doc = Document::load_mem(bytes)?;
        Ok(Self { doc: Some(doc) })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.as_ref().map_or(0, |d| d.get_pages().len() as u32)
    }

    fn document(&self) -> Result<&Document, ViewerError> {
        self.doc
            .as_ref()
            .ok_or_else(|| ViewerError::Open("no document loaded".into()))
    }

    fn page_dict(&self, page: u32) -> Result<(&Document, &Dictionary), ViewerError> {
        let doc = self.document()?;
        let pages = doc.get_pages();
        check_page(page, pages.len() as u32)?;
        let id = pages
            .get(&page)
            .copied()
            .ok_or(ViewerError::PageOutOfRange {
                page,
                page_count: pages.len() as u32,
            })?;
        Ok((doc, doc.get_dictionary(id)?))
    }
}

impl DocumentRenderer for LocalPdf {
    type Surface = ();

    /// `url` is a filesystem path, optionally prefixed with `file://`.
    async fn open(&mut self, url: &str) -> Result<u32, ViewerError> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        let bytes = std::fs::read(Path::new(path))?;
        let doc = Document::load_mem(&bytes).map_err(|e| {
            warn!("failed to parse {path}: {e}");
            ViewerError::Open(format!("{path}: {e}"))
        })?;
        let count = doc.get_pages().len() as u32;
        debug!("opened {path}: {count} pages");
        self.doc = Some(doc);
        Ok(count)
    }

    async fn page_geometry(&self, page: u32) -> Result<PageGeometry, ViewerError> {
        let (doc, dict) = self.page_dict(page)?;
        let (width, height) = match inherited(doc, dict, b"MediaBox") {
            Some(obj) => rect_size(doc, obj)?,
            None => {
                warn!("page {page} has no MediaBox, assuming US Letter");
                FALLBACK_MEDIA_BOX
            }
        };
        let rotate = inherited(doc, dict, b"Rotate")
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(0);
        // Quarter turns swap the displayed sides
        if rotate.rem_euclid(180) == 90 {
            PageGeometry::new(height, width)
        } else {
            PageGeometry::new(width, height)
        }
    }

    async fn rasterize(&self, page: u32, _target_width: f64) -> Result<(), ViewerError> {
        self.page_dict(page)?;
        Err(ViewerError::Render(
            "the native renderer measures pages only".into(),
        ))
    }
}

/// Look `key` up on the page, then up the Parent chain.
fn inherited<'a>(doc: &'a Document, page: &'a Dictionary, key: &[u8]) -> Option<&'a Object> {
    let mut dict = page;
    for _ in 0..MAX_INHERIT_DEPTH {
        if let Ok(obj) = dict.get(key) {
            return Some(obj);
        }
        let parent: ObjectId = dict.get(b"Parent").ok()?.as_reference().ok()?;
        dict = doc.get_dictionary(parent).ok()?;
    }
    None
}

fn rect_size(doc: &Document, obj: &Object) -> Result<(f64, f64), ViewerError> {
    let arr = match obj {
        Object::Array(a) => a,
        Object::Reference(id) => doc.get_object(*id)?.as_array()?,
        _ => {
            return Err(ViewerError::Open("MediaBox is not an array".into()));
        }
    };
    if arr.len() != 4 {
        return Err(ViewerError::Open(format!(
            "MediaBox has {} elements, expected 4",
            arr.len()
        )));
    }
    let mut v = [0.0f64; 4];
    for (slot, obj) in v.iter_mut().zip(arr) {
        *slot = number(doc, obj)?;
    }
    Ok(((v[2] - v[0]).abs(), (v[3] - v[1]).abs()))
}

fn number(doc: &Document, obj: &Object) -> Result<f64, ViewerError> {
    match obj {
        Object::Integer(i) => Ok(*i as f64),
        Object::Real(r) => Ok(*r as f64),
        Object::Reference(id) => number(doc, doc.get_object(*id)?),
        other => Err(ViewerError::Open(format!(
            "expected a number in MediaBox, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use futures::executor::block_on;
    use lopdf::dictionary;

    /// Pages inherit an A4 MediaBox from the tree; `overrides` are set on
    /// individual pages.
    fn build_pdf(num_pages: u32, overrides: &[(u32, &str, Object)]) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let mut kids = Vec::new();
        for n in 1..=num_pages {
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
            };
            for (target, key, value) in overrides {
                if *target == n {
                    page.set(key.as_bytes().to_vec(), value.clone());
                }
            }
            kids.push(Object::Reference(doc.add_object(page)));
        }
        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => num_pages as i64,
            "Kids" => kids,
            "MediaBox" => vec![0.into(), 0.into(), Object::Real(595.28), Object::Real(841.89)],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_inherited_media_box() {
        let pdf = LocalPdf::from_bytes(&build_pdf(3, &[])).unwrap();
        assert_eq!(pdf.page_count(), 3);
        let g = block_on(pdf.page_geometry(1)).unwrap();
        assert_relative_eq!(g.width, 595.28, epsilon = 1e-3);
        assert_relative_eq!(g.height, 841.89, epsilon = 1e-3);
    }

    #[test]
    fn test_page_media_box_wins() {
        let landscape = Object::Array(vec![0.into(), 0.into(), 792.into(), 612.into()]);
        let pdf = LocalPdf::from_bytes(&build_pdf(2, &[(2, "MediaBox", landscape)])).unwrap();
        let g = block_on(pdf.page_geometry(2)).unwrap();
        assert_relative_eq!(g.aspect_ratio(), 792.0 / 612.0);
    }

    #[test]
    fn test_rotation_swaps_sides() {
        let pdf = LocalPdf::from_bytes(&build_pdf(1, &[(1, "Rotate", 90.into())])).unwrap();
        let g = block_on(pdf.page_geometry(1)).unwrap();
        assert!(g.width > g.height);
    }

    #[test]
    fn test_out_of_range_and_rasterize() {
        let pdf = LocalPdf::from_bytes(&build_pdf(2, &[])).unwrap();
        assert!(matches!(
            block_on(pdf.page_geometry(3)),
            Err(ViewerError::PageOutOfRange { page: 3, page_count: 2 })
        ));
        assert!(matches!(
            block_on(pdf.rasterize(1, 260.0)),
            Err(ViewerError::Render(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let mut pdf = LocalPdf::new();
        let err = block_on(pdf.open("file:///definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, ViewerError::Io(_)));
        assert!(block_on(pdf.page_geometry(1)).is_err());
    }

    #[test]
    fn test_open_garbage_is_open_error() {
        let path = std::env::temp_dir().join(format!("flipbook-garbage-{}.pdf", std::process::id()));
        std::fs::write(&path, b"not a pdf at all").unwrap();
        let mut pdf = LocalPdf::new();
        let err = block_on(pdf.open(path.to_str().unwrap())).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ViewerError::Open(_)));
        assert_eq!(pdf.page_count(), 0);
    }

    #[test]
    fn test_open_from_disk() {
        let path = std::env::temp_dir().join(format!("flipbook-native-{}.pdf", std::process::id()));
        std::fs::write(&path, build_pdf(5, &[])).unwrap();
        let mut pdf = LocalPdf::new();
        let count = block_on(pdf.open(path.to_str().unwrap())).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(count, 5);
    }
}
