//! Browser bindings for the document renderer, the book widget and the
//! flip sound.

use flipbook::audio::AudioResource;
use flipbook::error::ViewerError;
use flipbook::layout::{DisplayDimensions, LayoutConfig};
use flipbook::renderer::{check_page, BookWidget, DocumentRenderer, PageGeometry};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAudioElement, HtmlCanvasElement, HtmlElement};

#[wasm_bindgen(module = "/js/flipbook-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = setWorkerSrc)]
    fn set_worker_src(src: &str);

    #[wasm_bindgen(catch, js_name = openDocument)]
    async fn open_document(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = pageCount)]
    fn page_count(doc: &JsValue) -> u32;

    #[wasm_bindgen(catch, js_name = pageSize)]
    async fn page_size(doc: &JsValue, page: u32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = renderPage)]
    async fn render_page(doc: &JsValue, page: u32, target_width: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = closeDocument)]
    fn close_document(doc: &JsValue);

    #[wasm_bindgen(catch, js_name = createBook)]
    fn create_book(
        container: &HtmlElement,
        pages: &Array,
        options: &JsValue,
        on_flip: &Closure<dyn FnMut(u32)>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = resizeBook)]
    fn resize_book(book: &JsValue, width: f64, height: f64);

    #[wasm_bindgen(js_name = flipNext)]
    fn flip_next(book: &JsValue);

    #[wasm_bindgen(js_name = flipPrev)]
    fn flip_prev(book: &JsValue);

    #[wasm_bindgen(js_name = destroyBook)]
    fn destroy_book(book: &JsValue);
}

/// Hand the configured worker script to pdf.js. Called once from `main`.
pub fn init_worker() {
    set_worker_src(flipbook::renderer::worker_src());
}

fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn number_field(obj: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_f64()
}

// ─── Document renderer ──────────────────────────────────────────────

/// pdf.js document handle.
#[derive(Default)]
pub struct PdfJs {
    doc: Option<JsValue>,
    pages: u32,
}

impl PdfJs {
    fn doc(&self) -> Result<&JsValue, ViewerError> {
        self.doc
            .as_ref()
            .ok_or_else(|| ViewerError::Open("no document loaded".into()))
    }
}

impl DocumentRenderer for PdfJs {
    type Surface = HtmlCanvasElement;

    async fn open(&mut self, url: &str) -> Result<u32, ViewerError> {
        let doc = open_document(url)
            .await
            .map_err(|e| ViewerError::Open(js_error(e)))?;
        self.pages = page_count(&doc);
        self.doc = Some(doc);
        Ok(self.pages)
    }

    async fn page_geometry(&self, page: u32) -> Result<PageGeometry, ViewerError> {
        check_page(page, self.pages)?;
        let size = page_size(self.doc()?, page)
            .await
            .map_err(|e| ViewerError::Render(js_error(e)))?;
        let width = number_field(&size, "width").unwrap_or(f64::NAN);
        let height = number_field(&size, "height").unwrap_or(f64::NAN);
        PageGeometry::new(width, height)
    }

    async fn rasterize(&self, page: u32, target_width: f64) -> Result<HtmlCanvasElement, ViewerError> {
        check_page(page, self.pages)?;
        let canvas = render_page(self.doc()?, page, target_width)
            .await
            .map_err(|e| ViewerError::Render(js_error(e)))?;
        canvas
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ViewerError::Render("renderer did not return a canvas".into()))
    }
}

impl Drop for PdfJs {
    fn drop(&mut self) {
        if let Some(doc) = self.doc.take() {
            close_document(&doc);
        }
    }
}

// ─── Book widget ────────────────────────────────────────────────────

/// St.PageFlip instance mounted into a container element. The flip
/// callback lives as long as the book.
pub struct PageFlipBook {
    handle: JsValue,
    _on_flip: Closure<dyn FnMut(u32)>,
}

impl PageFlipBook {
    pub fn mount(
        container: &HtmlElement,
        pages: &[HtmlElement],
        dims: DisplayDimensions,
        bounds: &LayoutConfig,
        on_flip: impl FnMut(u32) + 'static,
    ) -> Result<Self, ViewerError> {
        let options = Object::new();
        for (key, value) in [
            ("width", dims.width()),
            ("height", dims.height()),
            ("minWidth", bounds.min_width),
            ("maxWidth", bounds.max_width),
            ("minHeight", bounds.min_height),
            ("maxHeight", bounds.max_height),
        ] {
            Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_f64(value))
                .map_err(|e| ViewerError::Render(js_error(e)))?;
        }
        let page_array: Array = pages.iter().collect();
        let on_flip = Closure::wrap(Box::new(on_flip) as Box<dyn FnMut(u32)>);
        let handle = create_book(container, &page_array, &options, &on_flip)
            .map_err(|e| ViewerError::Render(js_error(e)))?;
        Ok(Self {
            handle,
            _on_flip: on_flip,
        })
    }

    pub fn resize(&self, dims: DisplayDimensions) {
        resize_book(&self.handle, dims.width(), dims.height());
    }
}

impl BookWidget for PageFlipBook {
    fn flip_next(&mut self) {
        flip_next(&self.handle);
    }

    fn flip_prev(&mut self) {
        flip_prev(&self.handle);
    }
}

impl Drop for PageFlipBook {
    fn drop(&mut self) {
        destroy_book(&self.handle);
    }
}

// ─── Flip sound ─────────────────────────────────────────────────────

/// Preloaded `<audio>` element; each play uses a clone so flips overlap.
pub struct HtmlClip {
    audio: HtmlAudioElement,
}

impl HtmlClip {
    pub fn preload(src: &str) -> Result<Self, ViewerError> {
        let audio = HtmlAudioElement::new_with_src(src).map_err(|e| ViewerError::Audio(js_error(e)))?;
        audio.set_preload("auto");
        Ok(Self { audio })
    }
}

impl AudioResource for HtmlClip {
    type Instance = HtmlAudioElement;

    fn clone_instance(&self) -> Result<HtmlAudioElement, ViewerError> {
        self.audio
            .clone_node()
            .map_err(|e| ViewerError::Audio(js_error(e)))?
            .dyn_into::<HtmlAudioElement>()
            .map_err(|_| ViewerError::Audio("cloned node is not an audio element".into()))
    }

    fn start(&self, instance: &HtmlAudioElement, volume: f64) -> Result<(), ViewerError> {
        instance.set_volume(volume);
        let promise = instance.play().map_err(|e| ViewerError::Audio(js_error(e)))?;
        // Autoplay rejections surface asynchronously; swallow them too
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::debug!("flip sound rejected: {}", js_error(e));
            }
        });
        Ok(())
    }
}
