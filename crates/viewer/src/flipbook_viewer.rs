use std::cell::{Cell, RefCell};
use std::rc::Rc;

use flipbook::audio::{FlipSound, FLIP_SOUND_URL};
use flipbook::idle::PendingTimer;
use flipbook::layout::Viewport;
use flipbook::navigation::{dispatch, Intent, Outcome};
use flipbook::renderer::DocumentRenderer;
use flipbook::session::{LoadState, ViewerSession};
use flipbook::types::Catalogue;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::bridge::{HtmlClip, PageFlipBook, PdfJs};

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn window_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// Everything the viewer keeps across renders that is not itself render
/// state: the session, live timers, the open document and the book.
struct ViewerRuntime {
    session: ViewerSession,
    idle_timer: Option<Timeout>,
    loading_timer: Option<Timeout>,
    renderer: Option<Rc<PdfJs>>,
    book: Option<PageFlipBook>,
    sound: FlipSound<HtmlClip>,
}

type Runtime = Rc<RefCell<ViewerRuntime>>;

/// Restart the idle countdown. Re-renders only when the chrome was hidden.
fn touch(runtime: &Runtime, force: &UseForceUpdateHandle) {
    let mut rt = runtime.borrow_mut();
    let was_idle = rt.session.is_idle();
    let now = now_ms();
    let timer = rt.session.activity(now);
    rt.idle_timer = Some(idle_timeout(runtime.clone(), force.clone(), timer, now));
    drop(rt);
    if was_idle {
        force.force_update();
    }
}

fn idle_timeout(runtime: Runtime, force: UseForceUpdateHandle, timer: PendingTimer, now: u64) -> Timeout {
    let delay = timer.delay_ms(now).min(u32::MAX as u64) as u32;
    Timeout::new(delay, move || {
        if runtime.borrow_mut().session.idle_fired(timer.generation) {
            force.force_update();
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct FlipBookViewerProps {
    pub catalogue: &'static Catalogue,
    pub on_close: Callback<()>,
}

#[function_component(FlipBookViewer)]
pub fn flipbook_viewer(props: &FlipBookViewerProps) -> Html {
    let catalogue = props.catalogue;
    let force = use_force_update();
    let book_ref = use_node_ref();
    let runtime: Runtime = use_mut_ref(|| {
        let sound = match HtmlClip::preload(FLIP_SOUND_URL) {
            Ok(clip) => FlipSound::new(clip),
            Err(e) => {
                log::warn!("flip sound unavailable: {e}");
                FlipSound::silent()
            }
        };
        ViewerRuntime {
            session: ViewerSession::open(catalogue, now_ms()),
            idle_timer: None,
            loading_timer: None,
            renderer: None,
            book: None,
            sound,
        }
    });

    // Open the document, then measure page 1 for its aspect ratio
    {
        let runtime = runtime.clone();
        let force = force.clone();
        use_effect_with(catalogue.slug, move |_| {
            let closed = Rc::new(Cell::new(false));
            if let Some(vp) = window_viewport() {
                runtime.borrow_mut().session.resize(vp);
            }
            let pending = runtime.borrow().session.idle_timer();
            if let Some(timer) = pending {
                let t = idle_timeout(runtime.clone(), force.clone(), timer, now_ms());
                runtime.borrow_mut().idle_timer = Some(t);
            }

            {
                let runtime = runtime.clone();
                let force = force.clone();
                let closed = closed.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut pdf = PdfJs::default();
                    let opened = pdf.open(catalogue.pdf_url).await;
                    if closed.get() {
                        return;
                    }
                    let count = match opened {
                        Ok(count) => count,
                        Err(e) => {
                            log::error!("{}: {e}", catalogue.pdf_url);
                            runtime.borrow_mut().session.document_failed(&e);
                            force.force_update();
                            return;
                        }
                    };
                    // Held before the page-1 measurement so the book can be
                    // built once the loading deadline passes without it
                    let pdf = Rc::new(pdf);
                    runtime.borrow_mut().renderer = Some(pdf.clone());
                    let now = now_ms();
                    let deadline = runtime.borrow_mut().session.document_opened(count, now);
                    if let Some(deadline) = deadline {
                        let rt = runtime.clone();
                        let f = force.clone();
                        let t = Timeout::new(deadline.saturating_sub(now) as u32, move || {
                            if rt.borrow_mut().session.poll(now_ms()).became_ready {
                                f.force_update();
                            }
                        });
                        runtime.borrow_mut().loading_timer = Some(t);
                    }
                    force.force_update();

                    let geometry = pdf.page_geometry(1).await;
                    if closed.get() {
                        return;
                    }
                    {
                        let mut rt = runtime.borrow_mut();
                        if let Some(dims) = rt.session.geometry_resolved(geometry) {
                            if let Some(book) = rt.book.as_ref() {
                                book.resize(dims);
                            }
                        }
                    }
                    force.force_update();
                });
            }

            move || {
                closed.set(true);
                let mut rt = runtime.borrow_mut();
                let failures = rt.sound.failures();
                if failures > 0 {
                    log::debug!("{}: {failures} flip sounds did not play", catalogue.slug);
                }
                rt.session.close();
                rt.idle_timer = None;
                rt.loading_timer = None;
                rt.book = None;
                rt.renderer = None;
            }
        });
    }

    // Window listeners: resize, keyboard, pointer activity
    {
        let runtime = runtime.clone();
        let force = force.clone();
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let window = gloo::utils::window();

            let resize = {
                let runtime = runtime.clone();
                let force = force.clone();
                EventListener::new(&window, "resize", move |_| {
                    if let Some(vp) = window_viewport() {
                        let mut rt = runtime.borrow_mut();
                        let dims = rt.session.resize(vp);
                        if let Some(book) = rt.book.as_ref() {
                            book.resize(dims);
                        }
                    }
                    force.force_update();
                })
            };

            let keydown = {
                let runtime = runtime.clone();
                let force = force.clone();
                EventListener::new(&window, "keydown", move |event| {
                    touch(&runtime, &force);
                    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
                        return;
                    };
                    let Some(intent) = Intent::from_key(&key) else {
                        return;
                    };
                    let outcome = {
                        let mut rt = runtime.borrow_mut();
                        let ViewerRuntime { book, sound, .. } = &mut *rt;
                        match book.as_mut() {
                            Some(book) => Some(dispatch(intent, book, sound)),
                            // Escape still closes while loading or after an error
                            None => (intent == Intent::Close).then_some(Outcome::CloseRequested),
                        }
                    };
                    if outcome == Some(Outcome::CloseRequested) {
                        on_close.emit(());
                    }
                })
            };

            let mousemove = {
                let runtime = runtime.clone();
                let force = force.clone();
                EventListener::new(&window, "mousemove", move |_| touch(&runtime, &force))
            };

            move || {
                drop(resize);
                drop(keydown);
                drop(mousemove);
            }
        });
    }

    let (load_state, dims, has_renderer) = {
        let rt = runtime.borrow();
        (
            rt.session.load_state().clone(),
            rt.session.dimensions(),
            rt.renderer.is_some(),
        )
    };

    // Build the book once ready, then paint pages into it one by one
    {
        let runtime = runtime.clone();
        let force = force.clone();
        let book_ref = book_ref.clone();
        let ready = load_state.is_ready();
        use_effect_with((ready, has_renderer), move |&(ready, has_renderer)| {
            let cancelled = Rc::new(Cell::new(false));
            if ready && has_renderer && runtime.borrow().book.is_none() {
                if let Some(container) = book_ref.cast::<HtmlElement>() {
                    build_book(&runtime, &force, &container, cancelled.clone());
                }
            }
            move || cancelled.set(true)
        });
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let flip_with = |intent: Intent| {
        let runtime = runtime.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut rt = runtime.borrow_mut();
            let ViewerRuntime { book, sound, .. } = &mut *rt;
            if let Some(book) = book.as_mut() {
                dispatch(intent, book, sound);
            }
        })
    };
    let on_prev = flip_with(Intent::Previous);
    let on_next = flip_with(Intent::Next);

    let on_download = {
        let url = catalogue.pdf_url;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(url, "_blank");
            }
        })
    };

    let (is_idle, page_label) = {
        let rt = runtime.borrow();
        (rt.session.is_idle(), rt.session.page_label())
    };
    let chrome_class = classes!("viewer-chrome", is_idle.then_some("idle"));
    let book_style = format!(
        "width: {:.0}px; height: {:.0}px;",
        dims.spread_width(),
        dims.height()
    );

    html! {
        <div class="viewer-overlay">
            <div class="viewer-backdrop" onclick={on_close.clone()} aria-label="Close Viewer"></div>

            <div class={classes!(chrome_class.clone(), "viewer-header")}>
                <div class="viewer-title">
                    <span class="icon gold">{"📖"}</span>
                    <div>
                        <h3>{catalogue.title}</h3>
                        <p class="muted">{"Interactive 3D Preview"}</p>
                    </div>
                </div>
                <div class="viewer-actions">
                    <span class="key-hint">{"⌨ Arrow Keys"}</span>
                    <button class="btn btn-primary" onclick={on_download}>{"⤓ Download PDF"}</button>
                    <button class="viewer-close" onclick={on_close.clone()} aria-label="Close">{"✕"}</button>
                </div>
            </div>

            <div class="viewer-stage">
                {
                    match &load_state {
                        LoadState::Loading => html! {
                            <div class="viewer-status">
                                <div class="spinner"></div>
                                <p class="loading-label">{"Loading Catalogue..."}</p>
                            </div>
                        },
                        LoadState::Error(message) => html! {
                            <div class="viewer-status viewer-error">
                                <div class="error-panel">
                                    <p class="error-title">{"Error Loading Catalogue"}</p>
                                    <p class="error-message">{message.clone()}</p>
                                </div>
                                <button class="btn btn-secondary" onclick={on_close.clone()}>{"Close Viewer"}</button>
                            </div>
                        },
                        LoadState::Ready => html! {},
                    }
                }
                <div
                    ref={book_ref}
                    class={classes!("book-container", (!load_state.is_ready()).then_some("hidden"))}
                    style={book_style}
                ></div>
            </div>

            if load_state.is_ready() {
                <div class={classes!(chrome_class, "viewer-nav")}>
                    <div class="viewer-nav-inner">
                        <button class="nav-btn" onclick={on_prev} aria-label="Previous Page">{"‹"}</button>
                        <span class="page-label">{page_label}</span>
                        <button class="nav-btn" onclick={on_next} aria-label="Next Page">{"›"}</button>
                    </div>
                </div>
            }
        </div>
    }
}

/// Create blank page elements, mount the book on them and fill each page
/// with its raster as it arrives.
fn build_book(
    runtime: &Runtime,
    force: &UseForceUpdateHandle,
    container: &HtmlElement,
    cancelled: Rc<Cell<bool>>,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (count, dims, bounds, renderer) = {
        let rt = runtime.borrow();
        let Some(renderer) = rt.renderer.clone() else {
            return;
        };
        (
            rt.session.page_count(),
            rt.session.dimensions(),
            *rt.session.layout_config(),
            renderer,
        )
    };

    let mut pages = Vec::with_capacity(count as usize);
    for index in 0..count {
        let Ok(el) = document.create_element("div") else {
            return;
        };
        let Ok(page) = el.dyn_into::<HtmlElement>() else {
            return;
        };
        let class = match index {
            0 => "flip-page flip-page-cover",
            i if i % 2 == 0 => "flip-page flip-page-right",
            _ => "flip-page flip-page-left",
        };
        page.set_class_name(class);
        pages.push(page);
    }

    let on_flip = {
        let runtime = runtime.clone();
        let force = force.clone();
        move |index: u32| {
            runtime.borrow_mut().session.page_changed(index);
            force.force_update();
        }
    };
    match PageFlipBook::mount(container, &pages, dims, &bounds, on_flip) {
        Ok(book) => runtime.borrow_mut().book = Some(book),
        Err(e) => {
            log::error!("book widget failed to mount: {e}");
            return;
        }
    }

    let width = dims.width();
    wasm_bindgen_futures::spawn_local(async move {
        for (index, page) in pages.iter().enumerate() {
            if cancelled.get() {
                return;
            }
            match renderer.rasterize(index as u32 + 1, width).await {
                Ok(canvas) => {
                    let _ = page.append_child(&canvas);
                }
                Err(e) => log::warn!("page {} not rendered: {e}", index + 1),
            }
        }
    });
}
