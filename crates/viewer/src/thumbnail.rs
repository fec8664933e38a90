use flipbook::renderer::DocumentRenderer;
use flipbook::types::Catalogue;
use yew::prelude::*;

use crate::bridge::PdfJs;

pub const THUMBNAIL_WIDTH: f64 = 260.0;

#[derive(Clone, Copy, PartialEq)]
enum Preview {
    Loading,
    Shown,
    Unavailable,
}

#[derive(Properties, PartialEq)]
pub struct ThumbnailProps {
    pub catalogue: &'static Catalogue,
}

/// Cover of a catalogue, rendered from page 1 of its PDF.
#[function_component(CatalogueThumbnail)]
pub fn catalogue_thumbnail(props: &ThumbnailProps) -> Html {
    let catalogue = props.catalogue;
    let preview = use_state(|| Preview::Loading);
    let canvas_host = use_node_ref();

    {
        let preview = preview.clone();
        let canvas_host = canvas_host.clone();
        use_effect_with(catalogue.slug, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let mut pdf = PdfJs::default();
                let rendered = match pdf.open(catalogue.pdf_url).await {
                    Ok(_) => pdf.rasterize(1, THUMBNAIL_WIDTH).await,
                    Err(e) => Err(e),
                };
                match rendered {
                    Ok(canvas) => {
                        if let Some(host) = canvas_host.cast::<web_sys::Element>() {
                            let _ = host.append_child(&canvas);
                        }
                        preview.set(Preview::Shown);
                    }
                    Err(e) => {
                        log::debug!("no preview for {}: {e}", catalogue.slug);
                        preview.set(Preview::Unavailable);
                    }
                }
            });
            || ()
        });
    }

    if *preview == Preview::Unavailable {
        return html! {
            <div class="thumb thumb-unavailable">
                <span class="icon">{"📖"}</span>
                <span class="thumb-note">{"Preview Unavailable"}</span>
            </div>
        };
    }

    html! {
        <div class="thumb" style={format!("background: {};", catalogue.accent)}>
            if *preview == Preview::Loading {
                <div class="thumb-spinner"><div class="spinner small"></div></div>
            }
            <div ref={canvas_host} class={classes!("thumb-canvas", (*preview == Preview::Shown).then_some("visible"))}></div>
            <div class="thumb-overlay">
                <p class="serif">{catalogue.title}</p>
                <p class="caps">{"View Catalogue"}</p>
            </div>
        </div>
    }
}
