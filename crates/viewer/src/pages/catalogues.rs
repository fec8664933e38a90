use flipbook::content::CATALOGUES;
use flipbook::routes::Route;
use flipbook::types::Catalogue;
use yew::prelude::*;

use crate::flipbook_viewer::FlipBookViewer;
use crate::shared::{navigate, use_title, PageBanner, Section};
use crate::thumbnail::CatalogueThumbnail;

#[function_component(Catalogues)]
pub fn catalogues() -> Html {
    use_title("Catalogues".to_string());
    let selected = use_state(|| None::<&'static Catalogue>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };
    let custom = Callback::from(|_: MouseEvent| navigate(&Route::Contact));

    html! {
        <div class="page catalogues">
            <PageBanner
                title="Our Catalogues"
                subtitle="Digital libraries of our comprehensive instrument ranges."
            />

            <Section class="white">
                <div class="container book-grid">
                    { for CATALOGUES.iter().map(|cat| {
                        let open = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(cat)))
                        };
                        html! {
                            <div key={cat.slug} class="book" onclick={open}>
                                <div class="book-cover">
                                    <CatalogueThumbnail catalogue={cat} />
                                    <div class="spine-shadow"></div>
                                    <div class="book-info">
                                        <h3 class="serif">{cat.title}</h3>
                                        <div class="book-meta">
                                            <span>{format!("{} PDF", cat.size_label)}</span>
                                            <span class="gold">{"👁"}</span>
                                        </div>
                                    </div>
                                </div>
                                <div class="book-spine"></div>
                                <div class="book-pages"></div>
                                <div class="book-shadow"></div>
                            </div>
                        }
                    }) }
                </div>
            </Section>

            <section class="cta dark">
                <div class="container centered">
                    <h2 class="serif">{"Can't find what you need?"}</h2>
                    <p>{"We offer OEM manufacturing and custom instrument modification."}</p>
                    <button class="btn btn-secondary gold-outline" onclick={custom}>{"Request Custom Solution"}</button>
                </div>
            </section>

            if let Some(catalogue) = *selected {
                <FlipBookViewer key={catalogue.slug} {catalogue} {on_close} />
            }
        </div>
    }
}
