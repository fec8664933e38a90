mod bridge;
mod flipbook_viewer;
mod pages;
mod shared;
mod thumbnail;

use flipbook::renderer::{configure_worker, DEFAULT_WORKER_SRC};
use flipbook::routes::Route;
use gloo::events::EventListener;
use yew::prelude::*;

use pages::*;
use shared::{Footer, Header, ScrollTopButton, WhatsAppFloat};

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    configure_worker(DEFAULT_WORKER_SRC);
    bridge::init_worker();
    yew::Renderer::<App>::new().render();
}

fn current_route() -> Route {
    let hash = gloo::utils::window().location().hash().unwrap_or_default();
    Route::from_hash(&hash)
}

// ─── App Component ──────────────────────────────────────────────────

#[function_component(App)]
fn app() -> Html {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
                let next = current_route();
                log::debug!("route -> {next:?}");
                route.set(next);
            });
            move || drop(listener)
        });
    }

    // Each page starts at the top
    use_effect_with((*route).clone(), |_| {
        gloo::utils::window().scroll_to_with_x_and_y(0.0, 0.0);
        || ()
    });

    let page = match (*route).clone() {
        Route::Home => html! { <Home /> },
        Route::Products => html! { <ProductsIndex /> },
        Route::Category { category } => html! { <CategoryView {category} /> },
        Route::Subcategory {
            category,
            subcategory,
        } => html! { <SubcategoryView {category} {subcategory} /> },
        Route::Product {
            category,
            subcategory,
            id,
        } => html! { <ProductDetail {category} {subcategory} {id} /> },
        Route::Catalogues => html! { <Catalogues /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::Blog => html! { <Blog /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <div class="app">
            <Header route={(*route).clone()} />
            <main>{page}</main>
            <Footer />
            <WhatsAppFloat />
            <ScrollTopButton />
        </div>
    }
}
