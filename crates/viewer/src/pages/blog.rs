use flipbook::routes::Route;
use yew::prelude::*;

use crate::shared::{navigate, use_title, Section};

#[function_component(Blog)]
pub fn blog() -> Html {
    use_title("Blog".to_string());
    let home = Callback::from(|_: MouseEvent| navigate(&Route::Home));
    html! {
        <div class="page blog centered-page">
            <Section class="centered">
                <div class="round-badge">{"🕒"}</div>
                <h1 class="serif">{"Coming Soon"}</h1>
                <p class="lede">
                    {"We are curating insights on surgical innovations and industry trends."}<br />
                    {"Our editorial blog will launch shortly."}
                </p>
                <button class="btn btn-primary" onclick={home}>{"Return Home"}</button>
            </Section>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title("Page not found".to_string());
    let home = Callback::from(|_: MouseEvent| navigate(&Route::Home));
    html! {
        <div class="page centered-page">
            <Section class="centered">
                <h1 class="serif">{"404"}</h1>
                <p class="lede">{"The page you are looking for does not exist."}</p>
                <button class="btn btn-primary" onclick={home}>{"Return Home"}</button>
            </Section>
        </div>
    }
}
