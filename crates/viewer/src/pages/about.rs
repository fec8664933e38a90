use flipbook::links::whatsapp_link;
use flipbook::routes::Route;
use yew::prelude::*;

use crate::shared::{navigate, use_title, Section};

const TRUST_POINTS: [(&str, &str, &str); 3] = [
    ("✓", "Inspect First", "Receive your order and inspect the quality firsthand in your own facility."),
    ("🛡", "Zero Risk", "If it doesn't meet your standards, simply return it. No questions asked."),
    ("♥", "Long-term Partners", "This model reflects our confidence in our quality and our commitment to you."),
];

const OEM_SERVICES: [(&str, &str); 3] = [
    ("✎", "Private Labeling (Your Brand, Our Quality)"),
    ("⚒", "Prototyping & Development"),
    ("👥", "Client-Specific Modifications"),
];

#[function_component(About)]
pub fn about() -> Html {
    use_title("About Us".to_string());
    let to_contact = Callback::from(|_: MouseEvent| navigate(&Route::Contact));
    let chat = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&whatsapp_link(None), "_blank");
        }
    });

    html! {
        <div class="page about">
            <div class="about-hero">
                <img src="https://images.unsplash.com/photo-1530026405186-ed1f139313f8?auto=format&fit=crop&q=80&w=2000" alt="Steel Texture" />
                <div class="container centered">
                    <span class="eyebrow">{"Est. 2002 • USA Based"}</span>
                    <h1 class="serif">{"Defining Precision"}</h1>
                    <p class="gold">{"In-house manufacturing. 50+ Artisans. One standard of excellence."}</p>
                </div>
            </div>

            <section class="story">
                <div class="container split">
                    <figure class="story-image">
                        <img src="https://images.unsplash.com/photo-1629909613654-28e377c37b09?auto=format&fit=crop&q=80&w=1000" alt="Precision Manufacturing" />
                        <figcaption class="serif">{"\"We don't outsource quality. We create it.\""}</figcaption>
                    </figure>
                    <div class="story-text">
                        <span class="eyebrow">{"Our Heritage"}</span>
                        <h2 class="serif">{"Molding the Metal"}<br />{"to Serve Life."}</h2>
                        <p>
                            {"Since 2002, Smith Instruments has stood as a pillar of reliability in the surgical instruments industry. Based in the USA, we have carved a niche in providing precision tools specifically for "}
                            <strong>{"Plastic and Reconstructive surgery"}</strong>{"."}
                        </p>
                        <p>
                            {"Unlike many suppliers who act as middlemen, we are "}<strong>{"manufacturers at heart"}</strong>
                            {". With a facility equipped with state-of-the-art machinery and a dedicated team of over 50 skilled employees, we maintain complete control over our production line. This allows us to ensure that every scalpel, forcep, and retractor meets the rigorous demands of the modern operating theater."}
                        </p>
                        <blockquote class="serif">
                            {"\"We focus especially on serving the growing needs of the South American market, delivering reliable instruments to professionals in Brazil, Argentina, and Chile who value precision.\""}
                        </blockquote>
                        <p>
                            {"Our dedication to craftsmanship is backed by two decades of industry expertise. We don't just follow standards; we set them, ensuring safety and performance in every procedure."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="trust dark">
                <div class="container centered">
                    <div class="trust-icon">{"🤝"}</div>
                    <h2 class="serif">{"Our Philosophy:"}<br />{"Trust Before Payment."}</h2>
                    <p class="lede">
                        {"What truly sets us apart is our belief in earning your trust. "}
                        <span class="underline">{"You only pay after receiving your instruments and being completely satisfied."}</span>
                    </p>
                    <div class="trust-grid">
                        { for TRUST_POINTS.iter().map(|(glyph, title, text)| html! {
                            <div class="trust-card">
                                <span class="gold">{*glyph}</span>
                                <h4 class="serif">{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <Section class="oem">
                <div class="container split">
                    <div>
                        <span class="eyebrow muted">{"Bespoke Manufacturing"}</span>
                        <h2 class="serif">{"Customization & OEM"}</h2>
                        <p>
                            {"At Smith Instruments, we understand that no two clients are the same. Whether you require modifications to an existing pattern or the development of an entirely new instrument from a napkin sketch, we are your partners in innovation."}
                        </p>
                        <ul class="service-list">
                            { for OEM_SERVICES.iter().map(|(glyph, label)| html! {
                                <li><span class="gold">{*glyph}</span>{*label}</li>
                            }) }
                        </ul>
                        <button class="btn btn-secondary" onclick={to_contact.clone()}>{"Start a Custom Project"}</button>
                    </div>
                    <img class="shadowed" src="https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=1000" alt="Engineering Blueprint" />
                </div>
            </Section>

            <section class="direct">
                <div class="container centered">
                    <h2 class="serif">{"Human Connection, Not Portals."}</h2>
                    <p>
                        {"We don't use complicated portals or automated tickets. You can place orders or start a product inquiry simply by talking to us. Our team is quick to respond and ready to guide you."}
                    </p>
                    <div class="button-row">
                        <button class="btn btn-primary" onclick={chat}>{"💬 Chat on WhatsApp"}</button>
                        <button class="btn btn-outline" onclick={to_contact}>{"Contact via Email"}</button>
                    </div>
                </div>
            </section>
        </div>
    }
}
