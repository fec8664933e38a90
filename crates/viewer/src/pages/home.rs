use flipbook::carousel::{Carousel, AUTO_ADVANCE_MS};
use flipbook::content::{SPECIALTIES, TESTIMONIALS, VALUE_PROPS};
use flipbook::routes::Route;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::shared::{navigate, use_title, Section};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1626315869436-d6781ba69d6e?q=80&w=2070&auto=format&fit=crop";

fn inner_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
}

#[function_component(Home)]
pub fn home() -> Html {
    use_title("Precision Surgical Instruments".to_string());
    let carousel = use_state(|| Carousel::new(SPECIALTIES.len()));
    let viewport_width = use_state(inner_width);

    {
        let viewport_width = viewport_width.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
                viewport_width.set(inner_width());
            });
            move || drop(listener)
        });
    }

    // Auto-advance; any slide change restarts the countdown
    {
        let carousel = carousel.clone();
        use_effect_with(carousel.current(), move |_| {
            let timer = Timeout::new(AUTO_ADVANCE_MS as u32, move || {
                let mut next = *carousel;
                next.next();
                carousel.set(next);
            });
            move || drop(timer)
        });
    }

    let step = |forward: bool| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *carousel;
            if forward {
                next.next();
            } else {
                next.prev();
            }
            carousel.set(next);
        })
    };

    let go = |route: Route| Callback::from(move |_: MouseEvent| navigate(&route));

    html! {
        <div class="home">
            <section class="hero">
                <img class="hero-bg" src={HERO_IMAGE} alt="Surgical Instruments Background" />
                <div class="hero-gradient"></div>
                <div class="container hero-body">
                    <span class="eyebrow">{"Premium Surgical Solutions"}</span>
                    <h1 class="serif">{"We Mold the Metal "}<br /><span class="gold">{"to Serve Life."}</span></h1>
                    <p class="lede">
                        {"Crafting precision surgical instruments with unwavering commitment to quality and innovation for healthcare professionals worldwide."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={go(Route::Catalogues)}>{"Explore Catalogue →"}</button>
                        <button class="btn btn-outline light" onclick={go(Route::About)}>{"Our Story"}</button>
                    </div>
                </div>
                <div class="scroll-hint"><span>{"Scroll"}</span></div>
            </section>

            <section class="impact">
                <div class="container">
                    <h2 class="serif">{"Our Impact"}</h2>
                    <div class="impact-grid">
                        { for [(20, "Years of Experience"), (20, "Countries Served"), (50, "Global Clients")].iter().map(|(n, label)| html! {
                            <div class="impact-item">
                                <div class="impact-number">{format!("{n}+")}</div>
                                <span>{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <Section class="why-us">
                <div class="container">
                    <div class="section-head">
                        <h2 class="serif">{"Why Choose Us?"}</h2>
                        <p>{"Precision, reliability, and partnership in every instrument we create."}</p>
                    </div>
                    <div class="value-grid">
                        { for VALUE_PROPS.iter().map(|v| html! {
                            <div class="value-card">
                                <div class="value-icon">{v.icon.glyph()}</div>
                                <h3 class="serif">{v.title}</h3>
                                <p>{v.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </Section>

            <Section class="specialties">
                <div class="container">
                    <div class="section-head split">
                        <div>
                            <h2 class="serif">{"Our Products"}</h2>
                            <p>{"A comprehensive range of instruments for every surgical specialty."}</p>
                        </div>
                        <div class="carousel-controls">
                            <button class="round-btn" onclick={step(false)} aria-label="Previous">{"‹"}</button>
                            <button class="round-btn" onclick={step(true)} aria-label="Next">{"›"}</button>
                        </div>
                    </div>
                    <div class="carousel-window">
                        <div class="carousel-track" style={format!("transform: {};", carousel.track_transform(*viewport_width))}>
                            { for SPECIALTIES.iter().map(|s| html! {
                                <div class="specialty-card" onclick={go(Route::Products)}>
                                    <div class="specialty-icon">{s.icon.glyph()}</div>
                                    <h3 class="serif">{s.name}</h3>
                                    <p>{s.description}</p>
                                    <span class="link">{"View Collection →"}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </Section>

            <Section class="testimonials">
                <div class="container">
                    <h2 class="serif centered">{"Trusted by Professionals"}</h2>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <figure class="testimonial">
                                <span class="quote-mark">{"“"}</span>
                                <blockquote>{t.text}</blockquote>
                                <figcaption>
                                    <strong>{t.author}</strong>
                                    <span>{format!("{}, {}", t.role, t.location)}</span>
                                </figcaption>
                            </figure>
                        }) }
                    </div>
                </div>
            </Section>
        </div>
    }
}
