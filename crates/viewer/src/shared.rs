use flipbook::content::{ADDRESS_LINES, NAV_ITEMS, SALES_EMAIL, SALES_PHONE};
use flipbook::links::{whatsapp_link, DEFAULT_CHAT_TEXT};
use flipbook::routes::Route;
use flipbook::seo::{MetaKey, PageMeta, SITE_NAME};
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlHeadElement};
use yew::prelude::*;

const HEADER_SOLID_AFTER_PX: f64 = 20.0;
const SCROLL_TOP_AFTER_PX: f64 = 300.0;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Whether the page has scrolled past `threshold`, tracked live.
#[hook]
fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state(move || scroll_y() > threshold);
    {
        let past = past.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "scroll", move |_| {
                past.set(scroll_y() > threshold);
            });
            move || drop(listener)
        });
    }
    *past
}

/// Set the document title while the calling page is mounted.
#[hook]
pub fn use_title(title: String) {
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&format!("{title} | {SITE_NAME}"));
        }
        || ()
    });
}

/// Set the title and the description, keyword and Open Graph tags in
/// `<head>` while the calling page is mounted. Tags without content are
/// removed, and all of them go when the page unmounts.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with(meta, |meta| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&meta.document_title());
        }
        apply_meta(|key| meta.content(key));
        || apply_meta(|_| None)
    });
}

fn apply_meta<'a>(content: impl Fn(MetaKey) -> Option<&'a str>) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = doc.head() else {
        return;
    };
    for key in MetaKey::ALL {
        if let Err(e) = write_meta(&doc, &head, key, content(key)) {
            log::debug!("meta {} not updated: {e:?}", key.name());
        }
    }
}

fn write_meta(
    doc: &Document,
    head: &HtmlHeadElement,
    key: MetaKey,
    content: Option<&str>,
) -> Result<(), JsValue> {
    let existing = head.query_selector(&key.selector())?;
    match (existing, content) {
        (Some(tag), Some(content)) => tag.set_attribute("content", content),
        (Some(tag), None) => {
            tag.remove();
            Ok(())
        }
        (None, Some(content)) => {
            let tag = doc.create_element("meta")?;
            tag.set_attribute(key.attribute(), key.name())?;
            tag.set_attribute("content", content)?;
            head.append_child(&tag).map(drop)
        }
        (None, None) => Ok(()),
    }
}

pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&route.to_hash());
    }
}

// ─── Header ─────────────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub route: Route,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_scrolled_past(HEADER_SOLID_AFTER_PX);
    let menu_open = use_state(|| false);

    {
        let menu_open = menu_open.clone();
        use_effect_with(props.route.clone(), move |_| {
            menu_open.set(false);
            || ()
        });
    }

    let solid = scrolled || !props.route.is_home();
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let get_quote = Callback::from(|_: MouseEvent| navigate(&Route::Contact));

    let nav_links = |mobile: bool| -> Html {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let active = props.route.is_under(item.path);
                let class = classes!(
                    if mobile { "mobile-link" } else { "nav-link" },
                    active.then_some("active")
                );
                html! {
                    <a key={item.path} class={class} href={format!("#{}", item.path)}>{item.label}</a>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", if solid { "solid" } else { "clear" })}>
            <div class="container header-row">
                <a class="logo" href="#/">
                    <img src="/smith-logo-full.jpg" alt="Smith Instruments" class={classes!((!solid).then_some("inverted"))} />
                </a>
                <nav class="desktop-nav">{nav_links(false)}</nav>
                <div class="header-cta">
                    <button
                        class={classes!("btn", "desktop-only", if solid { "btn-secondary" } else { "btn-primary" })}
                        onclick={get_quote.clone()}
                    >
                        {"Get Quote"}
                    </button>
                    <button class="menu-toggle" onclick={toggle_menu} aria-label="Menu">
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    <nav>
                        {nav_links(true)}
                        <button class="btn btn-secondary wide" onclick={get_quote}>{"Get Quote"}</button>
                    </nav>
                </div>
            }
        </header>
    }
}

// ─── Footer ─────────────────────────────────────────────────────────

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img src="/smith-logo-full.jpg" alt="Smith Instruments" class="inverted" />
                    <p>{"Molding the metal to serve life. Precision engineered surgical instruments for the modern medical world."}</p>
                    <div class="social">
                        <a href="https://www.facebook.com/smithinstrumentsusa" target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                        <a href="https://www.instagram.com/smithinstruments/" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    </div>
                </div>
                <div class="footer-links">
                    <h3>{"Explore"}</h3>
                    <a href="#/">{"Home"}</a>
                    <a href="#/catalogues">{"Catalogues"}</a>
                    <a href="#/about">{"About Us"}</a>
                    <a href="#/blog">{"Blog"}</a>
                    <a href="#/contact">{"Contact & Support"}</a>
                </div>
                <div class="footer-contact">
                    <h3>{"Connect"}</h3>
                    <p>{"✉ "}{SALES_EMAIL}</p>
                    <p>{"☎ "}{SALES_PHONE}</p>
                    <p>{"⌖ "}{ADDRESS_LINES[0]}<br />{ADDRESS_LINES[1]}</p>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{format!("© {year} Smith Instruments. All rights reserved.")}</p>
                <div class="legal">
                    <a href="#/">{"Privacy Policy"}</a>
                    <a href="#/">{"Terms of Service"}</a>
                </div>
            </div>
        </footer>
    }
}

// ─── Floating buttons ───────────────────────────────────────────────

#[function_component(WhatsAppFloat)]
pub fn whatsapp_float() -> Html {
    html! {
        <a class="whatsapp-float" href={whatsapp_link(Some(DEFAULT_CHAT_TEXT))} target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp">
            {"💬"}
        </a>
    }
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_scrolled_past(SCROLL_TOP_AFTER_PX);
    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    });
    html! {
        if visible {
            <button class="scroll-top" {onclick} aria-label="Scroll to top">{"↑"}</button>
        }
    }
}

// ─── Layout helpers ─────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("section", props.class.clone())}>
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageBannerProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(PageBanner)]
pub fn page_banner(props: &PageBannerProps) -> Html {
    html! {
        <div class={classes!("page-banner", props.dark.then_some("dark"))}>
            <h1 class="serif">{props.title.clone()}</h1>
            <p>{props.subtitle.clone()}</p>
        </div>
    }
}
