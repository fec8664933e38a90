use std::cell::RefCell;
use std::rc::Rc;

use flipbook::contact::{ContactForm, FormStatus, Submission, EMAILJS_ENDPOINT, MESSAGE_LIMIT, SITE_ACCOUNT};
use flipbook::content::{ADDRESS_LINES, FAQS, SALES_EMAIL, SALES_PHONE};
use flipbook::links::whatsapp_link;
use flipbook::types::FaqItem;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::shared::{use_title, PageBanner};

/// Submission state shared with the in-flight request and the reset timer.
#[derive(Default)]
struct FormRuntime {
    submission: Submission,
    reset_timer: Option<Timeout>,
}

type Runtime = Rc<RefCell<FormRuntime>>;

async fn send(form: ContactForm) -> Result<(), String> {
    let request = form
        .into_request(&SITE_ACCOUNT)
        .map_err(|e| e.to_string())?;
    let resp = gloo::net::http::Request::post(EMAILJS_ENDPOINT)
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(())
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(format!("EmailJS returned {}: {body}", resp.status()))
    }
}

fn finish(runtime: &Runtime, ok: bool, rerender: &Callback<()>) {
    let armed = runtime
        .borrow_mut()
        .submission
        .finish(ok, js_sys::Date::now() as u64);
    if let Some((generation, _)) = armed {
        let timer = {
            let runtime = runtime.clone();
            let rerender = rerender.clone();
            Timeout::new(flipbook::contact::STATUS_RESET_MS as u32, move || {
                if runtime.borrow_mut().submission.reset_fired(generation) {
                    rerender.emit(());
                }
            })
        };
        runtime.borrow_mut().reset_timer = Some(timer);
    }
    rerender.emit(());
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_title("Contact Us".to_string());
    let form = use_state(ContactForm::default);
    let invalid = use_state(|| None::<String>);
    let runtime: Runtime = use_mut_ref(FormRuntime::default);
    let force = use_force_update();
    let rerender = Callback::from(move |()| force.force_update());

    let status = runtime.borrow().submission.status();

    let edit = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: InputEvent| {
            let Some(target) = e.target() else { return };
            let value = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
                input.value()
            } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
                area.value()
            } else {
                return;
            };
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
            invalid.set(None);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let invalid = invalid.clone();
        let runtime = runtime.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = (*form).clone();
            if let Err(err) = draft.validate() {
                invalid.set(Some(err.to_string()));
                return;
            }
            if !runtime.borrow_mut().submission.begin() {
                return;
            }
            rerender.emit(());
            let form = form.clone();
            let runtime = runtime.clone();
            let rerender = rerender.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match send(draft).await {
                    Ok(()) => {
                        log::info!("contact inquiry sent");
                        form.set(ContactForm::default());
                        finish(&runtime, true, &rerender);
                    }
                    Err(e) => {
                        log::warn!("contact inquiry failed: {e}");
                        finish(&runtime, false, &rerender);
                    }
                }
            });
        })
    };

    let retry = {
        let runtime = runtime.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            {
                let mut rt = runtime.borrow_mut();
                rt.submission.retry();
                rt.reset_timer = None;
            }
            rerender.emit(());
        })
    };

    let form_body = match status {
        FormStatus::Success => html! {
            <div class="form-result success">
                <div class="result-icon">{"💬"}</div>
                <h4 class="serif">{"Inquiry Sent"}</h4>
                <p>{"We have received your message and will respond shortly."}</p>
            </div>
        },
        FormStatus::Error => html! {
            <div class="form-result error">
                <h4 class="serif">{"Something went wrong"}</h4>
                <p>{"Please check your internet connection or try contacting us via WhatsApp."}</p>
                <button class="btn btn-primary" onclick={retry}>{"Try Again"}</button>
            </div>
        },
        FormStatus::Idle | FormStatus::Sending => {
            let sending = status == FormStatus::Sending;
            html! {
                <form class="contact-form" {onsubmit}>
                    <div class="field-row">
                        <label>
                            <span>{"Full Name *"}</span>
                            <input type="text" name="user_name" placeholder="Dr. John Smith"
                                value={form.user_name.clone()}
                                oninput={edit(|f, v| f.user_name = v)} />
                        </label>
                        <label>
                            <span>{"Email Address *"}</span>
                            <input type="email" name="user_email" placeholder="john.smith@hospital.com"
                                value={form.user_email.clone()}
                                oninput={edit(|f, v| f.user_email = v)} />
                        </label>
                    </div>
                    <label>
                        <span>{"Catalogue of Interest"}</span>
                        <input type="text" name="interest" placeholder="e.g., Orthopedic Instruments"
                            value={form.interest.clone()}
                            oninput={edit(|f, v| f.interest = v)} />
                    </label>
                    <label>
                        <span>{"Message *"}</span>
                        <textarea name="message" rows="6" maxlength={MESSAGE_LIMIT.to_string()}
                            placeholder="Tell us about your requirements or questions..."
                            value={form.message.clone()}
                            oninput={edit(|f, v| f.message = v)} />
                        <span class="counter">{form.counter_label()}</span>
                    </label>
                    if let Some(problem) = (*invalid).clone() {
                        <p class="field-error">{problem}</p>
                    }
                    <button type="submit" class="btn btn-primary wide" disabled={sending}>
                        { if sending { "Sending..." } else { "Send Inquiry" } }
                    </button>
                    <p class="privacy">
                        <strong>{"Privacy Notice:"}</strong>
                        {" Your information will be used solely to respond to your inquiry. We do not share your data with third parties."}
                    </p>
                </form>
            }
        }
    };

    html! {
        <div class="page contact">
            <PageBanner
                title="Contact Us"
                subtitle="Reach out for quotes, custom manufacturing inquiries, or support."
                dark=true
            />
            <div class="container contact-grid">
                <aside class="contact-side">
                    <div class="card">
                        <h3 class="serif">{"Get In Touch"}</h3>
                        <div class="contact-line">
                            <span class="round-icon">{"☎"}</span>
                            <div>
                                <h4>{"Phone"}</h4>
                                <p>{SALES_PHONE}</p>
                                <small>{"Mon-Fri, 9am-6pm EST"}</small>
                            </div>
                        </div>
                        <div class="contact-line">
                            <span class="round-icon">{"✉"}</span>
                            <div>
                                <h4>{"Email"}</h4>
                                <p class="break">{SALES_EMAIL}</p>
                                <small>{"We reply within 24 hours"}</small>
                            </div>
                        </div>
                        <div class="contact-line">
                            <span class="round-icon">{"⌖"}</span>
                            <div>
                                <h4>{"Location"}</h4>
                                <p>{ADDRESS_LINES[0]}<br />{ADDRESS_LINES[1]}</p>
                                <small>{"Serving clients globally"}</small>
                            </div>
                        </div>
                        <a class="whatsapp-btn" href={whatsapp_link(None)} target="_blank" rel="noreferrer">
                            {"💬 Chat on WhatsApp"}
                        </a>
                    </div>
                    <div class="card muted">
                        <h3 class="serif">{"🕒 Business Hours"}</h3>
                        <div class="hours">
                            <div><span>{"Monday - Friday"}</span><strong>{"9:00 AM - 6:00 PM"}</strong></div>
                            <div><span>{"Saturday"}</span><strong>{"10:00 AM - 2:00 PM"}</strong></div>
                            <div class="closed"><span>{"Sunday"}</span><span>{"Closed"}</span></div>
                        </div>
                    </div>
                </aside>
                <div class="card form-card">
                    <h3 class="serif">{"Send Us a Message"}</h3>
                    {form_body}
                </div>
            </div>

            <section class="faq">
                <div class="container narrow">
                    <div class="section-head">
                        <h2 class="serif">{"Frequently Asked Questions"}</h2>
                        <p>{"Common questions about our manufacturing, shipping, and policies."}</p>
                    </div>
                    <div class="accordion">
                        { for FAQS.iter().enumerate().map(|(i, item)| html! { <AccordionItem key={i} {item} /> }) }
                    </div>
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AccordionItemProps {
    item: &'static FaqItem,
}

#[function_component(AccordionItem)]
fn accordion_item(props: &AccordionItemProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    html! {
        <div class={classes!("accordion-item", (*open).then_some("open"))}>
            <button class="accordion-head" onclick={toggle}>
                <span class="serif">{props.item.question}</span>
                <span class="chevron">{ if *open { "−" } else { "+" } }</span>
            </button>
            if *open {
                <div class="accordion-body"><p>{props.item.answer}</p></div>
            }
        </div>
    }
}
