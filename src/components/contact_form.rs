use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::NotificationKind;
use crate::config;
use crate::contact::ContactForm;

pub static SERVICES: [&str; 4] = ["Uniformes", "Bordado", "Serigrafía", "Diseño de logo"];

const SUCCESS_MESSAGE: &str = "¡Mensaje enviado! Te redirigimos a WhatsApp.";

fn control_value(target: Option<EventTarget>) -> Option<String> {
    let target = target?;
    let target = match target.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Some(input.value()),
        Err(target) => target,
    };
    let target = match target.dyn_into::<HtmlTextAreaElement>() {
        Ok(area) => return Some(area.value()),
        Err(target) => target,
    };
    target.dyn_into::<HtmlSelectElement>().ok().map(|select| select.value())
}

fn on_field<E, F>(form: &UseStateHandle<ContactForm>, assign: F) -> Callback<E>
where
    E: AsRef<Event> + 'static,
    F: Fn(&mut ContactForm, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: E| {
        if let Some(value) = control_value(e.as_ref().target()) {
            let mut next = (*form).clone();
            assign(&mut next, value);
            form.set(next);
        }
    })
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => warn!("messaging link was blocked by the browser"),
        Err(err) => warn!("could not open messaging link: {:?}", err),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(NotificationKind, String)>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactFormProps) -> Html {
    let form = use_state(ContactForm::default);
    let submitting = use_state_eq(|| false);

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let data = (*form).clone();
            if let Err(err) = data.validate() {
                info!("contact form rejected: {}", err.code());
                on_notify.emit((NotificationKind::Error, err.to_string()));
                return;
            }

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                let link = data.deep_link();
                info!("contact form sent, opening WhatsApp");
                open_in_new_tab(&link);
                form.set(ContactForm::default());
                submitting.set(false);
                on_notify.emit((NotificationKind::Success, SUCCESS_MESSAGE.to_string()));
            });
        })
    };

    let on_name: Callback<InputEvent> = on_field(&form, |f, v| f.name = v);
    let on_email: Callback<InputEvent> = on_field(&form, |f, v| f.email = v);
    let on_phone: Callback<InputEvent> = on_field(&form, |f, v| f.phone = v);
    let on_service: Callback<Event> = on_field(&form, |f, v| f.service = v);
    let on_message: Callback<InputEvent> = on_field(&form, |f, v| f.message = v);

    html! {
        <section id="contact" class="contact section">
            <div class="section__header container">
                <h2 class="section__title">{"Cotice su proyecto"}</h2>
                <p class="section__subtitle">{"Cuéntenos qué necesita y le respondemos por WhatsApp."}</p>
            </div>
            <div class="contact__container container">
                <div class="contact__form-section">
                    <form id="contactForm" class="contact__form" novalidate={true} {onsubmit}>
                        <div class="form__group">
                            <label for="name">{"Nombre"}</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                value={form.name.clone()}
                                oninput={on_name}
                            />
                        </div>
                        <div class="form__group">
                            <label for="email">{"Correo electrónico"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                        </div>
                        <div class="form__group">
                            <label for="phone">{"Teléfono"}</label>
                            <input
                                id="phone"
                                name="phone"
                                type="tel"
                                value={form.phone.clone()}
                                oninput={on_phone}
                            />
                        </div>
                        <div class="form__group">
                            <label for="service">{"Servicio"}</label>
                            <select
                                id="service"
                                name="service"
                                onchange={on_service}
                            >
                                <option value="" selected={form.service.is_empty()}>
                                    {"Seleccione un servicio"}
                                </option>
                                { for SERVICES.iter().map(|service| html! {
                                    <option value={*service} selected={form.service == *service}>
                                        {*service}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="form__group">
                            <label for="message">{"Mensaje"}</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="5"
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                        </div>
                        <button type="submit" class="button contact__submit" disabled={*submitting}>
                            {
                                if *submitting {
                                    html! { <><i class="ri-loader-4-line ri-spin"></i>{" Enviando..."}</> }
                                } else {
                                    html! { <><i class="ri-send-plane-line"></i>{" Enviar mensaje"}</> }
                                }
                            }
                        </button>
                    </form>
                </div>
                <div class="contact__info-section">
                    <div class="contact__info">
                        <i class="ri-whatsapp-line"></i>
                        <div>
                            <h3>{"WhatsApp"}</h3>
                            <p>{"+506 7000 0000"}</p>
                        </div>
                    </div>
                    <div class="contact__info">
                        <i class="ri-mail-line"></i>
                        <div>
                            <h3>{"Correo"}</h3>
                            <p>{"ventas@vefod.com"}</p>
                        </div>
                    </div>
                    <div class="contact__info">
                        <i class="ri-map-pin-line"></i>
                        <div>
                            <h3>{"Taller"}</h3>
                            <p>{"San José, Costa Rica"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
