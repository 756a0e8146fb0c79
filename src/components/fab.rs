use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::contact::whatsapp_link;
use crate::dom::{self, EventListener};

struct QuickMessage {
    label: &'static str,
    text: &'static str,
}

static QUICK_MESSAGES: [QuickMessage; 3] = [
    QuickMessage {
        label: "Cotizar uniformes",
        text: "Hola VEFOD, quisiera cotizar uniformes.",
    },
    QuickMessage {
        label: "Cotizar bordados",
        text: "Hola VEFOD, quisiera cotizar bordados.",
    },
    QuickMessage {
        label: "Estado de mi pedido",
        text: "Hola VEFOD, quisiera consultar el estado de mi pedido.",
    },
];

#[function_component(WhatsappFab)]
pub fn whatsapp_fab() -> Html {
    let open = use_state_eq(|| false);
    let fab_ref = use_node_ref();

    {
        let open = open.clone();
        let fab_ref = fab_ref.clone();
        use_effect_with_deps(
            move |_| {
                // Menu clicks stop propagating before they get here, so
                // anything that isn't the trigger is outside.
                let listener = EventListener::on_document("click", move |event| {
                    let on_trigger = fab_ref
                        .cast::<Element>()
                        .map(|fab| dom::event_within(&event, &fab))
                        .unwrap_or(false);
                    if !on_trigger {
                        open.set(false);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="whatsapp-float">
            <div
                id="whatsappMenu"
                class="whatsapp-menu"
                hidden={!*open}
                onclick={keep_open}
            >
                { for QUICK_MESSAGES.iter().map(|quick| html! {
                    <a
                        class="whatsapp-menu__item"
                        href={whatsapp_link(
                            config::WHATSAPP_HOST,
                            config::WHATSAPP_RECIPIENT,
                            quick.text,
                        )}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <i class="ri-whatsapp-line"></i>
                        {quick.label}
                    </a>
                }) }
            </div>
            <button
                id="whatsappFab"
                ref={fab_ref}
                type="button"
                class="whatsapp-fab"
                aria-controls="whatsappMenu"
                aria-expanded={(*open).to_string()}
                aria-label="Escríbanos por WhatsApp"
                onclick={toggle}
            >
                <i class="ri-whatsapp-line"></i>
            </button>
        </div>
    }
}
