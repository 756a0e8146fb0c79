use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq__item", (*is_open).then(|| "active"))}>
            <button class="faq__question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <i class={if *is_open { "ri-subtract-line" } else { "ri-add-line" }}></i>
            </button>
            <div class="faq__answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq section">
            <div class="section__header container">
                <h2 class="section__title">{"Preguntas frecuentes"}</h2>
            </div>
            <div class="faq__list container">
                <FaqItem question="¿Cuál es el pedido mínimo?">
                    <p>{"Bordamos desde una unidad. Para serigrafía el mínimo es de 24 prendas por diseño."}</p>
                </FaqItem>
                <FaqItem question="¿Cuánto tarda un pedido?">
                    <p>{"Entre 5 y 10 días hábiles según la cantidad y la técnica. Pedidos urgentes se coordinan por WhatsApp."}</p>
                </FaqItem>
                <FaqItem question="¿Ustedes digitalizan mi logo?">
                    <p>{"Sí. Convertimos su logo a formato de bordado sin costo en pedidos de más de 12 prendas."}</p>
                </FaqItem>
                <FaqItem question="¿Hacen envíos fuera de San José?">
                    <p>{"Enviamos a todo el país por Correos de Costa Rica o mensajería privada."}</p>
                </FaqItem>
            </div>
        </section>
    }
}
