use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactSection;
use crate::components::fab::WhatsappFab;
use crate::components::faq::Faq;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::notification::{notifier, NotificationStack, Toasts};
use crate::components::tabs::ProductTabs;
use crate::reveal;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static SERVICES: [Service; 4] = [
    Service {
        icon: "ri-shirt-line",
        title: "Uniformes",
        description: "Diseño y confección de uniformes empresariales, escolares y deportivos.",
    },
    Service {
        icon: "ri-scissors-cut-line",
        title: "Bordado",
        description: "Bordado computarizado de logos en camisas, gorras y parches.",
    },
    Service {
        icon: "ri-paint-brush-line",
        title: "Serigrafía",
        description: "Estampado duradero para campañas, eventos y merchandising.",
    },
    Service {
        icon: "ri-pencil-ruler-2-line",
        title: "Diseño",
        description: "Digitalizamos y adaptamos su logo para cada técnica.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let toasts = use_reducer(Toasts::default);
    let on_notify = notifier(toasts.dispatcher());

    // Entrance animations once the page is in the document.
    use_effect_with_deps(
        move |_| {
            reveal::init();
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .ri-spin {
                        display: inline-block;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }
                    .header.scrolling .nav {
                        transition: none;
                    }
                    .hero__stage {
                        position: relative;
                        min-height: 520px;
                    }
                    .hero__media {
                        position: absolute;
                        left: 50%;
                        bottom: 0;
                        transform: translateX(-50%);
                        transform-origin: center bottom;
                        will-change: transform;
                    }
                    .hero__decoration {
                        position: absolute;
                        will-change: bottom;
                    }
                    .tab__pane {
                        display: none;
                    }
                    .tab__pane.active {
                        display: block;
                    }
                    .faq__answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }
                    .faq__item.active .faq__answer {
                        max-height: 400px;
                    }
                    .back-to-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: -4rem;
                        transition: bottom 0.3s ease;
                    }
                    .back-to-top.show {
                        bottom: 6rem;
                    }
                    .whatsapp-float {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 900;
                    }
                    .whatsapp-menu[hidden] {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .hero__decoration {
                            display: none;
                        }
                        .nav__menu {
                            position: fixed;
                            top: -100%;
                            transition: top 0.3s ease;
                        }
                        .nav__menu.show {
                            top: 4rem;
                        }
                    }
                "#}
            </style>
            <Header />
            <main class="main">
                <Hero />
                <section id="services" class="services section">
                    <div class="section__header container">
                        <h2 class="section__title">{"Servicios"}</h2>
                        <p class="section__subtitle">{"Todo lo que su marca necesita para vestirse bien."}</p>
                    </div>
                    <div class="services__grid container">
                        { for SERVICES.iter().map(|service| html! {
                            <article class="service-card">
                                <i class={classes!("service-card__icon", service.icon)}></i>
                                <h3 class="service-card__title">{service.title}</h3>
                                <p class="service-card__description">{service.description}</p>
                            </article>
                        }) }
                    </div>
                </section>
                <ProductTabs />
                <Faq />
                <ContactSection on_notify={on_notify} />
            </main>
            <Footer />
            <WhatsappFab />
            <BackToTop />
            <NotificationStack toasts={(*toasts).clone()} dispatcher={toasts.dispatcher()} />
        </div>
    }
}
