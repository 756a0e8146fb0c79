use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, EventListener};
use crate::scroll;

pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { section: "home", label: "Inicio" },
    NavLink { section: "services", label: "Servicios" },
    NavLink { section: "products", label: "Productos" },
    NavLink { section: "faq", label: "Preguntas" },
    NavLink { section: "contact", label: "Contacto" },
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let active_section = use_state_eq(|| None::<String>);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Active link follows the section under the viewport top. Leaving every
    // section keeps the last highlight.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let sections = scroll::measure_sections();
                    if let Some(id) = scroll::section_at(&sections, scroll::scroll_offset()) {
                        active_section.set(Some(id.to_string()));
                    }
                };
                update();
                let listener = EventListener::on_window("scroll", move |_| update());
                move || drop(listener)
            },
            (),
        );
    }

    // Close the menu on clicks outside both the menu and its toggle.
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::on_document("click", move |event| {
                    let inside = |node: &NodeRef| {
                        node.cast::<Element>()
                            .map(|element| dom::event_within(&event, &element))
                            .unwrap_or(false)
                    };
                    if !inside(&menu_ref) && !inside(&toggle_ref) {
                        menu_open.set(false);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class="nav container">
            <a href="#home" class="nav__logo">{"VEFOD"}</a>
            <div
                id="nav"
                ref={menu_ref}
                class={classes!("nav__menu", (*menu_open).then(|| "show"))}
            >
                <ul class="nav__list">
                    { for NAV_LINKS.iter().map(|link| {
                        let is_active = active_section.as_deref() == Some(link.section);
                        html! {
                            <li class="nav__item">
                                <a
                                    href={format!("#{}", link.section)}
                                    class={classes!("nav__link", is_active.then(|| "active"))}
                                    onclick={close_menu.clone()}
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
            <button
                id="nav-toggle"
                ref={toggle_ref}
                class="nav__toggle"
                aria-controls="nav"
                aria-expanded={(*menu_open).to_string()}
                onclick={toggle_menu}
            >
                <i class={if *menu_open { "ri-close-line" } else { "ri-menu-line" }}></i>
            </button>
        </nav>
    }
}
