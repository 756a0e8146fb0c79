use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom::{self, EventListener};
use crate::scroll;
use crate::zoom::{ZoomConfig, ZoomFrame, ZoomInput, HERO_DECORATIONS};

/// Writes `frame` to the page. Missing elements are skipped one by one.
pub fn apply_frame<F>(frame: &ZoomFrame, media: Option<&HtmlElement>, find: F)
where
    F: Fn(&str) -> Option<HtmlElement>,
{
    if let Some(media) = media {
        dom::set_style(media, "transform", &frame.media_transform());
    }

    let ZoomFrame::Zoomed { placements, .. } = frame else {
        return;
    };
    for placement in placements {
        let Some(element) = find(placement.id) else {
            continue;
        };
        dom::set_style(&element, "width", &placement.width_css());
        dom::set_style(&element, placement.side.css_property(), &placement.horizontal);
        dom::clear_style(&element, placement.side.opposite().css_property());
        dom::set_style(&element, "bottom", &placement.bottom_css());
    }
}

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    dom::element_by_id(id).and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn recompute(zoom: &ZoomConfig, hero_ref: &NodeRef, media_ref: &NodeRef) {
    let Some(hero) = hero_ref.cast::<HtmlElement>() else {
        return;
    };
    let media = media_ref.cast::<HtmlElement>();
    let input = ZoomInput {
        scroll_offset: scroll::scroll_offset(),
        viewport_width: scroll::viewport_width(),
        reference_height: f64::from(hero.offset_height()),
        media_height: media.as_ref().map(|m| f64::from(m.offset_height())).unwrap_or(0.0),
    };
    let frame = zoom.frame(input, &HERO_DECORATIONS);
    debug!("hero zoom {:?} -> {}", input, frame.media_transform());
    apply_frame(&frame, media.as_ref(), html_element_by_id);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero_ref = use_node_ref();
    let media_ref = use_node_ref();

    {
        let hero_ref = hero_ref.clone();
        let media_ref = media_ref.clone();
        use_effect_with_deps(
            move |_| {
                let zoom = ZoomConfig::default();
                recompute(&zoom, &hero_ref, &media_ref);

                let on_scroll = {
                    let (hero_ref, media_ref) = (hero_ref.clone(), media_ref.clone());
                    EventListener::on_window("scroll", move |_| {
                        recompute(&zoom, &hero_ref, &media_ref)
                    })
                };
                let on_resize = {
                    let (hero_ref, media_ref) = (hero_ref.clone(), media_ref.clone());
                    EventListener::on_window("resize", move |_| {
                        recompute(&zoom, &hero_ref, &media_ref)
                    })
                };
                // The media has no height until its image arrives, so measure again then.
                let on_media_load = media_ref.cast::<HtmlElement>().and_then(|media| {
                    EventListener::new(media.as_ref(), "load", move |_| {
                        recompute(&zoom, &hero_ref, &media_ref)
                    })
                });

                move || {
                    drop(on_scroll);
                    drop(on_resize);
                    drop(on_media_load);
                }
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero" ref={hero_ref}>
            <div class="hero__content container">
                <h1 class="hero__title">{"Uniformes y bordados que hablan por tu marca"}</h1>
                <p class="hero__description">
                    {"Diseño, confección y personalización textil para empresas, colegios y \
                      equipos en todo Costa Rica."}
                </p>
                <div class="hero__buttons">
                    <a href="#contact" class="button">{"Cotizar ahora"}</a>
                    <a href="#products" class="button button--ghost">{"Ver productos"}</a>
                </div>
            </div>
            <div class="hero__stage">
                <img
                    ref={media_ref}
                    class="hero__media"
                    src="/assets/hero-showcase.webp"
                    alt="Prendas bordadas VEFOD"
                />
                { for HERO_DECORATIONS.iter().map(|decoration| html! {
                    <img
                        id={decoration.id}
                        class="hero__decoration"
                        style={format!("width: {}px", decoration.width)}
                        src={format!("/assets/{}.webp", decoration.id)}
                        alt=""
                        aria-hidden="true"
                    />
                }) }
            </div>
        </section>
    }
}
