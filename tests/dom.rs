#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Element, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};
use yew::prelude::*;

use vefod_site::components::contact_form::{ContactFormProps, ContactSection};
use vefod_site::components::faq::Faq;
use vefod_site::components::header::SettleTimer;
use vefod_site::components::hero::{apply_frame, Hero};
use vefod_site::components::notification::{notifier, NotificationKind, NotificationStack, Toasts};
use vefod_site::components::tabs::ProductTabs;
use vefod_site::dom;
use vefod_site::zoom::{ZoomConfig, ZoomFrame, ZoomInput, HERO_DECORATIONS};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn html_element(tag: &str) -> HtmlElement {
    document().create_element(tag).unwrap().dyn_into::<HtmlElement>().unwrap()
}

fn mount_root() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn fire(target: &Element, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn set_field(root: &Element, selector: &str, value: &str) {
    let field = find(root, selector);
    if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
        fire(&field, "change");
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
        fire(&field, "input");
    } else {
        field.dyn_ref::<HtmlInputElement>().unwrap().set_value(value);
        fire(&field, "input");
    }
}

fn style(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

fn zoom_input(scroll_offset: f64, viewport_width: f64) -> ZoomInput {
    ZoomInput {
        scroll_offset,
        viewport_width,
        reference_height: 800.0,
        media_height: 400.0,
    }
}

#[wasm_bindgen_test]
fn zoomed_frame_positions_media_and_present_decorations() {
    let media = html_element("img");
    let top_left = html_element("img");
    let bottom_right = html_element("img");

    let frame = ZoomConfig::default().frame(zoom_input(400.0, 1280.0), &HERO_DECORATIONS);
    apply_frame(&frame, Some(&media), |id| match id {
        "hero-deco-top-left" => Some(top_left.clone()),
        "hero-deco-bottom-right" => Some(bottom_right.clone()),
        _ => None,
    });

    assert_eq!(style(&media, "transform"), "translateX(-50%) scale(1.5)");
    assert_eq!(style(&top_left, "bottom"), "470px");
    assert_eq!(style(&top_left, "left"), "calc(12% - 70px)");
    assert_eq!(style(&top_left, "width"), "140px");
    assert_eq!(style(&bottom_right, "bottom"), "10px");
    assert_eq!(style(&bottom_right, "right"), "calc(20% - 60px)");
    assert_eq!(style(&bottom_right, "width"), "120px");
    assert_eq!(style(&bottom_right, "left"), "");
}

#[wasm_bindgen_test]
fn missing_media_still_moves_decorations() {
    let top_right = html_element("img");
    let frame = ZoomConfig::default().frame(zoom_input(0.0, 1280.0), &HERO_DECORATIONS);
    apply_frame(&frame, None, |id| (id == "hero-deco-top-right").then(|| top_right.clone()));
    assert_eq!(style(&top_right, "bottom"), "320px");
}

#[wasm_bindgen_test]
fn mobile_frame_only_recenters_media() {
    let media = html_element("img");
    dom::set_style(&media, "transform", "translateX(-50%) scale(1.2)");
    let decoration = html_element("img");
    dom::set_style(&decoration, "bottom", "42px");

    let frame = ZoomConfig::default().frame(zoom_input(300.0, 600.0), &HERO_DECORATIONS);
    assert_eq!(frame, ZoomFrame::Disabled);
    apply_frame(&frame, Some(&media), |_| Some(decoration.clone()));

    assert_eq!(style(&media, "transform"), "translateX(-50%)");
    assert_eq!(style(&decoration, "bottom"), "42px");
}

#[wasm_bindgen_test]
fn set_class_adds_and_removes() {
    let element = document().create_element("header").unwrap();
    dom::set_class(&element, "scrolled", true);
    dom::set_class(&element, "scrolled", true);
    assert_eq!(element.class_name(), "scrolled");
    dom::set_class(&element, "scrolled", false);
    assert!(!element.class_list().contains("scrolled"));
}

#[wasm_bindgen_test]
async fn settle_timer_keeps_only_the_latest_flip() {
    let fired = Rc::new(Cell::new(0));
    let mut timer = SettleTimer::default();

    for _ in 0..3 {
        let fired = fired.clone();
        timer.reschedule(30, move || fired.set(fired.get() + 1));
        TimeoutFuture::new(5).await;
    }
    assert!(timer.is_pending());
    assert_eq!(fired.get(), 0);

    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 1);
    assert!(!timer.is_pending());
}

#[wasm_bindgen_test]
async fn faq_items_open_independently() {
    let root = mount_root();
    yew::Renderer::<Faq>::with_root(root.clone()).render();
    TimeoutFuture::new(10).await;

    let questions = root.query_selector_all(".faq__question").unwrap();
    let click = |index: u32| {
        questions
            .item(index)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click()
    };

    click(0);
    click(1);
    TimeoutFuture::new(10).await;
    assert_eq!(root.query_selector_all(".faq__item.active").unwrap().length(), 2);

    click(0);
    TimeoutFuture::new(10).await;
    let open = root.query_selector_all(".faq__item.active").unwrap();
    assert_eq!(open.length(), 1);
    let still_open = open.item(0).unwrap().dyn_into::<Element>().unwrap();
    let second = root.query_selector_all(".faq__item").unwrap().item(1).unwrap();
    assert!(still_open.is_same_node(Some(&second)));
}

#[wasm_bindgen_test]
async fn tabs_show_exactly_one_pane() {
    let root = mount_root();
    yew::Renderer::<ProductTabs>::with_root(root.clone()).render();
    TimeoutFuture::new(10).await;

    let active_panes = || root.query_selector_all(".tab__pane.active").unwrap();
    assert_eq!(active_panes().length(), 1);
    assert_eq!(
        active_panes().item(0).unwrap().dyn_into::<Element>().unwrap().id(),
        "uniformes"
    );

    let bordados = root
        .query_selector(".tab__btn[data-category=\"bordados\"]")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    bordados.click();
    bordados.click();
    TimeoutFuture::new(10).await;

    assert_eq!(active_panes().length(), 1);
    assert_eq!(
        active_panes().item(0).unwrap().dyn_into::<Element>().unwrap().id(),
        "bordados"
    );
    assert_eq!(root.query_selector_all(".tab__btn.active").unwrap().length(), 1);
}

#[wasm_bindgen_test]
async fn hero_remeasures_when_the_media_loads() {
    let root = mount_root();
    yew::Renderer::<Hero>::with_root(root.clone()).render();
    TimeoutFuture::new(10).await;

    let media = find(&root, ".hero__media").dyn_into::<HtmlElement>().unwrap();
    dom::set_style(&media, "transform", "none");
    media.dispatch_event(&Event::new("load").unwrap()).unwrap();

    assert!(style(&media, "transform").starts_with("translateX(-50%)"));
}

#[derive(Properties, PartialEq)]
struct ToastHostProps {
    /// Display and exit times; `None` keeps the component defaults.
    timings: Option<(u32, u32)>,
}

#[function_component(ToastHost)]
fn toast_host(props: &ToastHostProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    {
        let notify = notifier(toasts.dispatcher());
        use_effect_with_deps(
            move |_| {
                notify.emit((NotificationKind::Success, "Listo".to_string()));
                || ()
            },
            (),
        );
    }

    match props.timings {
        Some((display_ms, exit_ms)) => html! {
            <NotificationStack
                toasts={(*toasts).clone()}
                dispatcher={toasts.dispatcher()}
                {display_ms}
                {exit_ms}
            />
        },
        None => html! {
            <NotificationStack toasts={(*toasts).clone()} dispatcher={toasts.dispatcher()} />
        },
    }
}

#[wasm_bindgen_test]
async fn notification_leaves_then_is_removed() {
    let root = mount_root();
    yew::Renderer::<ToastHost>::with_root_and_props(
        root.clone(),
        ToastHostProps { timings: Some((100, 50)) },
    )
    .render();

    TimeoutFuture::new(30).await;
    assert_eq!(root.query_selector_all(".form-notification").unwrap().length(), 1);
    assert_eq!(root.query_selector_all(".form-notification.leaving").unwrap().length(), 0);
    assert!(find(&root, ".form-notification").text_content().unwrap().contains("Listo"));

    TimeoutFuture::new(100).await;
    assert_eq!(root.query_selector_all(".form-notification.leaving").unwrap().length(), 1);

    TimeoutFuture::new(100).await;
    assert_eq!(root.query_selector_all(".form-notification").unwrap().length(), 0);
}

#[wasm_bindgen_test]
async fn notification_stays_for_its_full_lifetime() {
    let root = mount_root();
    yew::Renderer::<ToastHost>::with_root_and_props(root.clone(), ToastHostProps { timings: None })
        .render();

    TimeoutFuture::new(5_200).await;
    assert_eq!(root.query_selector_all(".form-notification").unwrap().length(), 1);

    TimeoutFuture::new(400).await;
    assert_eq!(root.query_selector_all(".form-notification").unwrap().length(), 0);
}

#[wasm_bindgen_test]
async fn contact_submit_waits_then_resets_and_notifies() {
    let root = mount_root();
    let received = Rc::new(RefCell::new(Vec::new()));
    let on_notify = {
        let received = received.clone();
        Callback::from(move |note: (NotificationKind, String)| received.borrow_mut().push(note))
    };
    let props = ContactFormProps { on_notify };
    yew::Renderer::<ContactSection>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(10).await;

    let button = find(&root, ".contact__submit").dyn_into::<HtmlButtonElement>().unwrap();
    button.click();
    TimeoutFuture::new(10).await;
    assert_eq!(
        received.borrow_mut().drain(..).collect::<Vec<_>>(),
        vec![(NotificationKind::Error, "Por favor complete todos los campos".to_string())]
    );
    assert!(!button.disabled());

    for (selector, value) in [
        ("#name", "Ana Mora"),
        ("#email", "ana@vefod.com"),
        ("#phone", "8888-0000"),
        ("#service", "Bordado"),
        ("#message", "Necesito 20 camisas bordadas"),
    ] {
        set_field(&root, selector, value);
        TimeoutFuture::new(10).await;
    }

    button.click();
    TimeoutFuture::new(20).await;
    assert!(button.disabled());
    assert!(find(&root, ".contact__submit .ri-spin").is_connected());

    // A second submit while the first is pending is ignored.
    find(&root, "#contactForm")
        .dyn_into::<HtmlFormElement>()
        .unwrap()
        .request_submit()
        .unwrap();
    TimeoutFuture::new(1_000).await;
    assert!(received.borrow().is_empty());
    assert!(button.disabled());

    TimeoutFuture::new(700).await;
    assert_eq!(
        *received.borrow(),
        vec![(
            NotificationKind::Success,
            "¡Mensaje enviado! Te redirigimos a WhatsApp.".to_string()
        )]
    );
    assert!(!button.disabled());
    let name = find(&root, "#name").dyn_into::<HtmlInputElement>().unwrap();
    assert_eq!(name.value(), "");
}
