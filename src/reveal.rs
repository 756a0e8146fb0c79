//! Scroll-reveal entrance animations.
//!
//! The ScrollReveal library is optional. If the page already loaded it we use
//! it directly, otherwise the script is injected from the CDN and set up once
//! it loads. A failed load just means no animations.

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Reflect;
use web_sys::HtmlScriptElement;

use crate::config;

#[wasm_bindgen]
extern "C" {
    type ScrollRevealInstance;

    #[wasm_bindgen(catch, js_name = ScrollReveal)]
    fn scroll_reveal(options: &JsValue) -> Result<ScrollRevealInstance, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn reveal(
        this: &ScrollRevealInstance,
        selector: &str,
        options: &JsValue,
    ) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevealOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    /// Stagger between elements of the same group, in ms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

impl RevealOptions {
    pub fn base() -> Self {
        Self {
            origin: Some(Origin::Top),
            distance: Some("60px".to_string()),
            duration: Some(2500),
            delay: Some(400),
            interval: None,
        }
    }

    fn staggered(ms: u32) -> Self {
        Self {
            interval: Some(ms),
            ..Self::default()
        }
    }

    fn from_edge(origin: Origin) -> Self {
        Self {
            origin: Some(origin),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    pub selector: &'static str,
    /// Per-group overrides on top of the base options.
    pub overrides: Option<RevealOptions>,
}

pub fn reveal_groups() -> Vec<RevealGroup> {
    vec![
        RevealGroup {
            selector: ".hero__content, .section__header",
            overrides: None,
        },
        RevealGroup {
            selector: ".service-card",
            overrides: Some(RevealOptions::staggered(100)),
        },
        RevealGroup {
            selector: ".product-card",
            overrides: Some(RevealOptions::staggered(100)),
        },
        RevealGroup {
            selector: ".contact__form-section",
            overrides: Some(RevealOptions::from_edge(Origin::Left)),
        },
        RevealGroup {
            selector: ".contact__info-section",
            overrides: Some(RevealOptions::from_edge(Origin::Right)),
        },
    ]
}

fn is_loaded() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("ScrollReveal")).unwrap_or(false))
        .unwrap_or(false)
}

fn apply() {
    let base = match serde_wasm_bindgen::to_value(&RevealOptions::base()) {
        Ok(base) => base,
        Err(err) => {
            warn!("scroll reveal options: {}", err);
            return;
        }
    };
    let sr = match scroll_reveal(&base) {
        Ok(sr) => sr,
        Err(err) => {
            warn!("ScrollReveal unavailable: {:?}", err);
            return;
        }
    };

    for group in reveal_groups() {
        let overrides = match &group.overrides {
            Some(options) => serde_wasm_bindgen::to_value(options).unwrap_or(JsValue::UNDEFINED),
            None => JsValue::UNDEFINED,
        };
        if let Err(err) = sr.reveal(group.selector, &overrides) {
            warn!("reveal {} failed: {:?}", group.selector, err);
        }
    }
    debug!("scroll reveal applied");
}

fn inject_script() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(head), Ok(script)) = (document.head(), document.create_element("script")) else {
        return;
    };
    let Ok(script) = script.dyn_into::<HtmlScriptElement>() else {
        return;
    };

    script.set_src(config::SCROLL_REVEAL_CDN);
    let onload = Closure::once_into_js(apply);
    script.set_onload(Some(onload.unchecked_ref()));
    if let Err(err) = head.append_child(&script) {
        warn!("could not add scroll reveal script: {:?}", err);
    }
}

/// Sets up the reveal animations, loading the library first when needed.
pub fn init() {
    if is_loaded() {
        apply();
    } else {
        debug!("loading ScrollReveal from {}", config::SCROLL_REVEAL_CDN);
        inject_script();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn base_options_match_the_site_defaults() {
        assert_eq!(
            serde_json::to_value(RevealOptions::base()).unwrap(),
            json!({ "origin": "top", "distance": "60px", "duration": 2500, "delay": 400 })
        );
    }

    #[test]
    fn overrides_only_carry_what_they_change() {
        let groups = reveal_groups();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].overrides, None);

        let cards = serde_json::to_value(groups[1].overrides.clone().unwrap()).unwrap();
        assert_eq!(cards, json!({ "interval": 100 }));

        let form = serde_json::to_value(groups[3].overrides.clone().unwrap()).unwrap();
        assert_eq!(form, json!({ "origin": "left" }));
        let info = serde_json::to_value(groups[4].overrides.clone().unwrap()).unwrap();
        assert_eq!(info, json!({ "origin": "right" }));
    }

    #[test]
    fn every_animated_group_is_covered() {
        let selectors: Vec<_> = reveal_groups().iter().map(|g| g.selector).collect();
        assert_eq!(
            selectors,
            vec![
                ".hero__content, .section__header",
                ".service-card",
                ".product-card",
                ".contact__form-section",
                ".contact__info-section",
            ]
        );
    }
}
