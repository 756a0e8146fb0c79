use log::info;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::tabs::{SelectTab, TabSelection};

pub struct Product {
    pub name: &'static str,
    pub detail: &'static str,
}

pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub products: &'static [Product],
}

pub static CATEGORIES: [Category; 3] = [
    Category {
        id: "uniformes",
        label: "Uniformes",
        products: &[
            Product { name: "Camisas tipo polo", detail: "Piqué de algodón, tallas XS a 3XL" },
            Product { name: "Camisas de vestir", detail: "Oxford y popelina con logo bordado" },
            Product { name: "Gabachas", detail: "Uso médico, cocina y laboratorio" },
        ],
    },
    Category {
        id: "bordados",
        label: "Bordados",
        products: &[
            Product { name: "Logos corporativos", detail: "Hasta 15 colores de hilo" },
            Product { name: "Parches", detail: "Con termoadhesivo o para coser" },
            Product { name: "Gorras", detail: "Bordado frontal y lateral" },
        ],
    },
    Category {
        id: "serigrafia",
        label: "Serigrafía",
        products: &[
            Product { name: "Camisetas promocionales", detail: "Pedidos desde 24 unidades" },
            Product { name: "Bolsas de tela", detail: "Manta y lona" },
            Product { name: "Uniformes deportivos", detail: "Numeración y nombres" },
        ],
    },
];

fn initial_selection() -> TabSelection {
    let [first, rest @ ..] = &CATEGORIES;
    TabSelection::new(first.id, rest.iter().map(|category| category.id))
}

/// Reads the target pane id from the clicked trigger's `data-category`.
fn clicked_category(event: &MouseEvent) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(".tab__btn").ok().flatten())
        .and_then(|button| button.get_attribute("data-category"))
}

#[function_component(ProductTabs)]
pub fn product_tabs() -> Html {
    let selection = use_reducer(initial_selection);

    let on_select = {
        let selection = selection.dispatcher();
        Callback::from(move |e: MouseEvent| {
            if let Some(category) = clicked_category(&e) {
                info!("product tab {}", category);
                selection.dispatch(SelectTab(category));
            }
        })
    };

    html! {
        <section id="products" class="products section">
            <div class="section__header container">
                <h2 class="section__title">{"Nuestros productos"}</h2>
                <p class="section__subtitle">{"Elija una categoría para ver lo que fabricamos."}</p>
            </div>
            <div class="tabs container">
                <div class="tab__buttons" role="tablist">
                    { for CATEGORIES.iter().map(|category| {
                        let active = selection.is_active(category.id);
                        html! {
                            <button
                                type="button"
                                role="tab"
                                class={classes!("tab__btn", active.then(|| "active"))}
                                data-category={category.id}
                                aria-selected={active.to_string()}
                                onclick={on_select.clone()}
                            >
                                {category.label}
                            </button>
                        }
                    }) }
                </div>
                { for CATEGORIES.iter().map(|category| html! {
                    <div
                        id={category.id}
                        role="tabpanel"
                        class={classes!(
                            "tab__pane",
                            selection.is_active(category.id).then(|| "active"),
                        )}
                    >
                        <div class="products__grid">
                            { for category.products.iter().map(|product| html! {
                                <article class="product-card">
                                    <h3 class="product-card__title">{product.name}</h3>
                                    <p class="product-card__detail">{product.detail}</p>
                                </article>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
