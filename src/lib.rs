use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod dom;
pub mod reveal;
pub mod scroll;
pub mod tabs;
pub mod zoom;

pub mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod fab;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod nav;
    pub mod notification;
    pub mod tabs;
}

pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Installs the panic hook and logger, then mounts the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
